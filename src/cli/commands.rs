//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pptv")]
#[command(about = "Command-line IPTV storefront", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new storefront workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Sign in
    Login { email: String, password: String },

    /// Create an account and sign in
    Register {
        email: String,
        password: String,
        name: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in account
    Whoami,

    /// List plans on offer
    Plans,

    /// List channel categories
    Categories,

    /// Browse channels visible to the current viewer
    Channels {
        /// Category slug (e.g. sports, news)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text matched against name and description
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Open a channel in the player
    Watch { channel_id: String },

    /// Manage your own account
    #[command(subcommand)]
    Account(AccountCommand),

    /// Administer users, plans, channels and categories
    #[command(subcommand)]
    Admin(AdminCommand),

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Remote database connection settings
    #[command(subcommand)]
    Remote(RemoteCommand),
}

#[derive(Subcommand, Debug)]
pub enum AccountCommand {
    /// Show profile, subscription and billing details
    Profile {
        /// New display name
        #[arg(long)]
        name: Option<String>,

        /// New avatar URL
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Replace billing details
    Billing(BillingArgs),

    /// Subscribe to a plan
    Subscribe { plan_id: String },

    /// Cancel the current subscription
    Cancel,
}

#[derive(Args, Debug)]
pub struct BillingArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub address: String,
    #[arg(long)]
    pub city: String,
    #[arg(long)]
    pub state: String,
    #[arg(long)]
    pub zip: String,
    #[arg(long)]
    pub country: String,
    /// Last four digits of the card on file
    #[arg(long)]
    pub card_last4: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum AdminCommand {
    #[command(subcommand)]
    Users(UserAdminCommand),

    #[command(subcommand)]
    Plans(PlanAdminCommand),

    #[command(subcommand)]
    Channels(ChannelAdminCommand),

    #[command(subcommand)]
    Categories(CategoryAdminCommand),
}

#[derive(Subcommand, Debug)]
pub enum UserAdminCommand {
    List,

    Add {
        email: String,

        #[arg(long)]
        name: Option<String>,

        /// user or admin
        #[arg(long, default_value = "user")]
        role: String,

        /// Plan id to embed
        #[arg(long)]
        plan: Option<String>,

        /// active, inactive or canceled
        #[arg(long)]
        status: Option<String>,
    },

    Edit {
        id: String,

        #[arg(long)]
        email: Option<String>,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        role: Option<String>,

        #[arg(long, conflicts_with = "no_plan")]
        plan: Option<String>,

        /// Remove the embedded plan
        #[arg(long)]
        no_plan: bool,

        #[arg(long)]
        status: Option<String>,
    },

    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum PlanAdminCommand {
    List,

    Add {
        name: String,

        #[arg(long)]
        price: f64,

        /// monthly or yearly
        #[arg(long, default_value = "monthly")]
        billing_cycle: String,

        /// Features separated by commas or newlines
        #[arg(long, default_value = "")]
        features: String,

        #[arg(long)]
        channel_count: u32,

        /// Create the plan without offering it
        #[arg(long)]
        inactive: bool,
    },

    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        price: Option<f64>,

        #[arg(long)]
        billing_cycle: Option<String>,

        #[arg(long)]
        features: Option<String>,

        #[arg(long)]
        channel_count: Option<u32>,

        #[arg(long)]
        active: Option<bool>,
    },

    Delete { id: String },
}

#[derive(Subcommand, Debug)]
pub enum ChannelAdminCommand {
    List,

    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        logo: Option<String>,

        /// Category slugs separated by commas
        #[arg(long)]
        categories: Option<String>,

        #[arg(long)]
        live: Option<bool>,

        #[arg(long)]
        premium: Option<bool>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CategoryAdminCommand {
    List,

    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum RemoteCommand {
    /// Show the connection string (password redacted)
    Show,

    /// Change connection settings
    Set {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,

        #[arg(long)]
        user: Option<String>,

        #[arg(long)]
        password: Option<String>,

        #[arg(long)]
        database: Option<String>,
    },

    /// List a collection through the remote repository
    List {
        /// users, plans, channels or categories
        collection: String,
    },
}

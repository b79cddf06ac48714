use clap::Parser;
use pptv::application::{
    init, AccountService, AdminService, CatalogService, ConfigService, NewPlan, NewUser,
    SessionStore, UserEdit,
};
use pptv::cli::output::{
    format_category_list, format_channel_list, format_plan_list, format_player, format_profile,
    format_remote, format_user_list,
};
use pptv::cli::{
    AccountCommand, AdminCommand, CategoryAdminCommand, ChannelAdminCommand, Cli, Commands,
    PlanAdminCommand, RemoteCommand, UserAdminCommand,
};
use pptv::domain::plan::parse_features;
use pptv::domain::{
    BillingCycle, BillingInfo, CategoryPatch, ChannelFilter, ChannelPatch, PlanPatch, Role,
    SubscriptionStatus,
};
use pptv::error::{PptvError, Result};
use pptv::infrastructure::{
    Config, ConnectionConfigPatch, FileStore, RecordStore, RemoteDatabase, Repository, Workspace,
};
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// Parse a CLI string into a domain enum, reporting failures as config errors
fn parse<T: FromStr<Err = String>>(value: &str) -> Result<T> {
    T::from_str(value).map_err(PptvError::Config)
}

fn parse_opt<T: FromStr<Err = String>>(value: Option<String>) -> Result<Option<T>> {
    value.as_deref().map(parse).transpose()
}

/// Config and a session restored from the discovered workspace
fn open_session() -> Result<(Config, SessionStore<FileStore>)> {
    let workspace = Workspace::discover()?;
    let config = workspace.load_config()?;
    let session = SessionStore::boot(workspace.store())?.with_latency(config.latency());
    Ok((config, session))
}

fn catalog(config: &Config, session: &SessionStore<FileStore>) -> CatalogService<FileStore> {
    CatalogService::new(session.records().clone(), &config.premium_plan_id)
}

fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        println!("pptv - Command-line IPTV storefront");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Init { path } => {
            init::init(&path)?;
        }
        Commands::Login { email, password } => {
            let (_, mut session) = open_session()?;
            let user = session.login(&email, &password)?;
            println!("Signed in as {} ({})", user.display_name(), user.role());
        }
        Commands::Register {
            email,
            password,
            name,
        } => {
            let (_, mut session) = open_session()?;
            let user = session.register(&email, &password, &name)?;
            println!("Welcome, {}! Account {} created.", user.display_name(), user.id);
        }
        Commands::Logout => {
            let (_, mut session) = open_session()?;
            session.logout()?;
            println!("Signed out");
        }
        Commands::Whoami => {
            let (_, session) = open_session()?;
            match session.current() {
                Some(user) => print!("{}", format_profile(user)),
                None => println!("Not signed in"),
            }
        }
        Commands::Plans => {
            let (config, session) = open_session()?;
            print!("{}", format_plan_list(&catalog(&config, &session).list_plans()?));
        }
        Commands::Categories => {
            let (config, session) = open_session()?;
            let categories = catalog(&config, &session).list_categories()?;
            print!("{}", format_category_list(&categories));
        }
        Commands::Channels { category, search } => {
            let (config, session) = open_session()?;
            let mut filter = ChannelFilter::default();
            if let Some(category) = category {
                filter = filter.category(category);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }
            let channels = catalog(&config, &session).browse_channels(session.current(), &filter)?;
            print!("{}", format_channel_list(&channels));
        }
        Commands::Watch { channel_id } => {
            let (config, session) = open_session()?;
            let view = catalog(&config, &session).watch(session.current(), &channel_id)?;
            print!("{}", format_player(&view));
        }
        Commands::Account(command) => {
            let (_, mut session) = open_session()?;
            run_account(command, &mut session)?;
        }
        Commands::Admin(command) => {
            let (_, mut session) = open_session()?;
            run_admin(command, &mut session)?;
        }
        Commands::Config { key, value, list } => run_config(key, value, list)?,
        Commands::Remote(command) => run_remote(command)?,
    }
    Ok(())
}

fn run_account(command: AccountCommand, session: &mut SessionStore<FileStore>) -> Result<()> {
    let mut account = AccountService::new(session);

    match command {
        AccountCommand::Profile { name, avatar } => {
            if name.is_none() && avatar.is_none() {
                print!("{}", format_profile(account.profile()?));
            } else {
                let user = account.update_profile(name, avatar)?;
                println!("Profile updated");
                print!("{}", format_profile(&user));
            }
        }
        AccountCommand::Billing(args) => {
            account.update_billing(BillingInfo {
                name: args.name,
                address: args.address,
                city: args.city,
                state: args.state,
                zip: args.zip,
                country: args.country,
                card_last4: args.card_last4,
            })?;
            println!("Billing details updated");
        }
        AccountCommand::Subscribe { plan_id } => {
            let user = account.subscribe(&plan_id)?;
            let plan_name = user
                .subscription_plan
                .as_ref()
                .map(|plan| plan.name.as_str())
                .unwrap_or(plan_id.as_str());
            println!("Subscribed to {}", plan_name);
        }
        AccountCommand::Cancel => {
            account.cancel()?;
            println!("Subscription canceled");
        }
    }
    Ok(())
}

fn run_admin(command: AdminCommand, session: &mut SessionStore<FileStore>) -> Result<()> {
    let mut admin = AdminService::new(session)?;

    match command {
        AdminCommand::Users(command) => match command {
            UserAdminCommand::List => print!("{}", format_user_list(&admin.list_users()?)),
            UserAdminCommand::Add {
                email,
                name,
                role,
                plan,
                status,
            } => {
                let user = admin.add_user(NewUser {
                    email,
                    name,
                    role: parse::<Role>(&role)?,
                    plan_id: plan,
                    subscription_status: parse_opt::<SubscriptionStatus>(status)?,
                })?;
                println!("Created user {}", user.id);
            }
            UserAdminCommand::Edit {
                id,
                email,
                name,
                role,
                plan,
                no_plan,
                status,
            } => {
                let plan_id = if no_plan { Some(None) } else { plan.map(Some) };
                let user = admin.edit_user(
                    &id,
                    UserEdit {
                        email,
                        name,
                        role: parse_opt::<Role>(role)?,
                        plan_id,
                        subscription_status: parse_opt::<SubscriptionStatus>(status)?,
                    },
                )?;
                println!("Updated user {}", user.id);
            }
            UserAdminCommand::Delete { id } => {
                admin.delete_user(&id)?;
                println!("Deleted user {}", id);
            }
        },
        AdminCommand::Plans(command) => match command {
            PlanAdminCommand::List => print!("{}", format_plan_list(&admin.list_plans()?)),
            PlanAdminCommand::Add {
                name,
                price,
                billing_cycle,
                features,
                channel_count,
                inactive,
            } => {
                let plan = admin.add_plan(NewPlan {
                    name,
                    price,
                    billing_cycle: parse::<BillingCycle>(&billing_cycle)?,
                    features: parse_features(&features),
                    channel_count,
                    is_active: !inactive,
                })?;
                println!("Created plan {}", plan.id);
            }
            PlanAdminCommand::Edit {
                id,
                name,
                price,
                billing_cycle,
                features,
                channel_count,
                active,
            } => {
                let plan = admin.edit_plan(
                    &id,
                    PlanPatch {
                        name,
                        price,
                        billing_cycle: parse_opt::<BillingCycle>(billing_cycle)?,
                        features: features.as_deref().map(parse_features),
                        channel_count,
                        is_active: active,
                    },
                )?;
                println!("Updated plan {}", plan.id);
            }
            PlanAdminCommand::Delete { id } => {
                admin.delete_plan(&id)?;
                println!("Deleted plan {}", id);
            }
        },
        AdminCommand::Channels(command) => match command {
            ChannelAdminCommand::List => {
                print!("{}", format_channel_list(&admin.list_channels()?))
            }
            ChannelAdminCommand::Edit {
                id,
                name,
                description,
                logo,
                categories,
                live,
                premium,
            } => {
                let channel = admin.edit_channel(
                    &id,
                    ChannelPatch {
                        name,
                        description,
                        logo,
                        category: categories.as_deref().map(parse_features),
                        is_live: live,
                        is_premium: premium,
                    },
                )?;
                println!("Updated channel {}", channel.id);
            }
        },
        AdminCommand::Categories(command) => match command {
            CategoryAdminCommand::List => {
                print!("{}", format_category_list(&admin.list_categories()?))
            }
            CategoryAdminCommand::Edit {
                id,
                name,
                description,
            } => {
                let category = admin.edit_category(&id, CategoryPatch { name, description })?;
                println!("Updated category {}", category.id);
            }
        },
    }
    Ok(())
}

fn run_config(key: Option<String>, value: Option<String>, list: bool) -> Result<()> {
    let service = ConfigService::new(Workspace::discover()?);

    if list {
        let config = service.list()?;
        println!("premium_plan_id = {}", config.premium_plan_id);
        println!("latency_ms = {}", config.latency_ms);
        println!("created = {}", config.created.to_rfc3339());
    } else if let Some(k) = key {
        if let Some(v) = value {
            service.set(&k, &v)?;
            println!("Set {} = {}", k, v);
        } else {
            println!("{}", service.get(&k)?);
        }
    } else {
        println!("Usage: pptv config [--list | <key> [<value>]]");
        println!("Valid keys: premium_plan_id, latency_ms, created");
    }
    Ok(())
}

fn run_remote(command: RemoteCommand) -> Result<()> {
    let workspace = Workspace::discover()?;
    let mut config = workspace.load_config()?;
    let mut database = RemoteDatabase::new(config.remote.clone());

    match command {
        RemoteCommand::Show => print!("{}", format_remote(database.config())),
        RemoteCommand::Set {
            host,
            port,
            user,
            password,
            database: name,
        } => {
            database.update_config(ConnectionConfigPatch {
                host,
                port,
                user,
                password,
                database: name,
            });
            config.remote = database.config().clone();
            workspace.save_config(&config)?;
            print!("{}", format_remote(database.config()));
        }
        RemoteCommand::List { collection } => {
            let records = RecordStore::new(workspace.store());
            let output = match collection.as_str() {
                "users" => format_user_list(&database.repository(records.users()).list()?),
                "plans" => format_plan_list(&database.repository(records.plans()).list()?),
                "channels" => {
                    format_channel_list(&database.repository(records.channels()).list()?)
                }
                "categories" => {
                    format_category_list(&database.repository(records.categories()).list()?)
                }
                other => {
                    return Err(PptvError::Config(format!(
                        "Unknown collection: '{}'. Valid collections are: users, plans, channels, categories",
                        other
                    )))
                }
            };
            print!("{}", output);
        }
    }
    Ok(())
}

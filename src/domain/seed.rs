//! Built-in records written when a collection has never been stored

use crate::domain::{
    BillingCycle, BillingInfo, Category, Channel, Plan, Program, Role, SubscriptionStatus, User,
};
use chrono::{DateTime, Utc};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

fn plan(id: &str, name: &str, price: f64, channel_count: u32, features: &[&str]) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        price,
        billing_cycle: BillingCycle::Monthly,
        features: features.iter().map(|f| f.to_string()).collect(),
        channel_count,
        is_active: None,
    }
}

pub fn plans() -> Vec<Plan> {
    vec![
        plan(
            "basic",
            "Basic",
            9.99,
            50,
            &[
                "50+ Channels",
                "Standard Definition",
                "Watch on 1 device",
                "24/7 Customer Support",
            ],
        ),
        plan(
            "standard",
            "Standard",
            14.99,
            100,
            &[
                "100+ Channels",
                "High Definition",
                "Watch on 2 devices",
                "24/7 Customer Support",
                "45 days catch-up TV",
            ],
        ),
        plan(
            "premium",
            "Premium",
            19.99,
            150,
            &[
                "150+ Channels",
                "4K Ultra HD",
                "Watch on 4 devices",
                "Premium Sports Channels",
                "24/7 Customer Support",
                "90 days catch-up TV",
                "Exclusive movie premieres",
            ],
        ),
    ]
}

pub fn categories() -> Vec<Category> {
    [
        ("entertainment", "Entertainment", "TV shows, movies, and general entertainment"),
        ("sports", "Sports", "Live sports events and sports news"),
        ("news", "News", "Local and international news channels"),
        ("kids", "Kids", "Children's programming and cartoons"),
        ("documentary", "Documentary", "Educational and informational programming"),
        ("movies", "Movies", "Movie channels"),
        ("music", "Music", "Music channels and programming"),
    ]
    .into_iter()
    .map(|(slug, name, description)| Category {
        id: slug.to_string(),
        name: name.to_string(),
        slug: slug.to_string(),
        description: Some(description.to_string()),
    })
    .collect()
}

struct ChannelSeed {
    id: &'static str,
    name: &'static str,
    category: &'static str,
    description: &'static str,
    is_live: bool,
    is_premium: bool,
    program: (&'static str, &'static str, &'static str, &'static str, &'static str),
}

const CHANNELS: [ChannelSeed; 12] = [
    ChannelSeed {
        id: "ch1",
        name: "PPTV One",
        category: "entertainment",
        description: "General entertainment channel",
        is_live: true,
        is_premium: false,
        program: ("p1", "The Evening Show", "Talk show with celebrity guests", "20:00", "21:30"),
    },
    ChannelSeed {
        id: "ch2",
        name: "PPTV Sports",
        category: "sports",
        description: "24/7 sports coverage",
        is_live: true,
        is_premium: false,
        program: ("p2", "World Cup Highlights", "Highlights from the latest World Cup matches", "19:00", "20:30"),
    },
    ChannelSeed {
        id: "ch3",
        name: "PPTV News",
        category: "news",
        description: "Breaking news and current events",
        is_live: true,
        is_premium: false,
        program: ("p3", "Evening News", "Daily news roundup", "18:00", "19:00"),
    },
    ChannelSeed {
        id: "ch4",
        name: "PPTV Kids",
        category: "kids",
        description: "Children's programming",
        is_live: false,
        is_premium: false,
        program: ("p4", "Adventure Time", "Animated series", "15:00", "16:00"),
    },
    ChannelSeed {
        id: "ch5",
        name: "PPTV Cinema",
        category: "movies",
        description: "Premium movie channel",
        is_live: true,
        is_premium: true,
        program: ("p5", "The Blockbuster", "Latest blockbuster movie", "21:00", "23:30"),
    },
    ChannelSeed {
        id: "ch6",
        name: "PPTV Docs",
        category: "documentary",
        description: "Documentary channel",
        is_live: true,
        is_premium: false,
        program: ("p6", "Wild Planet", "Nature documentary series", "20:00", "21:00"),
    },
    ChannelSeed {
        id: "ch7",
        name: "PPTV Music",
        category: "music",
        description: "Music videos and performances",
        is_live: true,
        is_premium: false,
        program: ("p7", "Top 20 Countdown", "Countdown of top 20 songs", "19:00", "20:00"),
    },
    ChannelSeed {
        id: "ch8",
        name: "PPTV Comedy",
        category: "entertainment",
        description: "Comedy shows and stand-up",
        is_live: false,
        is_premium: false,
        program: ("p8", "Stand-up Special", "Comedy special", "22:00", "23:00"),
    },
    ChannelSeed {
        id: "ch9",
        name: "PPTV Sports Plus",
        category: "sports",
        description: "Premium sports channel",
        is_live: true,
        is_premium: true,
        program: ("p9", "Premier League Live", "Live Premier League match", "20:00", "22:00"),
    },
    ChannelSeed {
        id: "ch10",
        name: "PPTV Drama",
        category: "entertainment",
        description: "Drama series and shows",
        is_live: true,
        is_premium: false,
        program: ("p10", "The Series", "Popular drama series", "21:00", "22:00"),
    },
    ChannelSeed {
        id: "ch11",
        name: "PPTV Action",
        category: "movies",
        description: "Action movies and shows",
        is_live: true,
        is_premium: false,
        program: ("p11", "Action Heroes", "Action movie marathon", "20:00", "23:00"),
    },
    ChannelSeed {
        id: "ch12",
        name: "PPTV Science",
        category: "documentary",
        description: "Science and technology programming",
        is_live: false,
        is_premium: false,
        program: ("p12", "Future Tech", "Technology documentary", "19:00", "20:00"),
    },
];

pub fn channels() -> Vec<Channel> {
    CHANNELS
        .iter()
        .map(|seed| {
            let (id, name, description, start_time, end_time) = seed.program;
            Channel {
                id: seed.id.to_string(),
                name: seed.name.to_string(),
                logo: PLACEHOLDER_IMAGE.to_string(),
                category: vec![seed.category.to_string()],
                description: seed.description.to_string(),
                is_live: seed.is_live,
                is_premium: seed.is_premium,
                current_program: Some(Program {
                    id: id.to_string(),
                    name: name.to_string(),
                    description: description.to_string(),
                    start_time: start_time.to_string(),
                    end_time: end_time.to_string(),
                    thumbnail: Some(PLACEHOLDER_IMAGE.to_string()),
                }),
            }
        })
        .collect()
}

/// Canned account cloned for the demo login and for new registrations
pub fn demo_user() -> User {
    let mut user = User::new("user1", "user@example.com");
    user.name = Some("Demo User".to_string());
    user.subscription_plan = plans().into_iter().find(|p| p.id == "standard");
    user.subscription_status = Some(SubscriptionStatus::Active);
    user.billing_info = Some(BillingInfo {
        name: "Demo User".to_string(),
        address: "123 Main St".to_string(),
        city: "Anytown".to_string(),
        state: "CA".to_string(),
        zip: "12345".to_string(),
        country: "USA".to_string(),
        card_last4: Some("4242".to_string()),
    });
    user
}

pub fn admin_user(now: DateTime<Utc>) -> User {
    let mut user = User::new("admin-1", "admin@example.com");
    user.name = Some("Administrator".to_string());
    user.role = Some(Role::Admin);
    user.created_at = Some(now);
    user
}

pub fn users(now: DateTime<Utc>) -> Vec<User> {
    let mut demo = demo_user();
    demo.role = Some(Role::User);
    demo.created_at = Some(now);
    vec![demo, admin_user(now)]
}

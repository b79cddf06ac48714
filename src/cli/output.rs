//! Output formatting utilities

use crate::application::PlayerView;
use crate::domain::{Category, Channel, Plan, User};
use crate::infrastructure::ConnectionConfig;

/// Format plans with their price, cycle and features
pub fn format_plan_list(plans: &[Plan]) -> String {
    if plans.is_empty() {
        return "No plans found".to_string();
    }

    let mut output = String::new();
    for plan in plans {
        let inactive = if plan.is_active() { "" } else { "  (inactive)" };
        output.push_str(&format!(
            "{:<12} {:<10} ${:.2}/{}  {} channels{}\n",
            plan.id, plan.name, plan.price, plan.billing_cycle, plan.channel_count, inactive
        ));
        for feature in &plan.features {
            output.push_str(&format!("    - {}\n", feature));
        }
    }
    output
}

pub fn format_category_list(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found".to_string();
    }

    let mut output = String::new();
    for category in categories {
        output.push_str(&format!(
            "{:<14} {:<14} {}\n",
            category.slug,
            category.name,
            category.description.as_deref().unwrap_or("")
        ));
    }
    output
}

/// One line per channel: id, name, flags and categories
pub fn format_channel_list(channels: &[Channel]) -> String {
    if channels.is_empty() {
        return "No channels found".to_string();
    }

    let mut output = String::new();
    for channel in channels {
        output.push_str(&format!(
            "{:<5} {:<22} {}  [{}]\n",
            channel.id,
            channel.name,
            channel_flags(channel),
            channel.category.join(", ")
        ));
    }
    output
}

fn channel_flags(channel: &Channel) -> String {
    let live = if channel.is_live { "LIVE" } else { "    " };
    let premium = if channel.is_premium { "PREMIUM" } else { "       " };
    format!("{} {}", live, premium)
}

pub fn format_user_list(users: &[User]) -> String {
    if users.is_empty() {
        return "No users found".to_string();
    }

    let mut output = String::new();
    for user in users {
        output.push_str(&format!(
            "{:<18} {:<24} {:<6} {:<10} {}\n",
            user.id,
            user.email,
            user.role(),
            user.plan_id().unwrap_or("-"),
            user.subscription_status
                .map(|s| s.to_string())
                .unwrap_or_else(|| "-".to_string())
        ));
    }
    output
}

/// Profile page: identity, subscription and billing
pub fn format_profile(user: &User) -> String {
    let mut output = format!(
        "{} <{}>\nRole: {}\nId: {}\n",
        user.display_name(),
        user.email,
        user.role(),
        user.id
    );

    match &user.subscription_plan {
        Some(plan) => output.push_str(&format!(
            "Plan: {} (${:.2}/{})\n",
            plan.name, plan.price, plan.billing_cycle
        )),
        None => output.push_str("Plan: none\n"),
    }
    if let Some(status) = user.subscription_status {
        output.push_str(&format!("Status: {}\n", status));
    }

    if let Some(billing) = &user.billing_info {
        output.push_str(&format!(
            "Billing: {}, {}, {}, {} {}, {}\n",
            billing.name, billing.address, billing.city, billing.state, billing.zip, billing.country
        ));
        if let Some(last4) = &billing.card_last4 {
            output.push_str(&format!("Card: **** {}\n", last4));
        }
    }
    output
}

pub fn format_player(view: &PlayerView) -> String {
    let channel = &view.channel;
    let mut output = format!("Now playing: {} ({})\n", channel.name, channel.id);
    output.push_str(&format!("{}\n", channel.description));

    if let Some(program) = &channel.current_program {
        output.push_str(&format!(
            "On air: {} {}-{}\n",
            program.name, program.start_time, program.end_time
        ));
    }

    if !view.related.is_empty() {
        output.push_str("\nRelated channels:\n");
        for related in &view.related {
            output.push_str(&format!("  {:<5} {}\n", related.id, related.name));
        }
    }
    output
}

pub fn format_remote(config: &ConnectionConfig) -> String {
    format!(
        "{}\nhost = {}\nport = {}\nuser = {}\ndatabase = {}\n",
        config, config.host, config.port, config.user, config.database
    )
}

//! Fixed-copy posts: help and welcome.

use chrono::{DateTime, Utc};

use super::{Embed, MessagePayload};
use crate::domain::chat::BotProfile;

/// Reply sent when a command fails unexpectedly.
pub const GENERIC_ERROR_REPLY: &str = "Sorry, there was an error processing your command.";

const WELCOME_TITLE: &str = "🎮 Welcome to Existence";

const HELP_ENTRIES: [(&str, &str); 9] = [
    ("!products", "Browse all available products"),
    ("!featured", "View featured products"),
    ("!popular", "View popular products"),
    ("!status", "View detailed product status and stats"),
    ("!news <title> | <content>", "Post news announcement"),
    ("!announcement <title> | <content>", "Post important announcement"),
    ("!update <product> | <content>", "Post product update"),
    ("!welcome", "Post welcome message to news channel"),
    ("!help", "Show this help message"),
];

/// Reply to `!help`.
#[must_use]
pub fn help(now: DateTime<Utc>) -> MessagePayload {
    let embed = HELP_ENTRIES.iter().fold(
        Embed::new("🤖 Existence Bot Commands", 0x0058_65F2)
            .description("Here are the available commands:")
            .timestamp(now),
        |embed, (name, value)| embed.field(*name, *value, false),
    );
    MessagePayload::embed(embed)
}

const OUR_TOOLS: [&str; 5] = [
    "• **Rust Arcane External** - Advanced rust external with premium features",
    "• **BO6 Engine** - Call of Duty external for BO6 & Warzone",
    "• **NFA Account Loader** - Advanced gaming account management",
    "• **Rust Pro External** - Professional rust enhancement tools",
    "• **Spoofer** - Hardware ID spoofing for anticheat bypass",
];

const WHAT_WE_OFFER: [&str; 5] = [
    "✅ **Undetected Tools** - Regular updates for latest game patches",
    "🔒 **Secure Downloads** - Safe and verified file hosting",
    "⚡ **Fast Support** - Quick response to issues and questions",
    "🎯 **Premium Features** - Aimbot, ESP, wallhacks, and more",
    "🛡️ **Anti-Detection** - Advanced bypass methods",
];

const MEDIA_PARTNERS: [&str; 13] = [
    "We are actively seeking content creators and media partners!",
    "",
    "**What we need:**",
    "• Gaming content creators",
    "• Social media influencers",
    "• YouTube/Twitch streamers",
    "• Community managers",
    "",
    "**What we offer:**",
    "• Free access to all tools",
    "• Revenue sharing opportunities",
    "• Early access to new releases",
    "• Custom tool development",
];

/// Standing welcome post for the news channel.
#[must_use]
pub fn welcome_post(bot: Option<&BotProfile>, now: DateTime<Utc>) -> MessagePayload {
    let avatar = bot.and_then(|profile| profile.avatar_url.clone());
    let embed = Embed::new(WELCOME_TITLE, 0x009B_59B6)
        .description("Premium gaming tools and external solutions for competitive players")
        .field("🛠️ Our Tools", OUR_TOOLS.join("\n"), false)
        .field("📊 What We Offer", WHAT_WE_OFFER.join("\n"), false)
        .field("📢 Looking for Media Partners", MEDIA_PARTNERS.join("\n"), false)
        .timestamp(now)
        .footer("Existence - Premium Gaming Solutions", avatar.clone())
        .thumbnail(avatar);
    MessagePayload::embed(embed)
}

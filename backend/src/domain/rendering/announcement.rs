//! News channel posts produced by the publishing commands.

use chrono::{DateTime, Utc};

use super::{Embed, MessagePayload, full_time};
use crate::domain::commands::{Announcement, AnnouncementKind};

/// Render an announcement for the news channel.
///
/// `avatar_url` decorates the footer with the bot's avatar when known.
#[must_use]
pub fn announcement_post(
    announcement: &Announcement,
    avatar_url: Option<String>,
    now: DateTime<Utc>,
) -> MessagePayload {
    let style = announcement.kind.style();
    let embed = Embed::new(announcement.heading(), style.colour)
        .description(announcement.body.as_str())
        .timestamp(now)
        .footer(style.footer, avatar_url);

    let embed = match announcement.kind {
        AnnouncementKind::News => embed,
        AnnouncementKind::Announcement => embed.field(
            "⚠️ Important",
            "Please read this announcement carefully",
            false,
        ),
        AnnouncementKind::Update => {
            embed.field("📝 Version Info", format!("Updated: {}", full_time(now)), true)
        }
    };
    MessagePayload::embed(embed)
}

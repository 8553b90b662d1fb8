//! Status board and per-product status cards.
//!
//! The board "animates" by selecting glyphs from the wall clock each time
//! it is rendered; it is re-rendered on every refresh.

use chrono::{DateTime, Utc};

use super::{Embed, MessagePayload, relative_time};
use crate::domain::catalogue::Product;

const STATUS_TITLE: &str = "📊 Existence Tool Status";
const STATUS_COLOUR: u32 = 0x0000_FF00;

const RISK_GLYPHS: [&str; 3] = ["🟢", "🔵", "🟢"];
const ONLINE_GLYPHS: [&str; 4] = ["🟢●", "🟢○", "🔵●", "🟢●"];
const UPDATING_GLYPHS: [&str; 4] = ["🟡●", "🟡○", "🟠●", "🟡●"];

fn cycle<'a>(glyphs: &[&'a str], now: DateTime<Utc>, period_ms: i64) -> &'a str {
    let len = i64::try_from(glyphs.len()).unwrap_or(1);
    let slot = now.timestamp_millis().div_euclid(period_ms).rem_euclid(len);
    usize::try_from(slot)
        .ok()
        .and_then(|index| glyphs.get(index))
        .copied()
        .unwrap_or_default()
}

/// Ten-cell text bar, e.g. `[█████████░] 98%`.
#[must_use]
pub fn progress_bar(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100) / 10);
    format!(
        "[{}{}] {percentage}%",
        "█".repeat(filled),
        "░".repeat(10 - filled)
    )
}

fn features(product: &Product) -> String {
    product.category().features().join("\n")
}

fn risk_line(available: bool, now: DateTime<Utc>) -> String {
    if available {
        format!("{} **LOW RISK SLIGHT BAN CHANCE**", cycle(&RISK_GLYPHS, now, 2_000))
    } else {
        "🟡 **MEDIUM RISK - UPDATING**".to_owned()
    }
}

fn board_entry(product: &Product, now: DateTime<Utc>) -> String {
    let available = product.download().is_available();
    let (glyphs, label, uptime, availability) = if available {
        (&ONLINE_GLYPHS, "SAFE TO USE", 98, "✅ Available")
    } else {
        (&UPDATING_GLYPHS, "UPDATING", 45, "⏳ Coming Soon")
    };

    [
        format!("**Status:** {} {label}", cycle(glyphs, now, 3_000)),
        format!("**Uptime:** {}", progress_bar(uptime)),
        format!("**Last Check:** {}", relative_time(now)),
        format!("**Category:** {}", product.category()),
        format!("**Availability:** {availability}"),
        format!("**Risk Level:** {}", risk_line(available, now)),
        format!("**Features:** {}", features(product)),
    ]
    .join("\n")
}

/// Standing status board: one field per product.
#[must_use]
pub fn status_board(products: &[Product], now: DateTime<Utc>) -> MessagePayload {
    let embed = products.iter().fold(
        Embed::new(STATUS_TITLE, STATUS_COLOUR)
            .description("Current status and information for all available tools")
            .timestamp(now)
            .footer("Last updated", None),
        |embed, product| {
            embed.field(
                format!("{} {}", product.category().emoji(), product.name()),
                board_entry(product, now),
                false,
            )
        },
    );
    MessagePayload::embed(embed)
}

/// Header reply to `!status`, sent before the per-product cards.
#[must_use]
pub fn status_header(now: DateTime<Utc>) -> MessagePayload {
    MessagePayload::embed(
        Embed::new(STATUS_TITLE, STATUS_COLOUR)
            .description("Current status and stats for all available tools")
            .timestamp(now)
            .footer("Last updated", None),
    )
}

/// One product's status card for `!status`.
#[must_use]
pub fn status_card(product: &Product, now: DateTime<Utc>) -> MessagePayload {
    let url = product.download().url();
    let (status, availability, risk) = if url.is_some() {
        ("🟢 SAFE TO USE", "✅ Available", "🟢 LOW RISK SLIGHT BAN CHANCE")
    } else {
        ("🟡 UPDATING", "⏳ Coming Soon", "🟡 UPDATING")
    };

    let embed = Embed::new(
        format!("{} {}", product.category().emoji(), product.name()),
        product.color_indicator().rgb(),
    )
    .description(product.description())
    .field("Status", status, true)
    .field("Category", product.category().label(), true)
    .field("Availability", availability, true)
    .field("Features", features(product), false)
    .field("Risk Level", risk, false)
    .timestamp(now);

    let embed = match url {
        Some(url) => embed.field("Download", format!("[Click here to download]({url})"), false),
        None => embed,
    };
    MessagePayload::embed(embed)
}

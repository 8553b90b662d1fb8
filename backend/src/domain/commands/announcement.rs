//! Pipe-delimited announcement arguments and their presentation table.

use std::fmt;

/// Literal separator between title and body.
pub const ANNOUNCEMENT_DELIMITER: &str = " | ";

/// The three publishing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnnouncementKind {
    News,
    Announcement,
    Update,
}

/// Fixed presentation attributes of an announcement kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnnouncementStyle {
    pub emoji: &'static str,
    pub colour: u32,
    pub footer: &'static str,
}

impl AnnouncementKind {
    pub const ALL: [Self; 3] = [Self::News, Self::Announcement, Self::Update];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Announcement => "announcement",
            Self::Update => "update",
        }
    }

    /// Command prefix, trailing space included.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::News => "!news ",
            Self::Announcement => "!announcement ",
            Self::Update => "!update ",
        }
    }

    #[must_use]
    pub const fn style(self) -> AnnouncementStyle {
        match self {
            Self::News => AnnouncementStyle {
                emoji: "📰",
                colour: 0x0034_98DB,
                footer: "Existence News",
            },
            Self::Announcement => AnnouncementStyle {
                emoji: "📢",
                colour: 0x00E7_4C3C,
                footer: "Important Announcement",
            },
            Self::Update => AnnouncementStyle {
                emoji: "🔄",
                colour: 0x00F3_9C12,
                footer: "Product Update",
            },
        }
    }

    /// Usage text shown when the argument is malformed.
    #[must_use]
    pub const fn usage(self) -> &'static str {
        match self {
            Self::News => {
                "Usage: `!news <title> | <content>`\nExample: `!news New Update Available | We just released version 2.0 with amazing features!`"
            }
            Self::Announcement => {
                "Usage: `!announcement <title> | <content>`\nExample: `!announcement Server Maintenance | Servers will be down for 2 hours tonight`"
            }
            Self::Update => {
                "Usage: `!update <product> | <content>`\nExample: `!update Rust Arcane | Fixed detection issues and improved performance`"
            }
        }
    }
}

impl fmt::Display for AnnouncementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while parsing an announcement argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnnouncementError {
    /// The argument has no `" | "` separator.
    #[error("malformed {kind} command: expected `<title> | <body>`")]
    Malformed { kind: AnnouncementKind },
}

impl AnnouncementError {
    /// Usage text to show the author.
    #[must_use]
    pub fn usage(&self) -> &'static str {
        match self {
            Self::Malformed { kind } => kind.usage(),
        }
    }
}

/// Parsed announcement. For updates, `title` holds the product name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub kind: AnnouncementKind,
    pub title: String,
    pub body: String,
}

impl Announcement {
    /// Split `argument` on the first [`ANNOUNCEMENT_DELIMITER`].
    ///
    /// Further delimiters stay in the body verbatim. Both halves are
    /// trimmed; empty halves are accepted.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::commands::{Announcement, AnnouncementKind};
    ///
    /// let parsed = Announcement::parse(AnnouncementKind::Update, "X | Y | Z").unwrap();
    /// assert_eq!(parsed.title, "X");
    /// assert_eq!(parsed.body, "Y | Z");
    /// ```
    pub fn parse(kind: AnnouncementKind, argument: &str) -> Result<Self, AnnouncementError> {
        let (title, body) = argument
            .split_once(ANNOUNCEMENT_DELIMITER)
            .ok_or(AnnouncementError::Malformed { kind })?;

        Ok(Self {
            kind,
            title: title.trim().to_owned(),
            body: body.trim().to_owned(),
        })
    }

    /// Embed title, decorated per kind.
    #[must_use]
    pub fn heading(&self) -> String {
        let emoji = self.kind.style().emoji;
        match self.kind {
            AnnouncementKind::Update => format!("{emoji} {} Update", self.title),
            AnnouncementKind::News | AnnouncementKind::Announcement => {
                format!("{emoji} {}", self.title)
            }
        }
    }
}

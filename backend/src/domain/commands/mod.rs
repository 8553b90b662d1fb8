//! Text command surface of the chat bot.
//!
//! Parsing is two-layered: [`ChatCommand::parse`] recognises which command a
//! message invokes, and [`Announcement::parse`] splits the argument of the
//! three publishing commands.

mod announcement;
mod interaction;


pub use announcement::{
    ANNOUNCEMENT_DELIMITER, Announcement, AnnouncementError, AnnouncementKind, AnnouncementStyle,
};
pub use interaction::{
    InteractionId, InteractionIdError, PERMANENT_PRODUCT_SELECT_ID, PRODUCT_SELECT_ID,
};

/// A recognised chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    Products,
    Featured,
    Popular,
    Status,
    Help,
    Welcome,
    /// One of the publishing commands, with its unparsed argument.
    Publish {
        kind: AnnouncementKind,
        argument: String,
    },
}

const EXACT_COMMANDS: [(&str, ChatCommand); 6] = [
    ("!products", ChatCommand::Products),
    ("!featured", ChatCommand::Featured),
    ("!popular", ChatCommand::Popular),
    ("!status", ChatCommand::Status),
    ("!help", ChatCommand::Help),
    ("!welcome", ChatCommand::Welcome),
];

impl ChatCommand {
    /// Recognise a command, ignoring ASCII case.
    ///
    /// Argument-less commands must match the whole message. Publishing
    /// commands match on their prefix including the trailing space; the
    /// argument keeps its original case. Returns `None` for anything else.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::commands::{AnnouncementKind, ChatCommand};
    ///
    /// assert_eq!(ChatCommand::parse("!HELP"), Some(ChatCommand::Help));
    /// assert_eq!(
    ///     ChatCommand::parse("!News Title | Body"),
    ///     Some(ChatCommand::Publish {
    ///         kind: AnnouncementKind::News,
    ///         argument: "Title | Body".to_owned(),
    ///     })
    /// );
    /// assert_eq!(ChatCommand::parse("hello"), None);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if let Some((_, command)) = EXACT_COMMANDS
            .iter()
            .find(|(name, _)| raw.eq_ignore_ascii_case(name))
        {
            return Some(command.clone());
        }

        AnnouncementKind::ALL.into_iter().find_map(|kind| {
            let prefix = kind.prefix();
            let head = raw.get(..prefix.len())?;
            head.eq_ignore_ascii_case(prefix).then(|| Self::Publish {
                kind,
                argument: raw[prefix.len()..].to_owned(),
            })
        })
    }

    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Products => "products",
            Self::Featured => "featured",
            Self::Popular => "popular",
            Self::Status => "status",
            Self::Help => "help",
            Self::Welcome => "welcome",
            Self::Publish { kind, .. } => kind.name(),
        }
    }
}

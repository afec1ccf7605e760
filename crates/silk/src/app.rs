use crate::color::{Rgb, hex};
use crate::icon::IconName;
use derive_more::{AsRef, Deref, Display, From, Into};
use strum::{Display as StrumDisplay, EnumIter, EnumString, IntoEnumIterator};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, Deref, From, Into, AsRef)]
pub struct AppName(String);

crate::impl_string_newtype!(AppName);

/// A shortcut the user placed on the web.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedItem {
    pub name: AppName,
    pub icon: IconName,
    pub color: Rgb,
}

impl SelectedItem {
    pub fn new(name: impl Into<String>, icon: impl Into<String>, color: Rgb) -> Self {
        Self {
            name: AppName::new(name),
            icon: IconName::new(icon),
            color,
        }
    }

    /// Glyph drawn in the badge when the icon cannot be resolved.
    pub fn initial(&self) -> char {
        self.name
            .chars()
            .next()
            .map(|c| c.to_ascii_uppercase())
            .unwrap_or('?')
    }
}

/// The social networks offered by the add-apps screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(ascii_case_insensitive)]
pub enum Network {
    Facebook,
    Instagram,
    #[strum(to_string = "X", serialize = "twitter")]
    X,
    WhatsApp,
    Snapchat,
    TikTok,
    LinkedIn,
    YouTube,
    Reddit,
    Telegram,
    Pinterest,
    Discord,
}

impl Network {
    pub fn icon(&self) -> IconName {
        IconName::new(format!("{}-symbolic", self.to_string().to_lowercase()))
    }

    pub fn color(&self) -> Rgb {
        match self {
            Self::Facebook => hex(0x1877F2),
            Self::Instagram => hex(0xE1306C),
            Self::X => hex(0x1DA1F2),
            Self::WhatsApp => hex(0x25D366),
            Self::Snapchat => hex(0xFFFC00),
            Self::TikTok => hex(0x69C9D0),
            Self::LinkedIn => hex(0x0A66C2),
            Self::YouTube => hex(0xFF0000),
            Self::Reddit => hex(0xFF4500),
            Self::Telegram => hex(0x229ED9),
            Self::Pinterest => hex(0xE60023),
            Self::Discord => hex(0x5865F2),
        }
    }

    pub fn item(&self) -> SelectedItem {
        SelectedItem {
            name: AppName::new(self.to_string()),
            icon: self.icon(),
            color: self.color(),
        }
    }

    pub fn catalog() -> Vec<SelectedItem> {
        Self::iter().map(|n| n.item()).collect()
    }
}

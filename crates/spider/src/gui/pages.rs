use crate::gui::app::{AppModel, AppMsg};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::ComponentSender;
use silk::app::{AppName, SelectedItem};
use silk::screen::Route;
use strum::{AsRefStr, EnumIter};

/// Stack pages, one per route. Names are the stack child names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum Page {
    Home,
    AddApps,
    Settings,
    Notifications,
    SocialApp,
}

impl From<&Route> for Page {
    fn from(route: &Route) -> Self {
        match route {
            Route::Home => Self::Home,
            Route::AddApps => Self::AddApps,
            Route::Settings => Self::Settings,
            Route::Notifications => Self::Notifications,
            Route::SocialApp(_) => Self::SocialApp,
        }
    }
}

pub const NO_NOTIFICATIONS: &str = "You're all caught up.";

pub fn selection_summary(items: &[SelectedItem]) -> String {
    if items.is_empty() {
        return "No apps on your web yet.".to_string();
    }
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn social_title(route: &Route) -> String {
    match route {
        Route::SocialApp(name) => format!("Welcome to {}", name),
        _ => String::new(),
    }
}

/// Adds one check button per catalog entry. Toggles are reported with the
/// desired state so that programmatic `set_active` calls are harmless.
pub fn fill_picker_list(
    list: &gtk::ListBox,
    catalog: &[SelectedItem],
    sender: &ComponentSender<AppModel>,
) -> Vec<(AppName, gtk::CheckButton)> {
    catalog
        .iter()
        .map(|item| {
            let check = gtk::CheckButton::with_label(item.name.as_str());
            let name = item.name.clone();
            let sender = sender.clone();
            check.connect_toggled(move |c| {
                sender.input(AppMsg::PickerSet(name.clone(), c.is_active()));
            });
            list.append(&check);
            (item.name.clone(), check)
        })
        .collect()
}

pub fn toggle_peek(entry: &gtk::Entry) {
    let reveal = !gtk::prelude::EntryExt::is_visible(entry);
    entry.set_visibility(reveal);
    entry.set_secondary_icon_name(Some(if reveal {
        "view-conceal-symbolic"
    } else {
        "view-reveal-symbolic"
    }));
}

#[cfg(test)]
mod tests {
    use super::*;
    use silk::app::Network;
    use strum::IntoEnumIterator;

    #[test]
    fn test_page_names() {
        let names: Vec<_> = Page::iter().map(|p| p.as_ref().to_string()).collect();
        assert_eq!(
            names,
            vec!["home", "add-apps", "settings", "notifications", "social-app"]
        );
        assert_eq!(
            Page::from(&Route::SocialApp(AppName::new("X"))),
            Page::SocialApp
        );
    }

    #[test]
    fn test_selection_summary() {
        assert_eq!(selection_summary(&[]), "No apps on your web yet.");
        let items = vec![Network::Discord.item(), Network::Reddit.item()];
        assert_eq!(selection_summary(&items), "1. Discord\n2. Reddit");
    }

    #[test]
    fn test_social_title() {
        assert_eq!(
            social_title(&Route::SocialApp(AppName::new("Telegram"))),
            "Welcome to Telegram"
        );
        assert_eq!(social_title(&Route::Home), "");
    }
}

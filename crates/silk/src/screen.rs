use crate::app::{AppName, SelectedItem};
use crate::auth::{Attempt, Credentials, LoginDialog, LoginError, LoginOutcome};
use crate::layout::{Layout, Point, SLOT_COUNT};
use crate::picker::AppPicker;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    AddApps,
    Settings,
    Notifications,
    SocialApp(AppName),
}

/// Screen stack. The home screen is always at the bottom.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            stack: vec![Route::Home],
        }
    }

    pub fn current(&self) -> &Route {
        self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        log::info!("Navigating to {:?}", route);
        self.stack.push(route);
    }

    pub fn pop(&mut self) -> Option<Route> {
        if self.stack.len() > 1 {
            self.stack.pop()
        } else {
            None
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TapAction {
    Login(AppName),
    AddApps,
}

/// Everything the home screen remembers while the process runs.
pub struct HomeScreen {
    selection: Vec<SelectedItem>,
    layout: Layout,
    navigator: Navigator,
    login: Option<LoginDialog>,
    picker: Option<AppPicker>,
    sessions: u64,
}

impl HomeScreen {
    pub fn new() -> Self {
        Self {
            selection: Vec::new(),
            layout: Layout::default(),
            navigator: Navigator::new(),
            login: None,
            picker: None,
            sessions: 0,
        }
    }

    pub fn selection(&self) -> &[SelectedItem] {
        &self.selection
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn route(&self) -> &Route {
        self.navigator.current()
    }

    pub fn login(&self) -> Option<&LoginDialog> {
        self.login.as_ref()
    }

    pub fn picker(&self) -> Option<&AppPicker> {
        self.picker.as_ref()
    }

    pub fn picker_mut(&mut self) -> Option<&mut AppPicker> {
        self.picker.as_mut()
    }

    /// Replaces the whole selection. Only the first eight items are kept.
    pub fn set_selection(&mut self, mut items: Vec<SelectedItem>) {
        if items.len() > SLOT_COUNT {
            log::warn!(
                "Selection of {} apps truncated to {} slots",
                items.len(),
                SLOT_COUNT
            );
            items.truncate(SLOT_COUNT);
        }
        self.layout = Layout::new(&items);
        self.selection = items;
    }

    /// Slots and the add-apps button only react on the bare home screen.
    fn is_idle(&self) -> bool {
        self.navigator.current() == &Route::Home && self.login.is_none()
    }

    pub fn tap_slot(&mut self, index: usize) -> Option<TapAction> {
        if !self.is_idle() {
            log::debug!("Ignored tap on slot {} away from home", index);
            return None;
        }
        let slot = self.layout.slot(index)?;
        log::debug!("Tapped slot {}", index);

        match slot.item() {
            Some(item) => {
                let app = item.name.clone();
                self.open_login(app.clone());
                Some(TapAction::Login(app))
            }
            None => {
                self.open_add_apps();
                Some(TapAction::AddApps)
            }
        }
    }

    pub fn tap_at(&mut self, point: Point) -> Option<TapAction> {
        let index = self.layout.hit_test(point)?;
        self.tap_slot(index)
    }

    fn open_login(&mut self, app: AppName) {
        self.sessions += 1;
        self.login = Some(LoginDialog::new(app, self.sessions));
    }

    pub fn open_add_apps(&mut self) {
        if !self.is_idle() {
            log::debug!("Add apps ignored on {:?}", self.navigator.current());
            return;
        }
        self.picker = Some(AppPicker::new(&self.selection));
        self.navigator.push(Route::AddApps);
    }

    /// Ends the add-apps round trip. `None` means the flow was cancelled and the
    /// selection stays as it was.
    pub fn finish_add_apps(&mut self, result: Option<Vec<SelectedItem>>) {
        self.picker = None;
        if self.navigator.current() == &Route::AddApps {
            self.navigator.pop();
        }
        if let Some(items) = result {
            log::info!("Selected {} apps", items.len());
            self.set_selection(items);
        }
    }

    pub fn confirm_picker(&mut self) {
        let result = self.picker.take().map(AppPicker::confirm);
        self.finish_add_apps(result);
    }

    pub fn cancel_picker(&mut self) {
        self.finish_add_apps(None);
    }

    pub fn open_settings(&mut self) {
        self.navigator.push(Route::Settings);
    }

    pub fn open_notifications(&mut self) {
        self.navigator.push(Route::Notifications);
    }

    pub fn submit_login(&mut self, credentials: &Credentials) -> Result<Attempt, LoginError> {
        self.login
            .as_mut()
            .ok_or(LoginError::Closed)?
            .submit(credentials)
    }

    pub fn resolve_login(&mut self, attempt: Attempt, authenticated: bool) -> LoginOutcome {
        let Some(dialog) = self.login.as_mut() else {
            return LoginOutcome::Stale;
        };

        let outcome = dialog.resolve(attempt, authenticated);
        match &outcome {
            LoginOutcome::Success(app) => {
                log::info!("Logged in to {}", app);
                self.login = None;
                self.navigator.push(Route::SocialApp(app.clone()));
            }
            LoginOutcome::Rejected => log::info!("Login to {} rejected", dialog.app()),
            LoginOutcome::Stale => log::debug!("Dropped stale login result"),
        }
        outcome
    }

    pub fn dismiss_login(&mut self) {
        if let Some(dialog) = self.login.take() {
            log::debug!("Login to {} dismissed", dialog.app());
        }
    }

    /// Closes the topmost layer: the login dialog, then the current screen.
    pub fn back(&mut self) {
        if self.login.is_some() {
            self.dismiss_login();
        } else if self.navigator.current() == &Route::AddApps {
            self.cancel_picker();
        } else {
            self.navigator.pop();
        }
    }
}

impl Default for HomeScreen {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Network;

    #[test]
    fn test_navigator_keeps_home() {
        let mut nav = Navigator::new();
        assert_eq!(nav.pop(), None);
        nav.push(Route::Settings);
        assert_eq!(nav.current(), &Route::Settings);
        assert_eq!(nav.pop(), Some(Route::Settings));
        assert_eq!(nav.current(), &Route::Home);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_empty_slot_opens_add_apps() {
        let mut home = HomeScreen::new();
        assert_eq!(home.tap_slot(5), Some(TapAction::AddApps));
        assert_eq!(home.route(), &Route::AddApps);
        assert!(home.picker().is_some());
        assert!(home.login().is_none());
    }

    #[test]
    fn test_add_apps_only_opens_from_home() {
        let mut home = HomeScreen::new();
        home.open_add_apps();
        home.picker_mut()
            .unwrap()
            .set(&AppName::new("Reddit"), true)
            .unwrap();

        home.open_add_apps();
        assert_eq!(home.tap_slot(3), None);
        assert_eq!(home.route(), &Route::AddApps);
        assert!(home.picker().unwrap().is_picked(&AppName::new("Reddit")));

        home.back();
        assert_eq!(home.route(), &Route::Home);
        home.open_settings();
        home.open_add_apps();
        assert_eq!(home.route(), &Route::Settings);
        assert!(home.picker().is_none());
    }

    #[test]
    fn test_tap_ignored_while_login_open() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::Snapchat.item()]);
        home.tap_slot(0);
        assert_eq!(home.tap_slot(4), None);
        assert_eq!(home.route(), &Route::Home);
        assert_eq!(
            home.login().map(|d| d.app().clone()),
            Some(AppName::new("Snapchat"))
        );
    }

    #[test]
    fn test_tap_out_of_range() {
        let mut home = HomeScreen::new();
        assert_eq!(home.tap_slot(SLOT_COUNT), None);
        assert_eq!(home.route(), &Route::Home);
    }

    #[test]
    fn test_cancelled_add_apps_keeps_selection() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::X.item()]);
        home.open_add_apps();
        home.picker_mut()
            .unwrap()
            .set(&AppName::new("Reddit"), true)
            .unwrap();
        home.back();
        assert_eq!(home.route(), &Route::Home);
        assert_eq!(home.selection(), &[Network::X.item()]);
        assert!(home.picker().is_none());
    }

    #[test]
    fn test_selection_replaced_wholesale() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::X.item(), Network::Reddit.item()]);
        home.open_add_apps();
        home.finish_add_apps(Some(vec![Network::Discord.item()]));
        assert_eq!(home.selection(), &[Network::Discord.item()]);
        assert_eq!(home.layout().filled_count(), 1);
    }

    #[test]
    fn test_oversized_selection_truncated() {
        let mut home = HomeScreen::new();
        home.set_selection(Network::catalog());
        assert_eq!(home.selection().len(), SLOT_COUNT);
        assert_eq!(home.layout().filled_count(), SLOT_COUNT);
    }

    #[test]
    fn test_filled_slot_opens_login() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::Snapchat.item()]);
        assert_eq!(
            home.tap_slot(0),
            Some(TapAction::Login(AppName::new("Snapchat")))
        );
        assert_eq!(
            home.login().map(|d| d.title()).as_deref(),
            Some("Login to Snapchat")
        );
        assert_eq!(home.route(), &Route::Home);
    }

    #[test]
    fn test_invalid_login_stays_open() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::Snapchat.item()]);
        home.tap_slot(0);
        assert_eq!(
            home.submit_login(&Credentials::new("", "x")),
            Err(LoginError::MissingCredentials)
        );
        assert!(home.login().is_some());
        assert_eq!(home.route(), &Route::Home);
    }

    #[test]
    fn test_dismissed_login_ignores_late_result() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::Snapchat.item()]);
        home.tap_slot(0);
        let attempt = home
            .submit_login(&Credentials::new("a@b.com", "x"))
            .unwrap();
        home.dismiss_login();
        assert_eq!(home.resolve_login(attempt, true), LoginOutcome::Stale);
        assert_eq!(home.route(), &Route::Home);

        // reopening must not accept the old attempt either
        home.tap_slot(0);
        assert_eq!(home.resolve_login(attempt, true), LoginOutcome::Stale);
        assert!(home.login().is_some());
    }

    #[test]
    fn test_submit_without_dialog() {
        let mut home = HomeScreen::new();
        assert_eq!(
            home.submit_login(&Credentials::new("a", "b")),
            Err(LoginError::Closed)
        );
    }

    #[test]
    fn test_back_closes_layers_in_order() {
        let mut home = HomeScreen::new();
        home.set_selection(vec![Network::Snapchat.item()]);
        home.open_notifications();
        home.back();
        assert_eq!(home.route(), &Route::Home);

        home.open_settings();
        assert_eq!(home.route(), &Route::Settings);
        home.back();

        home.tap_slot(0);
        home.back();
        assert!(home.login().is_none());
        assert_eq!(home.route(), &Route::Home);
    }

    #[tokio::test(start_paused = true)]
    async fn test_pick_three_then_log_in() {
        use crate::auth::{AUTH_DELAY, authenticate};

        let mut home = HomeScreen::new();
        assert_eq!(home.tap_slot(0), Some(TapAction::AddApps));

        let chosen = [Network::Facebook, Network::Instagram, Network::WhatsApp];
        let picker = home.picker_mut().unwrap();
        for network in chosen {
            picker.toggle(&AppName::new(network.to_string())).unwrap();
        }
        home.confirm_picker();

        assert_eq!(home.route(), &Route::Home);
        let filled: Vec<_> = home
            .layout()
            .slots()
            .iter()
            .map(|s| s.is_filled())
            .collect();
        assert_eq!(
            filled,
            vec![true, true, true, false, false, false, false, false]
        );

        assert_eq!(
            home.tap_slot(0),
            Some(TapAction::Login(AppName::new("Facebook")))
        );
        let credentials = Credentials::new("a@b.com", "x");
        let attempt = home.submit_login(&credentials).unwrap();
        assert!(home.login().is_some_and(|d| d.is_loading()));

        let start = tokio::time::Instant::now();
        let ok = authenticate(&credentials, AUTH_DELAY).await;
        assert!(start.elapsed() >= AUTH_DELAY);

        assert_eq!(
            home.resolve_login(attempt, ok),
            LoginOutcome::Success(AppName::new("Facebook"))
        );
        assert!(home.login().is_none());
        assert_eq!(home.route(), &Route::SocialApp(AppName::new("Facebook")));
    }
}

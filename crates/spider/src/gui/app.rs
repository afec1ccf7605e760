use crate::config::{self, Config};
use crate::events::AppEvent;
use crate::gui::backdrop;
use crate::gui::pages::{self, Page};
use crate::gui::theme::{self, ThemeColors};
use crate::gui::web::{self, CANVAS_SIZE, WebState};
use gtk::prelude::*;
use gtk4 as gtk;
use relm4::RelmWidgetExt;
use relm4::prelude::*;
use silk::app::{AppName, Network};
use silk::auth::{self, Attempt, Credentials, LoginOutcome};
use silk::layout::Point;
use silk::particles::{ParticleField, REFERENCE_FRAME};
use silk::picker::MAX_PICKS;
use silk::screen::{HomeScreen, TapAction};
use std::cell::{Cell, RefCell};
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

pub const APP_ID: &str = "com.spiderapp.spider";
const WINDOW_WIDTH: i32 = 400;
const WINDOW_HEIGHT: i32 = 780;
const MAX_FRAME_STEP: Duration = Duration::from_millis(100);

pub struct AppModel {
    pub screen: HomeScreen,
    pub config: Config,
    pub config_path: PathBuf,
    pub web: Rc<RefCell<WebState>>,
    pub particles: Rc<RefCell<ParticleField>>,
    pub css: gtk::CssProvider,
    pub web_area: gtk::DrawingArea,
    pub email_entry: gtk::Entry,
    pub password_entry: gtk::Entry,
    pub picker_checks: Vec<(AppName, gtk::CheckButton)>,
}

#[derive(Debug)]
pub enum AppMsg {
    WebClick(Point),
    OpenAddApps,
    PickerSet(AppName, bool),
    PickerConfirm,
    OpenSettings,
    OpenNotifications,
    Back,
    LoginSubmit,
    LoginResolved(Attempt, bool),
    LoginDismiss,
    ConfigReload,
}

impl From<AppEvent> for AppMsg {
    fn from(event: AppEvent) -> Self {
        match event {
            AppEvent::ConfigReload => AppMsg::ConfigReload,
        }
    }
}

impl AppModel {
    fn login_title(&self) -> String {
        self.screen
            .login()
            .map(|d| d.title())
            .unwrap_or_default()
    }

    fn login_error(&self) -> String {
        self.screen
            .login()
            .and_then(|d| d.error())
            .map(|e| e.to_string())
            .unwrap_or_default()
    }

    fn login_loading(&self) -> bool {
        self.screen.login().is_some_and(|d| d.is_loading())
    }

    fn picker_status(&self) -> String {
        let picked = self.screen.picker().map_or(0, |p| p.picks().len());
        format!("{} / {} on the web", picked, MAX_PICKS)
    }

    fn reset_login_form(&self) {
        self.email_entry.set_text("");
        self.password_entry.set_text("");
        self.password_entry.set_visibility(false);
        self.email_entry.grab_focus();
    }

    fn sync_picker(&self) {
        let Some(picker) = self.screen.picker() else {
            return;
        };
        for (name, check) in &self.picker_checks {
            check.set_active(picker.is_picked(name));
        }
    }

    fn refresh_web(&self) {
        self.web
            .borrow_mut()
            .set_layout(self.screen.layout().clone());
        self.web_area.queue_draw();
    }

    fn reload_config(&mut self) {
        match config::load_config(&self.config_path) {
            Ok(new_config) => {
                theme::apply_css(&self.css, &new_config);
                self.web.borrow_mut().accent = *new_config.accent;
                self.particles
                    .borrow_mut()
                    .resize(new_config.particles.count);
                self.config = new_config;
                self.web_area.queue_draw();
                log::info!("Configuration reloaded");
            }
            Err(e) => log::error!("Failed to reload config: {}", e),
        }
    }
}

#[relm4::component(pub)]
impl SimpleComponent for AppModel {
    type Init = (Config, PathBuf, async_channel::Receiver<AppEvent>);
    type Input = AppMsg;
    type Output = ();

    view! {
        #[root]
        gtk::ApplicationWindow {
            set_title: Some("Spider"),
            set_default_size: (WINDOW_WIDTH, WINDOW_HEIGHT),
            add_css_class: "spider-window",

            add_controller = gtk::EventControllerKey {
                connect_key_pressed[sender] => move |_, key, _, _| {
                    if key == gtk::gdk::Key::Escape {
                        sender.input(AppMsg::Back);
                        return glib::Propagation::Stop;
                    }
                    glib::Propagation::Proceed
                }
            },

            gtk::Overlay {
                #[name = "backdrop"]
                gtk::DrawingArea {
                    set_hexpand: true,
                    set_vexpand: true,
                    set_can_target: false,
                },

                add_overlay = &gtk::Stack {
                    add_css_class: "spider-stack",
                    set_transition_type: gtk::StackTransitionType::SlideLeftRight,
                    #[watch]
                    set_visible_child_name: Page::from(model.screen.route()).as_ref(),

                    add_named[Some(Page::Home.as_ref())] = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        add_css_class: "spider-page",

                        gtk::Box {
                            set_margin_top: 60,
                            set_margin_start: 20,
                            set_margin_end: 20,

                            gtk::Box {
                                set_orientation: gtk::Orientation::Vertical,
                                set_hexpand: true,

                                gtk::Label {
                                    add_css_class: "welcome",
                                    set_xalign: 0.0,
                                    #[watch]
                                    set_label: &format!("Welcome, {}", model.config.user_name),
                                },
                                gtk::Label {
                                    add_css_class: "tagline",
                                    set_xalign: 0.0,
                                    set_label: "Digital web is ready",
                                },
                            },

                            gtk::Button {
                                add_css_class: "glow-button",
                                set_valign: gtk::Align::Start,
                                set_icon_name: "preferences-system-notifications-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::OpenNotifications);
                                },
                            },
                        },

                        #[name = "web_area"]
                        gtk::DrawingArea {
                            set_content_width: CANVAS_SIZE,
                            set_content_height: CANVAS_SIZE,
                            set_halign: gtk::Align::Center,
                            set_valign: gtk::Align::Center,
                            set_vexpand: true,

                            add_controller = gtk::GestureClick {
                                connect_released[sender] => move |_, _, x, y| {
                                    sender.input(AppMsg::WebClick(Point::new(x, y)));
                                }
                            },
                        },

                        gtk::Button {
                            add_css_class: "fab",
                            set_halign: gtk::Align::Center,
                            set_margin_bottom: 12,
                            set_label: "+",
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::OpenAddApps);
                            },
                        },

                        gtk::Box {
                            add_css_class: "bottom-bar",

                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "go-home-symbolic",
                                set_sensitive: false,
                            },
                            gtk::Box {
                                set_hexpand: true,
                            },
                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "emblem-system-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::OpenSettings);
                                },
                            },
                        },
                    },

                    add_named[Some(Page::AddApps.as_ref())] = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_margin_all: 20,
                        add_css_class: "spider-page",

                        gtk::Box {
                            set_spacing: 8,
                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "go-previous-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Back);
                                },
                            },
                            gtk::Label {
                                add_css_class: "page-title",
                                set_hexpand: true,
                                set_xalign: 0.0,
                                set_label: "Add apps",
                            },
                            gtk::Label {
                                add_css_class: "page-body",
                                #[watch]
                                set_label: &model.picker_status(),
                            },
                        },

                        gtk::ScrolledWindow {
                            set_vexpand: true,
                            #[name = "picker_list"]
                            gtk::ListBox {
                                set_selection_mode: gtk::SelectionMode::None,
                            },
                        },

                        gtk::Button {
                            add_css_class: "login-button",
                            set_label: "DONE",
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::PickerConfirm);
                            },
                        },
                    },

                    add_named[Some(Page::Settings.as_ref())] = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_margin_all: 20,
                        add_css_class: "spider-page",

                        gtk::Box {
                            set_spacing: 8,
                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "go-previous-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Back);
                                },
                            },
                            gtk::Label {
                                add_css_class: "page-title",
                                set_label: "Settings",
                            },
                        },
                        gtk::Label {
                            add_css_class: "page-body",
                            set_xalign: 0.0,
                            #[watch]
                            set_label: &pages::selection_summary(model.screen.selection()),
                        },
                    },

                    add_named[Some(Page::Notifications.as_ref())] = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_margin_all: 20,
                        add_css_class: "spider-page",

                        gtk::Box {
                            set_spacing: 8,
                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "go-previous-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Back);
                                },
                            },
                            gtk::Label {
                                add_css_class: "page-title",
                                set_label: "Notifications",
                            },
                        },
                        gtk::Label {
                            add_css_class: "page-body",
                            set_xalign: 0.0,
                            set_label: pages::NO_NOTIFICATIONS,
                        },
                    },

                    add_named[Some(Page::SocialApp.as_ref())] = &gtk::Box {
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 12,
                        set_margin_all: 20,
                        add_css_class: "spider-page",

                        gtk::Box {
                            set_spacing: 8,
                            gtk::Button {
                                add_css_class: "glow-button",
                                set_icon_name: "go-previous-symbolic",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::Back);
                                },
                            },
                            gtk::Label {
                                add_css_class: "page-title",
                                #[watch]
                                set_label: &pages::social_title(model.screen.route()),
                            },
                        },
                    },
                },

                add_overlay = &gtk::Box {
                    add_css_class: "scrim",
                    set_hexpand: true,
                    set_vexpand: true,
                    #[watch]
                    set_visible: model.screen.login().is_some(),

                    gtk::Box {
                        add_css_class: "login-card",
                        set_orientation: gtk::Orientation::Vertical,
                        set_spacing: 16,
                        set_width_request: 320,
                        set_hexpand: true,
                        set_halign: gtk::Align::Center,
                        set_valign: gtk::Align::Center,

                        gtk::Box {
                            gtk::Label {
                                add_css_class: "login-title",
                                set_hexpand: true,
                                set_xalign: 0.0,
                                #[watch]
                                set_label: &model.login_title(),
                            },
                            gtk::Button {
                                set_icon_name: "window-close-symbolic",
                                add_css_class: "flat",
                                connect_clicked[sender] => move |_| {
                                    sender.input(AppMsg::LoginDismiss);
                                },
                            },
                        },

                        gtk::Label {
                            add_css_class: "login-error",
                            set_xalign: 0.0,
                            #[watch]
                            set_visible: !model.login_error().is_empty(),
                            #[watch]
                            set_label: &model.login_error(),
                        },

                        #[name = "email_entry"]
                        gtk::Entry {
                            set_placeholder_text: Some("Email"),
                            set_input_purpose: gtk::InputPurpose::Email,
                        },

                        #[name = "password_entry"]
                        gtk::Entry {
                            set_placeholder_text: Some("Password"),
                            set_input_purpose: gtk::InputPurpose::Password,
                            set_visibility: false,
                            set_secondary_icon_name: Some("view-reveal-symbolic"),
                            connect_icon_press => move |entry, _| {
                                pages::toggle_peek(entry);
                            },
                            connect_activate[sender] => move |_| {
                                sender.input(AppMsg::LoginSubmit);
                            },
                        },

                        gtk::Button {
                            add_css_class: "login-button",
                            #[watch]
                            set_sensitive: !model.login_loading(),
                            connect_clicked[sender] => move |_| {
                                sender.input(AppMsg::LoginSubmit);
                            },

                            gtk::Box {
                                set_halign: gtk::Align::Center,
                                set_spacing: 8,

                                gtk::Spinner {
                                    #[watch]
                                    set_visible: model.login_loading(),
                                    #[watch]
                                    set_spinning: model.login_loading(),
                                },
                                gtk::Label {
                                    set_label: "LOG IN",
                                },
                            },
                        },
                    },
                },
            },
        }
    }

    fn init(
        init: Self::Init,
        root: Self::Root,
        sender: ComponentSender<Self>,
    ) -> ComponentParts<Self> {
        let (config, config_path, rx) = init;

        let css = theme::load_css(&config);
        let screen = HomeScreen::new();
        let web = Rc::new(RefCell::new(WebState::new(
            screen.layout().clone(),
            *config.accent,
        )));
        let particles = Rc::new(RefCell::new(ParticleField::new(config.particles.count)));

        let model = AppModel {
            screen,
            config,
            config_path,
            web: web.clone(),
            particles: particles.clone(),
            css,
            web_area: gtk::DrawingArea::default(),
            email_entry: gtk::Entry::default(),
            password_entry: gtk::Entry::default(),
            picker_checks: Vec::new(),
        };

        let widgets = view_output!();

        let mut model = model;
        model.web_area = widgets.web_area.clone();
        model.email_entry = widgets.email_entry.clone();
        model.password_entry = widgets.password_entry.clone();
        model.picker_checks =
            pages::fill_picker_list(&widgets.picker_list, &Network::catalog(), &sender);

        widgets
            .web_area
            .set_draw_func(move |drawing_area, cr, width, height| {
                let state = web.borrow();
                let colors =
                    ThemeColors::from_context(&drawing_area.style_context(), state.accent);
                let origin = web::web_origin(width as f64, height as f64);
                cr.translate(origin.x, origin.y);
                if let Err(e) = web::draw(cr, &state, &colors) {
                    log::error!("Drawing error: {}", e);
                }
            });

        let field = particles.clone();
        widgets
            .backdrop
            .set_draw_func(move |_, cr, width, height| {
                let field = field.borrow();
                let (width, height) = (width as f64, height as f64);
                if let Err(e) = backdrop::draw(cr, width, height, field.particles()) {
                    log::error!("Drawing error: {}", e);
                }
            });

        // one simulation step per frame, repainted unconditionally
        let last_frame = Cell::new(None::<i64>);
        widgets.backdrop.add_tick_callback(move |area, clock| {
            let now = clock.frame_time();
            let dt = last_frame
                .replace(Some(now))
                .map(|prev| Duration::from_micros(now.saturating_sub(prev).max(0) as u64))
                .unwrap_or(REFERENCE_FRAME);
            particles.borrow_mut().tick(dt.min(MAX_FRAME_STEP));
            area.queue_draw();
            glib::ControlFlow::Continue
        });

        let sender_clone = sender.clone();
        relm4::spawn(async move {
            while let Ok(event) = rx.recv().await {
                sender_clone.input(AppMsg::from(event));
            }
        });

        ComponentParts { model, widgets }
    }

    fn update(&mut self, msg: Self::Input, sender: ComponentSender<Self>) {
        match msg {
            AppMsg::WebClick(point) => {
                let (width, height) = (
                    self.web_area.width() as f64,
                    self.web_area.height() as f64,
                );
                match self.screen.tap_at(web::to_web_coords(point, width, height)) {
                    Some(TapAction::Login(app)) => {
                        log::info!("Tapped {}", app);
                        self.reset_login_form();
                    }
                    Some(TapAction::AddApps) => self.sync_picker(),
                    None => {}
                }
            }
            AppMsg::OpenAddApps => {
                self.screen.open_add_apps();
                self.sync_picker();
            }
            AppMsg::PickerSet(name, picked) => {
                let Some(picker) = self.screen.picker_mut() else {
                    return;
                };
                if let Err(e) = picker.set(&name, picked) {
                    log::warn!("{}", e);
                    self.sync_picker();
                }
            }
            AppMsg::PickerConfirm => {
                self.screen.confirm_picker();
                self.refresh_web();
            }
            AppMsg::OpenSettings => self.screen.open_settings(),
            AppMsg::OpenNotifications => self.screen.open_notifications(),
            AppMsg::Back => self.screen.back(),
            AppMsg::LoginSubmit => {
                let credentials =
                    Credentials::new(self.email_entry.text(), self.password_entry.text());
                match self.screen.submit_login(&credentials) {
                    Ok(attempt) => {
                        let delay = self.config.auth.delay();
                        relm4::spawn(async move {
                            let authenticated = auth::authenticate(&credentials, delay).await;
                            sender.input(AppMsg::LoginResolved(attempt, authenticated));
                        });
                    }
                    Err(e) => log::debug!("Login not submitted: {}", e),
                }
            }
            AppMsg::LoginResolved(attempt, authenticated) => {
                if let LoginOutcome::Success(_) = self.screen.resolve_login(attempt, authenticated)
                {
                    self.reset_login_form();
                }
            }
            AppMsg::LoginDismiss => self.screen.dismiss_login(),
            AppMsg::ConfigReload => self.reload_config(),
        }
    }
}

use std::rc::Rc;

use contracts::shared::user_settings::GlobalParameters;
use contracts::system::auth::{Session, UserInfo};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::shared::graphql::{ApiError, GraphQlTransport, HttpTransport};
use crate::shared::locale::Locale;
use crate::shared::theme::Theme;
use crate::shared::toast::Notifier;

/// Delay between a session-expired error and the forced logout
const FORCED_LOGOUT_DELAY_MS: u32 = 3_000;

/// Application-wide state shared through context.
///
/// Every field is a signal, so the struct is `Copy` and can be captured by
/// any closure. Transports are built on demand from the current session.
#[derive(Clone, Copy)]
pub struct AppState {
    session: RwSignal<Option<Session>>,
    locale: RwSignal<Locale>,
    theme: RwSignal<Theme>,
    menu_collapsed: RwSignal<bool>,
    logout_pending: RwSignal<bool>,
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
            locale: RwSignal::new(Locale::default()),
            theme: RwSignal::new(Theme::default()),
            menu_collapsed: RwSignal::new(false),
            logout_pending: RwSignal::new(false),
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
        }
    }

    // ====== lifecycle ======

    pub fn initialize_on_login(&self, session: Session, params: GlobalParameters) {
        log::info!("session started for {}", session.user.username);
        self.session.set(Some(session));
        self.apply_global_parameters(&params);
        self.logout_pending.set(false);
    }

    /// Reset everything to the signed-out state
    pub fn clear_on_logout(&self) {
        log::info!("session cleared");
        self.session.set(None);
        self.locale.set(Locale::default());
        self.theme.set(Theme::default());
        self.menu_collapsed.set(false);
        self.logout_pending.set(false);
        self.opened.set(vec![]);
        self.active.set(None);
    }

    pub fn apply_global_parameters(&self, params: &GlobalParameters) {
        self.locale.set(Locale::from_tag(&params.lang));
        self.theme.set(Theme::from_tag(&params.theme));
        self.menu_collapsed.set(params.collapse_menu);
    }

    pub fn global_parameters(&self) -> GlobalParameters {
        GlobalParameters {
            lang: self.locale.get_untracked().tag().to_string(),
            theme: self.theme.get_untracked().as_str().to_string(),
            collapse_menu: self.menu_collapsed.get_untracked(),
        }
    }

    // ====== accessors ======

    pub fn is_authenticated(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    pub fn user(&self) -> Option<UserInfo> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    pub fn access_token(&self) -> Option<String> {
        self.session
            .with_untracked(|s| s.as_ref().map(|s| s.access_token.clone()))
    }

    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn set_locale(&self, locale: Locale) {
        self.locale.set(locale);
    }

    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
    }

    pub fn menu_collapsed(&self) -> bool {
        self.menu_collapsed.get()
    }

    pub fn toggle_menu(&self) {
        self.menu_collapsed.update(|val| *val = !*val);
    }

    /// GraphQL transport carrying the current access token
    pub fn transport(&self) -> Rc<dyn GraphQlTransport> {
        Rc::new(HttpTransport::for_session(self.access_token()))
    }

    // ====== errors ======

    /// Toast the error; an expired session also schedules a forced logout.
    pub fn report_error(&self, notifier: &dyn Notifier, err: &ApiError) {
        if err.is_session_expired() {
            if self.logout_pending.get_untracked() {
                return;
            }
            notifier.error("Your session has expired, signing out".to_string());
            self.schedule_forced_logout();
        } else {
            notifier.error(err.to_string());
        }
    }

    fn schedule_forced_logout(&self) {
        self.logout_pending.set(true);
        let this = *self;
        Timeout::new(FORCED_LOGOUT_DELAY_MS, move || {
            crate::system::auth::storage::clear_session();
            this.clear_on_logout();
        })
        .forget();
    }

    // ====== tabs ======

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    pub fn close_tab(&self, key: &str) {
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_state() -> AppState {
    use_context::<AppState>().expect("AppState not provided in context")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

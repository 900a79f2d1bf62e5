//! Theme management.
//!
//! The theme is part of the user's `globalParameters` settings record; the
//! selected value lives in [`AppState`](crate::layout::global_context::AppState)
//! and is applied to the document by [`ThemeApplier`].

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use contracts::shared::user_settings::GLOBAL_PARAMETERS_CODE;

use crate::layout::global_context::use_app_state;
use crate::shared::column_prefs::RemoteSettingsStore;
use crate::shared::toast::use_toasts;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Value stored in `globalParameters.theme` and the `data-theme` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    pub fn css_path(&self) -> &'static str {
        match self {
            Theme::Light => "/static/themes/light/light.css",
            Theme::Dark => "/static/themes/dark/dark.css",
        }
    }

    /// Unknown values fall back to the light theme.
    pub fn from_tag(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Swap the theme stylesheet and set `data-theme` on the body.
fn apply_theme_css(theme: Theme) {
    let document = match window().and_then(|w| w.document()) {
        Some(doc) => doc,
        None => return,
    };

    let head = match document.head() {
        Some(h) => h,
        None => return,
    };

    if let Ok(Some(existing)) = document.query_selector("#theme-stylesheet") {
        existing.remove();
    }

    if let Ok(link) = document.create_element("link") {
        let _ = link.set_attribute("id", "theme-stylesheet");
        let _ = link.set_attribute("rel", "stylesheet");
        let _ = link.set_attribute("href", theme.css_path());
        let _ = head.append_child(&link);
    }

    if let Some(body) = document.body() {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Re-applies the stylesheet whenever the theme signal changes
#[component]
pub fn ThemeApplier() -> impl IntoView {
    let app_state = use_app_state();
    Effect::new(move |_| apply_theme_css(app_state.theme()));
}

/// Header toggle; persists the choice into the user's global parameters
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();

    let on_click = move |_| {
        let next = app_state.theme().toggled();
        app_state.set_theme(next);
        let params = app_state.global_parameters();
        spawn_local(async move {
            let store = RemoteSettingsStore::new(app_state.transport());
            if let Err(e) = store.save_value(GLOBAL_PARAMETERS_CODE, &params).await {
                app_state.report_error(&toasts, &e);
            }
        });
    };

    view! {
        <button class="theme-toggle" on:click=on_click title="Switch theme">
            {move || app_state.theme().toggled().display_name()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_tags() {
        assert_eq!(Theme::from_tag("dark"), Theme::Dark);
        assert_eq!(Theme::from_tag("forest"), Theme::Light);
        assert_eq!(Theme::from_tag(Theme::Dark.as_str()), Theme::Dark);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}

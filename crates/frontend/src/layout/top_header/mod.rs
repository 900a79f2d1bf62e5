//! Top bar: menu toggle, locale and theme switches, user and logout.

use contracts::shared::user_settings::GLOBAL_PARAMETERS_CODE;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::layout::global_context::{use_app_state, AppState};
use crate::shared::column_prefs::RemoteSettingsStore;
use crate::shared::icons::icon;
use crate::shared::locale::Locale;
use crate::shared::theme::ThemeToggle;
use crate::shared::toast::{use_toasts, ToastService};
use crate::system::auth::context::logout;

fn save_global_parameters(app_state: AppState, toasts: ToastService) {
    let params = app_state.global_parameters();
    spawn_local(async move {
        let store = RemoteSettingsStore::new(app_state.transport());
        if let Err(e) = store.save_value(GLOBAL_PARAMETERS_CODE, &params).await {
            app_state.report_error(&toasts, &e);
        }
    });
}

#[component]
pub fn TopHeader() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();

    let on_locale = move |ev| {
        app_state.set_locale(Locale::from_tag(&event_target_value(&ev)));
        save_global_parameters(app_state, toasts);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| {
                        app_state.toggle_menu();
                        save_global_parameters(app_state, toasts);
                    }
                    title=move || if app_state.menu_collapsed() { "Show menu" } else { "Hide menu" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Warehouse console"</span>
            </div>

            <div class="top-header__actions">
                <select
                    class="top-header__locale"
                    on:change=on_locale
                    prop:value=move || app_state.locale().tag()
                >
                    {Locale::all()
                        .into_iter()
                        .map(|locale| view! { <option value=locale.tag()>{locale.display_name()}</option> })
                        .collect_view()}
                </select>

                <ThemeToggle />

                <div class="top-header__user">
                    {icon("user")}
                    <span>{move || app_state.user().map(|u| u.username).unwrap_or_default()}</span>
                </div>

                <button class="top-header__icon-btn" on:click=move |_| logout(app_state) title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

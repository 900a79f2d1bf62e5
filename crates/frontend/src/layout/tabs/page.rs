//! Wrapper of one tab's content; inactive tabs stay mounted but hidden.

use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::{AppState, Tab as TabData};

#[component]
pub fn TabPage(tab: TabData, app_state: AppState) -> impl IntoView {
    let key_for_active = tab.key.clone();
    let is_active = move || app_state.active.get().as_ref() == Some(&key_for_active);

    let content = render_tab_content(&tab.key);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key
        >
            {content}
        </div>
    }
}

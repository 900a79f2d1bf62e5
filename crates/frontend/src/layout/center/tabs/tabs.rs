use leptos::prelude::*;

use super::tab::Tab as TabComponent;
use crate::layout::global_context::{use_app_state, Tab as TabData};
use crate::layout::tabs::TabPage;

/// Tab strip plus the pages of every opened tab
#[component]
pub fn Tabs() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || app_state.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| view! { <TabComponent tab=tab /> }
                />
            </div>
            <div class="tab-content">
                <Show
                    when=move || app_state.opened.with(|tabs| !tabs.is_empty())
                    fallback=|| view! { <div class="placeholder">"Pick a screen in the menu"</div> }
                >
                    <For
                        each=move || app_state.opened.get()
                        key=|tab| tab.key.clone()
                        children=move |tab: TabData| view! { <TabPage tab=tab app_state=app_state /> }
                    />
                </Show>
            </div>
        </div>
    }
}

use leptos::prelude::*;

use crate::layout::global_context::use_app_state;

#[component]
pub fn Left(children: Children) -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <div data-zone="left" class="left" class:left--collapsed=move || app_state.menu_collapsed()>
            {children()}
        </div>
    }
}

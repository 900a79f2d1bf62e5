use leptos::ev;
use leptos::prelude::*;

use crate::layout::global_context::{use_app_state, Tab as TabData};

#[component]
pub fn Tab(tab: TabData) -> impl IntoView {
    let app_state = use_app_state();

    let key_for_active = tab.key.clone();
    let is_active = Memo::new(move |_| app_state.active.get().as_deref() == Some(&key_for_active));

    let key_for_click = tab.key.clone();
    let on_click = move |_| app_state.activate_tab(&key_for_click);

    let key_for_close = tab.key.clone();
    let on_close = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        app_state.close_tab(&key_for_close);
    };

    view! {
        <div class="tab" class:active=is_active on:click=on_click>
            <span>{tab.title}</span>
            <button class="tab-close" on:click=on_close>"×"</button>
        </div>
    }
}

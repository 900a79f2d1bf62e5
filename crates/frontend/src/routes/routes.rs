use leptos::prelude::*;

use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::use_app_state;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::pages::signed_out::SignedOutPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let app_state = use_app_state();

    view! {
        <Show
            when=move || app_state.is_authenticated()
            fallback=|| view! { <SignedOutPage /> }
        >
            <MainLayout />
        </Show>
    }
}

use leptos::prelude::*;

use crate::layout::global_context::AppState;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeApplier;
use crate::shared::toast::{ToastHost, ToastService};
use crate::system::auth::context::SessionBootstrap;

#[component]
pub fn App() -> impl IntoView {
    provide_context(AppState::new());
    provide_context(ToastService::new());

    view! {
        <ThemeApplier />
        <ToastHost />
        <SessionBootstrap>
            <AppRoutes />
        </SessionBootstrap>
    }
}

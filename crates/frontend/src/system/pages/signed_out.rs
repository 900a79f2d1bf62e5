use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::global_context::use_app_state;
use crate::system::auth::context::{start_session, SessionRestoring};
use crate::system::auth::storage;
use crate::shared::toast::use_toasts;

/// Shown while no session is active. Sessions are issued by the sign-in
/// portal, which writes them to local storage.
#[component]
pub fn SignedOutPage() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let restoring = use_context::<SessionRestoring>()
        .expect("SessionRestoring not provided in context")
        .0;
    let checking = RwSignal::new(false);

    let retry = move |_| {
        checking.set(true);
        spawn_local(async move {
            match storage::load_session() {
                Some(session) => start_session(app_state, &toasts, session).await,
                None => log::info!("no stored session"),
            }
            checking.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Warehouse console"</h1>
                <Show
                    when=move || !restoring.get()
                    fallback=|| view! { <Spinner /> }
                >
                    <p>"You are signed out. Sign in through the warehouse portal, then continue."</p>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=retry
                        disabled=Signal::derive(move || checking.get())
                    >
                        "Continue"
                    </Button>
                </Show>
            </div>
        </div>
    }
}

use contracts::shared::user_settings::{GlobalParameters, GLOBAL_PARAMETERS_CODE};
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::storage;
use crate::layout::global_context::{use_app_state, AppState};
use crate::shared::column_prefs::RemoteSettingsStore;
use crate::shared::graphql::{ApiError, HttpTransport};
use crate::shared::toast::{use_toasts, Notifier};
use std::rc::Rc;

/// Global parameters for a fresh session; a missing record means defaults.
pub async fn load_global_parameters(store: &RemoteSettingsStore) -> Result<GlobalParameters, ApiError> {
    Ok(store
        .load_value::<GlobalParameters>(GLOBAL_PARAMETERS_CODE)
        .await?
        .unwrap_or_default())
}

/// Bring the application state up for `session`.
///
/// Settings failures other than an expired session fall back to defaults so
/// the console stays usable.
pub async fn start_session(app_state: AppState, notifier: &dyn Notifier, session: Session) {
    let transport = Rc::new(HttpTransport::for_session(Some(session.access_token.clone())));
    let store = RemoteSettingsStore::new(transport);
    match load_global_parameters(&store).await {
        Ok(params) => app_state.initialize_on_login(session, params),
        Err(e) if e.is_session_expired() => {
            log::warn!("stored session rejected: {}", e);
            storage::clear_session();
        }
        Err(e) => {
            notifier.error(format!("Could not load your settings: {}", e));
            app_state.initialize_on_login(session, GlobalParameters::default());
        }
    }
}

pub fn logout(app_state: AppState) {
    storage::clear_session();
    app_state.clear_on_logout();
}

/// Restores the stored session once on mount
#[component]
pub fn SessionBootstrap(children: Children) -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let restoring = RwSignal::new(true);

    spawn_local(async move {
        if let Some(session) = storage::load_session() {
            start_session(app_state, &toasts, session).await;
        }
        restoring.set(false);
    });

    provide_context(SessionRestoring(restoring.read_only()));
    children()
}

/// Whether the stored session is still being restored
#[derive(Clone, Copy)]
pub struct SessionRestoring(pub ReadSignal<bool>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::graphql::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_missing_record_gives_defaults() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "warehouseWorkerSettings": { "results": [] } })));
        let store = RemoteSettingsStore::new(transport.clone());

        let params = block_on(load_global_parameters(&store)).unwrap();
        assert_eq!(params, GlobalParameters::default());
        assert_eq!(transport.requests.borrow()[0].variables["code"], json!("globalParameters"));
    }

    #[test]
    fn test_stored_parameters_are_used() {
        let transport = Rc::new(ScriptedTransport::default());
        transport.reply(Ok(json!({ "warehouseWorkerSettings": { "results": [
            { "id": "7", "code": "globalParameters", "valueJson": { "lang": "de-DE", "theme": "dark" } }
        ] } })));
        let store = RemoteSettingsStore::new(transport);

        let params = block_on(load_global_parameters(&store)).unwrap();
        assert_eq!(params.lang, "de-DE");
        assert_eq!(params.theme, "dark");
    }
}

use contracts::domain::a008_movement::{MovementInput, CREATE_FUNCTION};
use contracts::shared::location_range::LocationRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::layout::global_context::AppState;
use crate::shared::graphql::{execute_function, ApiError, GraphQlTransport};
use crate::shared::toast::{Notifier, ToastService};

/// ViewModel for the movement form
#[derive(Clone, Copy)]
pub struct MovementFormViewModel {
    pub range: RwSignal<LocationRange>,
    pub final_location: RwSignal<String>,
    pub priority: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl MovementFormViewModel {
    pub fn new() -> Self {
        Self {
            range: RwSignal::new(LocationRange::default()),
            final_location: RwSignal::new(String::new()),
            priority: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        self.range.with(|r| r.block_id.is_some())
            && !self.final_location.with(|f| f.trim().is_empty())
            && !self.submitting.get()
    }

    fn input(&self) -> MovementInput {
        MovementInput {
            range: self.range.get_untracked(),
            final_location: self.final_location.get_untracked(),
            priority: self.priority.get_untracked(),
        }
    }

    /// Build the function event, or put the input error on the form
    pub fn prepare(&self) -> Option<Value> {
        match self.input().to_event() {
            Ok(event) => {
                self.error.set(None);
                Some(event)
            }
            Err(e) => {
                self.error.set(Some(e.to_string()));
                None
            }
        }
    }

    /// `Ok(false)` when the input was rejected before anything was sent.
    pub async fn submit(&self, transport: &dyn GraphQlTransport) -> Result<bool, ApiError> {
        let Some(event) = self.prepare() else {
            return Ok(false);
        };
        self.submitting.set(true);
        let result = execute_function(transport, CREATE_FUNCTION, event).await;
        self.submitting.set(false);
        result.map(|_| true)
    }

    pub fn save_command(&self, app_state: AppState, toasts: ToastService) {
        let vm = *self;
        spawn_local(async move {
            let transport = app_state.transport();
            match vm.submit(transport.as_ref()).await {
                Ok(true) => {
                    toasts.success("Movements created".to_string());
                    vm.final_location.set(String::new());
                    vm.priority.set(String::new());
                }
                Ok(false) => {}
                Err(e) => app_state.report_error(&toasts, &e),
            }
        });
    }
}

impl Default for MovementFormViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::graphql::testing::ScriptedTransport;
    use futures::executor::block_on;
    use serde_json::json;

    #[test]
    fn test_rejected_input_is_not_sent() {
        let vm = MovementFormViewModel::new();
        let transport = ScriptedTransport::default();

        assert_eq!(block_on(vm.submit(&transport)), Ok(false));
        assert_eq!(vm.error.get_untracked().as_deref(), Some("blockId is required"));
        assert!(transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_submit_runs_function() {
        let vm = MovementFormViewModel::new();
        vm.range.set(LocationRange {
            block_id: Some("b1".into()),
            ..Default::default()
        });
        vm.final_location.set("LOC-1".into());
        let transport = ScriptedTransport::default();
        transport.reply(Ok(json!({ "executeFunction": { "status": "OK", "output": {} } })));

        assert_eq!(block_on(vm.submit(&transport)), Ok(true));
        let requests = transport.requests.borrow();
        assert_eq!(requests[0].variables["functionName"], CREATE_FUNCTION);
        assert_eq!(requests[0].variables["event"]["input"]["finalLocationBarcode"], "LOC-1");
        assert!(!vm.submitting.get_untracked());
    }

    #[test]
    fn test_failed_function_reports_message() {
        let vm = MovementFormViewModel::new();
        vm.range.set(LocationRange {
            block_id: Some("b1".into()),
            ..Default::default()
        });
        vm.final_location.set("LOC-1".into());
        let transport = ScriptedTransport::default();
        transport.reply(Ok(json!({
            "executeFunction": { "status": "KO", "output": { "message": "location is full" } }
        })));

        assert_eq!(
            block_on(vm.submit(&transport)),
            Err(ApiError::GraphQl(vec!["location is full".to_string()]))
        );
    }
}

use contracts::domain::a007_cycle_count::{parse_cycle_count_date, CycleCountInput, CREATE_FUNCTION};
use contracts::shared::location_range::LocationRange;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::Value;

use crate::layout::global_context::AppState;
use crate::shared::graphql::{execute_function, ApiError, GraphQlTransport};
use crate::shared::toast::{Notifier, ToastService};

#[derive(Clone, Copy)]
pub struct CycleCountFormViewModel {
    pub name: RwSignal<String>,
    /// Raw `YYYY-MM-DD` input
    pub date: RwSignal<String>,
    pub range: RwSignal<LocationRange>,
    pub error: RwSignal<Option<String>>,
    pub submitting: RwSignal<bool>,
}

impl CycleCountFormViewModel {
    pub fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            date: RwSignal::new(String::new()),
            range: RwSignal::new(LocationRange::default()),
            error: RwSignal::new(None),
            submitting: RwSignal::new(false),
        }
    }

    pub fn is_form_valid(&self) -> bool {
        !self.name.with(|n| n.trim().is_empty())
            && self.range.with(|r| r.block_id.is_some())
            && !self.submitting.get()
    }

    fn build_event(&self) -> Result<Value, String> {
        let cycle_count_date =
            parse_cycle_count_date(&self.date.get_untracked()).map_err(|e| e.to_string())?;
        CycleCountInput {
            name: self.name.get_untracked(),
            cycle_count_date,
            range: self.range.get_untracked(),
        }
        .to_event()
        .map_err(|e| e.to_string())
    }

    pub fn prepare(&self) -> Option<Value> {
        match self.build_event() {
            Ok(event) => {
                self.error.set(None);
                Some(event)
            }
            Err(message) => {
                self.error.set(Some(message));
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
                    toasts.success("Cycle count created".to_string());
                    vm.name.set(String::new());
                    vm.date.set(String::new());
                }
                Ok(false) => {}
                Err(e) => app_state.report_error(&toasts, &e),
            }
        });
    }
}

impl Default for CycleCountFormViewModel {
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

    fn filled() -> CycleCountFormViewModel {
        let vm = CycleCountFormViewModel::new();
        vm.name.set("Weekly A".into());
        vm.range.set(LocationRange {
            block_id: Some("b1".into()),
            ..Default::default()
        });
        vm
    }

    #[test]
    fn test_invalid_date_is_shown_on_form() {
        let vm = filled();
        vm.date.set("tomorrow".into());
        let transport = ScriptedTransport::default();

        assert_eq!(block_on(vm.submit(&transport)), Ok(false));
        assert_eq!(
            vm.error.get_untracked().as_deref(),
            Some("cycleCountDate: invalid date \"tomorrow\"")
        );
        assert!(transport.requests.borrow().is_empty());
    }

    #[test]
    fn test_submit_sends_name_and_date() {
        let vm = filled();
        vm.date.set("2024-06-01".into());
        let transport = ScriptedTransport::default();
        transport.reply(Ok(json!({ "executeFunction": { "status": "ok" } })));

        assert_eq!(block_on(vm.submit(&transport)), Ok(true));
        let requests = transport.requests.borrow();
        let input = &requests[0].variables["event"]["input"];
        assert_eq!(input["name"], "Weekly A");
        assert_eq!(input["cycleCountDate"], "2024-06-01");
        assert_eq!(input["blockId"], "b1");
    }
}

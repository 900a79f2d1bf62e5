//! Tab content registry: maps `tab.key` to its view.

use contracts::domain::registry;
use leptos::logging::log;
use leptos::prelude::*;

use super::tab_labels::{FORM_CYCLE_COUNT, FORM_MOVEMENT, LIST_PREFIX};
use crate::domain::a007_cycle_count::ui::form::CycleCountForm;
use crate::domain::a008_movement::ui::form::MovementForm;
use crate::shared::entity_list::EntityListScreen;

pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        FORM_CYCLE_COUNT => view! { <CycleCountForm /> }.into_any(),
        FORM_MOVEMENT => view! { <MovementForm /> }.into_any(),
        k => match k.strip_prefix(LIST_PREFIX).and_then(registry::find) {
            Some(descriptor) => view! { <EntityListScreen descriptor=descriptor /> }.into_any(),
            None => {
                log!("Unknown tab key: {}", k);
                view! { <div class="placeholder">"Not implemented yet"</div> }.into_any()
            }
        },
    }
}

use leptos::prelude::*;
use thaw::*;

use super::view_model::MovementFormViewModel;
use crate::layout::global_context::use_app_state;
use crate::shared::components::PageHeader;
use crate::shared::location_range::selector::LocationRangeSelector;
use crate::shared::toast::use_toasts;

/// Moves the content of every location in a range to one final location
#[component]
pub fn MovementForm() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let vm = MovementFormViewModel::new();

    view! {
        <div class="details-container movement-form">
            <PageHeader title="Bulk movement".to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.is_form_valid())
                    on_click=move |_| vm.save_command(app_state, toasts)
                >
                    "Create movements"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <LocationRangeSelector value=vm.range />

                <div class="form-group">
                    <label for="final_location">"Final location"</label>
                    <input
                        type="text"
                        id="final_location"
                        prop:value=move || vm.final_location.get()
                        on:input=move |ev| vm.final_location.set(event_target_value(&ev))
                        placeholder="Scan or type a location barcode"
                    />
                </div>

                <div class="form-group">
                    <label for="priority">"Priority"</label>
                    <input
                        type="number"
                        id="priority"
                        min="1"
                        max="5"
                        prop:value=move || vm.priority.get()
                        on:input=move |ev| vm.priority.set(event_target_value(&ev))
                        placeholder="1 (highest) to 5"
                    />
                </div>

                {move || vm.submitting.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
            </div>
        </div>
    }
}

use leptos::prelude::*;
use thaw::*;

use super::view_model::CycleCountFormViewModel;
use crate::layout::global_context::use_app_state;
use crate::shared::components::PageHeader;
use crate::shared::location_range::selector::LocationRangeSelector;
use crate::shared::toast::use_toasts;

#[component]
pub fn CycleCountForm() -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let vm = CycleCountFormViewModel::new();

    view! {
        <div class="details-container cycle-count-form">
            <PageHeader title="New cycle count".to_string()>
                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=Signal::derive(move || !vm.is_form_valid())
                    on_click=move |_| vm.save_command(app_state, toasts)
                >
                    "Create"
                </Button>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="error">{e}</div> })}

            <div class="details-form">
                <div class="form-group">
                    <label for="cycle_count_name">"Name"</label>
                    <input
                        type="text"
                        id="cycle_count_name"
                        prop:value=move || vm.name.get()
                        on:input=move |ev| vm.name.set(event_target_value(&ev))
                    />
                </div>

                <div class="form-group">
                    <label for="cycle_count_date">"Count date"</label>
                    <input
                        type="date"
                        id="cycle_count_date"
                        prop:value=move || vm.date.get()
                        on:input=move |ev| vm.date.set(event_target_value(&ev))
                    />
                </div>

                <LocationRangeSelector value=vm.range />

                {move || vm.submitting.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
            </div>
        </div>
    }
}

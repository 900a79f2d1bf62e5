use contracts::shared::location_range::{LocationAxis, LocationRange, Side, WILDCARD};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;
use thaw::*;

use super::cascade::{AxisState, CascadeEvent, LocationCascade};
use super::options::{resolve_fetch, AxisOptionSource, BlockOption, GraphQlAxisOptions};
use crate::layout::global_context::use_app_state;
use crate::shared::labels::humanize;
use crate::shared::toast::{use_toasts, Notifier};

type SourceHandle = StoredValue<Rc<dyn AxisOptionSource>, LocalStorage>;

/// Apply `event` and run the fetches it asks for; each completion is dispatched
/// back, where the cascade drops it if the axis moved on meanwhile.
fn dispatch(cascade: RwSignal<LocationCascade>, source: SourceHandle, event: CascadeEvent) {
    let transition = cascade.with_untracked(|c| c.apply(event));
    cascade.set(transition.state);

    for fetch in transition.fetches {
        spawn_local(async move {
            let options = source.get_value();
            let event = resolve_fetch(options.as_ref(), &fetch).await;
            dispatch(cascade, source, event);
        });
    }
}

/// Block + aisle/column/level/position for the origin and destination ends
/// of a range. The chosen range is mirrored into `value`.
#[component]
pub fn LocationRangeSelector(value: RwSignal<LocationRange>) -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let options: Rc<dyn AxisOptionSource> =
        Rc::new(GraphQlAxisOptions::new(app_state.transport()));
    let source: SourceHandle = StoredValue::new_local(options);
    let cascade = RwSignal::new(LocationCascade::new());
    let blocks = RwSignal::new(Vec::<BlockOption>::new());

    spawn_local(async move {
        let source = source.get_value();
        match source.blocks().await {
            Ok(list) => blocks.set(list),
            Err(e) => {
                app_state.report_error(&toasts, &e);
            }
        }
    });

    Effect::new(move |_| {
        let range = cascade.with(|c| c.range());
        value.set(range);
    });

    let on_block = move |ev| {
        let block_id = event_target_value(&ev);
        dispatch(
            cascade,
            source,
            CascadeEvent::SelectBlock(Some(block_id).filter(|b| !b.is_empty())),
        );
    };

    let axis_cell = move |side: Side, axis: LocationAxis| {
        let on_change = move |ev| {
            let picked = event_target_value(&ev);
            let event = if picked == WILDCARD {
                CascadeEvent::SelectWildcard { side, axis }
            } else if picked.is_empty() {
                CascadeEvent::Deselect { side, axis }
            } else {
                CascadeEvent::Select {
                    side,
                    axis,
                    value: picked,
                }
            };
            dispatch(cascade, source, event);
        };

        view! {
            <div class="location-range__cell">
                <select
                    class="location-range__select"
                    disabled=move || {
                        cascade.with(|c| {
                            c.block_id().is_none()
                                || c.is_locked(side, axis)
                                || matches!(c.axis(side, axis), AxisState::Loading { .. } | AxisState::Unselected { .. })
                        })
                    }
                    prop:value=move || {
                        cascade.with(|c| c.axis(side, axis).selected().unwrap_or_default().to_string())
                    }
                    on:change=on_change
                >
                    <option value="">"—"</option>
                    <option value=WILDCARD>"* (any)"</option>
                    {move || {
                        cascade.with(|c| {
                            c.axis(side, axis)
                                .options()
                                .iter()
                                .map(|o| view! { <option value=o.clone()>{o.clone()}</option> })
                                .collect_view()
                        })
                    }}
                </select>
                {move || {
                    cascade
                        .with(|c| c.axis(side, axis).is_loading())
                        .then(|| view! { <Spinner size=SpinnerSize::Small /> })
                }}
                {move || {
                    cascade.with(|c| {
                        c.axis(side, axis)
                            .error()
                            .map(|e| view! { <span class="field-error">{e.to_string()}</span> })
                    })
                }}
            </div>
        }
    };

    view! {
        <div class="location-range">
            <div class="location-range__block">
                <Label>"Block"</Label>
                <select class="location-range__select" on:change=on_block>
                    <option value="">"—"</option>
                    {move || {
                        blocks
                            .get()
                            .into_iter()
                            .map(|b| view! { <option value=b.id>{b.name}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <table class="location-range__grid">
                <thead>
                    <tr>
                        <th></th>
                        <th>"From"</th>
                        <th>"To"</th>
                    </tr>
                </thead>
                <tbody>
                    {LocationAxis::ALL
                        .into_iter()
                        .map(|axis| {
                            view! {
                                <tr>
                                    <th>{humanize(axis.field())}</th>
                                    <td>{axis_cell(Side::Origin, axis)}</td>
                                    <td>{axis_cell(Side::Destination, axis)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

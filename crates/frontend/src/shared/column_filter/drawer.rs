use contracts::shared::columns::{ColumnPreference, ColumnSpec};
use leptos::prelude::*;
use thaw::*;

use super::draft::ColumnFilterDraft;

/// Column settings surface of a list screen.
///
/// Edits stay in a local draft. Confirm hands the resulting preference to the
/// caller for persistence; cancel asks the caller to restore descriptor defaults.
#[component]
pub fn TableFilterDrawer(
    open: RwSignal<bool>,
    /// Columns as currently shown
    #[prop(into)]
    columns: Signal<Vec<ColumnSpec>>,
    /// Descriptor-derived defaults
    #[prop(into)]
    defaults: Signal<Vec<ColumnSpec>>,
    on_confirm: Callback<ColumnPreference>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(ColumnFilterDraft::new(
        columns.get_untracked(),
        defaults.get_untracked(),
    ));
    let dragged = RwSignal::new(None::<String>);

    // each opening starts from what the table shows
    Effect::new(move |_| {
        if open.get() {
            draft.set(ColumnFilterDraft::new(
                columns.get_untracked(),
                defaults.get_untracked(),
            ));
        }
    });

    let confirm = move |_| {
        let preference = draft.with_untracked(|d| d.confirm());
        open.set(false);
        on_confirm.run(preference);
    };

    let cancel = move |_| {
        draft.update(|d| d.cancel());
        open.set(false);
        on_cancel.run(());
    };

    let rows = move || {
        draft.with(|d| {
            d.columns()
                .iter()
                .enumerate()
                .map(|(index, column)| {
                    let key_visible = column.key.clone();
                    let key_fixed = column.key.clone();
                    let key_drag = column.key.clone();
                    let visible = !column.hidden;
                    let fixed = column.is_fixed();
                    view! {
                        <div
                            class="column-filter__row"
                            draggable="true"
                            on:dragstart=move |_| dragged.set(Some(key_drag.clone()))
                            on:dragover=move |ev| ev.prevent_default()
                            on:drop=move |ev| {
                                ev.prevent_default();
                                if let Some(from_key) = dragged.get_untracked() {
                                    draft.update(|d| d.move_key(&from_key, index));
                                }
                                dragged.set(None);
                            }
                        >
                            <span class="column-filter__handle">"⋮⋮"</span>
                            <label class="column-filter__label">
                                <input
                                    type="checkbox"
                                    prop:checked=visible
                                    on:change=move |_| draft.update(|d| d.toggle_visibility(&key_visible))
                                />
                                {column.title.clone()}
                            </label>
                            <button
                                class=if fixed { "column-filter__pin column-filter__pin--active" } else { "column-filter__pin" }
                                title="Pin column"
                                on:click=move |_| draft.update(|d| d.toggle_fixed(&key_fixed))
                            >
                                "📌"
                            </button>
                            <button
                                class="column-filter__move"
                                title="Move up"
                                disabled=index == 0
                                on:click=move |_| draft.update(|d| d.move_column(index, index.saturating_sub(1)))
                            >
                                "↑"
                            </button>
                            <button
                                class="column-filter__move"
                                title="Move down"
                                on:click=move |_| draft.update(|d| d.move_column(index, index + 1))
                            >
                                "↓"
                            </button>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Columns"</DialogTitle>
                    <DialogContent>
                        <div class="column-filter table-filter-drawer">{rows}</div>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=confirm>
                            "Save"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=cancel>
                            "Reset to defaults"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

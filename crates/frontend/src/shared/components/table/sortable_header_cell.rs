//! Sortable table header cell
//!
//! ```rust,ignore
//! <SortableHeaderCell
//!     label="Name"
//!     sort_field="name"
//!     sort=Signal::derive(move || current_sort.get())
//!     on_sort=Callback::new(move |(field, multi)| toggle(field, multi))
//! />
//! ```

use contracts::shared::graphql::OrderByItem;
use leptos::ev::MouseEvent;
use leptos::prelude::*;

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};

/// Header cell that reports clicks as `(field, multi)`; shift-click adds the
/// field to a multi-column sort.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,

    #[prop(into)] sort_field: String,

    /// Effective sort of the list
    #[prop(into)]
    sort: Signal<Vec<OrderByItem>>,

    on_sort: Callback<(String, bool)>,

    #[prop(optional)] fixed: bool,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_indicator = sort_field.clone();
    let field_for_class = sort_field;

    let handle_click = move |ev: MouseEvent| {
        on_sort.run((field_for_click.clone(), ev.shift_key()));
    };

    view! {
        <th class="table__header-cell table__header-cell--sortable" class:table__cell--fixed=fixed>
            <div class="table__sortable-header" style="cursor: pointer;" on:click=handle_click>
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &field_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s, &field_for_indicator))}
                </span>
            </div>
        </th>
    }
}

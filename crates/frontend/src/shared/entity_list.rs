//! Generic list screen driven by a model descriptor
//!
//! Columns come from the materializer seeded by the stored preference, rows
//! from [`use_entity_list`]. Column settings are edited in the filter drawer
//! and persisted only on confirm.

use std::collections::HashMap;
use std::rc::Rc;

use contracts::shared::columns::{ColumnPreference, ColumnSpec};
use contracts::shared::document::PrintTarget;
use contracts::shared::metadata::{FieldKind, FilterField, ModelDescriptor};
use contracts::shared::user_settings::GlobalParameters;
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::{Map, Value};
use thaw::*;

use crate::layout::global_context::use_app_state;
use crate::shared::column_filter::TableFilterDrawer;
use crate::shared::column_prefs::{store_for_session, ColumnPreferenceStore, RemoteSettingsStore};
use crate::shared::columns::{cell_value, default_columns, materialize, render_cell, CellView, MaterializedColumns};
use crate::shared::components::table::SortableHeaderCell;
use crate::shared::components::{PageHeader, PaginationControls};
use crate::shared::labels::{humanize, LabelTable};
use crate::shared::list_query::{use_entity_list, ListQuery};
use crate::shared::list_utils::{build_filters, toggle_sort};
use crate::shared::print::PrintButton;
use crate::shared::toast::{use_toasts, Notifier};

type StoreHandle = StoredValue<Rc<dyn ColumnPreferenceStore>, LocalStorage>;

/// Field name sent in `orderBy` for a column: its dotted accessor path
fn sort_field(column: &ColumnSpec) -> String {
    column.data_index.join(".")
}

fn sort_priority(columns: &[ColumnSpec], field: &str) -> Option<u32> {
    columns
        .iter()
        .find(|c| sort_field(c) == field)
        .and_then(|c| c.sorter)
        .map(|s| s.multiple)
}

#[component]
pub fn EntityListScreen(descriptor: &'static ModelDescriptor) -> impl IntoView {
    let defaults = match default_columns(descriptor, &LabelTable::default()) {
        Ok(columns) => columns,
        Err(e) => {
            log::error!("{}", e);
            return view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e.to_string()}</span>
                </div>
            }
            .into_any();
        }
    };

    view! { <EntityTable descriptor=descriptor defaults=defaults /> }.into_any()
}

#[component]
fn EntityTable(descriptor: &'static ModelDescriptor, defaults: Vec<ColumnSpec>) -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();

    let store: StoreHandle = StoredValue::new_local(store_for_session(
        app_state.access_token().map(|_| app_state.transport()),
    ));
    let table_key = StoredValue::new(
        store
            .get_value()
            .table_key(descriptor, descriptor.page_path),
    );
    let defaults = StoredValue::new(defaults);
    let columns = RwSignal::new(defaults.get_value());
    let drawer_open = RwSignal::new(false);
    let query = RwSignal::new(ListQuery::default());
    let print_target = PrintTarget::for_entity(descriptor.entity_name);

    // ====== stored column preference ======

    spawn_local(async move {
        let store = store.get_value();
        match store.load(&table_key.get_value()).await {
            Ok(Some(preference)) => match materialize(descriptor, Some(&preference)) {
                Ok(materialized) => columns.set(materialized.columns),
                Err(e) => log::error!("{}", e),
            },
            Ok(None) => log::debug!("no stored columns for {}", descriptor.entity_name),
            Err(e) => app_state.report_error(&toasts, &e),
        }
    });

    // Sorted so reordering columns does not refetch
    let selection = Memo::new(move |_| {
        let mut selection = columns.with(|c| MaterializedColumns { columns: c.clone() }.selection());
        selection.sort();
        selection
    });

    let list = use_entity_list(descriptor, query.into(), selection.into());

    let display_columns = Memo::new(move |_| {
        columns.with(|c| MaterializedColumns { columns: c.clone() }.display_columns())
    });

    let effective_sort = Signal::derive(move || {
        query.with(|q| {
            q.sort
                .clone()
                .unwrap_or_else(|| vec![descriptor.default_sort.to_order_by()])
        })
    });

    let on_sort = Callback::new(move |(field, multi): (String, bool)| {
        let all_columns = columns.get_untracked();
        query.update(|q| {
            q.sort = toggle_sort(q.sort.as_deref(), &field, multi, |f| {
                sort_priority(&all_columns, f)
            });
            q.page = 1;
        });
    });

    // ====== drawer ======

    let on_confirm = Callback::new(move |preference: ColumnPreference| {
        match materialize(descriptor, Some(&preference)) {
            Ok(materialized) => columns.set(materialized.columns),
            Err(e) => log::error!("{}", e),
        }
        spawn_local(async move {
            let store = store.get_value();
            match store.save(&table_key.get_value(), &preference).await {
                Ok(()) => toasts.success("Column settings saved".to_string()),
                Err(e) => app_state.report_error(&toasts, &e),
            }
        });
    });

    let on_cancel = Callback::new(move |_: ()| columns.set(defaults.get_value()));

    let reset_settings = move |_| {
        spawn_local(async move {
            let store = RemoteSettingsStore::new(app_state.transport());
            match store.reset_all_settings().await {
                Ok(()) => {
                    columns.set(defaults.get_value());
                    app_state.apply_global_parameters(&GlobalParameters::default());
                    toasts.success("Settings reset".to_string());
                }
                Err(e) => app_state.report_error(&toasts, &e),
            }
        });
    };

    // ====== filters ======

    let on_filter = Callback::new(move |filters: Map<String, Value>| {
        query.update(|q| {
            q.filters = filters;
            q.page = 1;
        });
    });

    // ====== table ======

    let header_cells = move || {
        let sort = effective_sort;
        display_columns
            .get()
            .into_iter()
            .map(|column| {
                if column.sorter.is_some() {
                    view! {
                        <SortableHeaderCell
                            label=column.title.clone()
                            sort_field=sort_field(&column)
                            sort=sort
                            on_sort=on_sort
                            fixed=column.is_fixed()
                        />
                    }
                    .into_any()
                } else {
                    view! {
                        <th class="table__header-cell" class:table__cell--fixed=column.is_fixed()>
                            {column.title.clone()}
                        </th>
                    }
                    .into_any()
                }
            })
            .collect_view()
    };

    let body_rows = move || {
        let locale = app_state.locale();
        let shown = display_columns.get();
        let rows = list
            .data
            .with(|d| d.as_ref().map(|page| page.results.clone()).unwrap_or_default());
        rows.into_iter()
            .map(|row| {
                let id = row
                    .get("id")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let cells = shown
                    .iter()
                    .map(|column| {
                        let cell = render_cell(&cell_value(&row, &column.data_index), locale);
                        view! {
                            <td class="table__cell" class:table__cell--fixed=column.is_fixed()>
                                <CellView cell=cell />
                            </td>
                        }
                    })
                    .collect_view();
                let actions = print_target.map(|target| {
                    view! {
                        <td class="table__cell table__cell--actions">
                            <PrintButton target=target id=id.clone() />
                        </td>
                    }
                });
                view! {
                    <tr class="table__row">
                        {cells}
                        {actions}
                    </tr>
                }
            })
            .collect_view()
    };

    let actions_title = print_target.map(|_| ColumnSpec::actions("Actions").title);

    view! {
        <div class="page">
            <PageHeader
                title=humanize(descriptor.resolver_name)
                subtitle=Signal::derive(move || {
                    list.data.with(|d| d.as_ref().map(|page| format!("{} records", page.count)))
                })
            >
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| list.refetch.run(())>
                    "Refresh"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| drawer_open.set(true)>
                    "Columns"
                </Button>
                <Button appearance=ButtonAppearance::Subtle on_click=reset_settings>
                    "Reset settings"
                </Button>
            </PageHeader>

            <FilterBar fields=descriptor.filter_fields on_apply=on_filter />

            {move || list.error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="table" class:table--loading=move || list.is_loading.get()>
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            {header_cells}
                            {actions_title.map(|title| view! {
                                <th class="table__header-cell table__cell--fixed-right">{title}</th>
                            })}
                        </tr>
                    </thead>
                    <tbody>{body_rows}</tbody>
                </table>
            </div>

            <PaginationControls
                current_page=Signal::derive(move || query.with(|q| q.page))
                total_pages=Signal::derive(move || {
                    list.data.with(|d| d.as_ref().map(|page| page.total_pages).unwrap_or(1))
                })
                total_count=Signal::derive(move || {
                    list.data.with(|d| d.as_ref().map(|page| page.count).unwrap_or(0))
                })
                page_size=Signal::derive(move || query.with(|q| q.items_per_page))
                on_page_change=Callback::new(move |page: u32| query.update(|q| q.page = page))
                on_page_size_change=Callback::new(move |size: u32| {
                    query.update(|q| {
                        q.items_per_page = size;
                        q.page = 1;
                    })
                })
            />

            <TableFilterDrawer
                open=drawer_open
                columns=columns
                defaults=Signal::derive(move || defaults.get_value())
                on_confirm=on_confirm
                on_cancel=on_cancel
            />
        </div>
    }
}

/// Filter inputs of a list screen. Invalid input is reported next to its
/// field and the query is left unchanged.
#[component]
fn FilterBar(fields: &'static [FilterField], on_apply: Callback<Map<String, Value>>) -> impl IntoView {
    let raw = RwSignal::new(HashMap::<String, String>::new());
    let errors = RwSignal::new(HashMap::<String, String>::new());
    let labels = LabelTable::default();

    if fields.is_empty() {
        return ().into_any();
    }

    let apply = move |_| {
        let result = raw.with_untracked(|raw| build_filters(fields, raw));
        match result {
            Ok(filters) => {
                errors.set(HashMap::new());
                on_apply.run(filters);
            }
            Err(failed) => errors.set(
                failed
                    .into_iter()
                    .map(|(name, e)| (name, e.to_string()))
                    .collect(),
            ),
        }
    };

    let clear = move |_| {
        raw.set(HashMap::new());
        errors.set(HashMap::new());
        on_apply.run(Map::new());
    };

    let inputs = fields
        .iter()
        .map(|field| {
            let name = field.name;
            let value = move || raw.with(|r| r.get(name).cloned().unwrap_or_default());
            let set = move |v: String| {
                raw.update(|r| {
                    r.insert(name.to_string(), v);
                });
            };
            let input = match field.kind {
                FieldKind::Dropdown { options } => view! {
                    <select class="filter-input" on:change=move |ev| set(event_target_value(&ev)) prop:value=value>
                        <option value="">""</option>
                        {options
                            .iter()
                            .map(|o| view! { <option value=o.value>{labels.text(o.label)}</option> })
                            .collect_view()}
                    </select>
                }
                .into_any(),
                FieldKind::Boolean => view! {
                    <select class="filter-input" on:change=move |ev| set(event_target_value(&ev)) prop:value=value>
                        <option value="">""</option>
                        <option value="true">"Yes"</option>
                        <option value="false">"No"</option>
                    </select>
                }
                .into_any(),
                kind => {
                    let input_type = match kind {
                        FieldKind::Number { .. } => "number",
                        FieldKind::Calendar { with_time: false } => "date",
                        FieldKind::Calendar { with_time: true } => "datetime-local",
                        _ => "text",
                    };
                    view! {
                        <input class="filter-input" type=input_type on:input=move |ev| set(event_target_value(&ev)) prop:value=value />
                    }
                    .into_any()
                }
            };
            view! {
                <div class="form-group">
                    <label>{labels.text(field.label_key)}</label>
                    {input}
                    {move || errors.with(|e| e.get(name).cloned()).map(|message| view! {
                        <span class="form-error">{message}</span>
                    })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="filter-panel">
            <div class="filter-panel__content">{inputs}</div>
            <div class="filter-panel__actions">
                <Button appearance=ButtonAppearance::Primary on_click=apply>"Apply"</Button>
                <Button appearance=ButtonAppearance::Subtle on_click=clear>"Clear"</Button>
            </div>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a005_stock_owner;
    use contracts::shared::graphql::OrderByItem;

    #[test]
    fn test_sort_field_and_priority() {
        let columns = default_columns(&a005_stock_owner::DESCRIPTOR, &LabelTable::default()).unwrap();
        let name = columns.iter().find(|c| c.key == "name").unwrap();
        assert_eq!(sort_field(name), "name");
        assert_eq!(sort_priority(&columns, "name"), Some(0));
        assert_eq!(sort_priority(&columns, "created"), Some(4));
        assert_eq!(sort_priority(&columns, "unknown"), None);

        let order = toggle_sort(None, "city", true, |f| sort_priority(&columns, f));
        assert_eq!(
            order,
            Some(vec![OrderByItem {
                field: "city".into(),
                ascending: true
            }])
        );
    }
}

//! Sidebar with collapsible menu groups

use contracts::domain::{
    a001_article, a002_block, a003_carrier, a004_location, a005_stock_owner,
    a006_purchase_order, a007_cycle_count, a008_movement, a009_stock_status, a010_delivery,
    a011_handling_unit, a012_barcode, a013_handling_unit_type,
};
use leptos::prelude::*;

use crate::layout::global_context::use_app_state;
use crate::layout::tabs::tab_labels::{FORM_CYCLE_COUNT, FORM_MOVEMENT};
use crate::layout::tabs::{list_tab_key, tab_label_for_key};
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    /// Tab keys
    items: Vec<String>,
    admin_only: bool,
}

fn lists(entity_names: &[&str]) -> Vec<String> {
    entity_names.iter().map(|name| list_tab_key(name)).collect()
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "master_data",
            label: "Master data",
            icon: "package",
            items: lists(&[
                a001_article::DESCRIPTOR.entity_name,
                a012_barcode::DESCRIPTOR.entity_name,
                a005_stock_owner::DESCRIPTOR.entity_name,
                a003_carrier::DESCRIPTOR.entity_name,
            ]),
            admin_only: false,
        },
        MenuGroup {
            id: "storage",
            label: "Storage",
            icon: "grid",
            items: lists(&[
                a002_block::DESCRIPTOR.entity_name,
                a004_location::DESCRIPTOR.entity_name,
                a011_handling_unit::DESCRIPTOR.entity_name,
            ]),
            admin_only: false,
        },
        MenuGroup {
            id: "documents",
            label: "Documents",
            icon: "file-text",
            items: lists(&[
                a006_purchase_order::DESCRIPTOR.entity_name,
                a010_delivery::DESCRIPTOR.entity_name,
                a007_cycle_count::DESCRIPTOR.entity_name,
                a008_movement::DESCRIPTOR.entity_name,
            ]),
            admin_only: false,
        },
        MenuGroup {
            id: "operations",
            label: "Operations",
            icon: "shuffle",
            items: vec![FORM_MOVEMENT.to_string(), FORM_CYCLE_COUNT.to_string()],
            admin_only: false,
        },
        MenuGroup {
            id: "parameters",
            label: "Parameters",
            icon: "settings",
            items: lists(&[
                a009_stock_status::DESCRIPTOR.entity_name,
                a013_handling_unit_type::DESCRIPTOR.entity_name,
            ]),
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let app_state = use_app_state();
    let is_admin = app_state.user().map(|u| u.is_admin).unwrap_or(false);
    let expanded_groups = RwSignal::new(Vec::<&'static str>::new());

    view! {
        <div class="app-sidebar__content">
            {get_menu_groups()
                .into_iter()
                .filter(|group| is_admin || !group.admin_only)
                .map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || expanded_groups.with(|g| g.contains(&group_id));
                    let items = StoredValue::new(group.items);
                    view! {
                        <div>
                            <div
                                class="app-sidebar__item"
                                style:padding-left="12px"
                                on:click=move |_| {
                                    expanded_groups.update(|groups| {
                                        if let Some(pos) = groups.iter().position(|g| *g == group_id) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(group_id);
                                        }
                                    })
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span class="app-sidebar__label">{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|key| {
                                            let label = tab_label_for_key(&key);
                                            let label_for_click = label.clone();
                                            let key = StoredValue::new(key);
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        app_state.active.with(|a| a.as_deref() == Some(key.get_value().as_str()))
                                                    }
                                                    style:padding-left="10px"
                                                    on:click=move |_| app_state.open_tab(&key.get_value(), &label_for_click)
                                                >
                                                    <span class="app-sidebar__label">{label}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::registry;

    #[test]
    fn test_every_descriptor_has_a_menu_entry() {
        let keys: Vec<String> = get_menu_groups().into_iter().flat_map(|g| g.items).collect();
        for descriptor in registry::ALL {
            assert!(
                keys.contains(&list_tab_key(descriptor.entity_name)),
                "{} missing from the menu",
                descriptor.entity_name
            );
        }
    }
}

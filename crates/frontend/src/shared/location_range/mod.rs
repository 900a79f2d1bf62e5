//! Cascading location-range selector for movement and cycle-count forms
//!
//! [`cascade::LocationCascade`] is the state machine; [`options`] fetches the
//! distinct axis values; [`selector::LocationRangeSelector`] renders it.

pub mod cascade;
pub mod options;
pub mod selector;

pub use cascade::{
    sort_options, AxisState, CascadeEvent, LocationCascade, OptionFetch, RequestToken, Transition,
};
pub use options::{resolve_fetch, AxisOptionSource, BlockOption, GraphQlAxisOptions};
pub use selector::LocationRangeSelector;

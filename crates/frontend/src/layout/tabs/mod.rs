//! Tab management
//!
//! - `page`: wrapper of a tab's content
//! - `registry`: tab key to view
//! - `tab_labels`: tab keys and titles

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{list_tab_key, tab_label_for_key};

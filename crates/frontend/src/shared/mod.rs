pub mod api_utils;
pub mod column_filter;
pub mod column_prefs;
pub mod columns;
pub mod components;
pub mod date_utils;
pub mod entity_list;
pub mod graphql;
pub mod icons;
pub mod labels;
pub mod list_query;
pub mod list_utils;
pub mod locale;
pub mod location_range;
pub mod number_format;
pub mod print;
pub mod theme;
pub mod toast;

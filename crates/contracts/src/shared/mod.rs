pub mod columns;
pub mod document;
pub mod graphql;
pub mod location_range;
pub mod metadata;
pub mod user_settings;

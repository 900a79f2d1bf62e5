pub mod a001_article;
pub mod a002_block;
pub mod a003_carrier;
pub mod a004_location;
pub mod a005_stock_owner;
pub mod a006_purchase_order;
pub mod a007_cycle_count;
pub mod a008_movement;
pub mod a009_stock_status;
pub mod a010_delivery;
pub mod a011_handling_unit;
pub mod a012_barcode;
pub mod a013_handling_unit_type;
pub mod registry;

pub mod a007_cycle_count;
pub mod a008_movement;

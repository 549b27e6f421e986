pub mod cells;
pub mod toolbar;

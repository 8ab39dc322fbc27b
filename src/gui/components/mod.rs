// src/gui/components/mod.rs
pub mod data_table;
pub mod scrape_bar;
pub mod state_picker;

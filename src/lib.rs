// src/lib.rs

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod gui;
pub mod log;
pub mod progress;
pub mod scrape;
pub mod source;
pub mod specs;
pub mod store;

pub use error::{ Error, Result };

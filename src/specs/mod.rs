// src/specs/mod.rs
//! # Page specs
//!
//! Each spec knows how to read one kind of page on the directory site and
//! nothing else: no browser, no store, no GUI. Input is the document HTML
//! handed back by a [`PageSource`](crate::source::PageSource), output is
//! plain data from [`crate::data`].
//!
//! - [`index`]: the state list; yields absolute detail-page URLs.
//! - [`state_page`]: one state's page; yields the state name and its
//!   library rows.
//!
//! Selectors come from [`TargetOptions`](crate::config::options::TargetOptions),
//! so a markup change on the site is a config change, not a code change.
//! Specs are tested offline against small inline documents.
pub mod index;
pub mod state_page;

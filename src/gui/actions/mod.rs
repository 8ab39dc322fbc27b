// src/gui/actions/mod.rs
//
// Button "executive" actions. Layout stays in components/, the operational
// logic lives here.

mod copy;    // src/gui/actions/copy.rs
mod scrape;  // src/gui/actions/scrape.rs
mod view;    // src/gui/actions/view.rs

pub use copy::copy;
pub use scrape::{ poll_scrape, scrape };
pub use view::{ back, reload_states, view_libraries };

// src/data.rs
//
// Plain records shared by the page specs, the store and the GUI.

use crate::config::consts::{ LIBRARY_COLUMNS, LIBRARY_HEADERS };

/// A row of the `states` table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State {
    pub id: i64,
    pub name: String,
}

/// One library listing. Every field is either the scraped text or "Not Available".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Library {
    pub city: String,
    pub library: String,
    pub address: String,
    pub zip: String,
    pub phone: String,
}

impl Library {
    /// Build from exactly five cell texts, in page column order.
    pub fn from_cells(cells: [String; LIBRARY_COLUMNS]) -> Self {
        let [city, library, address, zip, phone] = cells;
        Self { city, library, address, zip, phone }
    }

    pub fn cells(&self) -> [&str; LIBRARY_COLUMNS] {
        [&self.city, &self.library, &self.address, &self.zip, &self.phone]
    }

    pub fn to_row(&self) -> Vec<String> {
        self.cells().iter().map(|c| s!(*c)).collect()
    }
}

pub fn library_headers() -> Vec<String> {
    LIBRARY_HEADERS.iter().map(|h| s!(*h)).collect()
}

/// Result of reading one state detail page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatePage {
    pub name: String,
    pub libraries: Vec<Library>,
}

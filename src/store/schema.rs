// src/store/schema.rs
//! SQL for the library store. Pure data, no I/O.

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS states (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    state_name TEXT UNIQUE
);

CREATE TABLE IF NOT EXISTS libraries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    state_id INTEGER,
    city TEXT,
    library TEXT,
    address TEXT,
    zip TEXT,
    phone TEXT,
    FOREIGN KEY (state_id) REFERENCES states (id)
);

CREATE TABLE IF NOT EXISTS scrape_meta (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

pub const INSERT_STATE: &str = r#"
INSERT OR IGNORE INTO states (state_name)
VALUES (?1)
"#;

pub const SELECT_STATE_ID: &str = r#"
SELECT id FROM states WHERE state_name = ?1
"#;

pub const SELECT_STATES: &str = r#"
SELECT id, state_name FROM states ORDER BY id
"#;

pub const INSERT_LIBRARY: &str = r#"
INSERT INTO libraries (state_id, city, library, address, zip, phone)
VALUES (?1, ?2, ?3, ?4, ?5, ?6)
"#;

pub const SELECT_LIBRARIES_FOR_STATE: &str = r#"
SELECT libraries.city, libraries.library, libraries.address, libraries.zip, libraries.phone
FROM libraries
JOIN states ON libraries.state_id = states.id
WHERE states.state_name = ?1
ORDER BY libraries.id
"#;

pub const COUNT_STATES: &str = "SELECT COUNT(*) FROM states";
pub const COUNT_LIBRARIES: &str = "SELECT COUNT(*) FROM libraries";

pub const HAS_META_TABLE: &str = r#"
SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'scrape_meta'
"#;

pub const SET_META: &str = r#"
INSERT INTO scrape_meta (key, value) VALUES (?1, ?2)
ON CONFLICT(key) DO UPDATE SET value = excluded.value
"#;

pub const GET_META: &str = "SELECT value FROM scrape_meta WHERE key = ?1";

pub const META_STARTED: &str = "started";
pub const META_COMPLETED: &str = "completed";

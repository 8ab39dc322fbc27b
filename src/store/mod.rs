// src/store/mod.rs
//! SQLite store: `states` and `libraries`, plus a small `scrape_meta`
//! table that tells a finished scrape apart from an interrupted one.
//!
//! Writes for one state (the state row and all its libraries) go through a
//! single transaction, so a state row on disk always comes with its
//! libraries.

mod schema;

use std::path::Path;

use rusqlite::{ Connection, OpenFlags, OptionalExtension, params };

use crate::data::{ Library, State, StatePage };
use crate::error::Result;

/// What the existence guard found at the store location.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreStatus {
    /// No file.
    Missing,
    /// A run started here and never finished.
    Incomplete,
    /// Populated. Also reported for stores without a run marker.
    Complete,
}

/// Plain existence check on the backing file.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref().exists()
}

/// Existence guard. Read-only; never creates the file.
pub fn status<P: AsRef<Path>>(path: P) -> Result<StoreStatus> {
    let path = path.as_ref();
    if !exists(path) {
        return Ok(StoreStatus::Missing);
    }

    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
    let has_meta: i64 = conn.query_row(schema::HAS_META_TABLE, [], |r| r.get(0))?;
    if has_meta == 0 {
        return Ok(StoreStatus::Complete);
    }

    let started = get_meta(&conn, schema::META_STARTED)?.is_some();
    let completed = get_meta(&conn, schema::META_COMPLETED)?.is_some();

    Ok(if started && !completed { StoreStatus::Incomplete } else { StoreStatus::Complete })
}

fn get_meta(conn: &Connection, key: &str) -> Result<Option<String>> {
    Ok(conn.query_row(schema::GET_META, [key], |r| r.get(0)).optional()?)
}

pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open (creating if needed) the store file and its tables.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Self::init(Connection::open(path)?)
    }

    /// Open an existing store for queries only. Never creates files or tables.
    pub fn open_read_only<P: AsRef<Path>>(path: P) -> Result<Self> {
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)?;
        Ok(Self { conn })
    }

    /// In-memory store, for tests.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")?;
        conn.execute_batch(schema::CREATE_TABLES)?;
        Ok(Self { conn })
    }

    pub fn mark_started(&self) -> Result<()> {
        self.conn.execute(schema::SET_META, params![schema::META_STARTED, "1"])?;
        Ok(())
    }

    pub fn mark_completed(&self) -> Result<()> {
        self.conn.execute(schema::SET_META, params![schema::META_COMPLETED, "1"])?;
        Ok(())
    }

    pub fn is_completed(&self) -> Result<bool> {
        Ok(get_meta(&self.conn, schema::META_COMPLETED)?.is_some())
    }

    /// Insert the state if new; return its id either way.
    pub fn upsert_state(&self, name: &str) -> Result<i64> {
        upsert_state(&self.conn, name)
    }

    pub fn state_id(&self, name: &str) -> Result<Option<i64>> {
        Ok(self.conn.query_row(schema::SELECT_STATE_ID, [name], |r| r.get(0)).optional()?)
    }

    /// Persist one state page: upsert the state, append its libraries, commit.
    /// Returns the state id.
    pub fn save_state_page(&mut self, page: &StatePage) -> Result<i64> {
        let tx = self.conn.transaction()?;
        let state_id = upsert_state(&tx, &page.name)?;
        {
            let mut stmt = tx.prepare_cached(schema::INSERT_LIBRARY)?;
            for lib in &page.libraries {
                stmt.execute(params![state_id, lib.city, lib.library, lib.address, lib.zip, lib.phone])?;
            }
        }
        tx.commit()?;
        Ok(state_id)
    }

    pub fn states(&self) -> Result<Vec<State>> {
        let mut stmt = self.conn.prepare(schema::SELECT_STATES)?;
        let rows = stmt.query_map([], |r| Ok(State { id: r.get(0)?, name: r.get(1)? }))?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// State names in insertion order, for the dropdown.
    pub fn state_names(&self) -> Result<Vec<String>> {
        Ok(self.states()?.into_iter().map(|s| s.name).collect())
    }

    pub fn libraries_for(&self, state_name: &str) -> Result<Vec<Library>> {
        let mut stmt = self.conn.prepare(schema::SELECT_LIBRARIES_FOR_STATE)?;
        let rows = stmt.query_map([state_name], |r| {
            Ok(Library {
                city: r.get(0)?,
                library: r.get(1)?,
                address: r.get(2)?,
                zip: r.get(3)?,
                phone: r.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// (states, libraries)
    pub fn counts(&self) -> Result<(usize, usize)> {
        let s: i64 = self.conn.query_row(schema::COUNT_STATES, [], |r| r.get(0))?;
        let l: i64 = self.conn.query_row(schema::COUNT_LIBRARIES, [], |r| r.get(0))?;
        Ok((s as usize, l as usize))
    }
}

fn upsert_state(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute(schema::INSERT_STATE, [name])?;
    Ok(conn.query_row(schema::SELECT_STATE_ID, [name], |r| r.get(0))?)
}

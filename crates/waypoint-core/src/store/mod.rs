//! SQLite-backed plan store.
//!
//! This module is the persistence collaborator of the scheduling engine: the
//! engine itself never touches storage, it only hands new timetable snapshots
//! to whoever owns the plan. Plans live in a single `plans` table with the
//! timetable and cart serialized as JSON columns, replaced wholesale on every
//! write.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod plan_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }
}

//! SQLite mirror of the subsystems that own plan data.
//!
//! This module provides the synchronous storage layer behind
//! [`crate::source::SqliteSource`]. It holds plans, staffing requests,
//! candidates and trainees as reported by their owning subsystems. Derived
//! values (canonical status, metadata, timelines) are never written here.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod import;
pub mod migrations;
pub mod plan_queries;
pub mod subsystem_queries;
pub mod utils;

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
}

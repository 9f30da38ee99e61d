//! Database schema initialization and migrations.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Segments must never outlive their trip
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Databases created before favorites existed lack the column
        let has_favorite_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('trips') WHERE name = 'is_favorite'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .db_context("Failed to inspect trips table")?;

        if !has_favorite_column {
            log::info!("Adding is_favorite column to trips table");
            self.connection
                .execute(
                    "ALTER TABLE trips ADD COLUMN is_favorite INTEGER NOT NULL DEFAULT 0",
                    [],
                )
                .db_context("Failed to add is_favorite column to trips table")?;
        }

        Ok(())
    }
}

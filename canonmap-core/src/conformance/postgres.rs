//! Live PostgreSQL metadata source.
//!
//! Reads column metadata from `information_schema.columns`, the same view
//! a JDBC-style driver consults, so a conformance run sees the type names a
//! real pipeline would see.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::MetadataSource;
use crate::error::{CanonMapError, Result};
use crate::models::{ColumnDescriptor, DialectId};

const COLUMNS_QUERY: &str = r#"
    SELECT
        column_name::text AS column_name,
        data_type::text AS data_type,
        COALESCE(numeric_precision, character_maximum_length, datetime_precision, 0)::int4 AS precision,
        COALESCE(numeric_scale, 0)::int4 AS scale
    FROM information_schema.columns
    WHERE table_name = $1
    AND table_schema = $2
    ORDER BY ordinal_position
"#;

/// PostgreSQL-backed metadata source.
#[derive(Debug, Clone)]
pub struct PostgresMetadataSource {
    pool: PgPool,
    schema: String,
}

impl PostgresMetadataSource {
    /// Wraps an existing pool; tables are looked up in `public`.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            schema: "public".to_string(),
        }
    }

    /// Connects to `database_url`.
    ///
    /// # Errors
    /// Returns a harness error if the connection fails. The URL is not
    /// included in the message.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(2)
            .connect(database_url)
            .await
            .map_err(|e| {
                CanonMapError::harness(format!("Failed to connect to PostgreSQL: {}", e))
            })?;
        Ok(Self::new(pool))
    }

    /// Looks tables up in `schema` instead of `public`.
    pub fn with_schema(mut self, schema: impl Into<String>) -> Self {
        self.schema = schema.into();
        self
    }

    /// Underlying connection pool
    pub const fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl MetadataSource for PostgresMetadataSource {
    fn dialect(&self) -> DialectId {
        DialectId::PostgreSql
    }

    async fn describe_columns(&self, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows = sqlx::query(COLUMNS_QUERY)
            .bind(table)
            .bind(&self.schema)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                CanonMapError::harness(format!(
                    "Failed to read columns for '{}.{}': {}",
                    self.schema, table, e
                ))
            })?;

        if rows.is_empty() {
            return Err(CanonMapError::harness(format!(
                "Table '{}.{}' does not exist or has no columns",
                self.schema, table
            )));
        }

        let mut columns = Vec::with_capacity(rows.len());
        for row in &rows {
            let decode = |e: sqlx::Error| {
                CanonMapError::harness(format!("Malformed column metadata for '{}': {}", table, e))
            };
            let column_name: String = row.try_get("column_name").map_err(decode)?;
            let data_type: String = row.try_get("data_type").map_err(decode)?;
            let precision: i32 = row.try_get("precision").map_err(decode)?;
            let scale: i32 = row.try_get("scale").map_err(decode)?;

            columns.push(ColumnDescriptor::new(data_type, precision, scale, column_name));
        }

        tracing::debug!(
            schema = %self.schema,
            table,
            columns = columns.len(),
            "Described PostgreSQL table"
        );
        Ok(columns)
    }
}

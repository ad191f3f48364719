// devkit-rs: Developer Workflow Utilities
//
// SPDX-FileCopyrightText: 2026 devkit-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Table-to-CSV export.
//!
//! ```text
//! fetch_columns()  information_schema.columns, ordinal order
//! fetch_rows()     SELECT "field"::text, ... FROM "table"
//! write_csv()      header = table columns, one record per row
//! ```
//!
//! The header row always lists the table's full column set, matching the
//! behavior of the exporter this replaces; when `--fields` selects a subset,
//! records are shorter than the header and the writer runs in flexible mode.

use std::path::{Path, PathBuf};

use tokio_postgres::Client;
use tracing::{debug, info};

use crate::error::{DbError, ExportError};

#[cfg(test)]
mod tests;

/// Quotes an SQL identifier (table or column name).
///
/// Identifiers cannot be bound as statement parameters, so they are quoted
/// and embedded directly.
#[must_use]
pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

/// Appends a `.csv` extension when the path has none.
#[must_use]
pub fn ensure_csv_extension(path: &Path) -> PathBuf {
    if path.extension().is_some() {
        path.to_path_buf()
    } else {
        path.with_extension("csv")
    }
}

/// Fetches the table's column names, in ordinal order.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] on query failure.
pub async fn fetch_columns(client: &Client, table: &str) -> Result<Vec<String>, DbError> {
    let rows = client
        .query(
            "SELECT column_name FROM information_schema.columns \
             WHERE table_name = $1 ORDER BY ordinal_position",
            &[&table],
        )
        .await?;

    Ok(rows.iter().map(|row| row.get::<_, String>(0)).collect())
}

/// Fetches the requested fields for every record of the table.
///
/// Each field is cast to text server-side; `NULL` becomes an empty cell.
///
/// # Errors
///
/// Returns [`DbError::Postgres`] on query failure.
pub async fn fetch_rows(
    client: &Client,
    table: &str,
    fields: &[String],
) -> Result<Vec<Vec<String>>, DbError> {
    let select_list = fields
        .iter()
        .map(|f| format!("{}::text", quote_ident(f)))
        .collect::<Vec<_>>()
        .join(", ");
    let query = format!("SELECT {select_list} FROM {}", quote_ident(table));
    debug!(query = %query, "fetching rows");

    let rows = client.query(&query, &[]).await?;

    Ok(rows
        .iter()
        .map(|row| {
            (0..row.len())
                .map(|i| row.get::<_, Option<String>>(i).unwrap_or_default())
                .collect()
        })
        .collect())
}

/// Writes the export to `path`: a header row of column names, then one
/// record per database row.
///
/// # Errors
///
/// Returns [`ExportError::EmptyTable`] when the column list is empty and
/// [`ExportError::Csv`] on writer failure.
pub fn write_csv(
    path: &Path,
    table: &str,
    columns: &[String],
    rows: &[Vec<String>],
) -> Result<(), ExportError> {
    if columns.is_empty() {
        return Err(ExportError::EmptyTable(table.to_string()));
    }

    // Flexible: records may carry fewer cells than the header
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;

    writer.write_record(columns)?;
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush().map_err(csv::Error::from)?;

    info!(
        path = %path.display(),
        rows = rows.len(),
        "table exported"
    );
    Ok(())
}

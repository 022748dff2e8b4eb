//! Text rendering of rows and failures.

use std::fmt;
use std::io::Write;

use crate::api::SearchService;
use crate::api::query::SearchRows;
use crate::error::Error;
use crate::model::KeywordRow;

/// Renders one row as a line of text, without a trailing newline.
///
/// Fields appear in a fixed order: text, match type, criterion type,
/// criterion id, ad group id.
pub fn format_row(row: &KeywordRow) -> String {
    row.to_string()
}

impl fmt::Display for KeywordRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Keyword with text '{}', match type '{}', criteria type '{}', and ID {} \
             was found in ad group with ID {}.",
            self.text(),
            self.match_type(),
            self.criterion_type(),
            self.criterion_id(),
            self.ad_group_id()
        )
    }
}

/// Drains `rows`, writing one line per row in consumption order.
///
/// Returns the number of rows written. Stops at the first error, after
/// everything before it has been written.
pub async fn write_rows<S, W>(rows: &mut SearchRows<'_, S>, out: &mut W) -> Result<usize, Error>
where
    S: SearchService + ?Sized,
    W: Write,
{
    let mut written = 0;
    while let Some(row) = rows.next().await {
        writeln!(out, "{}", format_row(&row?))?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

/// Renders an error as a diagnostic for the user.
///
/// Remote failures list the request id and every underlying error, numbered
/// from zero, one per line.
pub fn failure_summary(error: &Error) -> String {
    let Some(remote) = error.as_remote() else {
        return format!("Error: {}", error);
    };

    let mut summary = match remote.request_id() {
        Some(id) => format!(
            "Request ID {} failed due to a service error. Underlying errors:",
            id
        ),
        None => "Request failed before a request ID was assigned. Underlying errors:".to_string(),
    };
    for (i, detail) in remote.errors().iter().enumerate() {
        summary.push_str(&format!("\n  Error {}: {}", i, detail));
    }
    summary
}

//! Async iterator over keyword rows.

use futures::Stream;

use crate::api::SearchService;
use crate::error::Error;
use crate::model::KeywordRow;
use crate::model::SearchRecord;

use super::Query;
use super::SearchPages;

/// What to do with a record that is not a keyword criterion.
///
/// The query filters on the keyword criterion type, so such records should
/// not occur. Records that are keywords but malformed (missing or
/// non-numeric ids) always fail regardless of policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MismatchPolicy {
    /// Yield [`Error::DataIntegrity`] and end the sequence.
    #[default]
    Fail,
    /// Log a warning and continue with the next record.
    Skip,
}

/// Lazy, single-pass sequence of [`KeywordRow`]s.
///
/// Pages are fetched as earlier ones are exhausted, so pulling a row may wait
/// on a network round trip. Rows come out in service order. The sequence is
/// not restartable; search again to start a new cursor. After the first
/// error the sequence is finished.
///
/// # Example
///
/// ```ignore
/// let mut rows = client.search(query);
///
/// while let Some(row) = rows.next().await {
///     println!("{}", row?);
/// }
/// ```
pub struct SearchRows<'a, S: SearchService + ?Sized> {
    pages: SearchPages<'a, S>,
    buffer: std::vec::IntoIter<SearchRecord>,
    policy: MismatchPolicy,
    skipped: usize,
    failed: bool,
}

impl<'a, S: SearchService + ?Sized> SearchRows<'a, S> {
    /// Creates a row sequence. Nothing is fetched until the first `next`.
    pub fn new(service: &'a S, query: Query) -> Self {
        Self {
            pages: SearchPages::new(service, query),
            buffer: Vec::new().into_iter(),
            policy: MismatchPolicy::default(),
            skipped: 0,
            failed: false,
        }
    }

    /// Sets how non-keyword records are handled.
    pub fn on_mismatch(mut self, policy: MismatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Returns the next row, fetching another page if needed.
    ///
    /// Returns `None` when all rows have been consumed.
    pub async fn next(&mut self) -> Option<Result<KeywordRow, Error>> {
        if self.failed {
            return None;
        }

        loop {
            if let Some(record) = self.buffer.next() {
                if self.policy == MismatchPolicy::Skip && !record.is_keyword() {
                    self.skipped += 1;
                    log::warn!(
                        "Skipping non-keyword row (criterion type {})",
                        record.criterion_type().unwrap_or("<missing>")
                    );
                    continue;
                }
                return match KeywordRow::try_from(record) {
                    Ok(row) => Some(Ok(row)),
                    Err(e) => {
                        self.failed = true;
                        Some(Err(e))
                    }
                };
            }

            match self.pages.next().await? {
                Ok(page) => self.buffer = page.into_records().into_iter(),
                Err(e) => {
                    self.failed = true;
                    return Some(Err(e));
                }
            }
        }
    }

    /// Drains the sequence into a vector, stopping at the first error.
    pub async fn collect(mut self) -> Result<Vec<KeywordRow>, Error> {
        let mut rows = Vec::new();
        while let Some(row) = self.next().await {
            rows.push(row?);
        }
        Ok(rows)
    }

    /// Converts the sequence into a [`Stream`].
    pub fn into_stream(mut self) -> impl Stream<Item = Result<KeywordRow, Error>> + 'a
    where
        S: 'a,
    {
        async_stream::stream! {
            while let Some(row) = self.next().await {
                yield row;
            }
        }
    }

    /// Returns how many page fetches have been issued so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages.pages_fetched()
    }

    /// Returns how many records were skipped under [`MismatchPolicy::Skip`].
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

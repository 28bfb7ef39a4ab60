//! Book model and related request/response types.

use chrono::{DateTime, Duration, Utc};
use rand::{distributions::Alphanumeric, thread_rng, Rng};
use serde::{Deserialize, Serialize};
use serde_json::Number;
use utoipa::{IntoParams, ToSchema};

/// Length of generated book identifiers
pub const BOOK_ID_LENGTH: usize = 16;

/// Generate a random alphanumeric book identifier.
///
/// Uniqueness is probabilistic; the store re-rolls on collision with a live record.
pub fn generate_book_id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(BOOK_ID_LENGTH)
        .map(char::from)
        .collect()
}

/// Stored book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub name: String,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    #[schema(value_type = Option<f64>)]
    pub page_count: Option<Number>,
    #[schema(value_type = Option<f64>)]
    pub read_page: Option<Number>,
    /// Derived: `readPage == pageCount` at last write
    pub finished: bool,
    pub reading: Option<bool>,
    pub inserted_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Book summary returned by the listing endpoint
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BookShort {
    pub id: String,
    pub name: String,
    pub publisher: Option<String>,
}

/// Create/update request body
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookPayload {
    /// Required, must not be empty
    pub name: Option<String>,
    pub year: Option<i32>,
    pub author: Option<String>,
    pub summary: Option<String>,
    pub publisher: Option<String>,
    /// Any JSON number
    #[schema(value_type = Option<f64>)]
    pub page_count: Option<Number>,
    /// Must not exceed `pageCount`
    #[schema(value_type = Option<f64>)]
    pub read_page: Option<Number>,
    pub reading: Option<bool>,
}

/// Book listing query parameters
#[derive(Debug, Clone, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct BookQuery {
    /// Case-insensitive substring of the book name
    pub name: Option<String>,
    /// `1` lists books being read, any other value books not being read
    pub reading: Option<String>,
    /// `1` lists finished books, any other value unfinished ones
    pub finished: Option<String>,
}

/// Numeric value of an optional page field; `100` and `100.0` compare equal.
pub fn page_value(value: Option<&Number>) -> Option<f64> {
    value.and_then(Number::as_f64)
}

fn is_finished(page_count: Option<&Number>, read_page: Option<&Number>) -> bool {
    page_value(page_count) == page_value(read_page)
}

impl Book {
    /// Build a new record from a validated payload.
    pub fn new(id: String, payload: BookPayload, now: DateTime<Utc>) -> Self {
        Self {
            id,
            name: payload.name.unwrap_or_default(),
            year: payload.year,
            author: payload.author,
            summary: payload.summary,
            publisher: payload.publisher,
            finished: is_finished(payload.page_count.as_ref(), payload.read_page.as_ref()),
            page_count: payload.page_count,
            read_page: payload.read_page,
            reading: payload.reading,
            inserted_at: now,
            updated_at: now,
        }
    }

    /// Replace every client-supplied field, keeping `id` and `inserted_at`.
    ///
    /// `updated_at` always moves forward, even when `now` did not.
    pub fn apply_update(&mut self, payload: BookPayload, now: DateTime<Utc>) {
        self.name = payload.name.unwrap_or_default();
        self.year = payload.year;
        self.author = payload.author;
        self.summary = payload.summary;
        self.publisher = payload.publisher;
        self.page_count = payload.page_count;
        self.read_page = payload.read_page;
        self.reading = payload.reading;
        self.finished = is_finished(self.page_count.as_ref(), self.read_page.as_ref());
        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

impl From<&Book> for BookShort {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            name: book.name.clone(),
            publisher: book.publisher.clone(),
        }
    }
}

/// Query flags use `"1"` for true; every other value means false.
fn flag(value: &str) -> bool {
    value == "1"
}

impl BookQuery {
    /// Build from raw query pairs; the first occurrence of a repeated key wins.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "name" => &mut query.name,
                "reading" => &mut query.reading,
                "finished" => &mut query.finished,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// AND of every present predicate; an empty `name` imposes no constraint.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(name) = self.name.as_deref().filter(|n| !n.is_empty()) {
            if !book.name.to_lowercase().contains(&name.to_lowercase()) {
                return false;
            }
        }

        if let Some(reading) = self.reading.as_deref() {
            if book.reading != Some(flag(reading)) {
                return false;
            }
        }

        if let Some(finished) = self.finished.as_deref() {
            if book.finished != flag(finished) {
                return false;
            }
        }

        true
    }
}

//! # Finance book — categories and spending records in local storage
//!
//! The finance tracker has no server: the whole book is one JSON document
//! stored under [`FinanceBook::STORAGE_KEY`] (`"financeiro.state"`).
//!
//! ```json
//! {
//!   "categories": [{ "id": "cat-lazer", "name": "Lazer", "color": "#ff9800" }],
//!   "records": [{
//!     "id": "rec-…", "description": "Streaming", "amount": 39.9,
//!     "date": "2026-10-08T00:00:00Z", "categoryId": "cat-lazer"
//!   }]
//! }
//! ```
//!
//! [`FinanceBook::load`] never fails: a missing document, malformed JSON or a
//! document without categories yields [`FinanceState::seed`]. Every mutating
//! method validates its input, updates the in-memory [`FinanceState`] and
//! writes the full document back.
//!
//! A record's `categoryId` is not checked against the category list; reports
//! skip records whose category no longer exists.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::kv::KeyValueStore;

/// Palette offered when creating a category.
pub const CATEGORY_COLORS: [&str; 7] = [
    "#4caf50", "#2196f3", "#ff9800", "#9c27b0", "#f44336", "#00bcd4", "#795548",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinanceCategory {
    pub id: String,
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinanceRecord {
    pub id: String,
    pub description: String,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub category_id: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinanceState {
    #[serde(default)]
    pub categories: Vec<FinanceCategory>,
    #[serde(default)]
    pub records: Vec<FinanceRecord>,
}

impl FinanceState {
    /// The starter book shown on first use: four categories and three
    /// records dated today, two days ago and ten days ago.
    pub fn seed(now: DateTime<Utc>) -> Self {
        let category = |id: &str, name: &str, color: &str| FinanceCategory {
            id: id.to_string(),
            name: name.to_string(),
            color: color.to_string(),
        };
        let record = |id: &str, description: &str, amount: f64, days_ago: i64, category_id: &str| {
            FinanceRecord {
                id: id.to_string(),
                description: description.to_string(),
                amount,
                date: now - Duration::days(days_ago),
                category_id: category_id.to_string(),
            }
        };

        Self {
            categories: vec![
                category("cat-supermercado", "Supermercado", "#4caf50"),
                category("cat-transporte", "Transporte", "#2196f3"),
                category("cat-lazer", "Lazer", "#ff9800"),
                category("cat-casa", "Casa", "#9c27b0"),
            ],
            records: vec![
                record("rec-1", "Feira do mês", 420.5, 0, "cat-supermercado"),
                record("rec-2", "Uber semana", 96.7, 2, "cat-transporte"),
                record("rec-3", "Streaming", 39.9, 10, "cat-lazer"),
            ],
        }
    }

    pub fn category(&self, id: &str) -> Option<&FinanceCategory> {
        self.categories.iter().find(|c| c.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FinanceError {
    #[error("description is required")]
    EmptyDescription,
    #[error("amount is required")]
    EmptyAmount,
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("category is required")]
    EmptyCategory,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("category name is required")]
    EmptyCategoryName,
    #[error("record not found: {0}")]
    RecordNotFound(String),
}

/// Raw form input for creating or editing a record.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecordDraft {
    pub description: String,
    pub amount: String,
    pub category_id: String,
    /// `YYYY-MM-DD`, as produced by an `<input type="date">`.
    pub date: String,
}

impl RecordDraft {
    /// Prefill a draft for inline editing.
    pub fn from_record(record: &FinanceRecord) -> Self {
        Self {
            description: record.description.clone(),
            amount: record.amount.to_string(),
            category_id: record.category_id.clone(),
            date: record.date.format("%Y-%m-%d").to_string(),
        }
    }

    fn validate(&self) -> Result<ValidDraft, FinanceError> {
        let description = self.description.trim();
        if description.is_empty() {
            return Err(FinanceError::EmptyDescription);
        }

        let amount = self.amount.trim();
        if amount.is_empty() {
            return Err(FinanceError::EmptyAmount);
        }
        let amount: f64 = amount
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| FinanceError::InvalidAmount(self.amount.clone()))?;

        if self.category_id.is_empty() {
            return Err(FinanceError::EmptyCategory);
        }

        Ok(ValidDraft {
            description: description.to_string(),
            amount,
            category_id: self.category_id.clone(),
            date: parse_day(&self.date)?,
        })
    }
}

struct ValidDraft {
    description: String,
    amount: f64,
    category_id: String,
    date: DateTime<Utc>,
}

/// Parse a `YYYY-MM-DD` day as midnight UTC.
pub fn parse_day(input: &str) -> Result<DateTime<Utc>, FinanceError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| FinanceError::InvalidDate(input.to_string()))
}

/// Today's date in the `YYYY-MM-DD` form used by date inputs.
pub fn today(now: DateTime<Utc>) -> String {
    now.format("%Y-%m-%d").to_string()
}

/// Generate a unique id such as `rec-3f2a…`.
pub fn new_id(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}

/// Reads and writes the finance document through a [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct FinanceBook<S> {
    store: S,
}

impl<S: KeyValueStore> FinanceBook<S> {
    pub const STORAGE_KEY: &'static str = "financeiro.state";

    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self, now: DateTime<Utc>) -> FinanceState {
        let Some(raw) = self.store.get(Self::STORAGE_KEY) else {
            return FinanceState::seed(now);
        };
        match serde_json::from_str::<FinanceState>(&raw) {
            Ok(state) if !state.categories.is_empty() => state,
            Ok(_) => FinanceState::seed(now),
            Err(e) => {
                tracing::warn!("Discarding unreadable finance state: {e}");
                FinanceState::seed(now)
            }
        }
    }

    pub fn save(&self, state: &FinanceState) {
        match serde_json::to_string(state) {
            Ok(json) => self.store.set(Self::STORAGE_KEY, &json),
            Err(e) => tracing::error!("Failed to serialize finance state: {e}"),
        }
    }

    /// Validate `draft`, prepend the new record and persist.
    pub fn add_record(
        &self,
        state: &mut FinanceState,
        draft: &RecordDraft,
    ) -> Result<FinanceRecord, FinanceError> {
        let valid = draft.validate()?;
        let record = FinanceRecord {
            id: new_id("rec"),
            description: valid.description,
            amount: valid.amount,
            date: valid.date,
            category_id: valid.category_id,
        };
        state.records.insert(0, record.clone());
        self.save(state);
        Ok(record)
    }

    /// Append a category and persist.
    pub fn add_category(
        &self,
        state: &mut FinanceState,
        name: &str,
        color: &str,
    ) -> Result<FinanceCategory, FinanceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(FinanceError::EmptyCategoryName);
        }
        let category = FinanceCategory {
            id: new_id("cat"),
            name: name.to_string(),
            color: color.to_string(),
        };
        state.categories.push(category.clone());
        self.save(state);
        Ok(category)
    }

    /// Replace the fields of record `id` with `draft` and persist.
    pub fn update_record(
        &self,
        state: &mut FinanceState,
        id: &str,
        draft: &RecordDraft,
    ) -> Result<(), FinanceError> {
        let valid = draft.validate()?;
        let record = state
            .records
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| FinanceError::RecordNotFound(id.to_string()))?;
        record.description = valid.description;
        record.amount = valid.amount;
        record.category_id = valid.category_id;
        record.date = valid.date;
        self.save(state);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 15, 30, 0).unwrap()
    }

    fn draft(description: &str, amount: &str, category_id: &str, date: &str) -> RecordDraft {
        RecordDraft {
            description: description.to_string(),
            amount: amount.to_string(),
            category_id: category_id.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_load_without_document_returns_seed() {
        let book = FinanceBook::new(MemoryStore::new());
        let state = book.load(now());

        assert_eq!(state.categories.len(), 4);
        assert_eq!(state.records.len(), 3);
        assert_eq!(state.records[0].date, now());
        assert_eq!(state.records[2].date, now() - Duration::days(10));
    }

    #[test]
    fn test_load_falls_back_on_bad_documents() {
        let store = MemoryStore::new();
        let book = FinanceBook::new(store.clone());

        store.set(FinanceBook::<MemoryStore>::STORAGE_KEY, "not json");
        assert_eq!(book.load(now()), FinanceState::seed(now()));

        store.set(
            FinanceBook::<MemoryStore>::STORAGE_KEY,
            r#"{"categories":[],"records":[]}"#,
        );
        assert_eq!(book.load(now()), FinanceState::seed(now()));
    }

    #[test]
    fn test_load_reads_browser_written_document() {
        let store = MemoryStore::new();
        store.set(
            "financeiro.state",
            r##"{"categories":[{"id":"cat-a","name":"A","color":"#fff"}],
               "records":[{"id":"rec-1","description":"x","amount":12.5,
                           "date":"2026-10-01T00:00:00.000Z","categoryId":"cat-a"}]}"##,
        );
        let state = FinanceBook::new(store).load(now());

        assert_eq!(state.categories[0].name, "A");
        assert_eq!(state.records[0].amount, 12.5);
        assert_eq!(state.records[0].category_id, "cat-a");
    }

    #[test]
    fn test_add_record_prepends_and_persists() {
        let store = MemoryStore::new();
        let book = FinanceBook::new(store.clone());
        let mut state = book.load(now());

        let record = book
            .add_record(&mut state, &draft("  Mercado  ", "50", "cat-supermercado", "2026-10-18"))
            .unwrap();

        assert!(record.id.starts_with("rec-"));
        assert_eq!(record.description, "Mercado");
        assert_eq!(record.amount, 50.0);
        assert_eq!(state.records[0], record);
        assert_eq!(state.records.len(), 4);

        let reloaded = FinanceBook::new(store).load(now());
        assert_eq!(reloaded, state);
    }

    #[test]
    fn test_add_record_rejects_invalid_input() {
        let book = FinanceBook::new(MemoryStore::new());
        let mut state = book.load(now());

        assert_eq!(
            book.add_record(&mut state, &draft("  ", "1", "cat-lazer", "2026-10-18")),
            Err(FinanceError::EmptyDescription)
        );
        assert_eq!(
            book.add_record(&mut state, &draft("x", "", "cat-lazer", "2026-10-18")),
            Err(FinanceError::EmptyAmount)
        );
        assert!(matches!(
            book.add_record(&mut state, &draft("x", "abc", "cat-lazer", "2026-10-18")),
            Err(FinanceError::InvalidAmount(_))
        ));
        assert_eq!(
            book.add_record(&mut state, &draft("x", "1", "", "2026-10-18")),
            Err(FinanceError::EmptyCategory)
        );
        assert!(matches!(
            book.add_record(&mut state, &draft("x", "1", "cat-lazer", "18/10/2026")),
            Err(FinanceError::InvalidDate(_))
        ));
        assert_eq!(state.records.len(), 3);
    }

    #[test]
    fn test_add_category_appends() {
        let book = FinanceBook::new(MemoryStore::new());
        let mut state = book.load(now());

        let category = book.add_category(&mut state, " Saúde ", CATEGORY_COLORS[4]).unwrap();

        assert!(category.id.starts_with("cat-"));
        assert_eq!(category.name, "Saúde");
        assert_eq!(state.categories.last(), Some(&category));
        assert_eq!(
            book.add_category(&mut state, "   ", "#000"),
            Err(FinanceError::EmptyCategoryName)
        );
    }

    #[test]
    fn test_update_record_replaces_fields() {
        let book = FinanceBook::new(MemoryStore::new());
        let mut state = book.load(now());

        let mut edit = RecordDraft::from_record(&state.records[1]);
        assert_eq!(edit.date, "2026-10-16");
        edit.amount = "100.25".to_string();
        edit.category_id = "cat-casa".to_string();
        book.update_record(&mut state, "rec-2", &edit).unwrap();

        let updated = &state.records[1];
        assert_eq!(updated.id, "rec-2");
        assert_eq!(updated.amount, 100.25);
        assert_eq!(updated.category_id, "cat-casa");
        assert_eq!(updated.date, parse_day("2026-10-16").unwrap());

        assert_eq!(
            book.update_record(&mut state, "missing", &edit),
            Err(FinanceError::RecordNotFound("missing".to_string()))
        );
    }

    #[test]
    fn test_parse_day_is_midnight_utc() {
        let day = parse_day("2026-01-31").unwrap();
        assert_eq!(day, Utc.with_ymd_and_hms(2026, 1, 31, 0, 0, 0).unwrap());
        assert_eq!(today(now()), "2026-10-18");
    }
}

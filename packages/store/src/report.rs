//! Filtering and totals for the finance dashboard.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use crate::finance::{FinanceCategory, FinanceRecord};

/// Look-back window of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    Day,
    Week,
    #[default]
    Month,
}

impl Period {
    pub const ALL: [Period; 3] = [Period::Day, Period::Week, Period::Month];

    pub fn days(self) -> i64 {
        match self {
            Period::Day => 1,
            Period::Week => 7,
            Period::Month => 30,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Period::Day => "Dia",
            Period::Week => "Semana",
            Period::Month => "Mensal",
        }
    }

    /// Records on or after this instant fall inside the period.
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

/// Category selector: every category or a single id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse the value of the category `<select>` (`"all"` or an id).
    pub fn from_value(value: &str) -> Self {
        if value == "all" {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(id) => id,
        }
    }

    fn matches(&self, record: &FinanceRecord) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(id) => &record.category_id == id,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: FinanceCategory,
    pub total: f64,
}

pub fn filter<'a>(
    records: &'a [FinanceRecord],
    period: Period,
    category: &CategoryFilter,
    now: DateTime<Utc>,
) -> Vec<&'a FinanceRecord> {
    let cutoff = period.cutoff(now);
    records
        .iter()
        .filter(|r| r.date >= cutoff && category.matches(r))
        .collect()
}

pub fn total(records: &[&FinanceRecord]) -> f64 {
    records.iter().map(|r| r.amount).sum()
}

/// Sum per category, in category order. Categories without spending and
/// records pointing at unknown categories are left out.
pub fn totals_by_category(
    records: &[&FinanceRecord],
    categories: &[FinanceCategory],
) -> Vec<CategoryTotal> {
    let mut grouped: HashMap<&str, f64> = HashMap::new();
    for record in records {
        *grouped.entry(record.category_id.as_str()).or_default() += record.amount;
    }
    categories
        .iter()
        .filter_map(|category| {
            grouped
                .get(category.id.as_str())
                .filter(|total| **total != 0.0)
                .map(|total| CategoryTotal {
                    category: category.clone(),
                    total: *total,
                })
        })
        .collect()
}

/// Newest first.
pub fn sorted_by_date_desc(records: &[FinanceRecord]) -> Vec<FinanceRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}

/// Format an amount as Brazilian reais, e.g. `R$ 1.234,56`.
pub fn format_brl(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, frac) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}R$ {grouped},{frac:02}")
}

/// Format a date as `dd/mm/yyyy`.
pub fn format_date(date: DateTime<Utc>) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::finance::{parse_day, FinanceBook, FinanceState, RecordDraft};
    use crate::memory::MemoryStore;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 15, 30, 0).unwrap()
    }

    #[test]
    fn test_period_filters_seed_records() {
        let state = FinanceState::seed(now());
        let all = CategoryFilter::All;

        assert_eq!(filter(&state.records, Period::Day, &all, now()).len(), 1);
        assert_eq!(filter(&state.records, Period::Week, &all, now()).len(), 2);
        assert_eq!(filter(&state.records, Period::Month, &all, now()).len(), 3);
    }

    #[test]
    fn test_category_filter() {
        let state = FinanceState::seed(now());
        let only = CategoryFilter::from_value("cat-lazer");

        let matched = filter(&state.records, Period::Month, &only, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].description, "Streaming");
        assert_eq!(CategoryFilter::from_value("all"), CategoryFilter::All);
        assert_eq!(only.value(), "cat-lazer");
    }

    #[test]
    fn test_adding_record_today_raises_day_total() {
        let book = FinanceBook::new(MemoryStore::new());
        let mut state = book.load(now());
        let all = CategoryFilter::All;

        let before = total(&filter(&state.records, Period::Day, &all, now()));
        book.add_record(
            &mut state,
            &RecordDraft {
                description: "Padaria".to_string(),
                amount: "50".to_string(),
                category_id: "cat-supermercado".to_string(),
                date: "2026-10-18".to_string(),
            },
        )
        .unwrap();
        let after = total(&filter(&state.records, Period::Day, &all, now()));

        assert!((after - before - 50.0).abs() < 1e-9);
        assert_eq!(format_brl(after - before), "R$ 50,00");
    }

    #[test]
    fn test_totals_by_category_skips_empty_and_orphans() {
        let mut state = FinanceState::seed(now());
        state.records.push(FinanceRecord {
            id: "rec-x".to_string(),
            description: "orphan".to_string(),
            amount: 10.0,
            date: now(),
            category_id: "cat-gone".to_string(),
        });
        let filtered = filter(&state.records, Period::Month, &CategoryFilter::All, now());

        let totals = totals_by_category(&filtered, &state.categories);
        let names: Vec<&str> = totals.iter().map(|t| t.category.name.as_str()).collect();
        assert_eq!(names, vec!["Supermercado", "Transporte", "Lazer"]);
        assert_eq!(totals[0].total, 420.5);
    }

    #[test]
    fn test_sorted_by_date_desc() {
        let mut records = FinanceState::seed(now()).records;
        records.reverse();
        records[0].date = parse_day("2026-10-17").unwrap();

        let sorted = sorted_by_date_desc(&records);
        let ids: Vec<&str> = sorted.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["rec-1", "rec-3", "rec-2"]);
    }

    #[test]
    fn test_format_brl() {
        assert_eq!(format_brl(0.0), "R$ 0,00");
        assert_eq!(format_brl(39.9), "R$ 39,90");
        assert_eq!(format_brl(1234.5), "R$ 1.234,50");
        assert_eq!(format_brl(1_000_000.0), "R$ 1.000.000,00");
        assert_eq!(format_brl(-12.5), "-R$ 12,50");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(now()), "18/10/2026");
    }
}

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::modules::projects::core::sorting::SortOrder;
use crate::modules::projects::core::time_slot::TimeSlot;

/// Number of slots that carry sample values.
pub const SAMPLED_SLOTS: usize = 5;

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct CategoryValue {
    pub category: i32,
    pub value: f64,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NumericValueResponse {
    pub time_begin: NaiveTime,
    pub time_end: NaiveTime,
    pub date: NaiveDateTime,
    pub values: Vec<CategoryValue>,
}

impl NumericValueResponse {
    pub fn total(&self) -> f64 {
        self.values.iter().map(|v| v.value).sum()
    }
}

fn sample_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 17).unwrap_or(NaiveDate::MIN)
}

/// Sample values for the first slots of the day: category 0 is `15 + 10i`,
/// category 1 is `25 + 5i`.
pub fn sample_values(slots: &[TimeSlot]) -> Vec<NumericValueResponse> {
    slots
        .iter()
        .take(SAMPLED_SLOTS)
        .enumerate()
        .map(|(i, slot)| {
            let i = i as f64;
            NumericValueResponse {
                time_begin: slot.begin,
                time_end: slot.end,
                date: sample_day().and_time(slot.begin),
                values: vec![
                    CategoryValue {
                        category: 0,
                        value: 15.0 + i * 10.0,
                    },
                    CategoryValue {
                        category: 1,
                        value: 25.0 + i * 5.0,
                    },
                ],
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSortKey {
    Time,
    Value,
}

impl ValueSortKey {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "time" => Some(ValueSortKey::Time),
            "value" => Some(ValueSortKey::Value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValuesFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub sort_by: ValueSortKey,
    pub order: SortOrder,
}

impl Default for ValuesFilter {
    fn default() -> Self {
        Self {
            start_date: None,
            end_date: None,
            min_value: None,
            max_value: None,
            sort_by: ValueSortKey::Time,
            order: SortOrder::Asc,
        }
    }
}

impl ValuesFilter {
    fn admits(&self, record: &NumericValueResponse) -> bool {
        let day = record.date.date();
        if self.start_date.is_some_and(|start| day < start) {
            return false;
        }
        if self.end_date.is_some_and(|end| day > end) {
            return false;
        }
        record.values.iter().all(|v| {
            self.min_value.is_none_or(|min| v.value >= min)
                && self.max_value.is_none_or(|max| v.value <= max)
        })
    }

    fn compare(&self, a: &NumericValueResponse, b: &NumericValueResponse) -> Ordering {
        let ordering = match self.sort_by {
            ValueSortKey::Time => a.date.cmp(&b.date),
            ValueSortKey::Value => a.total().total_cmp(&b.total()),
        };
        self.order.apply(ordering)
    }

    pub fn apply(&self, records: Vec<NumericValueResponse>) -> Vec<NumericValueResponse> {
        let mut kept: Vec<_> = records.into_iter().filter(|r| self.admits(r)).collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }
}

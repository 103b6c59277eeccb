use chrono::NaiveTime;
use serde::Serialize;
use thiserror::Error;

use crate::modules::export::core::series::Series;
use crate::modules::projects::core::time_slot::{HOURS_PER_DAY, hour_of_day};

pub const SUPPORTED_PERIODS: [u32; 4] = [1, 3, 6, 12];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error("Aggregation period must be 1, 3, 6, or 12 hours")]
    Unsupported(i64),

    #[error("Aggregation period must be a divisor of 24")]
    NotADivisorOfDay(i64),
}

/// Number of hours folded into one export row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AggregationPeriod(u32);

impl AggregationPeriod {
    pub fn hours(self) -> u32 {
        self.0
    }

    pub fn slots_per_day(self) -> u32 {
        HOURS_PER_DAY / self.0
    }
}

impl Default for AggregationPeriod {
    fn default() -> Self {
        AggregationPeriod(1)
    }
}

impl TryFrom<i64> for AggregationPeriod {
    type Error = AggregationError;

    fn try_from(hours: i64) -> Result<Self, Self::Error> {
        let supported = u32::try_from(hours)
            .ok()
            .filter(|h| SUPPORTED_PERIODS.contains(h))
            .ok_or(AggregationError::Unsupported(hours))?;
        if HOURS_PER_DAY % supported != 0 {
            return Err(AggregationError::NotADivisorOfDay(hours));
        }
        Ok(AggregationPeriod(supported))
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AggregatedRow {
    #[serde(rename = "temps_debut")]
    pub start: NaiveTime,
    #[serde(rename = "temps_fin")]
    pub end: NaiveTime,
    #[serde(rename = "frequentation_restaurant")]
    pub restaurant_frequentation: u64,
    #[serde(rename = "frequentation_cinema")]
    pub cinema_frequentation: u64,
    #[serde(rename = "ventes_food")]
    pub food_sales: u64,
    #[serde(rename = "ventes_ticket")]
    pub ticket_sales: u64,
}

/// One row per bucket; bucket `i` covers `[i*h, (i+1)*h) mod 24`.
pub fn aggregate_day(period: AggregationPeriod) -> Vec<AggregatedRow> {
    let hours = period.hours();
    (0..period.slots_per_day())
        .map(|i| AggregatedRow {
            start: hour_of_day(i * hours),
            end: hour_of_day((i + 1) * hours),
            restaurant_frequentation: Series::RestaurantFrequentation.aggregate(hours),
            cinema_frequentation: Series::CinemaFrequentation.aggregate(hours),
            food_sales: Series::FoodSales.aggregate(hours),
            ticket_sales: Series::TicketSales.aggregate(hours),
        })
        .collect()
}

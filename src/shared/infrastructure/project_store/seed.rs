use chrono::{DateTime, TimeZone, Utc};

use crate::modules::projects::core::indicator::{Indicator, IndicatorCategory};
use crate::modules::projects::core::project::Project;

pub const FREQUENTING_HOURLY_ID: i64 = -63195716;
pub const SALES_HOURLY_ID: i64 = -1497634403;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn venue(id: i64, name: &str, enabled: bool, created_at: DateTime<Utc>) -> Project {
    Project {
        id,
        name: name.to_string(),
        enabled,
        created_at,
        updated_at: utc(2025, 6, 15, 18, 34, 37),
    }
}

pub fn projects() -> Vec<Project> {
    vec![
        venue(-1867723345, "UGC-Nice", true, utc(2025, 1, 12, 12, 30, 0)),
        venue(-98349789, "UGC-Paris", true, utc(2024, 10, 9, 9, 30, 0)),
        venue(-621102575, "UGC-Bordeaux", false, utc(2023, 11, 5, 7, 30, 0)),
        venue(1235778731, "UGC-Nantes", true, utc(2025, 4, 20, 10, 30, 0)),
        venue(-1657654414, "UGC-Plaisir", true, utc(2024, 6, 22, 12, 30, 0)),
        venue(1255500501, "UGC-Marseille", false, utc(2024, 3, 5, 6, 30, 0)),
        venue(-226769007, "UGC-Lyon", true, utc(2025, 3, 17, 11, 30, 0)),
    ]
}

fn indicator(
    id: i64,
    identifier: &str,
    label: &str,
    label_short: &str,
    timeslots: u32,
) -> Indicator {
    Indicator {
        id,
        identifier: identifier.to_string(),
        label: label.to_string(),
        label_short: label_short.to_string(),
        timeslots,
        position: 0,
        asset: None,
    }
}

pub fn indicators() -> Vec<Indicator> {
    vec![
        indicator(FREQUENTING_HOURLY_ID, "frequenting_hourly", "Fréquentation", "Freq.", 24),
        indicator(-381880644, "frequenting", "Fréquentation", "Freq.", 48),
        indicator(SALES_HOURLY_ID, "sales_hourly", "Ventes", "Ventes", 24),
        indicator(1912646392, "sales", "Ventes", "Ventes", 48),
    ]
}

fn category(
    id: i64,
    indicator_id: i64,
    ordinal: i32,
    identifier: &str,
    label: &str,
    (color, color_dark): (&str, &str),
) -> IndicatorCategory {
    IndicatorCategory {
        id,
        indicator_id,
        category: ordinal,
        identifier: identifier.to_string(),
        label: label.to_string(),
        asset_type: None,
        asset_value: None,
        color: color.to_string(),
        color_dark: color_dark.to_string(),
    }
}

pub fn categories() -> Vec<IndicatorCategory> {
    let yellow = ("#fafa48", "#cfcf00");
    let orange = ("#ff9100", "#a66511");
    vec![
        category(-866466122, FREQUENTING_HOURLY_ID, 0, "freq_restaurant", "restaurant", yellow),
        category(-530806305, FREQUENTING_HOURLY_ID, 1, "freq_cinema", "cinema", orange),
        category(-1767294604, SALES_HOURLY_ID, 0, "sales_food", "Food", orange),
        category(1131385352, SALES_HOURLY_ID, 1, "sales_ticket", "Ticket", orange),
    ]
}

use serde::Serialize;

/// A metric tracked per venue, bucketed into `timeslots` per day.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Indicator {
    pub id: i64,
    pub identifier: String,
    pub label: String,
    pub label_short: String,
    pub timeslots: u32,
    pub position: i32,
    pub asset: Option<String>,
}

/// A named sub-series of an indicator, e.g. restaurant vs cinema frequentation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct IndicatorCategory {
    pub id: i64,
    pub indicator_id: i64,
    pub category: i32,
    pub identifier: String,
    pub label: String,
    pub asset_type: Option<String>,
    pub asset_value: Option<String>,
    pub color: String,
    pub color_dark: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ProjectIndicatorDetail {
    pub indicator: Indicator,
    pub categories: Vec<IndicatorCategory>,
}

/// Attach to every indicator the categories that reference it, keeping input order.
pub fn group_categories(
    indicators: Vec<Indicator>,
    categories: &[IndicatorCategory],
) -> Vec<ProjectIndicatorDetail> {
    indicators
        .into_iter()
        .map(|indicator| {
            let categories = categories
                .iter()
                .filter(|c| c.indicator_id == indicator.id)
                .cloned()
                .collect();
            ProjectIndicatorDetail {
                indicator,
                categories,
            }
        })
        .collect()
}

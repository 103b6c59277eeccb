use serde::{Deserialize, Serialize};

use crate::modules::projects::core::indicator::Indicator;
use crate::modules::projects::core::project::Project;
use crate::modules::projects::core::sorting::SortOrder;
use crate::modules::projects::core::time_slot::{TimeSlot, hourly_time_slots};
use crate::modules::projects::core::values::{
    NumericValueResponse, ValueSortKey, ValuesFilter, sample_values,
};
use crate::modules::projects::use_cases::get_project::handler::DETAIL_INDICATORS;
use crate::shared::application::errors::ApplicationError;
use crate::shared::application::query_params::parse_date_range;
use crate::shared::infrastructure::project_store::{IndicatorRepository, ProjectStore};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectValuesQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub min_value: Option<f64>,
    pub max_value: Option<f64>,
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl TryFrom<&ProjectValuesQuery> for ValuesFilter {
    type Error = ApplicationError;

    fn try_from(query: &ProjectValuesQuery) -> Result<Self, Self::Error> {
        let (start_date, end_date) =
            parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

        if let (Some(min), Some(max)) = (query.min_value, query.max_value) {
            if min > max {
                return Err(ApplicationError::InvalidQuery(
                    "min_value must not exceed max_value".into(),
                ));
            }
        }

        let sort_by = match query.sort_by.as_deref() {
            None => ValueSortKey::Time,
            Some(raw) => ValueSortKey::parse(raw).ok_or_else(|| {
                ApplicationError::InvalidQuery("sort_by must be one of: time, value".into())
            })?,
        };

        Ok(ValuesFilter {
            start_date,
            end_date,
            min_value: query.min_value,
            max_value: query.max_value,
            sort_by,
            order: SortOrder::parse(query.order.as_deref()),
        })
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ProjectValuesResponse {
    pub project: Project,
    pub indicators: Vec<Indicator>,
    pub time_slots: Vec<TimeSlot>,
    pub values: Vec<NumericValueResponse>,
}

/// Hourly sample values for an enabled venue, filtered and sorted per query.
pub async fn get_project_values(
    store: &dyn ProjectStore,
    repository: &dyn IndicatorRepository,
    project_id: i64,
    query: &ProjectValuesQuery,
) -> Result<ProjectValuesResponse, ApplicationError> {
    let project = store.get(project_id).await?;
    if !project.enabled {
        return Err(ApplicationError::ProjectDisabled { project_id });
    }
    let filter = ValuesFilter::try_from(query)?;

    let mut indicators = repository.indicators().await?;
    indicators.truncate(DETAIL_INDICATORS);
    let time_slots = hourly_time_slots();
    let values = filter.apply(sample_values(&time_slots));

    Ok(ProjectValuesResponse {
        project,
        indicators,
        time_slots,
        values,
    })
}

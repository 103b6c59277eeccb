use chrono::NaiveDate;
use serde::Deserialize;

use crate::modules::export::core::aggregation::{AggregatedRow, AggregationPeriod, aggregate_day};
use crate::modules::projects::core::project::Project;
use crate::shared::application::errors::ApplicationError;
use crate::shared::application::query_params::parse_date_range;
use crate::shared::infrastructure::project_store::{ProjectStore, StoreError};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExportQuery {
    pub aggregate_hours: Option<i64>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeriodFilters {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Everything a renderer needs to produce one download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectExport {
    pub project: Project,
    pub period: AggregationPeriod,
    pub filters: PeriodFilters,
    pub rows: Vec<AggregatedRow>,
}

impl ProjectExport {
    /// `UGC-Nice` at 6h becomes `UGC_Nice_data_6h_aggregation.<extension>`.
    pub fn filename(&self, extension: &str) -> String {
        format!(
            "{}_data_{}h_aggregation.{extension}",
            self.project.name.replace('-', "_"),
            self.period.hours()
        )
    }
}

/// Validate the request, then build the aggregated day for an enabled venue.
/// The period filters are echoed to the renderers; the synthesized day does
/// not depend on them.
pub async fn prepare_export(
    store: &dyn ProjectStore,
    project_id: i64,
    query: &ExportQuery,
) -> Result<ProjectExport, ApplicationError> {
    let period = match query.aggregate_hours {
        Some(hours) => AggregationPeriod::try_from(hours)?,
        None => AggregationPeriod::default(),
    };
    let (start_date, end_date) =
        parse_date_range(query.start_date.as_deref(), query.end_date.as_deref())?;

    let project = match store.get(project_id).await {
        Ok(project) if project.enabled => project,
        Ok(_) | Err(StoreError::NotFound(_)) => {
            return Err(ApplicationError::ProjectUnavailable { project_id });
        }
        Err(other) => return Err(ApplicationError::Store(other)),
    };

    tracing::info!(project_id, hours = period.hours(), "preparing export");
    Ok(ProjectExport {
        project,
        period,
        filters: PeriodFilters {
            start_date,
            end_date,
        },
        rows: aggregate_day(period),
    })
}

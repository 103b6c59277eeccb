use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::modules::export::core::aggregation::AggregatedRow;
use crate::modules::export::core::series::Series;
use crate::modules::export::use_cases::export_project_data::handler::ProjectExport;
use crate::shared::application::errors::ApplicationError;

#[derive(Serialize)]
struct PeriodFiltersDocument {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

#[derive(Serialize)]
struct ProjectDocument<'a> {
    id: i64,
    name: &'a str,
    export_date: DateTime<Utc>,
    aggregation_hours: u32,
    period_filters: PeriodFiltersDocument,
}

#[derive(Serialize)]
struct MetadataDocument {
    total_records: usize,
    time_slots: usize,
    indicators: Vec<&'static str>,
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    project: ProjectDocument<'a>,
    data: &'a [AggregatedRow],
    metadata: MetadataDocument,
}

/// Pretty-printed `{project, data, metadata}` document.
pub fn render_json(
    export: &ProjectExport,
    exported_at: DateTime<Utc>,
) -> Result<String, ApplicationError> {
    let document = ExportDocument {
        project: ProjectDocument {
            id: export.project.id,
            name: &export.project.name,
            export_date: exported_at,
            aggregation_hours: export.period.hours(),
            period_filters: PeriodFiltersDocument {
                start_date: export.filters.start_date,
                end_date: export.filters.end_date,
            },
        },
        data: &export.rows,
        metadata: MetadataDocument {
            total_records: export.rows.len(),
            time_slots: export.rows.len(),
            indicators: Series::ALL.iter().map(|s| s.column()).collect(),
        },
    };
    serde_json::to_string_pretty(&document)
        .map_err(|e| ApplicationError::Unexpected(format!("json export failed: {e}")))
}

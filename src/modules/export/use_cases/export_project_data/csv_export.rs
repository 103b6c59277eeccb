use csv::{Terminator, WriterBuilder};

use crate::modules::export::use_cases::export_project_data::handler::ProjectExport;
use crate::shared::application::errors::ApplicationError;

fn render_error(err: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::Unexpected(format!("csv export failed: {err}"))
}

/// Header row from the export column names, then one record per bucket.
pub fn render_csv(export: &ProjectExport) -> Result<Vec<u8>, ApplicationError> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(Vec::new());
    for row in &export.rows {
        writer.serialize(row).map_err(render_error)?;
    }
    writer.into_inner().map_err(render_error)
}

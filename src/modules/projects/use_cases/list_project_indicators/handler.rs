use crate::modules::projects::core::indicator::{ProjectIndicatorDetail, group_categories};
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::project_store::{IndicatorRepository, ProjectStore};

/// Every known indicator with its categories. Indicators are not scoped to
/// the venue; the venue only has to exist.
pub async fn list_project_indicators(
    store: &dyn ProjectStore,
    repository: &dyn IndicatorRepository,
    project_id: i64,
) -> Result<Vec<ProjectIndicatorDetail>, ApplicationError> {
    store.get(project_id).await?;
    let indicators = repository.indicators().await?;
    let categories = repository.categories().await?;
    Ok(group_categories(indicators, &categories))
}

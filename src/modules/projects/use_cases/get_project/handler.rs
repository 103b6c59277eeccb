use crate::modules::projects::core::project::ProjectDetail;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::project_store::{IndicatorRepository, ProjectStore};

/// Indicators shown on a venue's detail page.
pub const DETAIL_INDICATORS: usize = 2;

/// Disabled venues are returned with no indicators.
pub async fn get_project(
    store: &dyn ProjectStore,
    indicators: &dyn IndicatorRepository,
    project_id: i64,
) -> Result<ProjectDetail, ApplicationError> {
    let project = store.get(project_id).await?;
    let indicators = if project.enabled {
        let mut all = indicators.indicators().await?;
        all.truncate(DETAIL_INDICATORS);
        all
    } else {
        Vec::new()
    };
    Ok(ProjectDetail {
        project,
        indicators,
    })
}

#[cfg(test)]
mod get_project_handler_tests {
    use super::*;
    use crate::shared::infrastructure::project_store::in_memory::InMemoryProjectStore;
    use crate::tests::fixtures::projects::{
        DISABLED_PROJECT_ID, NICE_PROJECT_ID, UNKNOWN_PROJECT_ID,
    };
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> InMemoryProjectStore {
        InMemoryProjectStore::seeded()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_attach_the_first_two_indicators_to_enabled_projects(
        store: InMemoryProjectStore,
    ) {
        let detail = get_project(&store, &store, NICE_PROJECT_ID).await.unwrap();
        let identifiers: Vec<&str> = detail
            .indicators
            .iter()
            .map(|i| i.identifier.as_str())
            .collect();
        assert_eq!(identifiers, vec!["frequenting_hourly", "frequenting"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_leave_disabled_projects_without_indicators(store: InMemoryProjectStore) {
        let detail = get_project(&store, &store, DISABLED_PROJECT_ID).await.unwrap();
        assert!(!detail.project.enabled);
        assert!(detail.indicators.is_empty());
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_for_unknown_projects(store: InMemoryProjectStore) {
        let result = get_project(&store, &store, UNKNOWN_PROJECT_ID).await;
        assert!(matches!(
            result,
            Err(ApplicationError::ProjectNotFound { project_id: UNKNOWN_PROJECT_ID })
        ));
    }
}

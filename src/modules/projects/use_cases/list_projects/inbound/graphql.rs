use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::projects::core::indicator::Indicator;
use crate::modules::projects::core::project::{Project, ProjectDetail};
use crate::modules::projects::use_cases::get_project::handler::get_project;
use crate::modules::projects::use_cases::list_projects::handler::{ListProjectsQuery, list_projects};
use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProject {
    pub id: i64,
    pub name: String,
    pub enabled: bool,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Project> for GqlProject {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            name: p.name,
            enabled: p.enabled,
            created_at: p.created_at.to_rfc3339(),
            updated_at: p.updated_at.to_rfc3339(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlIndicator {
    pub id: i64,
    pub identifier: String,
    pub label: String,
    pub label_short: String,
    pub timeslots: u32,
    pub position: i32,
}

impl From<Indicator> for GqlIndicator {
    fn from(i: Indicator) -> Self {
        Self {
            id: i.id,
            identifier: i.identifier,
            label: i.label,
            label_short: i.label_short,
            timeslots: i.timeslots,
            position: i.position,
        }
    }
}

/// A project with the indicators shown on its detail page.
#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectDetail {
    #[graphql(flatten)]
    pub project: GqlProject,
    pub indicators: Vec<GqlIndicator>,
}

impl From<ProjectDetail> for GqlProjectDetail {
    fn from(detail: ProjectDetail) -> Self {
        Self {
            project: detail.project.into(),
            indicators: detail.indicators.into_iter().map(Into::into).collect(),
        }
    }
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn projects(
        &self,
        context: &Context<'_>,
        sort_by: Option<String>,
        order: Option<String>,
        enabled_only: Option<bool>,
    ) -> GqlResult<Vec<GqlProject>> {
        let state = context.data_unchecked::<AppState>();
        let query = ListProjectsQuery {
            sort_by,
            order,
            enabled_only,
        };
        let list = list_projects(state.projects.as_ref(), &query)
            .await
            .map_err(to_gql_error)?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn project(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlProjectDetail> {
        let state = context.data_unchecked::<AppState>();
        let detail = get_project(state.projects.as_ref(), state.indicators.as_ref(), id)
            .await
            .map_err(to_gql_error)?;
        Ok(detail.into())
    }
}

use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::graphql::to_gql_error;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlToggleResult {
    pub message: String,
    pub enabled: bool,
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn toggle_project(&self, context: &Context<'_>, id: i64) -> GqlResult<GqlToggleResult> {
        let state = context.data_unchecked::<AppState>();
        let response = state
            .toggle_handler
            .handle(id)
            .await
            .map_err(to_gql_error)?;
        Ok(GqlToggleResult {
            message: response.message,
            enabled: response.enabled,
        })
    }
}

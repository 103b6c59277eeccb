use async_graphql::{EmptySubscription, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

pub use crate::modules::projects::use_cases::list_projects::inbound::graphql::QueryRoot;
pub use crate::modules::projects::use_cases::toggle_project::inbound::graphql::MutationRoot;
use crate::shared::application::errors::ApplicationError;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub const GRAPHQL_PATH: &str = "/gql";

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

/// Same message policy as the HTTP error mapping: server faults stay in the logs.
pub fn to_gql_error(err: ApplicationError) -> async_graphql::Error {
    if err.status_code().is_server_error() {
        tracing::error!(error = %err, "graphql request failed");
        async_graphql::Error::new("Internal server error")
    } else {
        async_graphql::Error::new(err.to_string())
    }
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

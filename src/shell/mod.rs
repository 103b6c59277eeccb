// Composition root for the venue analytics service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into use case handlers.
// - Mount the HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

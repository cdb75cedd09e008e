// Composition root for the users API.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire them into the user service and expose the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;

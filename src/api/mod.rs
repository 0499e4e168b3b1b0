//! HTTP endpoints served by the local callback server during the OAuth flow.
//!
//! Only two routes exist: `/callback`, which receives the authorization code
//! from Spotify and completes the token exchange, and `/health`, a liveness
//! probe useful when debugging the flow.

mod callback;
mod health;

pub use callback::callback;
pub use health::health;

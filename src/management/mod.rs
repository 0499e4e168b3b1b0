//! High-level state management.
//!
//! Currently only token persistence lives here: the access token obtained
//! through the PKCE flow is cached on disk so subsequent invocations can
//! reuse (and refresh) it without another browser round trip.

mod auth;

pub use auth::TokenManager;

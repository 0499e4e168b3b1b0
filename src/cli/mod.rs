//! Command-line interface implementations.
//!
//! One submodule per subcommand. These functions orchestrate the auth flow,
//! the Spotify client layer and the pure filter logic, and own all user
//! facing output; the layers below only return values and errors.

mod auth;
mod generate;
mod playlists;

pub use auth::auth;
pub use generate::generate;
pub use playlists::list_playlists;

//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API used by
//! dancify, handling all HTTP communication, the OAuth 2.0 PKCE flow,
//! and error classification.
//!
//! ## Core Modules
//!
//! - [`auth`] - OAuth 2.0 PKCE flow: authorization URL construction, local
//!   callback handling, token exchange, and token refresh
//! - [`profile`] - Current-user profile and playlist listings
//! - [`tracks`] - Playlist track listings and batched audio features
//! - [`playlist`] - Playlist creation and track insertion
//!
//! All request functions take a bearer token and return
//! `Result<_, ApiError>`; non-success statuses are classified before any
//! deserialization is attempted, so a 4xx/5xx never surfaces as a decode
//! error.

pub mod auth;
pub mod playlist;
pub mod profile;
pub mod tracks;

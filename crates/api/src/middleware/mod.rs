//! Request extractors for authentication.
//!
//! - [`auth::AuthUser`] -- Extracts the authenticated account from a JWT Bearer token.

pub mod auth;

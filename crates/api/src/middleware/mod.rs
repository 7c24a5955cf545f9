//! Authentication middleware and extractor.
//!
//! - [`auth::require_auth`] -- Route-group layer rejecting requests without a valid token.
//! - [`auth::AuthUser`] -- The verified principal, available to handlers as an argument.

pub mod auth;

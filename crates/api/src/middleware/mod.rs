//! Authorization extractors.
//!
//! - [`admin::RequireAdmin`] -- Requires a valid admin session token.
//! - [`admin::MaybeAdmin`] -- Resolves the capability if a valid token is present.

pub mod admin;

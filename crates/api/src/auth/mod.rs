//! Authentication primitives.
//!
//! - [`session`] -- HS256 session-token issue and validation for the admin login.

pub mod session;

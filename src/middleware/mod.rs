//! HTTP middleware components.

/// Token authorization middleware
pub mod auth;

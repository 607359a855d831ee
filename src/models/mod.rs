//! Data models representing database entities and request bodies.

/// Account entity and its request/response shapes
pub mod account;
/// Transfer request
pub mod transfer;

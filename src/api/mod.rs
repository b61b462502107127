//! Endpoint wrappers, one `impl ImClient` block per service area.

pub mod account;
pub mod group;
pub mod message;
pub mod sns;

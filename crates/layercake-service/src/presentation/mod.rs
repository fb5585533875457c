//! HTTP surface: shared envelope and errors, state, versioned routers.

pub mod shared;
pub mod state;
pub mod v1;

//! Service plumbing: settings, logging, DI and middleware.

pub mod config;
pub mod container;
pub mod di;
pub mod logging;
pub mod middleware;

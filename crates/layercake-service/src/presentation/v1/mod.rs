pub mod api;
pub mod endpoints;
pub mod schemas;

pub mod controller;
pub mod endpoints;

pub use endpoints::router;

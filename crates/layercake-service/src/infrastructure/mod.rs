//! Port implementations, one module per resource.

pub mod health;
// layercake:modules

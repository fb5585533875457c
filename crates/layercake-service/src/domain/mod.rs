//! Entities and capability ports, one module per resource.

pub mod health;
// layercake:modules

//! Use cases, DTOs and mappers, one module per resource.

pub mod health;
// layercake:modules

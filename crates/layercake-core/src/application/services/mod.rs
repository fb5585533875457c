//! Application services - orchestrate use cases.
//!
//! `ScaffoldService` drives one resource through plan, stage and commit.

pub mod scaffold_service;

pub use scaffold_service::{
    FileAction, ScaffoldOptions, ScaffoldReport, ScaffoldService, StagedChange,
};

//! layercake core - hexagonal architecture implementation
//!
//! This crate provides the domain and application layers for the layercake
//! resource scaffolder, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          layercake-cli (CLI)            │
//! │       (Implements Driving Ports)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │          Application Services           │
//! │            (ScaffoldService)            │
//! │      plan → stage → commit/rollback     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │    (Driven: Filesystem, Renderer)       │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    layercake-adapters (Infrastructure)  │
//! │  (LocalFilesystem, RustRenderer, etc)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ResourceSpec, ProjectLayout, patches)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use layercake_core::prelude::*;
//!
//! let spec = ResourceSpec::builder()
//!     .name("book")
//!     .endpoint_path("/books")
//!     .fields(parse_fields("title:str,pages:int")?)
//!     .build()?;
//!
//! let service = ScaffoldService::new(renderer, filesystem);
//! let report = service.scaffold(&spec, &ProjectLayout::default(), root, ScaffoldOptions::default())?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        FileAction, ScaffoldOptions, ScaffoldReport, ScaffoldService,
        ports::{ArtifactRenderer, Filesystem},
    };
    pub use crate::domain::{
        ArtifactKind, Component, Field, FieldType, HttpMethod, MethodSet, ProjectLayout,
        RenderContext, ResourceSpec, ResourceSpecBuilder, UseCaseKind, parse_fields,
    };
    pub use crate::error::{LayercakeError, LayercakeResult};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

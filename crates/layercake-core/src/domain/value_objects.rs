//! Domain value objects: HttpMethod, MethodSet, FieldType, Component, Layer, UseCaseKind.
//!
//! # Design
//!
//! These are pure value types: `Copy` where possible, equality-by-value, no
//! identity. Each one knows its string representation and how to parse
//! itself; parsing failures are `DomainError` parameter errors.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── HttpMethod ───────────────────────────────────────────────────────────────

/// An HTTP verb the scaffolder knows how to wire to a use case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub const ALL: [HttpMethod; 4] = [Self::Get, Self::Post, Self::Put, Self::Delete];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "DELETE" => Ok(Self::Delete),
            _ => Err(DomainError::InvalidMethod {
                token: s.trim().to_string(),
            }),
        }
    }
}

// ── MethodSet ────────────────────────────────────────────────────────────────

/// Non-empty set of HTTP methods, kept in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodSet(Vec<HttpMethod>);

impl MethodSet {
    /// Build from already-typed methods. Duplicates collapse; empty input fails.
    pub fn new(methods: impl IntoIterator<Item = HttpMethod>) -> Result<Self, DomainError> {
        let mut out = Vec::with_capacity(4);
        for method in methods {
            if !out.contains(&method) {
                out.push(method);
            }
        }
        if out.is_empty() {
            return Err(DomainError::EmptyMethods);
        }
        Ok(Self(out))
    }

    /// Every supported method, in canonical order.
    pub fn all() -> Self {
        Self(HttpMethod::ALL.to_vec())
    }

    pub fn contains(&self, method: HttpMethod) -> bool {
        self.0.contains(&method)
    }

    pub fn iter(&self) -> impl Iterator<Item = HttpMethod> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Display for MethodSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: Vec<&str> = self.0.iter().map(HttpMethod::as_str).collect();
        f.write_str(&joined.join(","))
    }
}

impl FromStr for MethodSet {
    type Err = DomainError;

    /// Parse a comma separated list such as `"get, POST"`.
    ///
    /// Tokens are trimmed and matched case-insensitively; empty tokens are
    /// skipped. The first unknown token fails the whole parse.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let methods = s
            .split(',')
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(HttpMethod::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(methods)
    }
}

// ── FieldType ────────────────────────────────────────────────────────────────

/// Scalar types a scaffolded field may have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Str,
    Int,
    Float,
    Bool,
}

impl FieldType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }

    /// The Rust type emitted for this field.
    pub const fn rust_type(&self) -> &'static str {
        match self {
            Self::Str => "String",
            Self::Int => "i64",
            Self::Float => "f64",
            Self::Bool => "bool",
        }
    }

    /// Parse an exact type token. `None` for anything outside the allowed set.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "float" => Some(Self::Float),
            "bool" => Some(Self::Bool),
            _ => None,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Layer ────────────────────────────────────────────────────────────────────

/// Architectural layer of the target project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Domain,
    Application,
    Infrastructure,
    Presentation,
}

impl Layer {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "domain",
            Self::Application => "application",
            Self::Infrastructure => "infrastructure",
            Self::Presentation => "presentation",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Component ────────────────────────────────────────────────────────────────

/// Which layers one scaffold invocation generates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Model,
    Usecase,
    Endpoints,
    Adapter,
    #[default]
    Full,
}

impl Component {
    pub const ALL: [Component; 5] = [
        Self::Model,
        Self::Usecase,
        Self::Endpoints,
        Self::Adapter,
        Self::Full,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Model => "model",
            Self::Usecase => "usecase",
            Self::Endpoints => "endpoints",
            Self::Adapter => "adapter",
            Self::Full => "full",
        }
    }

    /// Whether this scope generates files for `layer`.
    pub const fn includes(&self, layer: Layer) -> bool {
        matches!(
            (self, layer),
            (Self::Full, _)
                | (Self::Model, Layer::Domain)
                | (Self::Usecase, Layer::Application)
                | (Self::Adapter, Layer::Infrastructure)
                | (Self::Endpoints, Layer::Presentation)
        )
    }

    /// Whether this scope splices the resource into the registry files.
    pub const fn patches_registries(&self) -> bool {
        matches!(self, Self::Endpoints | Self::Full)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Component {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "model" => Ok(Self::Model),
            "usecase" => Ok(Self::Usecase),
            "endpoints" => Ok(Self::Endpoints),
            "adapter" => Ok(Self::Adapter),
            "full" => Ok(Self::Full),
            _ => Err(DomainError::InvalidComponent {
                value: s.trim().to_string(),
            }),
        }
    }
}

// ── UseCaseKind ──────────────────────────────────────────────────────────────

/// One generated application use case.
///
/// GET yields both `List` and `Get`; every other method yields one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseKind {
    List,
    Get,
    Create,
    Update,
    Delete,
}

impl UseCaseKind {
    pub const ALL: [UseCaseKind; 5] = [
        Self::List,
        Self::Get,
        Self::Create,
        Self::Update,
        Self::Delete,
    ];

    /// Lowercase verb used in file and function names (`list_book`).
    pub const fn verb(&self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Get => "get",
            Self::Create => "create",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    /// Type-name prefix (`ListBookUseCase`).
    pub const fn type_prefix(&self) -> &'static str {
        match self {
            Self::List => "List",
            Self::Get => "Get",
            Self::Create => "Create",
            Self::Update => "Update",
            Self::Delete => "Delete",
        }
    }

    pub const fn method(&self) -> HttpMethod {
        match self {
            Self::List | Self::Get => HttpMethod::Get,
            Self::Create => HttpMethod::Post,
            Self::Update => HttpMethod::Put,
            Self::Delete => HttpMethod::Delete,
        }
    }

    /// Whether the route carries an `{identifier}` path segment.
    pub const fn targets_item(&self) -> bool {
        matches!(self, Self::Get | Self::Update | Self::Delete)
    }

    /// Use cases implied by a method set, in canonical order.
    pub fn for_methods(methods: &MethodSet) -> Vec<UseCaseKind> {
        Self::ALL
            .into_iter()
            .filter(|kind| methods.contains(kind.method()))
            .collect()
    }
}

impl fmt::Display for UseCaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

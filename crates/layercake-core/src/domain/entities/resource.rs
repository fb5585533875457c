//! `ResourceSpec`: the validated description of one CRUD vertical slice.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::{
    error::DomainError,
    fields::Field,
    naming::{identifier_problem, to_pascal, to_snake},
    value_objects::{Component, MethodSet, UseCaseKind},
};

/// Everything the emitter needs to generate a resource.
///
/// Only constructible through [`ResourceSpecBuilder::build`], which enforces:
/// - the snake identifier is a non-empty, non-keyword Rust identifier
/// - the pascal identifier is derived from the snake identifier
/// - the method set is non-empty (guaranteed by `MethodSet`)
/// - field names are valid identifiers, unique, and never `id`
/// - the endpoint path starts with `/` and has no trailing `/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceSpec {
    raw_name: String,
    snake: String,
    pascal: String,
    endpoint_path: String,
    methods: MethodSet,
    fields: Vec<Field>,
    component: Component,
}

impl ResourceSpec {
    pub fn builder() -> ResourceSpecBuilder {
        ResourceSpecBuilder::default()
    }

    pub fn raw_name(&self) -> &str {
        &self.raw_name
    }

    /// Module / file identifier, e.g. `book_shelf`.
    pub fn snake(&self) -> &str {
        &self.snake
    }

    /// Type identifier, e.g. `BookShelf`.
    pub fn pascal(&self) -> &str {
        &self.pascal
    }

    /// Collection route, e.g. `/books`.
    pub fn endpoint_path(&self) -> &str {
        &self.endpoint_path
    }

    /// Single-item route, e.g. `/books/{identifier}`.
    pub fn item_path(&self) -> String {
        format!("{}/{{identifier}}", self.endpoint_path)
    }

    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn component(&self) -> Component {
        self.component
    }

    /// Use cases implied by the method set, in canonical order.
    pub fn use_cases(&self) -> Vec<UseCaseKind> {
        UseCaseKind::for_methods(&self.methods)
    }

    /// Type name of the generated in-memory adapter. Doubles as the
    /// dependency registry marker.
    pub fn adapter_type(&self) -> String {
        format!("InMemory{}Adapter", self.pascal)
    }

    /// Type name of a generated use case, e.g. `ListBookUseCase`.
    pub fn use_case_type(&self, kind: UseCaseKind) -> String {
        format!("{}{}UseCase", kind.type_prefix(), self.pascal)
    }
}

/// Builder for [`ResourceSpec`].
///
/// Methods default to all four verbs, fields to none and the component to
/// `full`. Name and path are required.
#[derive(Debug, Clone, Default)]
pub struct ResourceSpecBuilder {
    name: Option<String>,
    endpoint_path: Option<String>,
    methods: Option<MethodSet>,
    fields: Vec<Field>,
    component: Component,
}

impl ResourceSpecBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn endpoint_path(mut self, path: impl Into<String>) -> Self {
        self.endpoint_path = Some(path.into());
        self
    }

    pub fn methods(mut self, methods: MethodSet) -> Self {
        self.methods = Some(methods);
        self
    }

    pub fn fields(mut self, fields: Vec<Field>) -> Self {
        self.fields = fields;
        self
    }

    pub fn component(mut self, component: Component) -> Self {
        self.component = component;
        self
    }

    pub fn build(self) -> Result<ResourceSpec, DomainError> {
        let raw_name = self
            .name
            .ok_or(DomainError::MissingRequiredField { field: "resource" })?;
        let snake = to_snake(&raw_name);
        if let Some(reason) = identifier_problem(&snake) {
            return Err(DomainError::InvalidResourceName {
                name: raw_name,
                reason: reason.into(),
            });
        }
        let pascal = to_pascal(&snake);

        let endpoint_path = normalize_endpoint_path(
            &self
                .endpoint_path
                .ok_or(DomainError::MissingRequiredField { field: "path" })?,
        )?;

        validate_fields(&self.fields)?;

        Ok(ResourceSpec {
            raw_name,
            snake,
            pascal,
            endpoint_path,
            methods: self.methods.unwrap_or_default(),
            fields: self.fields,
            component: self.component,
        })
    }
}

fn validate_fields(fields: &[Field]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for field in fields {
        if let Some(reason) = identifier_problem(&field.name) {
            return Err(DomainError::InvalidFieldName {
                name: field.name.clone(),
                reason: reason.into(),
            });
        }
        if field.name == "id" {
            return Err(DomainError::InvalidFieldName {
                name: field.name.clone(),
                reason: "reserved for the generated identifier".into(),
            });
        }
        if !seen.insert(field.name.as_str()) {
            return Err(DomainError::DuplicateField {
                name: field.name.clone(),
            });
        }
    }
    Ok(())
}

/// Ensure a leading `/`, drop trailing `/`, and reject characters that
/// cannot appear in a generated route literal.
fn normalize_endpoint_path(raw: &str) -> Result<String, DomainError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| DomainError::InvalidEndpointPath {
        path: raw.to_string(),
        reason: reason.to_string(),
    };

    if trimmed.is_empty() {
        return Err(invalid("path is empty"));
    }
    if let Some(bad) = trimmed
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '/' | '-' | '_' | '.' | '~')))
    {
        return Err(invalid(&format!("unexpected character '{bad}'")));
    }
    if trimmed.contains("//") {
        return Err(invalid("empty path segment"));
    }

    // Every resource needs its own prefix; two routers merged at `/` collide.
    let body = trimmed.trim_matches('/');
    if body.is_empty() {
        return Err(invalid("path has no segment"));
    }
    Ok(format!("/{body}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{FieldType, HttpMethod};

    fn book() -> ResourceSpecBuilder {
        ResourceSpec::builder().name("book").endpoint_path("/books")
    }

    #[test]
    fn derives_identifiers_from_raw_name() {
        let spec = ResourceSpec::builder()
            .name("MyBook")
            .endpoint_path("my-books")
            .build()
            .unwrap();
        assert_eq!(spec.snake(), "my_book");
        assert_eq!(spec.pascal(), "MyBook");
        assert_eq!(spec.raw_name(), "MyBook");
        assert_eq!(spec.endpoint_path(), "/my-books");
        assert_eq!(spec.item_path(), "/my-books/{identifier}");
        assert_eq!(spec.adapter_type(), "InMemoryMyBookAdapter");
    }

    #[test]
    fn defaults_to_all_methods_and_full_component() {
        let spec = book().build().unwrap();
        assert_eq!(spec.methods(), &MethodSet::all());
        assert_eq!(spec.component(), Component::Full);
        assert_eq!(spec.use_cases(), UseCaseKind::ALL.to_vec());
    }

    #[test]
    fn get_and_post_yield_three_use_cases() {
        let spec = book()
            .methods(MethodSet::new([HttpMethod::Post, HttpMethod::Get]).unwrap())
            .build()
            .unwrap();
        assert_eq!(
            spec.use_cases(),
            vec![UseCaseKind::List, UseCaseKind::Get, UseCaseKind::Create]
        );
        assert_eq!(spec.use_case_type(UseCaseKind::Create), "CreateBookUseCase");
    }

    #[test]
    fn missing_name_or_path_is_rejected() {
        let err = ResourceSpec::builder().endpoint_path("/x").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "resource" });
        let err = ResourceSpec::builder().name("x").build().unwrap_err();
        assert_eq!(err, DomainError::MissingRequiredField { field: "path" });
    }

    #[test]
    fn rejects_names_that_are_not_identifiers() {
        for name in ["", "   ", "9lives", "my.book", "type"] {
            let err = ResourceSpec::builder()
                .name(name)
                .endpoint_path("/x")
                .build()
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidResourceName { .. }),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn rejects_id_keyword_and_duplicate_fields() {
        let id = book()
            .fields(vec![Field::new("id", FieldType::Int)])
            .build()
            .unwrap_err();
        assert!(matches!(id, DomainError::InvalidFieldName { .. }));

        let kw = book()
            .fields(vec![Field::new("type", FieldType::Str)])
            .build()
            .unwrap_err();
        assert!(matches!(kw, DomainError::InvalidFieldName { .. }));

        let dup = book()
            .fields(vec![
                Field::new("title", FieldType::Str),
                Field::new("title", FieldType::Str),
            ])
            .build()
            .unwrap_err();
        assert_eq!(
            dup,
            DomainError::DuplicateField {
                name: "title".into()
            }
        );
    }

    #[test]
    fn endpoint_paths_are_normalized() {
        assert_eq!(normalize_endpoint_path("books").unwrap(), "/books");
        assert_eq!(normalize_endpoint_path("/books/").unwrap(), "/books");
        assert_eq!(normalize_endpoint_path(" /a/b ").unwrap(), "/a/b");
    }

    #[test]
    fn endpoint_paths_with_odd_characters_are_rejected() {
        assert!(normalize_endpoint_path("").is_err());
        assert!(normalize_endpoint_path("/books/{id}").is_err());
        assert!(normalize_endpoint_path("/bo oks").is_err());
        assert!(normalize_endpoint_path("/a//b").is_err());
        assert!(normalize_endpoint_path("/\"x").is_err());
    }

    #[test]
    fn bare_slash_is_rejected() {
        for raw in ["/", " / ", "///"] {
            let err = ResourceSpec::builder()
                .name("thing")
                .endpoint_path(raw)
                .build()
                .unwrap_err();
            assert!(
                matches!(err, DomainError::InvalidEndpointPath { .. }),
                "{raw:?}: {err:?}"
            );
        }
        assert_eq!(book().build().unwrap().item_path(), "/books/{identifier}");
    }
}

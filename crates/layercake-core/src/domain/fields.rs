//! Field list parsing (`"title:str, pages:int"`).

use serde::Serialize;

use crate::domain::{error::DomainError, naming::to_snake, value_objects::FieldType};

/// One declared attribute of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    /// snake_case name.
    pub name: String,
    pub ty: FieldType,
}

impl Field {
    pub fn new(name: impl Into<String>, ty: FieldType) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// Parse a comma separated `name:type` list.
///
/// Segments are trimmed and empty ones skipped. Each name is normalized with
/// [`to_snake`]; each type must be one of `str`, `int`, `float`, `bool`.
/// Order is preserved and duplicates are kept; uniqueness is enforced later
/// when the `ResourceSpec` is built.
pub fn parse_fields(input: &str) -> Result<Vec<Field>, DomainError> {
    let mut fields = Vec::new();

    for segment in input.split(',').map(str::trim) {
        if segment.is_empty() {
            continue;
        }

        let Some((name, ty)) = segment.split_once(':') else {
            return Err(DomainError::InvalidFieldFormat {
                segment: segment.to_string(),
            });
        };

        let name = to_snake(name.trim());
        let ty = ty.trim();
        let ty = FieldType::from_token(ty).ok_or_else(|| DomainError::InvalidFieldType {
            field: name.clone(),
            ty: ty.to_string(),
        })?;

        fields.push(Field::new(name, ty));
    }

    Ok(fields)
}

//! Built-in Rust templates for generated artifacts.
//!
//! Every template is rendered through a `RenderContext`; see
//! `layercake_core::domain::render` for the standard variables. Blocks named
//! in `{{UPPER_CASE}}` that are not standard are filled in by
//! [`super::RustRenderer`].

// ── Domain ────────────────────────────────────────────────────────────────────

pub const DOMAIN_MODULE: &str = r#"pub mod entities;
pub mod ports;

pub use entities::{{RESOURCE_PASCAL}};
pub use ports::{{RESOURCE_PASCAL}}Port;
"#;

pub const ENTITY: &str = r#"use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct {{RESOURCE_PASCAL}} {
    pub id: Option<String>,
{{FIELDS}}}
"#;

pub const PORT: &str = r#"use super::entities::{{RESOURCE_PASCAL}};

/// Storage capability for `{{RESOURCE_PASCAL}}`.
pub trait {{RESOURCE_PASCAL}}Port: Send + Sync {
    fn get_all(&self) -> Vec<{{RESOURCE_PASCAL}}>;
    fn get_one(&self, id: &str) -> Option<{{RESOURCE_PASCAL}}>;
    fn create(&self, item: {{RESOURCE_PASCAL}}) -> {{RESOURCE_PASCAL}};
    fn update(&self, id: &str, item: {{RESOURCE_PASCAL}}) -> {{RESOURCE_PASCAL}};
    fn delete(&self, id: &str);
}
"#;

// ── Application ───────────────────────────────────────────────────────────────

pub const APPLICATION_MODULE: &str = r#"pub mod dtos;
pub mod mappers;
pub mod use_cases;

pub use dtos::{{RESOURCE_PASCAL}}Dto;
pub use mappers::{{RESOURCE_PASCAL}}Mapper;
"#;

pub const DTO: &str = r#"use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct {{RESOURCE_PASCAL}}Dto {
    pub id: Option<String>,
{{FIELDS}}}
"#;

pub const MAPPER: &str = r#"use crate::application::{{RESOURCE_SNAKE}}::dtos::{{RESOURCE_PASCAL}}Dto;
use crate::domain::{{RESOURCE_SNAKE}}::entities::{{RESOURCE_PASCAL}};

pub struct {{RESOURCE_PASCAL}}Mapper;

impl {{RESOURCE_PASCAL}}Mapper {
    pub fn to_dto(entity: {{RESOURCE_PASCAL}}) -> {{RESOURCE_PASCAL}}Dto {
        {{RESOURCE_PASCAL}}Dto {
            id: entity.id,
{{ENTITY_TO_DTO}}        }
    }

    pub fn to_domain(dto: {{RESOURCE_PASCAL}}Dto) -> {{RESOURCE_PASCAL}} {
        {{RESOURCE_PASCAL}} {
            id: dto.id,
{{DTO_TO_ENTITY}}        }
    }
}
"#;

pub const USE_CASE_MODULE: &str = "{{USE_CASE_MODULES}}\n{{USE_CASE_EXPORTS}}";

pub const USE_CASE: &str = r#"use std::sync::Arc;

{{USE_CASE_IMPORTS}}
pub struct {{USE_CASE_TYPE}} {
    port: Arc<dyn {{RESOURCE_PASCAL}}Port>,
}

impl {{USE_CASE_TYPE}} {
    pub fn new(port: Arc<dyn {{RESOURCE_PASCAL}}Port>) -> Self {
        Self { port }
    }

{{EXECUTE}}}
"#;

pub const USE_CASE_DTO_IMPORTS: &str = r#"use crate::application::{{RESOURCE_SNAKE}}::dtos::{{RESOURCE_PASCAL}}Dto;
use crate::application::{{RESOURCE_SNAKE}}::mappers::{{RESOURCE_PASCAL}}Mapper;
"#;

pub const USE_CASE_PORT_IMPORT: &str =
    "use crate::domain::{{RESOURCE_SNAKE}}::ports::{{RESOURCE_PASCAL}}Port;\n";

pub const EXECUTE_LIST: &str = r#"    pub fn execute(&self) -> Vec<{{RESOURCE_PASCAL}}Dto> {
        self.port
            .get_all()
            .into_iter()
            .map({{RESOURCE_PASCAL}}Mapper::to_dto)
            .collect()
    }
"#;

pub const EXECUTE_GET: &str = r#"    pub fn execute(&self, id: &str) -> Option<{{RESOURCE_PASCAL}}Dto> {
        self.port.get_one(id).map({{RESOURCE_PASCAL}}Mapper::to_dto)
    }
"#;

pub const EXECUTE_CREATE: &str = r#"    pub fn execute(&self, dto: {{RESOURCE_PASCAL}}Dto) -> {{RESOURCE_PASCAL}}Dto {
        let created = self.port.create({{RESOURCE_PASCAL}}Mapper::to_domain(dto));
        {{RESOURCE_PASCAL}}Mapper::to_dto(created)
    }
"#;

pub const EXECUTE_UPDATE: &str = r#"    pub fn execute(&self, id: &str, dto: {{RESOURCE_PASCAL}}Dto) -> {{RESOURCE_PASCAL}}Dto {
        let updated = self.port.update(id, {{RESOURCE_PASCAL}}Mapper::to_domain(dto));
        {{RESOURCE_PASCAL}}Mapper::to_dto(updated)
    }
"#;

pub const EXECUTE_DELETE: &str = r#"    pub fn execute(&self, id: &str) {
        self.port.delete(id);
    }
"#;

// ── Infrastructure ────────────────────────────────────────────────────────────

pub const ADAPTER_MODULE: &str = r#"pub mod in_memory_{{RESOURCE_SNAKE}}_adapter;

pub use in_memory_{{RESOURCE_SNAKE}}_adapter::InMemory{{RESOURCE_PASCAL}}Adapter;
"#;

pub const IN_MEMORY_ADAPTER: &str = r#"use std::sync::{PoisonError, RwLock};

use tracing::debug;

use crate::domain::{{RESOURCE_SNAKE}}::entities::{{RESOURCE_PASCAL}};
use crate::domain::{{RESOURCE_SNAKE}}::ports::{{RESOURCE_PASCAL}}Port;

#[derive(Debug)]
struct State {
    items: Vec<{{RESOURCE_PASCAL}}>,
    next_id: u64,
}

/// Process-local `{{RESOURCE_PASCAL}}Port`. Ids are assigned sequentially from 1.
#[derive(Debug)]
pub struct InMemory{{RESOURCE_PASCAL}}Adapter {
    state: RwLock<State>,
}

impl InMemory{{RESOURCE_PASCAL}}Adapter {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemory{{RESOURCE_PASCAL}}Adapter {
    fn default() -> Self {
        Self::new()
    }
}

impl {{RESOURCE_PASCAL}}Port for InMemory{{RESOURCE_PASCAL}}Adapter {
    fn get_all(&self) -> Vec<{{RESOURCE_PASCAL}}> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state.items.clone()
    }

    fn get_one(&self, id: &str) -> Option<{{RESOURCE_PASCAL}}> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .items
            .iter()
            .find(|item| item.id.as_deref() == Some(id))
            .cloned()
    }

    fn create(&self, mut item: {{RESOURCE_PASCAL}}) -> {{RESOURCE_PASCAL}} {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        item.id = Some(state.next_id.to_string());
        state.next_id += 1;
        state.items.push(item.clone());
        debug!(id = ?item.id, "created {{RESOURCE_SNAKE}}");
        item
    }

    fn update(&self, id: &str, mut item: {{RESOURCE_PASCAL}}) -> {{RESOURCE_PASCAL}} {
        item.id = Some(id.to_string());
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        match state
            .items
            .iter_mut()
            .find(|existing| existing.id.as_deref() == Some(id))
        {
            Some(existing) => *existing = item.clone(),
            None => state.items.push(item.clone()),
        }
        debug!(id, "updated {{RESOURCE_SNAKE}}");
        item
    }

    fn delete(&self, id: &str) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.items.retain(|item| item.id.as_deref() != Some(id));
        debug!(id, "deleted {{RESOURCE_SNAKE}}");
    }
}
"#;

// ── Presentation ──────────────────────────────────────────────────────────────

pub const REQUEST_SCHEMA: &str = r#"use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct {{RESOURCE_PASCAL}}Request {
{{FIELDS}}}
"#;

pub const RESPONSE_SCHEMA: &str = r#"use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct {{RESOURCE_PASCAL}}Response {
    pub id: Option<String>,
{{FIELDS}}}
"#;

pub const ENDPOINTS_MODULE: &str = r#"pub mod controller;
pub mod endpoints;

pub use endpoints::router;
"#;

pub const CONTROLLER: &str = r#"use std::sync::Arc;

{{CONTROLLER_IMPORTS}}
pub struct {{RESOURCE_PASCAL}}Controller {
{{CONTROLLER_FIELDS}}}

impl {{RESOURCE_PASCAL}}Controller {
    pub fn from_container(container: &Container) -> Result<Self, AppError> {
        Ok(Self {
{{CONTROLLER_WIRING}}        })
    }
{{CONTROLLER_METHODS}}}
{{CONTROLLER_HELPERS}}"#;

pub const IMPORT_DTO: &str = "use crate::application::{{RESOURCE_SNAKE}}::dtos::{{RESOURCE_PASCAL}}Dto;\n";
pub const IMPORT_USE_CASES: &str =
    "use crate::application::{{RESOURCE_SNAKE}}::use_cases::{{USE_CASE_LIST}};\n";
pub const IMPORT_CONTAINER: &str = "use crate::core::di::Container;\n";
pub const IMPORT_APP_ERROR: &str = "use crate::presentation::shared::errors::AppError;\n";
pub const IMPORT_HTTP_RESPONSE: &str =
    "use crate::presentation::shared::http_response::HttpResponse;\n";
pub const IMPORT_APP_STATE: &str = "use crate::presentation::state::AppState;\n";
pub const IMPORT_CONTROLLER: &str = "use crate::presentation::v1::endpoints::{{RESOURCE_SNAKE}}::controller::{{RESOURCE_PASCAL}}Controller;\n";
pub const IMPORT_REQUEST: &str = "use crate::presentation::v1::schemas::{{RESOURCE_SNAKE}}_request::{{RESOURCE_PASCAL}}Request;\n";
pub const IMPORT_RESPONSE: &str = "use crate::presentation::v1::schemas::{{RESOURCE_SNAKE}}_response::{{RESOURCE_PASCAL}}Response;\n";

pub const CONTROLLER_LIST: &str = r#"
    pub fn list(&self) -> Vec<{{RESOURCE_PASCAL}}Response> {
        self.list_use_case
            .execute()
            .into_iter()
            .map(to_response)
            .collect()
    }
"#;

pub const CONTROLLER_GET: &str = r#"
    pub fn get(&self, id: &str) -> Result<{{RESOURCE_PASCAL}}Response, AppError> {
        self.get_use_case
            .execute(id)
            .map(to_response)
            .ok_or_else(|| AppError::not_found(format!("{{RESOURCE_PASCAL}} '{id}' not found")))
    }
"#;

pub const CONTROLLER_CREATE: &str = r#"
    pub fn create(&self, request: {{RESOURCE_PASCAL}}Request) -> {{RESOURCE_PASCAL}}Response {
        to_response(self.create_use_case.execute(to_dto(request)))
    }
"#;

pub const CONTROLLER_UPDATE: &str = r#"
    pub fn update(&self, id: &str, request: {{RESOURCE_PASCAL}}Request) -> {{RESOURCE_PASCAL}}Response {
        to_response(self.update_use_case.execute(id, to_dto(request)))
    }
"#;

pub const CONTROLLER_DELETE: &str = r#"
    pub fn delete(&self, id: &str) {
        self.delete_use_case.execute(id);
    }
"#;

pub const TO_DTO: &str = r#"
fn to_dto({{REQUEST_ARG}}: {{RESOURCE_PASCAL}}Request) -> {{RESOURCE_PASCAL}}Dto {
    {{RESOURCE_PASCAL}}Dto {
        id: None,
{{REQUEST_TO_DTO}}    }
}
"#;

pub const TO_RESPONSE: &str = r#"
fn to_response(dto: {{RESOURCE_PASCAL}}Dto) -> {{RESOURCE_PASCAL}}Response {
    {{RESOURCE_PASCAL}}Response {
        id: dto.id,
{{DTO_TO_RESPONSE}}    }
}
"#;

pub const ENDPOINTS: &str = r#"{{ENDPOINT_IMPORTS}}
pub fn router() -> Router<AppState> {
    Router::new()
{{ROUTES}}}

fn controller(state: &AppState) -> Result<{{RESOURCE_PASCAL}}Controller, AppError> {
    {{RESOURCE_PASCAL}}Controller::from_container(&state.container)
}
{{HANDLERS}}"#;

pub const HANDLER_LIST: &str = r#"
async fn list_{{RESOURCE_SNAKE}}(
    State(state): State<AppState>,
) -> Result<Json<HttpResponse<Vec<{{RESOURCE_PASCAL}}Response>>>, AppError> {
    Ok(Json(HttpResponse::ok(controller(&state)?.list())))
}
"#;

pub const HANDLER_GET: &str = r#"
async fn get_{{RESOURCE_SNAKE}}(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<Json<HttpResponse<{{RESOURCE_PASCAL}}Response>>, AppError> {
    Ok(Json(HttpResponse::ok(controller(&state)?.get(&identifier)?)))
}
"#;

pub const HANDLER_CREATE: &str = r#"
async fn create_{{RESOURCE_SNAKE}}(
    State(state): State<AppState>,
    Json(request): Json<{{RESOURCE_PASCAL}}Request>,
) -> Result<(StatusCode, Json<HttpResponse<{{RESOURCE_PASCAL}}Response>>), AppError> {
    let created = controller(&state)?.create(request);
    Ok((StatusCode::CREATED, Json(HttpResponse::ok(created))))
}
"#;

pub const HANDLER_UPDATE: &str = r#"
async fn update_{{RESOURCE_SNAKE}}(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
    Json(request): Json<{{RESOURCE_PASCAL}}Request>,
) -> Result<Json<HttpResponse<{{RESOURCE_PASCAL}}Response>>, AppError> {
    let updated = controller(&state)?.update(&identifier, request);
    Ok(Json(HttpResponse::ok(updated)))
}
"#;

pub const HANDLER_DELETE: &str = r#"
async fn delete_{{RESOURCE_SNAKE}}(
    State(state): State<AppState>,
    Path(identifier): Path<String>,
) -> Result<StatusCode, AppError> {
    controller(&state)?.delete(&identifier);
    Ok(StatusCode::NO_CONTENT)
}
"#;

//! Renderer producing Rust source for an axum service laid out in layers.

use layercake_core::{
    application::ports::ArtifactRenderer,
    domain::{ArtifactKind, HttpMethod, RenderContext, ResourceSpec, UseCaseKind},
    error::LayercakeResult,
};
use tracing::{instrument, trace};

use super::templates as t;

/// Renders the built-in templates in [`super::templates`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RustRenderer;

impl RustRenderer {
    /// Create a new Rust renderer.
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactRenderer for RustRenderer {
    #[instrument(skip_all, fields(resource = %spec.snake(), kind = %kind))]
    fn render(&self, spec: &ResourceSpec, kind: ArtifactKind) -> LayercakeResult<String> {
        let ctx = RenderContext::for_resource(spec);
        let fields = struct_fields(spec);

        let out = match kind {
            ArtifactKind::DomainModule => ctx.render(t::DOMAIN_MODULE),
            ArtifactKind::Entity => ctx.with_variable("FIELDS", fields).render(t::ENTITY),
            ArtifactKind::Port => ctx.render(t::PORT),

            ArtifactKind::ApplicationModule => ctx.render(t::APPLICATION_MODULE),
            ArtifactKind::Dto => ctx.with_variable("FIELDS", fields).render(t::DTO),
            ArtifactKind::Mapper => ctx
                .with_variable("ENTITY_TO_DTO", field_moves(spec, "entity", 12))
                .with_variable("DTO_TO_ENTITY", field_moves(spec, "dto", 12))
                .render(t::MAPPER),
            ArtifactKind::UseCaseModule => render_use_case_module(spec, ctx),
            ArtifactKind::UseCase(kind) => render_use_case(spec, kind, ctx),

            ArtifactKind::AdapterModule => ctx.render(t::ADAPTER_MODULE),
            ArtifactKind::InMemoryAdapter => ctx.render(t::IN_MEMORY_ADAPTER),

            ArtifactKind::RequestSchema => {
                ctx.with_variable("FIELDS", fields).render(t::REQUEST_SCHEMA)
            }
            ArtifactKind::ResponseSchema => {
                ctx.with_variable("FIELDS", fields).render(t::RESPONSE_SCHEMA)
            }
            ArtifactKind::EndpointsModule => ctx.render(t::ENDPOINTS_MODULE),
            ArtifactKind::Controller => render_controller(spec, ctx),
            ArtifactKind::Endpoints => render_endpoints(spec, ctx),
        };

        trace!(bytes = out.len(), "rendered");
        Ok(out)
    }
}

// ── Field blocks ──────────────────────────────────────────────────────────────

/// `    pub name: Type,` per field.
fn struct_fields(spec: &ResourceSpec) -> String {
    spec.fields()
        .iter()
        .map(|f| format!("    pub {}: {},\n", f.name, f.ty.rust_type()))
        .collect()
}

/// `name: source.name,` per field at `indent` spaces.
fn field_moves(spec: &ResourceSpec, source: &str, indent: usize) -> String {
    spec.fields()
        .iter()
        .map(|f| format!("{:indent$}{name}: {source}.{name},\n", "", name = f.name))
        .collect()
}

// ── Application ───────────────────────────────────────────────────────────────

fn render_use_case_module(spec: &ResourceSpec, ctx: RenderContext) -> String {
    let s = spec.snake();
    let mut modules = String::new();
    let mut exports = String::new();
    for kind in spec.use_cases() {
        modules.push_str(&format!("pub mod {}_{s};\n", kind.verb()));
        exports.push_str(&format!(
            "pub use {}_{s}::{};\n",
            kind.verb(),
            spec.use_case_type(kind)
        ));
    }
    ctx.with_variable("USE_CASE_MODULES", modules)
        .with_variable("USE_CASE_EXPORTS", exports)
        .render(t::USE_CASE_MODULE)
}

fn render_use_case(spec: &ResourceSpec, kind: UseCaseKind, ctx: RenderContext) -> String {
    let execute = match kind {
        UseCaseKind::List => t::EXECUTE_LIST,
        UseCaseKind::Get => t::EXECUTE_GET,
        UseCaseKind::Create => t::EXECUTE_CREATE,
        UseCaseKind::Update => t::EXECUTE_UPDATE,
        UseCaseKind::Delete => t::EXECUTE_DELETE,
    };
    let mut imports = String::new();
    if kind != UseCaseKind::Delete {
        imports.push_str(&ctx.render(t::USE_CASE_DTO_IMPORTS));
    }
    imports.push_str(&ctx.render(t::USE_CASE_PORT_IMPORT));

    let execute = ctx.render(execute);
    ctx.with_variable("USE_CASE_TYPE", spec.use_case_type(kind))
        .with_variable("USE_CASE_IMPORTS", imports)
        .with_variable("EXECUTE", execute)
        .render(t::USE_CASE)
}

// ── Presentation ──────────────────────────────────────────────────────────────

/// Which presentation pieces the selected methods need.
struct Needs {
    /// POST or PUT: request schema and `to_dto`.
    write: bool,
    /// Anything but DELETE-only: response schema and `to_response`.
    response: bool,
}

impl Needs {
    fn of(spec: &ResourceSpec) -> Self {
        let m = spec.methods();
        let read = m.contains(HttpMethod::Get);
        let write = m.contains(HttpMethod::Post) || m.contains(HttpMethod::Put);
        Self {
            write,
            response: read || write,
        }
    }
}

fn use_case_list(spec: &ResourceSpec) -> String {
    let names: Vec<String> = spec
        .use_cases()
        .into_iter()
        .map(|kind| spec.use_case_type(kind))
        .collect();
    match names.as_slice() {
        [single] => single.clone(),
        _ => format!("{{{}}}", names.join(", ")),
    }
}

fn render_controller(spec: &ResourceSpec, ctx: RenderContext) -> String {
    let needs = Needs::of(spec);
    let ctx = ctx
        .with_variable("USE_CASE_LIST", use_case_list(spec))
        .with_variable(
            "REQUEST_ARG",
            if spec.fields().is_empty() {
                "_request"
            } else {
                "request"
            },
        )
        .with_variable("REQUEST_TO_DTO", field_moves(spec, "request", 8))
        .with_variable("DTO_TO_RESPONSE", field_moves(spec, "dto", 8));

    let mut imports = String::new();
    if needs.response {
        imports.push_str(&ctx.render(t::IMPORT_DTO));
    }
    imports.push_str(&ctx.render(t::IMPORT_USE_CASES));
    imports.push_str(t::IMPORT_CONTAINER);
    imports.push_str(t::IMPORT_APP_ERROR);
    if needs.write {
        imports.push_str(&ctx.render(t::IMPORT_REQUEST));
    }
    if needs.response {
        imports.push_str(&ctx.render(t::IMPORT_RESPONSE));
    }

    let mut fields = String::new();
    let mut wiring = String::new();
    let mut methods = String::new();
    for kind in spec.use_cases() {
        let ty = spec.use_case_type(kind);
        let verb = kind.verb();
        fields.push_str(&format!("    {verb}_use_case: Arc<{ty}>,\n"));
        wiring.push_str(&format!(
            "            {verb}_use_case: container.require::<{ty}>()?,\n"
        ));
        methods.push_str(&ctx.render(match kind {
            UseCaseKind::List => t::CONTROLLER_LIST,
            UseCaseKind::Get => t::CONTROLLER_GET,
            UseCaseKind::Create => t::CONTROLLER_CREATE,
            UseCaseKind::Update => t::CONTROLLER_UPDATE,
            UseCaseKind::Delete => t::CONTROLLER_DELETE,
        }));
    }

    let mut helpers = String::new();
    if needs.write {
        helpers.push_str(&ctx.render(t::TO_DTO));
    }
    if needs.response {
        helpers.push_str(&ctx.render(t::TO_RESPONSE));
    }

    ctx.with_variable("CONTROLLER_IMPORTS", imports)
        .with_variable("CONTROLLER_FIELDS", fields)
        .with_variable("CONTROLLER_WIRING", wiring)
        .with_variable("CONTROLLER_METHODS", methods)
        .with_variable("CONTROLLER_HELPERS", helpers)
        .render(t::CONTROLLER)
}

fn render_endpoints(spec: &ResourceSpec, ctx: RenderContext) -> String {
    let needs = Needs::of(spec);
    let use_cases = spec.use_cases();
    let has_item = use_cases.iter().any(UseCaseKind::targets_item);
    let needs_status = spec.methods().contains(HttpMethod::Post)
        || spec.methods().contains(HttpMethod::Delete);

    // Route table: one `.route` per path, verbs chained.
    let mut routes = String::new();
    let mut routing_fns: Vec<String> = Vec::new();
    for (item, path) in [(false, spec.endpoint_path().to_string()), (true, spec.item_path())] {
        let mut chain = String::new();
        for kind in use_cases.iter().filter(|k| k.targets_item() == item) {
            let verb = kind.method().as_str().to_ascii_lowercase();
            let handler = format!("{}_{}", kind.verb(), spec.snake());
            if chain.is_empty() {
                chain = format!("{verb}({handler})");
                if !routing_fns.contains(&verb) {
                    routing_fns.push(verb);
                }
            } else {
                chain.push_str(&format!(".{verb}({handler})"));
            }
        }
        if !chain.is_empty() {
            routes.push_str(&format!("        .route(\"{path}\", {chain})\n"));
        }
    }
    routing_fns.sort_by_key(|verb| {
        HttpMethod::ALL
            .iter()
            .position(|m| m.as_str().eq_ignore_ascii_case(verb))
    });

    let mut axum_items: Vec<String> = Vec::new();
    if needs.response {
        axum_items.push("Json".into());
    }
    axum_items.push("Router".into());
    axum_items.push(if has_item {
        "extract::{Path, State}".into()
    } else {
        "extract::State".into()
    });
    if needs_status {
        axum_items.push("http::StatusCode".into());
    }
    axum_items.push(match routing_fns.as_slice() {
        [single] => format!("routing::{single}"),
        many => format!("routing::{{{}}}", many.join(", ")),
    });

    let mut imports = format!("use axum::{{\n    {},\n}};\n\n", axum_items.join(",\n    "));
    imports.push_str(t::IMPORT_APP_ERROR);
    if needs.response {
        imports.push_str(t::IMPORT_HTTP_RESPONSE);
    }
    imports.push_str(t::IMPORT_APP_STATE);
    imports.push_str(&ctx.render(t::IMPORT_CONTROLLER));
    if needs.write {
        imports.push_str(&ctx.render(t::IMPORT_REQUEST));
    }
    if needs.response {
        imports.push_str(&ctx.render(t::IMPORT_RESPONSE));
    }

    let handlers: String = use_cases
        .iter()
        .map(|kind| {
            ctx.render(match kind {
                UseCaseKind::List => t::HANDLER_LIST,
                UseCaseKind::Get => t::HANDLER_GET,
                UseCaseKind::Create => t::HANDLER_CREATE,
                UseCaseKind::Update => t::HANDLER_UPDATE,
                UseCaseKind::Delete => t::HANDLER_DELETE,
            })
        })
        .collect();

    ctx.with_variable("ENDPOINT_IMPORTS", imports)
        .with_variable("ROUTES", routes)
        .with_variable("HANDLERS", handlers)
        .render(t::ENDPOINTS)
}

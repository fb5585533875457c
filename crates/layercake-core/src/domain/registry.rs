//! Registry file patching.
//!
//! The target project keeps two long-lived aggregation files that every
//! resource must be spliced into, plus one `mod.rs` per layer:
//!
//! ```text
//! src/core/container.rs        registry.singleton(..) per adapter / use case
//! src/presentation/v1/api.rs   .merge(<resource>_router()) per resource
//! src/<layer>/mod.rs           pub mod <resource>;
//! ```
//!
//! Each file carries anchor comments marking where new lines go. New lines
//! are inserted immediately *before* the anchor with the anchor's
//! indentation, so successive resources stack in order and the anchor stays
//! last. Files whose anchors were deleted fall back to structural positions
//! (after the last `use` statement, after the last registration); if no
//! position can be found the patch fails rather than guessing.
//!
//! Every patch is idempotent: a presence check on a marker derived from the
//! resource short-circuits to [`PatchOutcome::Unchanged`].

use crate::domain::{entities::resource::ResourceSpec, error::DomainError};

pub const IMPORTS_ANCHOR: &str = "// layercake:imports";
pub const PROVIDERS_ANCHOR: &str = "// layercake:providers";
pub const ROUTES_ANCHOR: &str = "// layercake:routes";
pub const MODULES_ANCHOR: &str = "// layercake:modules";

/// Result of applying a patch to a file's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The resource is already registered; the file must not be rewritten.
    Unchanged,
    /// The new full text of the file.
    Patched(String),
}

/// A declarative edit to one registry or module index file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryPatch {
    DependencyRegistry {
        /// Substring whose presence means "already registered".
        marker: String,
        imports: Vec<String>,
        providers: Vec<String>,
    },
    RouterAggregator {
        import_line: String,
        include_line: String,
    },
    ModuleIndex {
        declarations: Vec<String>,
    },
}

impl RegistryPatch {
    /// Imports and singleton registrations for the adapter and the use
    /// cases actually generated for `spec`.
    pub fn dependency_registry(spec: &ResourceSpec) -> Self {
        let s = spec.snake();
        let adapter = spec.adapter_type();
        let use_cases: Vec<String> = spec
            .use_cases()
            .into_iter()
            .map(|kind| spec.use_case_type(kind))
            .collect();

        let imports = vec![
            format!(
                "use crate::application::{s}::use_cases::{{{}}};",
                use_cases.join(", ")
            ),
            format!("use crate::infrastructure::{s}::{adapter};"),
        ];

        let mut providers = vec![
            String::new(),
            format!("// {} providers", spec.pascal()),
            format!("let {s}_adapter = registry.singleton({adapter}::new());"),
        ];
        providers.extend(
            use_cases
                .iter()
                .map(|uc| format!("registry.singleton({uc}::new({s}_adapter.clone()));")),
        );

        Self::DependencyRegistry {
            marker: format!("{adapter}::new()"),
            imports,
            providers,
        }
    }

    /// Router import and `.merge(..)` include for `spec`.
    pub fn router_aggregator(spec: &ResourceSpec) -> Self {
        let s = spec.snake();
        Self::RouterAggregator {
            import_line: format!("use crate::presentation::v1::endpoints::{s}::router as {s}_router;"),
            include_line: format!(".merge({s}_router())"),
        }
    }

    /// `pub mod <module>;` lines in a layer `mod.rs`.
    pub fn module_index<I, S>(modules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::ModuleIndex {
            declarations: modules
                .into_iter()
                .map(|m| format!("pub mod {};", m.as_ref()))
                .collect(),
        }
    }

    /// Apply to `text`. `file` only names the file in errors.
    pub fn apply(&self, file: &str, text: &str) -> Result<PatchOutcome, DomainError> {
        match self {
            Self::DependencyRegistry {
                marker,
                imports,
                providers,
            } => patch_dependency_registry(file, text, marker, imports, providers),
            Self::RouterAggregator {
                import_line,
                include_line,
            } => patch_router(file, text, import_line, include_line),
            Self::ModuleIndex { declarations } => Ok(patch_module_index(text, declarations)),
        }
    }
}

// ============================================================================
// Patch Implementations
// ============================================================================

fn patch_dependency_registry(
    file: &str,
    text: &str,
    marker: &str,
    imports: &[String],
    providers: &[String],
) -> Result<PatchOutcome, DomainError> {
    if text.contains(marker) {
        return Ok(PatchOutcome::Unchanged);
    }

    let mut lines = Lines::parse(text);

    let providers_at = lines
        .anchor(PROVIDERS_ANCHOR)
        .or_else(|| lines.after_last_statement("registry.singleton("))
        .ok_or(DomainError::RegistryAnchorMissing {
            file: file.to_string(),
            section: "providers",
            anchor: PROVIDERS_ANCHOR,
        })?;
    lines.insert(providers_at, providers);

    // Recomputed after the provider insert, which always lands further down.
    let imports_at = lines.import_position();
    lines.insert(imports_at, imports);

    Ok(PatchOutcome::Patched(lines.render()))
}

fn patch_router(
    file: &str,
    text: &str,
    import_line: &str,
    include_line: &str,
) -> Result<PatchOutcome, DomainError> {
    let has_import = text.contains(import_line);
    let has_include = text.contains(include_line);
    if has_import && has_include {
        return Ok(PatchOutcome::Unchanged);
    }

    let mut lines = Lines::parse(text);

    if !has_include {
        if !text.contains("fn api_router") {
            lines.append_router_skeleton();
        }
        let at = lines
            .anchor(ROUTES_ANCHOR)
            .or_else(|| lines.after_last_prefixed(".merge("))
            .or_else(|| lines.after_router_new())
            .ok_or(DomainError::RegistryAnchorMissing {
                file: file.to_string(),
                section: "routes",
                anchor: ROUTES_ANCHOR,
            })?;
        lines.insert(at, &[include_line.to_string()]);
    }

    if !has_import {
        let at = lines.import_position();
        lines.insert(at, &[import_line.to_string()]);
    }

    Ok(PatchOutcome::Patched(lines.render()))
}

fn patch_module_index(text: &str, declarations: &[String]) -> PatchOutcome {
    let missing: Vec<String> = declarations
        .iter()
        .filter(|d| !text.lines().any(|l| l.trim() == d.as_str()))
        .cloned()
        .collect();
    if missing.is_empty() {
        return PatchOutcome::Unchanged;
    }

    let mut lines = Lines::parse(text);
    let at = lines
        .anchor(MODULES_ANCHOR)
        .or_else(|| lines.after_last_top_level(&["pub mod ", "mod "]))
        .unwrap_or_else(|| Insertion {
            index: lines.after_header(),
            indent: String::new(),
        });
    lines.insert(at, &missing);

    PatchOutcome::Patched(lines.render())
}

// ============================================================================
// Line Buffer
// ============================================================================

/// Where to insert and with which indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Insertion {
    index: usize,
    indent: String,
}

/// A file split into lines, remembering whether it ended with a newline.
struct Lines {
    lines: Vec<String>,
    trailing_newline: bool,
}

impl Lines {
    fn parse(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            trailing_newline: text.is_empty() || text.ends_with('\n'),
        }
    }

    fn render(&self) -> String {
        let mut out = self.lines.join("\n");
        if self.trailing_newline && !self.lines.is_empty() {
            out.push('\n');
        }
        out
    }

    fn indent_of(&self, index: usize) -> String {
        self.lines[index]
            .chars()
            .take_while(|c| c.is_whitespace())
            .collect()
    }

    /// Insert `block` at `at`; blank entries stay truly blank.
    fn insert(&mut self, at: Insertion, block: &[String]) {
        let indented = block.iter().map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{line}", at.indent)
            }
        });
        let tail = self.lines.split_off(at.index);
        self.lines.extend(indented);
        self.lines.extend(tail);
    }

    fn anchor(&self, anchor: &str) -> Option<Insertion> {
        let index = self.lines.iter().position(|l| l.trim() == anchor)?;
        Some(Insertion {
            index,
            indent: self.indent_of(index),
        })
    }

    /// After the last statement starting with (or assigned from) `needle`,
    /// following it to its terminating `;`.
    fn after_last_statement(&self, needle: &str) -> Option<Insertion> {
        let assigned = format!("= {needle}");
        let start = self.lines.iter().rposition(|l| {
            let t = l.trim_start();
            t.starts_with(needle) || (t.starts_with("let ") && t.contains(&assigned))
        })?;
        let end = (start..self.lines.len()).find(|&i| self.lines[i].trim_end().ends_with(';'))?;
        Some(Insertion {
            index: end + 1,
            indent: self.indent_of(start),
        })
    }

    /// After the last line whose trimmed text starts with `prefix`.
    fn after_last_prefixed(&self, prefix: &str) -> Option<Insertion> {
        let index = self
            .lines
            .iter()
            .rposition(|l| l.trim_start().starts_with(prefix))?;
        Some(Insertion {
            index: index + 1,
            indent: self.indent_of(index),
        })
    }

    /// After the last unindented line starting with any of `prefixes`.
    fn after_last_top_level(&self, prefixes: &[&str]) -> Option<Insertion> {
        let index = self
            .lines
            .iter()
            .rposition(|l| prefixes.iter().any(|p| l.starts_with(p)))?;
        Some(Insertion {
            index: index + 1,
            indent: String::new(),
        })
    }

    fn after_router_new(&self) -> Option<Insertion> {
        let index = self
            .lines
            .iter()
            .rposition(|l| l.trim_end().ends_with("Router::new()"))?;
        Some(Insertion {
            index: index + 1,
            indent: format!("{}    ", self.indent_of(index)),
        })
    }

    /// Imports anchor, else after the last complete top-level `use`
    /// statement (multi-line aware), else after the file header.
    fn import_position(&self) -> Insertion {
        if let Some(at) = self.anchor(IMPORTS_ANCHOR) {
            return at;
        }

        let mut last_end = None;
        let mut i = 0;
        while i < self.lines.len() {
            let line = &self.lines[i];
            let starts_use = ["use ", "pub use ", "pub(crate) use "]
                .iter()
                .any(|p| line.starts_with(p));
            if starts_use {
                let end = (i..self.lines.len())
                    .find(|&j| self.lines[j].contains(';'))
                    .unwrap_or(i);
                last_end = Some(end);
                i = end;
            }
            i += 1;
        }

        Insertion {
            index: last_end.map_or_else(|| self.after_header(), |end| end + 1),
            indent: String::new(),
        }
    }

    /// First line past inner doc comments and inner attributes.
    fn after_header(&self) -> usize {
        self.lines
            .iter()
            .position(|l| {
                let t = l.trim_start();
                !(t.starts_with("//!") || t.starts_with("#!["))
            })
            .unwrap_or(self.lines.len())
    }

    fn append_router_skeleton(&mut self) {
        if self.lines.last().is_some_and(|l| !l.trim().is_empty()) {
            self.lines.push(String::new());
        }
        self.lines.extend(
            [
                "pub fn api_router() -> axum::Router<crate::presentation::state::AppState> {",
                "    axum::Router::new()",
                "        // layercake:routes",
                "}",
            ]
            .map(str::to_string),
        );
        self.trailing_newline = true;
    }
}

//! Placeholder substitution for artifact templates.
//!
//! Templates use `{{NAME}}` placeholders. A resource context always carries:
//!
//! | Variable          | Example               |
//! |-------------------|-----------------------|
//! | `RESOURCE_NAME`   | `BookShelf`           |
//! | `RESOURCE_SNAKE`  | `book_shelf`          |
//! | `RESOURCE_PASCAL` | `BookShelf`           |
//! | `ENDPOINT_PATH`   | `/shelves`            |
//! | `ITEM_PATH`       | `/shelves/{identifier}` |
//!
//! Renderers add per-artifact blocks (field lists, imports) with
//! [`RenderContext::with_variable`].

use std::collections::HashMap;

use crate::domain::entities::resource::ResourceSpec;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    variables: HashMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Context with the standard resource variables.
    pub fn for_resource(spec: &ResourceSpec) -> Self {
        Self::new()
            .with_variable("RESOURCE_NAME", spec.raw_name())
            .with_variable("RESOURCE_SNAKE", spec.snake())
            .with_variable("RESOURCE_PASCAL", spec.pascal())
            .with_variable("ENDPOINT_PATH", spec.endpoint_path())
            .with_variable("ITEM_PATH", spec.item_path())
    }

    /// Later values override earlier ones.
    pub fn with_variable(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.variables.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.variables.get(key).map(String::as_str)
    }

    /// Replace every known `{{KEY}}`. Unknown placeholders stay in the
    /// output; see [`unresolved_placeholder`].
    ///
    /// Substituted values are not rescanned, so a value containing `{{X}}`
    /// is emitted literally.
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;
        while let Some(start) = rest.find("{{") {
            out.push_str(&rest[..start]);
            let after = &rest[start + 2..];
            match after.find("}}") {
                Some(end) => match self.get(&after[..end]) {
                    Some(value) => {
                        out.push_str(value);
                        rest = &after[end + 2..];
                    }
                    None => {
                        out.push_str("{{");
                        rest = after;
                    }
                },
                None => {
                    out.push_str(&rest[start..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// First `{{...}}` left in rendered text, if any.
pub fn unresolved_placeholder(rendered: &str) -> Option<&str> {
    let start = rendered.find("{{")?;
    let tail = &rendered[start..];
    let end = tail.find("}}").map_or(tail.len(), |i| i + 2);
    Some(tail[..end].lines().next().unwrap_or(""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shelf() -> ResourceSpec {
        ResourceSpec::builder()
            .name("BookShelf")
            .endpoint_path("/shelves")
            .build()
            .unwrap()
    }

    #[test]
    fn resource_context_carries_standard_variables() {
        let ctx = RenderContext::for_resource(&shelf());
        assert_eq!(ctx.get("RESOURCE_NAME"), Some("BookShelf"));
        assert_eq!(ctx.get("RESOURCE_SNAKE"), Some("book_shelf"));
        assert_eq!(ctx.get("RESOURCE_PASCAL"), Some("BookShelf"));
        assert_eq!(ctx.get("ENDPOINT_PATH"), Some("/shelves"));
        assert_eq!(ctx.get("ITEM_PATH"), Some("/shelves/{identifier}"));
    }

    #[test]
    fn renders_repeated_and_adjacent_placeholders() {
        let ctx = RenderContext::for_resource(&shelf());
        assert_eq!(
            ctx.render("{{RESOURCE_PASCAL}}{{RESOURCE_PASCAL}} at {{ENDPOINT_PATH}}"),
            "BookShelfBookShelf at /shelves"
        );
    }

    #[test]
    fn single_braces_pass_through() {
        let ctx = RenderContext::new().with_variable("T", "Book");
        assert_eq!(ctx.render("impl {{T}} { fn f() {} }"), "impl Book { fn f() {} }");
    }

    #[test]
    fn values_are_not_rescanned() {
        let ctx = RenderContext::new()
            .with_variable("A", "{{B}}")
            .with_variable("B", "x");
        assert_eq!(ctx.render("{{A}}"), "{{B}}");
    }

    #[test]
    fn unknown_placeholders_are_reported() {
        let ctx = RenderContext::new().with_variable("KNOWN", "ok");
        let out = ctx.render("{{KNOWN}} {{MISSING}}");
        assert_eq!(out, "ok {{MISSING}}");
        assert_eq!(unresolved_placeholder(&out), Some("{{MISSING}}"));
        assert_eq!(unresolved_placeholder("ok"), None);
        assert_eq!(unresolved_placeholder("open {{ end"), Some("{{ end"));
    }
}

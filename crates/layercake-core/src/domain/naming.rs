//! Identifier normalization for resource and field names.
//!
//! Two casings matter to the scaffolder:
//!
//! | Function    | Input            | Output        | Used for                     |
//! |-------------|------------------|---------------|------------------------------|
//! | `to_snake`  | `"MyBook"`       | `"my_book"`   | module, file and field names |
//! | `to_pascal` | `"my_book"`      | `"MyBook"`    | type names                   |
//!
//! Both are pure and never fail. Empty input yields empty output.

/// Convert a raw name to `snake_case`.
///
/// ## Rules
///
/// 1. Trim surrounding whitespace
/// 2. Collapse every run of whitespace or `-` into a single `_`
/// 3. Insert `_` between a lowercase letter or digit and a following uppercase letter
/// 4. Lowercase everything
///
/// Existing underscores are kept as-is, so `to_snake` is idempotent.
/// Runs of capitals are not split: `"HTTPServer"` becomes `"httpserver"`.
pub fn to_snake(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 4);
    let mut prev: Option<char> = None;
    let mut in_separator = false;

    for c in raw.trim().chars() {
        if c.is_whitespace() || c == '-' {
            if !in_separator {
                out.push('_');
                in_separator = true;
            }
            prev = Some('_');
            continue;
        }
        in_separator = false;

        if c.is_ascii_uppercase()
            && prev.is_some_and(|p| p.is_ascii_lowercase() || p.is_ascii_digit())
        {
            out.push('_');
        }
        out.extend(c.to_lowercase());
        prev = Some(c);
    }

    out
}

/// Convert a raw name to `PascalCase`.
///
/// Splits on runs of `_`, `-` and whitespace, then capitalizes each piece:
/// first character uppercased, the rest lowercased. `"my_book"` becomes
/// `"MyBook"` but `"MyBook"` becomes `"Mybook"`; feed it the output of
/// [`to_snake`] when the raw name may carry camel humps.
pub fn to_pascal(raw: &str) -> String {
    raw.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|piece| !piece.is_empty())
        .map(capitalize)
        .collect()
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut out = String::with_capacity(word.len());
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
            out
        }
        None => String::new(),
    }
}

/// Words that cannot be used as plain Rust identifiers.
const RESERVED: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "gen", "if", "impl", "in", "let", "loop", "match", "mod",
    "move", "mut", "pub", "ref", "return", "self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final",
    "macro", "override", "priv", "typeof", "unsized", "virtual", "yield", "try",
];

/// Why `ident` cannot name a generated module or field, if it can't.
///
/// Accepts ASCII `[a-z_][a-z0-9_]*` only; the scaffolder always feeds it
/// `to_snake` output.
pub fn identifier_problem(ident: &str) -> Option<&'static str> {
    let mut chars = ident.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return Some("name is empty"),
    };
    if !(first.is_ascii_lowercase() || first == '_') {
        return Some("must start with a letter or underscore");
    }
    if !chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_') {
        return Some("may only contain letters, digits and underscores");
    }
    if ident.chars().all(|c| c == '_') {
        return Some("must contain at least one letter");
    }
    if RESERVED.contains(&ident) {
        return Some("is a reserved Rust keyword");
    }
    None
}

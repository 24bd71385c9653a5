//! Case conversion for package names.
//! Derives the canonical camel/kebab/pascal/snake/title renderings of an
//! identifier, used to parameterize generated file names and contents.

use serde::Serialize;

/// All canonical case forms of a single identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseForms {
    pub camel: String,
    pub kebab: String,
    pub pascal: String,
    pub snake: String,
    pub title: String,
}

impl CaseForms {
    /// Derives every case form from the given identifier.
    pub fn of(input: &str) -> Self {
        Self {
            camel: camel_case(input),
            kebab: kebab_case(input),
            pascal: pascal_case(input),
            snake: snake_case(input),
            title: title_case(input),
        }
    }
}

/// Converts a string to snake_case.
///
/// A delimiter is inserted before every upper-case letter, the string is
/// lower-cased, every run of non-alphanumeric characters collapses to a
/// single underscore, and leading/trailing underscores are stripped.
///
/// An all-caps run without separators splits per letter:
/// `snake_case("FOOBAR") == "f_o_o_b_a_r"`.
pub fn snake_case(input: &str) -> String {
    let mut expanded = String::with_capacity(input.len() * 2);
    for ch in input.chars() {
        if ch.is_uppercase() {
            expanded.push(' ');
        }
        for lowered in ch.to_lowercase() {
            expanded.push(lowered);
        }
    }

    let mut out = String::with_capacity(expanded.len());
    for ch in expanded.chars() {
        if ch.is_alphanumeric() {
            out.push(ch);
        } else if !out.is_empty() && !out.ends_with('_') {
            out.push('_');
        }
    }
    out.truncate(out.trim_end_matches('_').len());
    out
}

/// Converts a string to kebab-case. Same tokenization as [`snake_case`]
/// with the delimiter swapped.
pub fn kebab_case(input: &str) -> String {
    snake_case(input).replace('_', "-")
}

/// Converts a string to camelCase: kebab-case with every delimiter dropped
/// and the character following it upper-cased.
pub fn camel_case(input: &str) -> String {
    let kebab = kebab_case(input);
    let mut out = String::with_capacity(kebab.len());
    let mut upper_next = false;
    for ch in kebab.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Converts a string to PascalCase: camelCase with the first character
/// upper-cased.
pub fn pascal_case(input: &str) -> String {
    let camel = camel_case(input);
    let mut chars = camel.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => camel,
    }
}

/// Converts a string to Title Case: PascalCase with a space inserted before
/// every upper-case letter, trimmed.
pub fn title_case(input: &str) -> String {
    let pascal = pascal_case(input);
    let mut out = String::with_capacity(pascal.len() * 2);
    for ch in pascal.chars() {
        if ch.is_uppercase() {
            out.push(' ');
        }
        out.push(ch);
    }
    out.trim().to_string()
}

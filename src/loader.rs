//! Template file loading.
//! Walks a template subtree, renders every file's name and contents through
//! the variable context, and tags the results with the subtree's file kind.

use crate::constants::TEMPLATE_SUFFIX;
use crate::error::{Error, Result};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Classification of a rendered file by its originating subtree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Seed file, copied once and then freely edited by the end user
    Scaffolding,
    /// Managed file, regenerated and overwritten on every run
    Generated,
}

/// A template file after variable substitution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    /// Path relative to the target project root
    pub file_name: String,
    pub contents: String,
    pub kind: FileKind,
}

/// Strips the reserved template suffix from a file name, if present.
/// The match is case-insensitive.
fn template_stem(file_name: &str) -> Option<&str> {
    let bytes = file_name.as_bytes();
    let suffix = TEMPLATE_SUFFIX.as_bytes();
    if bytes.len() > suffix.len()
        && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    {
        Some(&file_name[..file_name.len() - suffix.len()])
    } else {
        None
    }
}

/// Prefixes a render failure with the offending template path.
fn render_named(
    renderer: &dyn TemplateRenderer,
    template: &str,
    context: &serde_json::Value,
    origin: &str,
) -> Result<String> {
    renderer.render(template, context).map_err(|err| match err {
        Error::TemplateError(message) => {
            Error::TemplateError(format!("in '{origin}': {message}"))
        }
        other => other,
    })
}

/// Recursively loads and renders every regular file under `root`.
///
/// Directories are traversed but never emitted, and a missing `root` yields
/// an empty result rather than an error. Both the relative path and the
/// contents of every file pass through the renderer; files carrying the
/// reserved template suffix have it stripped from the name first. A file
/// name without variable syntax passes through the renderer unchanged.
///
/// # Errors
/// * `Error::TemplateError` naming the offending file on any render failure;
///   there is no partial result
/// * `Error::IoError` if an existing file cannot be read
pub fn load_files(
    root: &Path,
    context: &serde_json::Value,
    kind: FileKind,
    renderer: &dyn TemplateRenderer,
) -> Result<Vec<RenderedFile>> {
    if !root.is_dir() {
        debug!("Template directory {} does not exist", root.display());
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if entry.file_type().is_dir() {
            continue;
        }
        let relative_path = entry
            .path()
            .strip_prefix(root)
            .map_err(|e| Error::ConfigError(e.to_string()))?;
        let relative_path = relative_path.to_str().ok_or_else(|| {
            Error::ConfigError(format!(
                "non-UTF-8 template path: '{}'",
                relative_path.display()
            ))
        })?;

        debug!("Rendering template file: {}", relative_path);

        let raw_contents = fs::read_to_string(entry.path())?;
        let source_name = template_stem(relative_path).unwrap_or(relative_path);
        files.push(RenderedFile {
            file_name: render_named(renderer, source_name, context, relative_path)?,
            contents: render_named(renderer, &raw_contents, context, relative_path)?,
            kind,
        });
    }
    Ok(files)
}

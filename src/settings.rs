//! Settings loading orchestration.
//! Combines specifier parsing, dependency squashing, and template file
//! loading into the settings object a project is constructed from.

use crate::cases::CaseForms;
use crate::constants::{
    BASE_DEPENDENCIES, CASE_FORMS_KEY, DEFAULT_ARTIFACTS_DIR, ENGINE_DEPENDENCIES,
    GENERATED_DIR, README_FILE, SCAFFOLDING_DIR, SELF_PACKAGE,
};
use crate::error::{Error, Result};
use crate::loader::{load_files, FileKind, RenderedFile};
use crate::options::{ProjectOptions, ReadmeOptions};
use crate::package::PackageSpecifier;
use crate::renderer::TemplateRenderer;
use crate::squash::{squash_by_name, squash_packages};
use log::debug;
use std::path::Path;

/// The full plan for constructing a project: augmented options plus the
/// rendered template files. Consumed exactly once by the caller.
#[derive(Debug)]
pub struct ProjectSettings {
    pub options: ProjectOptions,
    pub files: Vec<RenderedFile>,
}

/// Builds the variable context: the serialized options object with the
/// derived case forms under the reserved key.
///
/// # Errors
/// * `Error::ConfigError` if a caller-supplied field collides with the
///   reserved case-forms key
fn build_context(
    options: &ProjectOptions,
    case_forms: &CaseForms,
) -> Result<serde_json::Value> {
    let serialized = serde_json::to_value(options)
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    let mut context = match serialized {
        serde_json::Value::Object(map) => map,
        other => {
            return Err(Error::ConfigError(format!(
                "project options serialized to a non-object value: {other}"
            )))
        }
    };
    if context.contains_key(CASE_FORMS_KEY) {
        return Err(Error::ConfigError(format!(
            "option field '{CASE_FORMS_KEY}' collides with the reserved case-forms key"
        )));
    }
    let forms = serde_json::to_value(case_forms)
        .map_err(|e| Error::ConfigError(e.to_string()))?;
    context.insert(CASE_FORMS_KEY.to_string(), forms);
    Ok(serde_json::Value::Object(context))
}

/// Loads project settings from a template tree.
///
/// Derives the package's case forms from `options.name`, merges the
/// framework baseline dependencies with the caller's lists (squashing each
/// list independently), renders the `scaffolding` and `generated` subtrees
/// of `template_root`, and lifts the rendered readme into the returned
/// options so the host framework can consume it at construction time.
///
/// `meta_project` marks an invocation that produces a template-generator
/// project: the template-engine dependencies are bundled in, and a dev
/// dependency on this package itself is promoted into the runtime
/// dependency list so the generated project depends on it as a peer rather
/// than a dev tool.
///
/// # Errors
/// * `Error::InvalidPackageSpecifier` on any malformed dependency string
/// * `Error::TemplateError` on any render failure
/// * `Error::ConfigError` on invalid options
pub fn load_settings(
    options: ProjectOptions,
    template_root: &Path,
    meta_project: bool,
    renderer: &dyn TemplateRenderer,
) -> Result<ProjectSettings> {
    let package: PackageSpecifier = options.name.parse()?;
    let case_forms = CaseForms::of(&package.name);

    let mut base_dependencies: Vec<String> =
        BASE_DEPENDENCIES.iter().map(|dep| dep.to_string()).collect();
    let engine_dependencies: Vec<String> = if meta_project {
        ENGINE_DEPENDENCIES.iter().map(|dep| dep.to_string()).collect()
    } else {
        Vec::new()
    };

    let mut dev_deps = squash_by_name(
        options
            .dev_deps
            .iter()
            .map(|spec| spec.parse())
            .collect::<Result<Vec<PackageSpecifier>>>()?,
    );
    if meta_project {
        if let Some(promoted) = dev_deps.shift_remove(SELF_PACKAGE) {
            debug!("Promoting dev dependency '{promoted}' into runtime dependencies");
            base_dependencies.push(promoted.to_string());
        }
    }

    let mut augmented = options;

    let deps: Vec<String> = augmented
        .deps
        .iter()
        .chain(engine_dependencies.iter())
        .chain(base_dependencies.iter())
        .cloned()
        .collect();
    let peer_deps: Vec<String> = augmented
        .peer_deps
        .iter()
        .chain(base_dependencies.iter())
        .cloned()
        .collect();
    let bundled_deps: Vec<String> = augmented
        .bundled_deps
        .iter()
        .chain(engine_dependencies.iter())
        .cloned()
        .collect();
    augmented.deps = squash_packages(&deps)?;
    augmented.peer_deps = squash_packages(&peer_deps)?;
    augmented.bundled_deps = squash_packages(&bundled_deps)?;
    augmented.dev_deps = dev_deps.into_values().map(|spec| spec.to_string()).collect();

    // Policy fields: the artifacts directory always wins over a
    // caller-supplied output directory, and declaration output is disabled.
    // Sample code is suppressed; the scaffolding subtree owns source stubs.
    let mut compiler = augmented.compiler.take().unwrap_or_default();
    compiler.out_dir = Some(
        augmented
            .artifacts_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_ARTIFACTS_DIR.to_string()),
    );
    compiler.declarations = Some(false);
    augmented.compiler = Some(compiler);
    augmented.sample_code = Some(false);

    let context = build_context(&augmented, &case_forms)?;

    let mut files = load_files(
        &template_root.join(SCAFFOLDING_DIR),
        &context,
        FileKind::Scaffolding,
        renderer,
    )?;
    files.extend(load_files(
        &template_root.join(GENERATED_DIR),
        &context,
        FileKind::Generated,
        renderer,
    )?);
    debug!("Loaded {} template files from {}", files.len(), template_root.display());

    // The host framework needs the readme at construction time, before any
    // individual file is registered, so it travels in the options instead
    // of the file list.
    if let Some(position) = files.iter().position(|file| file.file_name == README_FILE) {
        let readme = files.remove(position);
        augmented.readme = Some(ReadmeOptions { contents: Some(readme.contents) });
    }

    Ok(ProjectSettings { options: augmented, files })
}

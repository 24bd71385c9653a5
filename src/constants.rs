//! Common constants used throughout the Stencil library.

/// Template subtree holding seed files the end user may freely edit
pub const SCAFFOLDING_DIR: &str = "scaffolding";

/// Template subtree holding managed files regenerated on every run
pub const GENERATED_DIR: &str = "generated";

/// File-name suffix marking a file whose name needs suffix-stripping
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Placeholder file name used only to keep empty template directories
/// present in version control; never materialized
pub const SENTINEL_FILE: &str = ".seed";

/// The readme is consumed at project-construction time, not applied as a file
pub const README_FILE: &str = "README.md";

/// Reserved variable-context key carrying the derived case forms
pub const CASE_FORMS_KEY: &str = "_name";

/// Default build-artifacts directory forced into compiler options
pub const DEFAULT_ARTIFACTS_DIR: &str = "dist";

/// Baseline runtime dependencies every generated project receives
pub const BASE_DEPENDENCIES: [&str; 1] = ["scaffold@~0"];

/// Template-engine dependencies bundled into meta-project templates
pub const ENGINE_DEPENDENCIES: [&str; 1] = ["minijinja@~2"];

/// This package's own name, as seen in generated projects' dependency lists
pub const SELF_PACKAGE: &str = "stencil";

/// Generated files with these extensions are excluded from lint checking
pub const LINT_EXCLUDED_EXTENSIONS: [&str; 2] = [".ts", ".js"];

/// Orgs publishing type-declaration stubs. A stub is a distinct package
/// from the implementation it describes, not a fork of it, so these orgs
/// stay part of package identity when squashing.
pub const TYPE_STUB_ORGS: [&str; 2] = ["types", "t"];

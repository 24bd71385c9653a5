//! Stencil generates a project skeleton from a template tree.
//! It renders template file names and contents through project-specific
//! variables, squashes dependency lists so each package appears exactly
//! once, and hands the resulting plan to a host project-model framework
//! for materialization.

/// File application through the narrow host-framework interface
pub mod applier;

/// Case conversion for package names
/// Derives camel/kebab/pascal/snake/title forms used as template variables
pub mod cases;

/// Reserved names and fixed dependency sets
pub mod constants;

/// Error types and handling for the Stencil library
pub mod error;

/// Template file loading
/// Walks the scaffolding and generated subtrees and renders every file
pub mod loader;

/// Typed project options with a pass-through bucket for host options
pub mod options;

/// Dependency specifier parsing and serialization
pub mod package;

/// Template rendering behind a narrow, substitutable trait
pub mod renderer;

/// Settings loading orchestration
/// Combines all components into the final project-construction plan
pub mod settings;

/// Dependency list squashing
/// Last declared value wins, first declared position wins
pub mod squash;

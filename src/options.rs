//! Typed project options.
//!
//! Every option the pipeline reads has a named field; anything else the
//! caller wants to hand through to the host framework goes into the `extra`
//! bucket untouched. Field names serialize in camelCase, which is the shape
//! template authors reference from templates.

use serde::{Deserialize, Serialize};

/// Shallow compiler configuration overrides.
///
/// `out_dir` and `declarations` are policy-controlled by the settings
/// loader; any other compiler switch the caller supplies rides along in
/// `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declarations: Option<bool>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Test-framework configuration overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestFrameworkOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runner: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Readme contents consumed by the host framework at construction time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadmeOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<String>,
}

/// Caller-supplied options for constructing a project from a template.
///
/// The settings loader returns an augmented copy of this structure with the
/// dependency lists squashed, policy fields forced, and the rendered readme
/// lifted in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectOptions {
    /// Project name as a dependency specifier, e.g. `@org/my-project`
    pub name: String,
    /// Runtime dependencies
    pub deps: Vec<String>,
    /// Development dependencies
    pub dev_deps: Vec<String>,
    /// Peer dependencies
    pub peer_deps: Vec<String>,
    /// Bundled dependencies
    pub bundled_deps: Vec<String>,
    /// Build-artifacts directory; forced into `compiler.out_dir`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifacts_dir: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub compiler: Option<CompilerOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_framework: Option<TestFrameworkOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readme: Option<ReadmeOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample_code: Option<bool>,
    /// Host-framework options the pipeline does not itself interpret
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

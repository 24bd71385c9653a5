use std::fs;
use std::path::Path;

use stencil::error::{Error, Result};
use stencil::loader::{load_files, FileKind, RenderedFile};
use stencil::renderer::{MiniJinjaRenderer, TemplateRenderer};
use tempfile::TempDir;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn context() -> serde_json::Value {
    serde_json::json!({
        "name": "foo-project",
        "_name": { "kebab": "foo-project", "title": "Foo Project" }
    })
}

#[test]
fn test_missing_directory_yields_empty_result() {
    let temp_dir = TempDir::new().unwrap();
    let renderer = MiniJinjaRenderer::new();

    let files = load_files(
        &temp_dir.path().join("does-not-exist"),
        &context(),
        FileKind::Scaffolding,
        &renderer,
    )
    .unwrap();
    assert!(files.is_empty());
}

#[test_log::test]
fn test_template_suffix_is_stripped_and_name_rendered() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "{{ _name.kebab }}.config.json.j2", r#"{"project": "{{ name }}"}"#);
    let renderer = MiniJinjaRenderer::new();

    let files =
        load_files(temp_dir.path(), &context(), FileKind::Generated, &renderer).unwrap();
    assert_eq!(
        files,
        vec![RenderedFile {
            file_name: "foo-project.config.json".to_string(),
            contents: r#"{"project": "foo-project"}"#.to_string(),
            kind: FileKind::Generated,
        }]
    );
}

#[test]
fn test_unmarked_files_are_still_rendered() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "docs/about.md", "About {{ _name.title }}\n");
    let renderer = MiniJinjaRenderer::new();

    let files =
        load_files(temp_dir.path(), &context(), FileKind::Scaffolding, &renderer).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].file_name, "docs/about.md");
    assert_eq!(files[0].contents, "About Foo Project\n");
    assert_eq!(files[0].kind, FileKind::Scaffolding);
}

#[test]
fn test_directories_are_traversed_but_not_emitted() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "a/b/c.txt", "deep");
    write(temp_dir.path(), "top.txt", "shallow");
    let renderer = MiniJinjaRenderer::new();

    let files =
        load_files(temp_dir.path(), &context(), FileKind::Scaffolding, &renderer).unwrap();
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    assert_eq!(names, ["a/b/c.txt", "top.txt"]);
}

#[test]
fn test_render_failure_names_the_offending_file() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "broken.txt", "{{ no_such_variable }}");
    let renderer = MiniJinjaRenderer::new();

    match load_files(temp_dir.path(), &context(), FileKind::Generated, &renderer) {
        Err(Error::TemplateError(message)) => assert!(message.contains("broken.txt")),
        other => panic!("expected TemplateError, got {other:?}"),
    }
}

/// A renderer stand-in proving the loader only orchestrates: it never
/// depends on the template grammar itself.
struct EchoRenderer;

impl TemplateRenderer for EchoRenderer {
    fn render(&self, template: &str, _context: &serde_json::Value) -> Result<String> {
        Ok(template.to_string())
    }
}

#[test]
fn test_loader_works_with_a_substitute_renderer() {
    let temp_dir = TempDir::new().unwrap();
    write(temp_dir.path(), "kept-verbatim.j2", "{{ not even valid {%");

    let files =
        load_files(temp_dir.path(), &context(), FileKind::Scaffolding, &EchoRenderer).unwrap();
    assert_eq!(files[0].file_name, "kept-verbatim");
    assert_eq!(files[0].contents, "{{ not even valid {%");
}

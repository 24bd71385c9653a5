//! File application.
//! Registers rendered template files on a live project through the narrow
//! host-framework interface.

use crate::constants::{LINT_EXCLUDED_EXTENSIONS, README_FILE, SENTINEL_FILE};
use crate::loader::{FileKind, RenderedFile};
use log::debug;
use std::ffi::OsStr;
use std::path::Path;

/// The host framework's project object, reduced to the four operations the
/// applier needs. Any project-model framework can satisfy this through an
/// adapter.
pub trait ProjectHost {
    /// Registers a freely-overwritable sample file by name and content.
    fn register_sample_file(&mut self, file_name: &str, contents: &str);

    /// Registers a strictly-managed file whose content is overwritten on
    /// every run.
    fn register_generated_file(&mut self, file_name: &str, contents: &str);

    /// Removes any existing registration for the given name.
    fn remove_file(&mut self, file_name: &str);

    /// Excludes a named file from lint checking.
    fn exclude_from_lint(&mut self, file_name: &str);
}

/// True for the placeholder entries that exist only to keep otherwise-empty
/// template directories present in version control.
fn is_sentinel(file_name: &str) -> bool {
    Path::new(file_name).file_name() == Some(OsStr::new(SENTINEL_FILE))
}

/// Registers every rendered file on the project, in list order.
///
/// The readme is skipped (the host consumes it from the options at
/// construction time), as are sentinel placeholders. Every other file
/// replaces any pre-existing registration under the same name; generated
/// source files are additionally excluded from lint checking, since their
/// content is owned by the template rather than the end user.
pub fn apply_files(project: &mut dyn ProjectHost, files: &[RenderedFile]) {
    for file in files {
        if file.file_name == README_FILE || is_sentinel(&file.file_name) {
            debug!("Skipping file: {}", file.file_name);
            continue;
        }
        project.remove_file(&file.file_name);
        match file.kind {
            FileKind::Scaffolding => {
                project.register_sample_file(&file.file_name, &file.contents);
            }
            FileKind::Generated => {
                project.register_generated_file(&file.file_name, &file.contents);
                if LINT_EXCLUDED_EXTENSIONS
                    .iter()
                    .any(|ext| file.file_name.ends_with(ext))
                {
                    project.exclude_from_lint(&file.file_name);
                }
            }
        }
    }
}

//! Dependency list squashing.
//!
//! Ensures that a package appears only once in a dependency list, using the
//! version that is last in the list. If a package appears under two
//! different orgs they are considered the same package, to allow for
//! overriding using forks. Type-stub orgs are the exception: `@types/foo`
//! describes `foo` but is not `foo`, so it squashes separately.

use crate::constants::TYPE_STUB_ORGS;
use crate::error::Result;
use crate::package::PackageSpecifier;
use indexmap::IndexMap;
use log::debug;

/// The key under which a specifier is deduplicated: the bare name, except
/// for type-stub packages which keep their org.
fn identity_key(specifier: &PackageSpecifier) -> String {
    match &specifier.org {
        Some(org) if TYPE_STUB_ORGS.contains(&org.as_str()) => {
            format!("@{org}/{}", specifier.name)
        }
        _ => specifier.name.clone(),
    }
}

/// Collapses specifiers by package identity into an insertion-ordered map.
///
/// Later occurrences overwrite earlier ones, but re-insertion under an
/// existing key does not move it: the surviving entry keeps the position of
/// the identity's first occurrence.
pub fn squash_by_name(
    specifiers: impl IntoIterator<Item = PackageSpecifier>,
) -> IndexMap<String, PackageSpecifier> {
    let mut squashed = IndexMap::new();
    for specifier in specifiers {
        if let Some(replaced) = squashed.insert(identity_key(&specifier), specifier) {
            debug!("Squashed duplicate dependency '{replaced}', keeping the later entry");
        }
    }
    squashed
}

/// Parses, squashes, and re-serializes a dependency list.
///
/// # Errors
/// * `Error::InvalidPackageSpecifier` if any entry fails to parse.
pub fn squash_packages<S: AsRef<str>>(packages: &[S]) -> Result<Vec<String>> {
    let parsed = packages
        .iter()
        .map(|spec| spec.as_ref().parse())
        .collect::<Result<Vec<PackageSpecifier>>>()?;
    Ok(squash_by_name(parsed)
        .into_values()
        .map(|specifier| specifier.to_string())
        .collect())
}

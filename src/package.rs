//! Parsing and serialization of dependency specifier strings.
//!
//! A specifier follows the `[@org/]name[@version]` grammar. Two specifiers
//! refer to the same package when their `name` fields are equal; org and
//! version are not part of package identity, which allows overriding a
//! dependency with a fork published under another org.

use crate::error::{Error, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// A structured dependency specifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageSpecifier {
    /// Namespace without the leading `@`, if the package is scoped
    pub org: Option<String>,
    /// Bare package name; never contains `/` or `@`
    pub name: String,
    /// Version constraint, if declared
    pub version: Option<String>,
}

fn specifier_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:@([^/@]+)/)?([^@/]+)(?:@(.+))?$")
            .expect("specifier grammar is a valid regex")
    })
}

impl FromStr for PackageSpecifier {
    type Err = Error;

    /// Parses a specifier string.
    ///
    /// # Errors
    /// * `Error::InvalidPackageSpecifier` when the string does not match the
    ///   grammar, e.g. a two-segment `org/name` without the leading `@`.
    fn from_str(spec: &str) -> Result<Self> {
        let captures = specifier_regex()
            .captures(spec)
            .ok_or_else(|| Error::InvalidPackageSpecifier(spec.to_string()))?;
        Ok(Self {
            org: captures.get(1).map(|m| m.as_str().to_string()),
            name: captures[2].to_string(),
            version: captures.get(3).map(|m| m.as_str().to_string()),
        })
    }
}

impl fmt::Display for PackageSpecifier {
    /// Serializes back to the `[@org/]name[@version]` wire format; the exact
    /// inverse of parsing.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(org) = &self.org {
            write!(f, "@{org}/")?;
        }
        write!(f, "{}", self.name)?;
        if let Some(version) = &self.version {
            write!(f, "@{version}")?;
        }
        Ok(())
    }
}

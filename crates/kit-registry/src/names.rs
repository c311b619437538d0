//! Component name checks

use kit_meta::RegistryIndexEntry;

use crate::{Error, Result};

/// Whether `name` is a well-formed component name: lowercase ASCII letters,
/// digits and `-`, not starting or ending with `-`.
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('-')
        && !name.ends_with('-')
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

/// Reject the request if any name is malformed, listing every offender.
pub fn validate_names(names: &[String]) -> Result<()> {
    let invalid: Vec<String> = names
        .iter()
        .filter(|name| !is_valid_name(name))
        .cloned()
        .collect();
    if invalid.is_empty() {
        Ok(())
    } else {
        Err(Error::InvalidNames { names: invalid })
    }
}

/// Reject the request if any name is missing from the index, listing every offender.
pub fn check_known(index: &[RegistryIndexEntry], names: &[String]) -> Result<()> {
    let unknown: Vec<String> = names
        .iter()
        .filter(|name| !index.iter().any(|entry| &entry.name == *name))
        .cloned()
        .collect();
    if unknown.is_empty() {
        Ok(())
    } else {
        Err(Error::UnknownComponents { names: unknown })
    }
}

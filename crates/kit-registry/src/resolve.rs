//! Registry dependency closure

use std::collections::{HashSet, VecDeque};

use kit_meta::RegistryItem;

use crate::names::is_valid_name;
use crate::source::RegistrySource;
use crate::{Error, Result};

/// Fetch the requested items and everything they transitively depend on.
///
/// Breadth-first, in discovery order, each item once. The first failing
/// lookup aborts the whole resolution. Dependency names come from registry
/// documents and are checked before they are fetched.
pub async fn resolve(
    source: &dyn RegistrySource,
    style: &str,
    names: &[String],
) -> Result<Vec<RegistryItem>> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<String> = VecDeque::new();
    for name in names {
        if seen.insert(name.clone()) {
            queue.push_back(name.clone());
        }
    }

    let mut resolved = Vec::new();
    while let Some(name) = queue.pop_front() {
        if !is_valid_name(&name) {
            return Err(Error::Resolve {
                source: Box::new(Error::InvalidNames {
                    names: vec![name.clone()],
                }),
                name,
            });
        }
        let item = source
            .fetch_item(style, &name)
            .await
            .map_err(|e| Error::Resolve {
                name: name.clone(),
                source: Box::new(e),
            })?;

        for dependency in &item.registry_dependencies {
            if seen.insert(dependency.clone()) {
                tracing::debug!(item = %name, %dependency, "Queued registry dependency");
                queue.push_back(dependency.clone());
            }
        }
        resolved.push(item);
    }

    Ok(resolved)
}

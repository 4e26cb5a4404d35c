//! Dependency resolution.
//!
//! Resolution is a post-order depth-first walk over `dependencies` edges:
//! an item's own dependencies are emitted before the item, so every
//! dependency precedes anything that needs it.
//!
//! The set of already-resolved names is passed in by the caller. Sharing
//! one set across several root items gives batch installs their dedup
//! (each dependency is copied once), and it is also what stops the walk on
//! cyclic graphs. Cycles are not reported; they yield some linearization.

use std::collections::HashSet;

use super::schema::{Registry, RegistryItem};

/// Compute the transitive dependencies of `item`, excluding `item` itself.
///
/// Names already in `resolved` are skipped, and every name visited is
/// added to it.
pub fn resolve_dependencies<'r>(
    registry: &'r Registry,
    item: &RegistryItem,
    resolved: &mut HashSet<String>,
) -> Vec<&'r RegistryItem> {
    let mut order = Vec::new();
    visit(registry, item, &item.name, resolved, &mut order);
    order
}

fn visit<'r>(
    registry: &'r Registry,
    item: &RegistryItem,
    root: &str,
    resolved: &mut HashSet<String>,
    order: &mut Vec<&'r RegistryItem>,
) {
    for name in &item.dependencies {
        if name == root || !resolved.insert(name.clone()) {
            continue;
        }

        // Closure is guaranteed by validation; a miss here means the
        // registry was assembled by hand.
        if let Some(dependency) = registry.find(name) {
            visit(registry, dependency, root, resolved, order);
            tracing::debug!("Resolved '{}' for '{}'", name, root);
            order.push(dependency);
        }
    }
}

/// One entry of an install plan.
#[derive(Debug, Clone, Copy)]
pub struct PlannedItem<'r> {
    /// The item to install.
    pub item: &'r RegistryItem,

    /// Whether the user asked for this item, as opposed to it being pulled
    /// in as a dependency.
    pub requested: bool,
}

/// Build the ordered install list for a batch of requested items.
///
/// Each root contributes its unresolved dependencies followed by itself.
/// Every item appears once.
pub fn plan_install<'r>(registry: &'r Registry, roots: &[&'r RegistryItem]) -> Vec<PlannedItem<'r>> {
    let requested: HashSet<&str> = roots.iter().map(|r| r.name.as_str()).collect();
    let mut resolved = HashSet::new();
    let mut seen = HashSet::new();
    let mut plan = Vec::new();

    let mut push = |item: &'r RegistryItem, plan: &mut Vec<PlannedItem<'r>>| {
        if seen.insert(item.name.as_str()) {
            plan.push(PlannedItem {
                item,
                requested: requested.contains(item.name.as_str()),
            });
        }
    };

    for &root in roots {
        for dependency in resolve_dependencies(registry, root, &mut resolved) {
            push(dependency, &mut plan);
        }
        push(root, &mut plan);
    }

    plan
}

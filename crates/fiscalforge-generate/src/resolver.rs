use std::collections::{BTreeSet, HashMap, HashSet};

use crate::errors::GenerationError;

/// Requires-edges between placeholder keys: a key maps to the keys whose
/// values must be generated before it.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    edges: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// The static graph used by the bundled templates. The access key
    /// embeds the issuer CNPJ, so it must be generated after it.
    pub fn standard() -> Self {
        let mut graph = Self::new();
        graph.add_dependency("accessKey", "emitCNPJ");
        graph
    }

    pub fn add_dependency(&mut self, key: impl Into<String>, requires: impl Into<String>) {
        self.edges.entry(key.into()).or_default().push(requires.into());
    }

    pub fn requires(&self, key: &str) -> &[String] {
        self.edges.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Depth-first topological sort with three-color marking.
///
/// Keys are visited in lexicographic order so the resulting total order is
/// deterministic for a fixed key set; only the dependency constraints are
/// part of the contract. Dependencies absent from `keys` are still emitted
/// so their values exist when a dependent key is generated. Fails with
/// [`GenerationError::CircularDependency`] the moment an in-progress key is
/// revisited.
pub fn dependency_order(
    keys: &BTreeSet<String>,
    graph: &DependencyGraph,
) -> Result<Vec<String>, GenerationError> {
    let mut sorted = Vec::with_capacity(keys.len());
    let mut done = HashSet::new();
    let mut in_progress = HashSet::new();

    for key in keys {
        visit(key, graph, &mut done, &mut in_progress, &mut sorted)?;
    }

    Ok(sorted)
}

fn visit(
    key: &str,
    graph: &DependencyGraph,
    done: &mut HashSet<String>,
    in_progress: &mut HashSet<String>,
    sorted: &mut Vec<String>,
) -> Result<(), GenerationError> {
    if in_progress.contains(key) {
        return Err(GenerationError::CircularDependency(key.to_string()));
    }
    if done.contains(key) {
        return Ok(());
    }

    in_progress.insert(key.to_string());
    for dependency in graph.requires(key) {
        visit(dependency, graph, done, in_progress, sorted)?;
    }
    in_progress.remove(key);

    done.insert(key.to_string());
    sorted.push(key.to_string());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key_set(keys: &[&str]) -> BTreeSet<String> {
        keys.iter().map(|k| k.to_string()).collect()
    }

    #[test]
    fn dependencies_come_first() {
        let keys = key_set(&["accessKey", "emitCNPJ", "natOp"]);
        let order = dependency_order(&keys, &DependencyGraph::standard()).unwrap();
        let cnpj = order.iter().position(|k| k == "emitCNPJ").unwrap();
        let access = order.iter().position(|k| k == "accessKey").unwrap();
        assert!(cnpj < access);
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn missing_dependency_is_emitted_anyway() {
        let keys = key_set(&["accessKey"]);
        let order = dependency_order(&keys, &DependencyGraph::standard()).unwrap();
        assert_eq!(order, ["emitCNPJ", "accessKey"]);
    }

    #[test]
    fn cycle_fails_and_names_a_key() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "A");
        let keys = key_set(&["A", "B"]);
        let err = dependency_order(&keys, &graph).unwrap_err();
        match err {
            GenerationError::CircularDependency(key) => {
                assert!(key == "A" || key == "B");
            }
            other => panic!("expected circular dependency, got {other}"),
        }
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "A");
        let err = dependency_order(&key_set(&["A"]), &graph).unwrap_err();
        assert!(matches!(err, GenerationError::CircularDependency(key) if key == "A"));
    }

    #[test]
    fn order_is_deterministic_for_a_fixed_key_set() {
        let keys = key_set(&["zeta", "alpha", "mid"]);
        let graph = DependencyGraph::new();
        let first = dependency_order(&keys, &graph).unwrap();
        let second = dependency_order(&keys, &graph).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, ["alpha", "mid", "zeta"]);
    }
}

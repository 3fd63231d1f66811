use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use rand::RngCore;
use regex::Regex;
use tracing::debug;

use crate::errors::GenerationError;
use crate::fields::{FieldContext, FieldRegistry};
use crate::options::{GenerateOption, GenerationConfig};
use crate::resolver::{DependencyGraph, dependency_order};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{%(\w+)%\}").expect("token pattern is valid"));

/// Resolves a template: extracts `{%key%}` placeholders, generates a value
/// for each key in dependency order, substitutes every token with its
/// XML-escaped value, prunes blocked elements and trims the result.
///
/// Pruning is lexical (tag-name matching), so blocking a container element
/// also discards anything nested inside it.
pub fn resolve_template(
    template: &str,
    registry: &FieldRegistry,
    rng: &mut dyn RngCore,
    options: impl IntoIterator<Item = GenerateOption>,
) -> Result<Vec<u8>, GenerationError> {
    let config = GenerationConfig::from_options(options);
    resolve_with_graph(template, &DependencyGraph::standard(), registry, rng, &config)
}

pub(crate) fn resolve_with_graph(
    template: &str,
    graph: &DependencyGraph,
    registry: &FieldRegistry,
    rng: &mut dyn RngCore,
    config: &GenerationConfig,
) -> Result<Vec<u8>, GenerationError> {
    let keys = extract_keys(template);
    let order = dependency_order(&keys, graph)?;

    let mut resolved: HashMap<String, String> = HashMap::with_capacity(order.len());
    for key in &order {
        let value = registry.dispatch(
            key,
            &FieldContext {
                config,
                resolved: &resolved,
            },
            rng,
        );
        resolved.insert(key.clone(), value);
    }

    let mut result = template.to_string();
    for key in &order {
        let token = format!("{{%{key}%}}");
        if let Some(value) = resolved.get(key) {
            result = result.replace(&token, &escape_xml(value));
        }
    }

    for blocked in &config.blocked_placeholders {
        result = prune_element(&result, blocked)?;
    }

    Ok(result.trim().as_bytes().to_vec())
}

/// Collects the unique placeholder keys of a template in one scan.
pub fn extract_keys(template: &str) -> BTreeSet<String> {
    TOKEN_RE
        .captures_iter(template)
        .map(|captures| captures[1].to_string())
        .collect()
}

/// Removes every `<key ...>...</key>` element together with the whitespace
/// around it so no blank line survives the removal. Keys that never appear
/// as elements are a no-op.
fn prune_element(text: &str, key: &str) -> Result<String, GenerationError> {
    let escaped = regex::escape(key);
    let pattern = format!(r"(?s)\s*<{escaped}\b[^>]*>.*?</{escaped}>\s*");
    let re = Regex::new(&pattern)?;
    let pruned = re.replace_all(text, "");
    if pruned == text {
        debug!(key, "blocked placeholder has no matching element");
    }
    Ok(pruned.into_owned())
}

/// Escapes the five XML-significant characters so generated free text
/// cannot corrupt the document structure.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn extract_finds_unique_word_keys() {
        let keys = extract_keys("<a>{%one%}</a><b>{%two%}</b><c>{%one%}</c>{%not-a-key%}");
        let expected: BTreeSet<String> = ["one", "two"].iter().map(|k| k.to_string()).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn extract_from_empty_template_is_empty() {
        assert!(extract_keys("").is_empty());
    }

    #[test]
    fn escape_covers_all_five_entities() {
        assert_eq!(escape_xml("P&G"), "P&amp;G");
        assert_eq!(escape_xml("a < b"), "a &lt; b");
        assert_eq!(escape_xml("a > b"), "a &gt; b");
        assert_eq!(escape_xml("\"quoted\""), "&quot;quoted&quot;");
        assert_eq!(escape_xml("John's"), "John&#39;s");
        assert_eq!(escape_xml("plain"), "plain");
    }

    #[test]
    fn cyclic_graph_aborts_with_no_output() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("A", "B");
        graph.add_dependency("B", "A");
        let registry = FieldRegistry::new();
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let result = resolve_with_graph(
            "<A>{%A%}</A><B>{%B%}</B>",
            &graph,
            &registry,
            &mut rng,
            &GenerationConfig::default(),
        );
        assert!(matches!(
            result,
            Err(GenerationError::CircularDependency(_))
        ));
    }

    #[test]
    fn prune_removes_element_and_surrounding_whitespace() {
        let text = "<Test>\n\t<Gone attr=\"x\">value</Gone>\n\t<Kept>v</Kept>\n</Test>";
        let pruned = prune_element(text, "Gone").unwrap();
        assert!(!pruned.contains("<Gone"));
        assert!(pruned.contains("<Kept>"));
        assert!(!pruned.lines().any(|line| line.trim().is_empty()));
    }
}

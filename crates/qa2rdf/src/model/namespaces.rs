//! Namespace prefix table and IRI compaction.

/// An insertion-ordered namespace prefix table.
///
/// Prefixes are declared in the Turtle output in the order they were added
/// here, so construction order is part of the output contract.
#[derive(Debug, Clone, Default)]
pub struct Namespaces {
    entries: Vec<(String, String)>,
}

impl Namespaces {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `prefix` for `namespace`, replacing an earlier declaration
    /// of the same prefix in place.
    pub fn declare(&mut self, prefix: impl Into<String>, namespace: impl Into<String>) {
        let prefix = prefix.into();
        let namespace = namespace.into();
        if let Some(entry) = self.entries.iter_mut().find(|(p, _)| *p == prefix) {
            entry.1 = namespace;
        } else {
            self.entries.push((prefix, namespace));
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Declared `(prefix, namespace)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(p, n)| (p.as_str(), n.as_str()))
    }

    /// Shortens an IRI to `prefix:local` using the longest matching
    /// namespace. Falls back to `<iri>` when no namespace is a prefix of the
    /// IRI or the remainder is not a valid short-form local name.
    pub fn compact(&self, iri: &str) -> String {
        let mut best: Option<(&str, &str)> = None;
        for (prefix, namespace) in self.iter() {
            if iri.starts_with(namespace)
                && best.is_none_or(|(_, prev)| namespace.len() > prev.len())
            {
                best = Some((prefix, namespace));
            }
        }
        if let Some((prefix, namespace)) = best {
            let local = &iri[namespace.len()..];
            if !local.is_empty()
                && local
                    .chars()
                    .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
            {
                return format!("{prefix}:{local}");
            }
        }
        format!("<{iri}>")
    }
}

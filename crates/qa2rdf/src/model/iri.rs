//! IRI minting for Q&A site entities.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::namespaces::Namespaces;

/// Characters that need percent-encoding in IRI path segments.
/// We keep alphanumeric, -, _, ., ~ as unreserved per RFC 3987.
const IRI_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'!')
    .add(b'"')
    .add(b'#')
    .add(b'$')
    .add(b'%')
    .add(b'&')
    .add(b'\'')
    .add(b'(')
    .add(b')')
    .add(b'*')
    .add(b'+')
    .add(b',')
    .add(b'/')
    .add(b':')
    .add(b';')
    .add(b'<')
    .add(b'=')
    .add(b'>')
    .add(b'?')
    .add(b'@')
    .add(b'[')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Generates consistent IRIs for the entities of one site dump.
///
/// All entity IRIs live under `<base>/<site>[-meta]/`; tags and badges get
/// their own sub-prefixes so they can be compacted with dedicated namespace
/// prefixes.
pub struct SiteIris {
    site_base: String,
    site_name: String,
}

impl SiteIris {
    pub fn new(base_uri: &str, site_name: &str, is_meta: bool) -> Self {
        let suffix = if is_meta { "-meta" } else { "" };
        Self {
            site_base: format!(
                "{}/{}{}/",
                base_uri.trim_end_matches('/'),
                Self::escape(site_name),
                suffix
            ),
            site_name: site_name.to_string(),
        }
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    /// Escape a string for use in an IRI path segment.
    fn escape(value: &str) -> String {
        utf8_percent_encode(value, IRI_ENCODE_SET).to_string()
    }

    /// IRI of the site itself.
    pub fn site_iri(&self) -> String {
        format!("{}site", self.site_base)
    }

    pub fn user_iri(&self, id: i64) -> String {
        format!("{}user{}", self.site_base, id)
    }

    pub fn post_iri(&self, id: i64) -> String {
        format!("{}post{}", self.site_base, id)
    }

    pub fn comment_iri(&self, id: i64) -> String {
        format!("{}comment{}", self.site_base, id)
    }

    pub fn tag_iri(&self, name: &str) -> String {
        format!("{}tag/{}", self.site_base, Self::escape(name))
    }

    pub fn badge_iri(&self, name: &str) -> String {
        format!("{}badge/{}", self.site_base, Self::escape(name))
    }

    /// Declares the site-scoped prefixes so entity IRIs compact to
    /// `se:user42`, `tag:rust`, `badge:Epic` forms.
    pub fn declare_namespaces(&self, namespaces: &mut Namespaces) {
        namespaces.declare("se", self.site_base.clone());
        namespaces.declare("tag", format!("{}tag/", self.site_base));
        namespaces.declare("badge", format!("{}badge/", self.site_base));
    }
}

//! Tests for the namespace prefix table, IRI compaction, and site IRI
//! minting.

use qa2rdf::model::{Namespaces, SiteIris};

fn table() -> Namespaces {
    let mut ns = Namespaces::new();
    ns.declare("ex", "http://example.org/");
    ns.declare("sub", "http://example.org/sub/");
    ns
}

#[test]
fn compact_shortens_with_matching_prefix() {
    assert_eq!(table().compact("http://example.org/thing"), "ex:thing");
}

#[test]
fn compact_prefers_longest_namespace() {
    assert_eq!(table().compact("http://example.org/sub/x"), "sub:x");
}

#[test]
fn compact_falls_back_for_unknown_namespace() {
    assert_eq!(
        table().compact("http://other.example/x"),
        "<http://other.example/x>"
    );
}

#[test]
fn compact_rejects_empty_local_name() {
    // The namespace IRI itself has no local part to shorten.
    assert_eq!(table().compact("http://example.org/"), "<http://example.org/>");
}

#[test]
fn compact_rejects_invalid_local_characters() {
    assert_eq!(
        table().compact("http://example.org/a/b"),
        "<http://example.org/a/b>"
    );
    assert_eq!(
        table().compact("http://example.org/a%20b"),
        "<http://example.org/a%20b>"
    );
}

#[test]
fn compact_allows_underscore_and_hyphen() {
    assert_eq!(table().compact("http://example.org/is-meta"), "ex:is-meta");
    assert_eq!(table().compact("http://example.org/up_votes"), "ex:up_votes");
}

#[test]
fn redeclaring_a_prefix_replaces_in_place() {
    let mut ns = table();
    ns.declare("ex", "http://replaced.example/");
    assert_eq!(ns.len(), 2);
    assert_eq!(ns.compact("http://replaced.example/x"), "ex:x");
    let order: Vec<&str> = ns.iter().map(|(p, _)| p).collect();
    assert_eq!(order, ["ex", "sub"]);
}

#[test]
fn site_iris_are_rooted_under_the_site() {
    let iris = SiteIris::new("http://qa.example/sites", "stackoverflow", false);
    assert_eq!(iris.site_iri(), "http://qa.example/sites/stackoverflow/site");
    assert_eq!(iris.user_iri(42), "http://qa.example/sites/stackoverflow/user42");
    assert_eq!(iris.post_iri(7), "http://qa.example/sites/stackoverflow/post7");
    assert_eq!(
        iris.comment_iri(9),
        "http://qa.example/sites/stackoverflow/comment9"
    );
}

#[test]
fn meta_sites_get_a_suffix() {
    let iris = SiteIris::new("http://qa.example/sites", "stackoverflow", true);
    assert_eq!(
        iris.site_iri(),
        "http://qa.example/sites/stackoverflow-meta/site"
    );
}

#[test]
fn trailing_slash_on_base_uri_is_ignored() {
    let with = SiteIris::new("http://qa.example/sites/", "so", false);
    let without = SiteIris::new("http://qa.example/sites", "so", false);
    assert_eq!(with.site_iri(), without.site_iri());
}

#[test]
fn tag_and_badge_names_are_percent_encoded() {
    let iris = SiteIris::new("http://qa.example/sites", "so", false);
    assert_eq!(iris.tag_iri("c#"), "http://qa.example/sites/so/tag/c%23");
    assert_eq!(
        iris.badge_iri("Nice Answer"),
        "http://qa.example/sites/so/badge/Nice%20Answer"
    );
}

#[test]
fn site_names_are_percent_encoded_in_the_base() {
    let iris = SiteIris::new("http://qa.example/sites", "sci fi", false);
    assert_eq!(iris.site_iri(), "http://qa.example/sites/sci%20fi/site");
}

#[test]
fn declared_site_prefixes_compact_entity_iris() {
    let iris = SiteIris::new("http://qa.example/sites", "so", false);
    let mut ns = Namespaces::new();
    iris.declare_namespaces(&mut ns);
    assert_eq!(ns.compact(&iris.user_iri(1)), "se:user1");
    assert_eq!(ns.compact(&iris.tag_iri("rust")), "tag:rust");
    assert_eq!(ns.compact(&iris.badge_iri("Epic")), "badge:Epic");
}

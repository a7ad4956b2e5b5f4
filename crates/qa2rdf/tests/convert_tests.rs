//! Tests for the dump converters: entity blocks, skip rules for malformed
//! records, and the ontology block.

use std::io::Write as _;
use std::path::PathBuf;

use qa2rdf::convert::{convert_dump, load_dump, parse_timestamp, write_ontology, LoadError};
use qa2rdf::model::{vocab, SiteIris};
use qa2rdf::writer::TurtleWriter;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("example_dump.json")
}

/// Converts the fixture dump in memory and returns the Turtle document.
fn convert_fixture() -> String {
    let dump = load_dump(&fixture_path()).expect("load fixture");
    let iris = SiteIris::new("http://qa.example/sites", &dump.site.name, dump.site.is_meta);
    let mut namespaces = vocab::default_namespaces();
    iris.declare_namespaces(&mut namespaces);

    let mut buf = Vec::new();
    let mut writer = TurtleWriter::new(&mut buf, namespaces).expect("create writer");
    convert_dump(&dump, &iris, &mut writer).expect("convert");
    writer.finish().expect("finish");
    String::from_utf8(buf).expect("valid UTF-8")
}

#[test]
fn site_block_carries_label_and_meta_flag() {
    let out = convert_fixture();
    assert!(
        out.contains(
            "\nse:site\n  a qa:Site ;\n  rdfs:label \"Example Q&A\" ;\n  qa:is-meta false .\n"
        ),
        "Expected site block: {out}"
    );
}

#[test]
fn user_block_carries_profile_fields() {
    let out = convert_fixture();
    assert!(out.contains("\nse:user1\n  a qa:User ;\n  qa:site se:site ;"), "{out}");
    assert!(out.contains("rdfs:label \"Alice\""), "{out}");
    assert!(out.contains("foaf:nick \"Alice\""), "{out}");
    assert!(
        out.contains("dc:date \"2015-03-01T10:00:00Z\"^^xsd:dateTime"),
        "{out}"
    );
    assert!(out.contains("qa:reputation 3211"), "{out}");
    assert!(out.contains("qa:location \"Berlin\""), "{out}");
    assert!(out.contains("foaf:homepage <https://alice.example/>"), "{out}");
    assert!(out.contains("qa:up-votes 50"), "{out}");
    assert!(
        out.contains("qa:last-seen \"2020-01-05T08:30:00.500Z\"^^xsd:dateTime"),
        "Expected millisecond timestamp: {out}"
    );
}

#[test]
fn absent_optional_fields_produce_no_predicates() {
    let out = convert_fixture();
    // Bob has no location, website, or vote counts.
    let bob = out
        .split("\nse:user2\n")
        .nth(1)
        .and_then(|rest| rest.split(" .\n").next())
        .expect("user2 block");
    assert!(!bob.contains("qa:location"), "Bob has no location: {bob}");
    assert!(!bob.contains("foaf:homepage"), "Bob has no homepage: {bob}");
    assert!(!bob.contains("qa:up-votes"), "Bob has no vote counts: {bob}");
}

#[test]
fn question_block_links_tags_answers_and_owner() {
    let out = convert_fixture();
    assert!(out.contains("\nse:post100\n  a qa:Question ;"), "{out}");
    assert!(out.contains("dc:title \"How do I parse Turtle?\""), "{out}");
    assert!(out.contains("qa:accepted se:post101"), "{out}");
    assert!(
        out.contains("qa:tag tag:rust, tag:parsing"),
        "Expected tag object list: {out}"
    );
    assert!(out.contains("qa:owner se:user1"), "{out}");
    assert!(out.contains("qa:viewCount 345"), "{out}");
}

#[test]
fn answer_block_links_back_to_question() {
    let out = convert_fixture();
    assert!(out.contains("\nse:post101\n  a qa:Answer ;"), "{out}");
    assert!(out.contains("qa:parent se:post100"), "{out}");
}

#[test]
fn unsupported_post_types_are_skipped() {
    let out = convert_fixture();
    assert!(!out.contains("se:post102"), "Wiki post must be skipped: {out}");
}

#[test]
fn comment_block_is_complete() {
    let out = convert_fixture();
    let expected = "\nse:comment1000\n  a qa:Comment ;\n  qa:site se:site ;\n  qa:parent se:post100 ;\n  qa:owner se:user2 ;\n  dc:description \"Nice question\" ;\n  qa:score 3 ;\n  dc:date \"2019-06-01T12:30:00Z\"^^xsd:dateTime .\n";
    assert!(out.contains(expected), "Expected comment block: {out}");
}

#[test]
fn tag_block_references_excerpt_and_wiki_posts() {
    let out = convert_fixture();
    let expected = "\ntag:rust\n  a qa:Tag ;\n  rdfs:label \"rust\" ;\n  qa:site se:site ;\n  qa:tag-excerpt se:post10 ;\n  qa:tag-description se:post11 .\n";
    assert!(out.contains(expected), "Expected tag block: {out}");
}

#[test]
fn badge_entity_is_written_once_awards_are_anonymous() {
    let out = convert_fixture();
    assert_eq!(
        out.matches("\nbadge:Epic\n").count(),
        1,
        "Badge entity must be written exactly once: {out}"
    );
    assert_eq!(
        out.matches("qa:badge badge:Epic").count(),
        2,
        "Each award references the badge: {out}"
    );
    let award = "\n[\n  qa:badge badge:Epic ;\n  qa:owner se:user1 ;\n  dc:date \"2018-02-03T04:05:06Z\"^^xsd:dateTime\n] .\n";
    assert!(out.contains(award), "Expected anonymous award block: {out}");
}

#[test]
fn ontology_block_describes_classes_and_properties() {
    let mut buf = Vec::new();
    let mut writer = TurtleWriter::new(&mut buf, vocab::default_namespaces()).unwrap();
    write_ontology(&mut writer).expect("write ontology");
    writer.finish().unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert!(
        out.contains("\n<http://qa.example/ontology>\n  a owl:Ontology ;"),
        "{out}"
    );
    assert!(
        out.contains(
            "\nqa:Question\n  a owl:Class ;\n  rdfs:label \"question\" ;\n  rdfs:subClassOf qa:Post .\n"
        ),
        "{out}"
    );
    assert!(
        out.contains("\nqa:owner\n  a owl:ObjectProperty ;"),
        "{out}"
    );
    // Multi-class domains become an anonymous owl:unionOf class.
    assert!(
        out.contains(
            "\n  rdfs:domain [\n    a owl:Class ;\n    owl:unionOf ( qa:User qa:Post qa:Comment qa:Tag )\n  ] ;\n  rdfs:range qa:Site .\n"
        ),
        "{out}"
    );
    assert!(
        out.contains("\nqa:reputation\n  a owl:DatatypeProperty ;\n  rdfs:domain qa:User .\n"),
        "{out}"
    );
}

#[test]
fn convert_reports_per_table_counts() {
    let dump = load_dump(&fixture_path()).expect("load fixture");
    let iris = SiteIris::new("http://qa.example/sites", &dump.site.name, dump.site.is_meta);
    let mut namespaces = vocab::default_namespaces();
    iris.declare_namespaces(&mut namespaces);

    let mut buf = Vec::new();
    let mut writer = TurtleWriter::new(&mut buf, namespaces).unwrap();
    let stats = convert_dump(&dump, &iris, &mut writer).expect("convert");
    writer.finish().unwrap();

    assert_eq!(stats.users, 2);
    assert_eq!(stats.tags, 2);
    assert_eq!(stats.badges, 2);
    assert_eq!(stats.posts, 2, "the wiki post does not count");
    assert_eq!(stats.comments, 1);
    assert_eq!(stats.skipped, 1, "the wiki post is skipped");
}

#[test]
fn timestamps_parse_with_and_without_fraction() {
    let ts = parse_timestamp("2008-07-31T21:42:52.667").expect("fractional");
    assert_eq!(ts.to_rfc3339(), "2008-07-31T21:42:52.667+00:00");
    let ts = parse_timestamp("2008-07-31T21:42:52").expect("whole-second");
    assert_eq!(ts.to_rfc3339(), "2008-07-31T21:42:52+00:00");
    assert!(parse_timestamp("last tuesday").is_none());
    assert!(parse_timestamp("2008-07-31").is_none());
}

#[test]
fn load_dump_reports_missing_file() {
    let err = load_dump(&PathBuf::from("/nonexistent/dump.json")).unwrap_err();
    assert!(matches!(err, LoadError::Io(_)), "Expected Io error, got {err:?}");
}

#[test]
fn load_dump_reports_invalid_json() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(b"{ not json").expect("write");
    let err = load_dump(file.path()).unwrap_err();
    assert!(matches!(err, LoadError::Json(_)), "Expected Json error, got {err:?}");
}

#[test]
fn records_missing_required_ids_are_skipped() {
    let json = r#"{
        "Site": { "Name": "tiny" },
        "Users": [ { "DisplayName": "ghost" }, { "Id": 5, "DisplayName": "real" } ],
        "Badges": [ { "Name": "Orphan" } ]
    }"#;
    let dump: qa2rdf::convert::SiteDump = serde_json::from_str(json).expect("parse");
    let iris = SiteIris::new("http://qa.example/sites", "tiny", false);
    let mut namespaces = vocab::default_namespaces();
    iris.declare_namespaces(&mut namespaces);

    let mut buf = Vec::new();
    let mut writer = TurtleWriter::new(&mut buf, namespaces).unwrap();
    convert_dump(&dump, &iris, &mut writer).expect("convert");
    writer.finish().unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert!(!out.contains("ghost"), "Id-less user must be skipped: {out}");
    assert!(out.contains("\nse:user5\n"), "Valid user must be kept: {out}");
    assert!(!out.contains("Orphan"), "User-less badge must be skipped: {out}");
}

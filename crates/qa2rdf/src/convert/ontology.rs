//! Self-describing ontology block written at the top of each document.

use std::io::Write;

use crate::model::vocab::{qa, standard};
use crate::writer::{Result, Term, TurtleWriter};

/// Writes the `qa:` ontology: the ontology header, the class hierarchy, and
/// the property declarations with their domains and ranges.
pub fn write_ontology<W: Write>(w: &mut TurtleWriter<W>) -> Result<()> {
    w.start_triple(qa::NS.trim_end_matches('#'))?;
    w.add_to_triple(standard::RDF_TYPE, [Term::iri(standard::OWL_ONTOLOGY)])?;
    w.add_to_triple(standard::DC_TITLE, ["Q&A site dump ontology"])?;

    write_class(w, qa::SITE, "Q&A site", None)?;
    write_class(w, qa::USER, "registered user", None)?;
    write_class(w, qa::POST, "post", None)?;
    write_class(w, qa::QUESTION, "question", Some(qa::POST))?;
    write_class(w, qa::ANSWER, "answer", Some(qa::POST))?;
    write_class(w, qa::COMMENT, "comment", None)?;
    write_class(w, qa::TAG, "tag", None)?;
    write_class(w, qa::BADGE, "badge", None)?;

    let entities = [qa::USER, qa::POST, qa::COMMENT, qa::TAG];
    write_object_property(w, qa::SITE_PROP, &entities, &[qa::SITE])?;
    write_object_property(w, qa::OWNER, &[qa::POST, qa::COMMENT], &[qa::USER])?;
    write_object_property(w, qa::PARENT, &[qa::ANSWER, qa::COMMENT], &[qa::POST])?;
    write_object_property(w, qa::ACCEPTED_ANSWER, &[qa::QUESTION], &[qa::ANSWER])?;
    write_object_property(w, qa::TAG_PROP, &[qa::QUESTION], &[qa::TAG])?;
    write_object_property(w, qa::TAG_EXCERPT, &[qa::TAG], &[qa::POST])?;
    write_object_property(w, qa::TAG_DESCRIPTION, &[qa::TAG], &[qa::POST])?;
    write_object_property(w, qa::BADGE_PROP, &[], &[qa::BADGE])?;

    write_datatype_property(w, qa::SCORE, &[qa::POST, qa::COMMENT])?;
    write_datatype_property(w, qa::VIEW_COUNT, &[qa::USER, qa::POST])?;
    write_datatype_property(w, qa::FAVORITE_COUNT, &[qa::POST])?;
    write_datatype_property(w, qa::REPUTATION, &[qa::USER])?;
    write_datatype_property(w, qa::LOCATION, &[qa::USER])?;
    write_datatype_property(w, qa::UP_VOTES, &[qa::USER])?;
    write_datatype_property(w, qa::DOWN_VOTES, &[qa::USER])?;
    write_datatype_property(w, qa::LAST_SEEN, &[qa::USER])?;
    write_datatype_property(w, qa::LAST_EDITED, &[qa::POST])?;
    write_datatype_property(w, qa::LAST_ACTIVITY, &[qa::POST])?;
    write_datatype_property(w, qa::IS_META, &[qa::SITE])?;

    Ok(())
}

fn write_class<W: Write>(
    w: &mut TurtleWriter<W>,
    class: &str,
    label: &str,
    super_class: Option<&str>,
) -> Result<()> {
    w.start_triple(class)?;
    w.add_to_triple(standard::RDF_TYPE, [Term::iri(standard::OWL_CLASS)])?;
    w.add_to_triple(standard::RDFS_LABEL, [label])?;
    if let Some(super_class) = super_class {
        w.add_to_triple(standard::RDFS_SUB_CLASS_OF, [Term::iri(super_class)])?;
    }
    Ok(())
}

fn write_object_property<W: Write>(
    w: &mut TurtleWriter<W>,
    property: &str,
    domain: &[&str],
    range: &[&str],
) -> Result<()> {
    w.start_triple(property)?;
    w.add_to_triple(
        standard::RDF_TYPE,
        [Term::iri(standard::OWL_OBJECT_PROPERTY)],
    )?;
    write_classes(w, standard::RDFS_DOMAIN, domain)?;
    write_classes(w, standard::RDFS_RANGE, range)?;
    Ok(())
}

fn write_datatype_property<W: Write>(
    w: &mut TurtleWriter<W>,
    property: &str,
    domain: &[&str],
) -> Result<()> {
    w.start_triple(property)?;
    w.add_to_triple(
        standard::RDF_TYPE,
        [Term::iri(standard::OWL_DATATYPE_PROPERTY)],
    )?;
    write_classes(w, standard::RDFS_DOMAIN, domain)?;
    Ok(())
}

/// A single class is referenced directly; several become an anonymous
/// `owl:unionOf` class with the members as an RDF collection.
fn write_classes<W: Write>(w: &mut TurtleWriter<W>, predicate: &str, classes: &[&str]) -> Result<()> {
    match classes {
        [] => Ok(()),
        [class] => w.add_to_triple(predicate, [Term::iri(*class)]),
        members => {
            w.add_anonymous_to_triple(predicate)?;
            w.add_to_triple(standard::RDF_TYPE, [Term::iri(standard::OWL_CLASS)])?;
            w.add_collection_to_triple(
                standard::OWL_UNION_OF,
                members.iter().map(|class| Term::iri(*class)),
            )?;
            w.finish_anonymous_node()
        }
    }
}

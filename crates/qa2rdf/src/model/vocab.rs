//! RDF vocabulary constants for the Q&A dump ontology.
//!
//! - `qa:` prefix (http://qa.example/ontology#) -- Q&A domain classes and
//!   predicates
//! - standard RDF/RDFS/OWL/XSD/DC/FOAF terms used by the writer, the
//!   converters, and the ontology block

use super::namespaces::Namespaces;

/// Standard namespace URIs and terms.
pub mod standard {
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const DC: &str = "http://purl.org/dc/elements/1.1/";
    pub const FOAF: &str = "http://xmlns.com/foaf/0.1/";

    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    pub const RDFS_DOMAIN: &str = "http://www.w3.org/2000/01/rdf-schema#domain";
    pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
    pub const XSD_DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const OWL_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const OWL_DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const DC_TITLE: &str = "http://purl.org/dc/elements/1.1/title";
    pub const DC_DATE: &str = "http://purl.org/dc/elements/1.1/date";
    pub const DC_DESCRIPTION: &str = "http://purl.org/dc/elements/1.1/description";
    pub const FOAF_NICK: &str = "http://xmlns.com/foaf/0.1/nick";
    pub const FOAF_HOMEPAGE: &str = "http://xmlns.com/foaf/0.1/homepage";
}

/// Q&A domain ontology (`qa:` prefix).
pub mod qa {
    pub const PREFIX: &str = "qa";
    pub const NS: &str = "http://qa.example/ontology#";

    // Classes
    pub const SITE: &str = "http://qa.example/ontology#Site";
    pub const USER: &str = "http://qa.example/ontology#User";
    pub const POST: &str = "http://qa.example/ontology#Post";
    pub const QUESTION: &str = "http://qa.example/ontology#Question";
    pub const ANSWER: &str = "http://qa.example/ontology#Answer";
    pub const COMMENT: &str = "http://qa.example/ontology#Comment";
    pub const TAG: &str = "http://qa.example/ontology#Tag";
    pub const BADGE: &str = "http://qa.example/ontology#Badge";

    // Predicates
    pub const SITE_PROP: &str = "http://qa.example/ontology#site";
    pub const OWNER: &str = "http://qa.example/ontology#owner";
    pub const SCORE: &str = "http://qa.example/ontology#score";
    pub const VIEW_COUNT: &str = "http://qa.example/ontology#viewCount";
    pub const FAVORITE_COUNT: &str = "http://qa.example/ontology#favoriteCount";
    pub const ACCEPTED_ANSWER: &str = "http://qa.example/ontology#accepted";
    pub const TAG_PROP: &str = "http://qa.example/ontology#tag";
    pub const TAG_EXCERPT: &str = "http://qa.example/ontology#tag-excerpt";
    pub const TAG_DESCRIPTION: &str = "http://qa.example/ontology#tag-description";
    pub const BADGE_PROP: &str = "http://qa.example/ontology#badge";
    pub const REPUTATION: &str = "http://qa.example/ontology#reputation";
    pub const LOCATION: &str = "http://qa.example/ontology#location";
    pub const UP_VOTES: &str = "http://qa.example/ontology#up-votes";
    pub const DOWN_VOTES: &str = "http://qa.example/ontology#down-votes";
    pub const LAST_SEEN: &str = "http://qa.example/ontology#last-seen";
    pub const LAST_EDITED: &str = "http://qa.example/ontology#last-edited";
    pub const LAST_ACTIVITY: &str = "http://qa.example/ontology#last-activity";
    pub const IS_META: &str = "http://qa.example/ontology#is-meta";
    pub const PARENT: &str = "http://qa.example/ontology#parent";
}

/// The prefix table every output document starts from: standard namespaces
/// plus the `qa:` ontology. Site-scoped prefixes are added per document by
/// [`SiteIris::declare_namespaces`](super::iri::SiteIris::declare_namespaces).
pub fn default_namespaces() -> Namespaces {
    let mut ns = Namespaces::new();
    ns.declare("rdf", standard::RDF);
    ns.declare("rdfs", standard::RDFS);
    ns.declare("owl", standard::OWL);
    ns.declare("xsd", standard::XSD);
    ns.declare("dc", standard::DC);
    ns.declare("foaf", standard::FOAF);
    ns.declare(qa::PREFIX, qa::NS);
    ns
}

//! Convert Q&A site data dumps to RDF Turtle.
//!
//! The crate is built around [`writer::TurtleWriter`], a single-pass
//! incremental Turtle serializer. [`convert`] deserializes dump files and
//! drives the writer with one subject block per record; [`model`] holds the
//! vocabulary, the namespace prefix table, and IRI minting for site entities.

pub mod convert;
pub mod model;
pub mod writer;

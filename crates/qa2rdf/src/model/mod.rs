pub mod iri;
pub mod namespaces;
pub mod vocab;

pub use iri::SiteIris;
pub use namespaces::Namespaces;

//! Citation document output.
//!
//! - **XML**: Solr update documents, `<add><doc><field name="…">…</field></doc></add>`
//! - **JSON lines**: one array of `{name, text}` objects per document

mod json;
mod xml;

pub use json::write_json_line;
pub use xml::{SolrXmlWriter, render_solr_xml};

/// Output format for finished citation documents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Xml,
    Json,
}

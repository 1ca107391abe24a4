//! Solr update XML output.

use std::io::Write;

use anyhow::{Result, anyhow};
use cit_model::CitationDocument;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

/// Streams citation documents into one `<add>` element.
///
/// Call [`finish`](Self::finish) to close the root element.
pub struct SolrXmlWriter<W: Write> {
    xml: Writer<W>,
    documents: usize,
}

impl<W: Write> SolrXmlWriter<W> {
    /// Write the XML declaration and open `<add>`.
    pub fn new(writer: W) -> Result<Self> {
        let mut xml = Writer::new_with_indent(writer, b' ', 2);
        xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        xml.write_event(Event::Start(BytesStart::new("add")))?;
        Ok(Self { xml, documents: 0 })
    }

    /// Append one `<doc>` with a `<field>` per emitted field, in order.
    pub fn write_document(&mut self, doc: &CitationDocument) -> Result<()> {
        self.xml.write_event(Event::Start(BytesStart::new("doc")))?;
        for field in doc {
            let mut element = BytesStart::new("field");
            element.push_attribute(("name", field.name.as_str()));
            self.xml.write_event(Event::Start(element))?;
            self.xml
                .write_event(Event::Text(BytesText::new(&field.text)))?;
            self.xml.write_event(Event::End(BytesEnd::new("field")))?;
        }
        self.xml.write_event(Event::End(BytesEnd::new("doc")))?;
        self.documents += 1;
        Ok(())
    }

    pub fn documents_written(&self) -> usize {
        self.documents
    }

    /// Close `<add>` and return the underlying writer.
    pub fn finish(mut self) -> Result<W> {
        self.xml.write_event(Event::End(BytesEnd::new("add")))?;
        let mut inner = self.xml.into_inner();
        inner.flush()?;
        Ok(inner)
    }
}

/// Render documents as a complete Solr update XML string.
pub fn render_solr_xml<'a, I>(docs: I) -> Result<String>
where
    I: IntoIterator<Item = &'a CitationDocument>,
{
    let mut writer = SolrXmlWriter::new(Vec::new())?;
    for doc in docs {
        writer.write_document(doc)?;
    }
    let bytes = writer.finish()?;
    String::from_utf8(bytes).map_err(|error| anyhow!("rendered XML is not UTF-8: {error}"))
}

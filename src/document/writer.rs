//! Serialization of a [`Document`] back to XML

use std::fs;
use std::path::Path;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesPI, BytesStart, BytesText, Event};

use super::DocumentError;
use super::tree::{Document, NodeId, NodeKind};

impl Document {
    /// Serialize to XML bytes
    ///
    /// Elements without children are written self-closing.
    pub fn to_xml(&self) -> Result<Vec<u8>, DocumentError> {
        let mut writer = Writer::new(Vec::new());

        if let Some(decl) = &self.declaration {
            writer.write_event(Event::Decl(BytesDecl::new(
                &decl.version,
                decl.encoding.as_deref(),
                decl.standalone.as_deref(),
            )))?;
        }

        for &child in self.children(self.document_node()) {
            write_node(&mut writer, self, child)?;
        }

        let mut out = writer.into_inner();
        if !out.ends_with(b"\n") {
            out.push(b'\n');
        }
        Ok(out)
    }

    /// Serialize to a string
    pub fn to_xml_string(&self) -> Result<String, DocumentError> {
        let bytes = self.to_xml()?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Serialize into a file
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let bytes = self.to_xml()?;
        fs::write(path, bytes).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        Ok(())
    }
}

fn write_node(
    writer: &mut Writer<Vec<u8>>,
    doc: &Document,
    id: NodeId,
) -> Result<(), DocumentError> {
    match doc.kind(id) {
        NodeKind::Element(element) => {
            let mut start = BytesStart::new(element.name.as_str());
            for (key, value) in &element.attributes {
                start.push_attribute((key.as_bytes(), value.as_bytes()));
            }

            let children = doc.children(id);
            if children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for &child in children {
                    write_node(writer, doc, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            }
        },
        NodeKind::Text(text) => {
            writer.write_event(Event::Text(BytesText::from_escaped(text.as_str())))?;
        },
        NodeKind::CData(data) => {
            writer.write_event(Event::CData(BytesCData::new(data.as_str())))?;
        },
        NodeKind::Comment(text) => {
            writer.write_event(Event::Comment(BytesText::from_escaped(text.as_str())))?;
        },
        NodeKind::ProcessingInstruction(content) => {
            writer.write_event(Event::PI(BytesPI::new(content.as_str())))?;
        },
        NodeKind::DocType(content) => {
            writer.write_event(Event::DocType(BytesText::from_escaped(content.as_str())))?;
        },
        NodeKind::Document => {
            for &child in doc.children(id) {
                write_node(writer, doc, child)?;
            }
        },
    }
    Ok(())
}

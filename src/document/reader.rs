//! XML parsing into a [`Document`]

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesDecl, BytesStart, Event};

use super::DocumentError;
use super::tree::{Declaration, Document, Element, NodeKind};

impl Document {
    /// Parse XML text
    ///
    /// Whitespace, comments, processing instructions, CDATA and the doctype
    /// are kept. Text and attribute values are stored escaped as read, so
    /// entity references survive a round trip untouched.
    pub fn parse(xml: &str) -> Result<Self, DocumentError> {
        let mut reader = Reader::from_str(xml);
        let mut doc = Self::empty();
        let mut stack = vec![doc.document_node()];

        loop {
            let parent = stack[stack.len() - 1];
            match reader.read_event()? {
                Event::Decl(decl) => doc.declaration = Some(read_declaration(&decl)?),
                Event::DocType(text) => {
                    doc.append(parent, NodeKind::DocType(utf8(&text)?));
                },
                Event::Start(start) => {
                    let id = doc.append(parent, NodeKind::Element(read_element(&start)?));
                    stack.push(id);
                },
                Event::Empty(start) => {
                    doc.append(parent, NodeKind::Element(read_element(&start)?));
                },
                Event::End(end) => {
                    if stack.len() == 1 {
                        return Err(DocumentError::UnexpectedEnd(utf8(end.name().as_ref())?));
                    }
                    stack.pop();
                },
                Event::Text(text) => {
                    doc.append(parent, NodeKind::Text(utf8(&text)?));
                },
                Event::CData(data) => {
                    doc.append(parent, NodeKind::CData(utf8(&data)?));
                },
                Event::Comment(text) => {
                    doc.append(parent, NodeKind::Comment(utf8(&text)?));
                },
                Event::PI(pi) => {
                    doc.append(parent, NodeKind::ProcessingInstruction(utf8(&pi)?));
                },
                Event::Eof => break,
            }
        }

        if let Some(&open) = stack.get(1) {
            let name = doc.name(open).unwrap_or_default().to_string();
            return Err(DocumentError::Unclosed(name));
        }

        if doc.root_element().is_none() {
            return Err(DocumentError::NoRootElement);
        }

        Ok(doc)
    }

    /// Read and parse a file
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let xml = fs::read_to_string(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loaded {} ({} bytes)", path.display(), xml.len());
        Self::parse(&xml)
    }
}

fn read_element(start: &BytesStart<'_>) -> Result<Element, DocumentError> {
    let mut element = Element::new(utf8(start.name().as_ref())?);
    for attr in start.attributes() {
        let attr = attr?;
        let key = utf8(attr.key.as_ref())?;
        // Values are written back double-quoted
        let value = utf8(&attr.value)?.replace('"', "&quot;");
        element.attributes.push((key, value));
    }
    Ok(element)
}

fn read_declaration(decl: &BytesDecl<'_>) -> Result<Declaration, DocumentError> {
    let version = utf8(&decl.version()?)?;
    let encoding = match decl.encoding() {
        Some(encoding) => Some(utf8(&encoding?)?),
        None => None,
    };
    let standalone = match decl.standalone() {
        Some(standalone) => Some(utf8(&standalone?)?),
        None => None,
    };
    Ok(Declaration {
        version,
        encoding,
        standalone,
    })
}

fn utf8(bytes: &[u8]) -> Result<String, DocumentError> {
    Ok(std::str::from_utf8(bytes)?.to_string())
}

//! SVG well-formedness check
//!
//! Only XML structure is verified: one root element, balanced tags, no text
//! outside the root. SVG semantics (elements, attributes, paths) are not.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;

/// Structural problem found in an XML document
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at byte {position}")]
pub struct MalformedXml {
    pub message: String,
    pub position: u64,
}

/// Check that `text` is a well-formed XML document
pub fn check_well_formed(text: &str) -> Result<(), MalformedXml> {
    let mut reader = Reader::from_str(text);
    let mut depth: usize = 0;
    let mut roots: usize = 0;

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(err) => {
                return Err(MalformedXml {
                    message: err.to_string(),
                    position: reader.error_position() as u64,
                })
            }
        };

        match event {
            Event::Start(_) | Event::Empty(_) if depth == 0 && roots > 0 => {
                return Err(malformed(&reader, "more than one root element"));
            }
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(_) => {
                if depth == 0 {
                    roots += 1;
                }
            }
            Event::End(_) => {
                if depth == 0 {
                    return Err(malformed(&reader, "closing tag without opening tag"));
                }
                depth -= 1;
            }
            Event::Text(text) if depth == 0 => {
                if !text.iter().all(|b| b.is_ascii_whitespace()) {
                    return Err(malformed(&reader, "text outside the root element"));
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if roots == 0 {
        return Err(malformed(&reader, "no root element"));
    }
    if depth > 0 {
        return Err(malformed(&reader, "unclosed element at end of document"));
    }
    Ok(())
}

fn malformed(reader: &Reader<&[u8]>, message: &str) -> MalformedXml {
    MalformedXml {
        message: message.to_string(),
        position: reader.buffer_position() as u64,
    }
}

//! Streaming XML patcher for the two payload documents.
//!
//! Proxy nodes live at a fixed depth in both payloads:
//!
//! ```text
//! <Document>
//!   <ObjectData>                      <!-- or ViewProviderData -->
//!     <Object name="...">
//!       <Properties>
//!         <Property name="Proxy">
//!           <Python value="..." encoded="yes" module="PathScripts.PathDrilling"/>
//! ```
//!
//! The patcher streams events through a [`quick_xml`] reader/writer pair and
//! rewrites only `Python` elements whose ancestry matches that exact shape:
//! a direct child of any object node directly under the named section, via a
//! `Property` whose `name` attribute is `Proxy`. Everything else, the XML
//! declaration included, is written back as read.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesStart, Event};

use crate::blob;
use crate::error::Result;
use crate::rename::{self, SectionKind};
use crate::report::{ConvertReport, Warning};

/// One open ancestor element. Whether a `Property` carries `name="Proxy"`
/// is decided when the element is opened, so the check at the `Python` node
/// is a plain stack inspection.
struct Frame {
    name: Vec<u8>,
    proxy_property: bool,
}

/// Rewrites proxy module references in one payload document.
///
/// Returns the serialized document with matching nodes patched. Unmapped
/// modules are recorded on `report` and left untouched; nodes without a
/// `module` attribute are skipped silently. Fails on malformed XML or on a
/// `value` attribute that is not valid Base64.
pub fn patch_document(
    xml: &[u8],
    kind: SectionKind,
    report: &mut ConvertReport,
) -> Result<Vec<u8>> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().check_end_names = true;
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    let mut stack: Vec<Frame> = Vec::new();
    let mut buf = Vec::new();

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(ref e) => {
                if let Some(patched) = patch_proxy_node(e, &stack, kind, report)? {
                    writer.write_event(Event::Start(patched))?;
                } else {
                    writer.write_event(Event::Start(e.to_owned()))?;
                }
                stack.push(open_frame(e)?);
            }
            Event::Empty(ref e) => {
                if let Some(patched) = patch_proxy_node(e, &stack, kind, report)? {
                    writer.write_event(Event::Empty(patched))?;
                } else {
                    writer.write_event(Event::Empty(e.to_owned()))?;
                }
            }
            Event::End(ref e) => {
                stack.pop();
                writer.write_event(Event::End(e.to_owned()))?;
            }
            Event::Eof => break,
            other => writer.write_event(other.into_owned())?,
        }
        buf.clear();
    }

    Ok(writer.into_inner())
}

fn open_frame(e: &BytesStart<'_>) -> Result<Frame> {
    let name = e.name().as_ref().to_vec();
    let mut proxy_property = false;
    if name == b"Property" {
        for attr in e.attributes() {
            let attr = attr?;
            if attr.key.as_ref() == b"name" && attr.unescape_value()?.as_ref() == "Proxy" {
                proxy_property = true;
            }
        }
    }
    Ok(Frame { name, proxy_property })
}

/// Whether the open-element stack places the current node at
/// `<root>/<Section>/<object>/Properties/Property[@name="Proxy"]`.
fn ancestry_matches(stack: &[Frame], kind: SectionKind) -> bool {
    match stack {
        [_root, section, _object, properties, property] => {
            section.name == kind.section_name().as_bytes()
                && properties.name == b"Properties"
                && property.name == b"Property"
                && property.proxy_property
        }
        _ => false,
    }
}

/// Rebuilds a `Python` proxy node with its `module` and `value` attributes
/// rewritten, or returns `None` when the node is not a target or has no
/// table entry.
fn patch_proxy_node(
    e: &BytesStart<'_>,
    stack: &[Frame],
    kind: SectionKind,
    report: &mut ConvertReport,
) -> Result<Option<BytesStart<'static>>> {
    if e.name().as_ref() != b"Python" || !ancestry_matches(stack, kind) {
        return Ok(None);
    }

    let mut module = None;
    for attr in e.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"module" {
            module = Some(attr.unescape_value()?.into_owned());
        }
    }
    // Not every proxy carries a module reference.
    let Some(module) = module else {
        return Ok(None);
    };

    let Some(new_module) = rename::lookup(kind, &module) else {
        report.warn(Warning::UnmappedModule { module, section: kind });
        return Ok(None);
    };

    let mut patched = BytesStart::new("Python");
    for attr in e.attributes() {
        let attr = attr?;
        match attr.key.as_ref() {
            b"module" => patched.push_attribute(("module", new_module)),
            b"value" => {
                let value = attr.unescape_value()?;
                let new_value = blob::patch(&value, kind, report)?;
                patched.push_attribute(("value", new_value.as_str()));
            }
            _ => patched.push_attribute((attr.key.as_ref(), attr.value.as_ref())),
        }
    }
    report.modules_renamed += 1;
    Ok(Some(patched.into_owned()))
}

//! Shared helpers for integration tests.

#![allow(dead_code)] // Not every test binary uses every helper.

use std::io::{Cursor, Read, Write};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use zip::read::ZipArchive;
use zip::write::{SimpleFileOptions, ZipWriter};

/// Builds a zip archive in memory from `(name, content)` pairs.
pub fn build_archive(entries: &[(&str, &[u8])]) -> Vec<u8> {
    build_archive_with_comment(entries, b"")
}

/// Builds a zip archive in memory with an archive-level comment.
pub fn build_archive_with_comment(entries: &[(&str, &[u8])], comment: &[u8]) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    writer.set_raw_comment(comment.to_vec().into_boxed_slice());
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    for (name, content) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

/// Reads every entry of an archive as `(name, content)` pairs, in order.
pub fn read_archive(bytes: &[u8]) -> Vec<(String, Vec<u8>)> {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut entries = Vec::new();
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).unwrap();
        let mut content = Vec::new();
        entry.read_to_end(&mut content).unwrap();
        entries.push((entry.name().to_owned(), content));
    }
    entries
}

/// Returns the archive-level comment.
pub fn archive_comment(bytes: &[u8]) -> Vec<u8> {
    ZipArchive::new(Cursor::new(bytes)).unwrap().comment().to_vec()
}

/// Base64 blob duplicating a module reference, as the legacy serializer
/// stores it in the `value` attribute.
pub fn proxy_blob(module: &str) -> String {
    BASE64.encode(format!(r#"{{"module": "{module}"}}"#))
}

/// A minimal payload document with one proxy node.
pub fn payload_xml(section: &str, module: &str) -> Vec<u8> {
    let blob = proxy_blob(module);
    format!(
        "<?xml version='1.0' encoding='utf-8'?>\n\
         <Document SchemaVersion=\"4\">\n\
           <{section} Count=\"1\">\n\
             <Object name=\"Op\">\n\
               <Properties Count=\"1\">\n\
                 <Property name=\"Proxy\" type=\"App::PropertyPythonObject\">\n\
                   <Python value=\"{blob}\" encoded=\"yes\" module=\"{module}\"/>\n\
                 </Property>\n\
               </Properties>\n\
             </Object>\n\
           </{section}>\n\
         </Document>\n"
    )
    .into_bytes()
}

/// Decodes a Base64 string to text.
pub fn decode_blob(encoded: &str) -> String {
    String::from_utf8(BASE64.decode(encoded).unwrap()).unwrap()
}

/// Extracts the value of an attribute from the first element carrying it.
pub fn attribute_value(xml: &[u8], attribute: &str) -> Option<String> {
    let text = String::from_utf8(xml.to_vec()).unwrap();
    let needle = format!("{attribute}=\"");
    let start = text.find(&needle)? + needle.len();
    let end = start + text[start..].find('"')?;
    Some(text[start..end].to_owned())
}

//! TwinCAT XML source files (`.TcPOU`, `.TcDUT`, `.TcGVL`, `.TcIO`).
//!
//! Only the `Declaration` sections are read; implementations are skipped.

use std::path::Path;

use roxmltree::{Document, Node};
use tracing::debug;

use crate::error::{Error, Result};
use crate::source::{SourceFile, SourceItem};

const ROOT_ELEMENT: &str = "TcPlcObject";
const OBJECT_ELEMENTS: &[&str] = &["POU", "DUT", "GVL", "Itf"];

/// Reads and extracts a TwinCAT source file from disk.
pub fn read_tc_object(path: &Path) -> Result<SourceFile> {
    let xml = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_tc_object(path, &xml)
}

/// Extracts the declaration items of a `TcPlcObject` document.
///
/// Every object element with a `Declaration` becomes an item; its direct
/// child elements with their own `Declaration` (methods, properties,
/// actions) become child items.
pub fn parse_tc_object(path: &Path, xml: &str) -> Result<SourceFile> {
    let document = Document::parse(xml).map_err(|source| Error::Xml {
        path: path.to_path_buf(),
        source,
    })?;
    let root = document.root_element();
    if !is_element_named_ci(root, ROOT_ELEMENT) {
        return Err(Error::NotTcObject {
            path: path.to_path_buf(),
            root: root.tag_name().name().to_string(),
        });
    }

    let mut file = SourceFile::new(path);
    for object in root.children().filter(|node| {
        OBJECT_ELEMENTS
            .iter()
            .any(|name| is_element_named_ci(*node, name))
    }) {
        let Some(mut item) = extract_item(object) else {
            continue;
        };
        item.children = object
            .children()
            .filter(|node| node.is_element())
            .filter(|node| {
                !is_element_named_ci(*node, "Declaration")
                    && !is_element_named_ci(*node, "Implementation")
            })
            .filter_map(extract_item)
            .collect();
        file.items.push(item);
    }
    debug!(
        "Extracted {} item(s) from {}",
        file.items.len(),
        path.display()
    );
    Ok(file)
}

fn extract_item(node: Node<'_, '_>) -> Option<SourceItem> {
    let declaration = node
        .children()
        .find(|child| is_element_named_ci(*child, "Declaration"))
        .and_then(extract_text_content)?;
    Some(SourceItem {
        name: attribute_ci(node, "Name"),
        declaration,
        children: Vec::new(),
    })
}

fn is_element_named_ci(node: Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().name().eq_ignore_ascii_case(name)
}

fn attribute_ci(node: Node<'_, '_>, name: &str) -> Option<String> {
    node.attributes()
        .find(|attribute| attribute.name().eq_ignore_ascii_case(name))
        .map(|attribute| attribute.value().trim().to_string())
        .filter(|value| !value.is_empty())
}

fn extract_text_content(node: Node<'_, '_>) -> Option<String> {
    let text = node
        .descendants()
        .filter(|entry| entry.is_text())
        .filter_map(|entry| entry.text())
        .collect::<String>();
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

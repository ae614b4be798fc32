use anyhow::{Context, Result};
use lopdf::{Document, Object, ObjectId};

/// A node in the document's outline tree. An outline item that has
/// children contributes a `Leaf` for itself followed by a `Group`
/// holding its children, so document order is preserved exactly.
#[derive(Debug, Clone, PartialEq)]
pub enum OutlineNode {
    Leaf { title: String, page: u32 },
    Group(Vec<OutlineNode>),
}

/// Extract the outline/bookmark tree from a PDF.
///
/// Page numbers are zero-based. Items whose destination cannot be
/// resolved to a page are dropped; a document without an outline
/// yields an empty vec.
pub fn extract_outline(doc: &Document) -> Result<Vec<OutlineNode>> {
    let catalog = doc
        .catalog()
        .with_context(|| "Failed to get document catalog")?;

    let outlines_ref = match catalog.get(b"Outlines") {
        Ok(Object::Reference(r)) => *r,
        _ => return Ok(Vec::new()), // No outlines/bookmarks
    };

    let outlines = match doc.get_dictionary(outlines_ref) {
        Ok(d) => d,
        _ => return Ok(Vec::new()),
    };

    let page_map = build_page_map(doc);

    let first_ref = match outlines.get(b"First") {
        Ok(Object::Reference(r)) => *r,
        _ => return Ok(Vec::new()),
    };

    parse_outline_items(doc, first_ref, &page_map)
}

fn parse_outline_items(
    doc: &Document,
    first_id: ObjectId,
    page_map: &[(ObjectId, u32)],
) -> Result<Vec<OutlineNode>> {
    let mut nodes = Vec::new();
    let mut current_id = Some(first_id);

    while let Some(id) = current_id {
        let dict = match doc.get_dictionary(id) {
            Ok(d) => d,
            Err(_) => break,
        };

        let title = match dict.get(b"Title") {
            Ok(Object::String(bytes, _)) => decode_pdf_string(bytes),
            _ => "Untitled".to_string(),
        };

        if let Some(page) = get_destination_page(doc, dict, page_map) {
            nodes.push(OutlineNode::Leaf { title, page });
        }

        if let Ok(Object::Reference(child_ref)) = dict.get(b"First") {
            let children = parse_outline_items(doc, *child_ref, page_map)?;
            if !children.is_empty() {
                nodes.push(OutlineNode::Group(children));
            }
        }

        current_id = match dict.get(b"Next") {
            Ok(Object::Reference(r)) => Some(*r),
            _ => None,
        };
    }

    Ok(nodes)
}

fn get_destination_page(
    doc: &Document,
    dict: &lopdf::Dictionary,
    page_map: &[(ObjectId, u32)],
) -> Option<u32> {
    // Try Dest first (direct destination)
    if let Ok(dest) = dict.get(b"Dest") {
        return resolve_destination(doc, dest, page_map);
    }

    // Try A (action) - for GoTo actions
    if let Ok(Object::Reference(action_ref)) = dict.get(b"A") {
        if let Ok(action_dict) = doc.get_dictionary(*action_ref) {
            if let Ok(Object::Name(action_type)) = action_dict.get(b"S") {
                if action_type == b"GoTo" {
                    if let Ok(dest) = action_dict.get(b"D") {
                        return resolve_destination(doc, dest, page_map);
                    }
                }
            }
        }
    }

    // Also check for inline action dictionary
    if let Ok(Object::Dictionary(action_dict)) = dict.get(b"A") {
        if let Ok(Object::Name(action_type)) = action_dict.get(b"S") {
            if action_type == b"GoTo" {
                if let Ok(dest) = action_dict.get(b"D") {
                    return resolve_destination(doc, dest, page_map);
                }
            }
        }
    }

    None
}

fn resolve_destination(doc: &Document, dest: &Object, page_map: &[(ObjectId, u32)]) -> Option<u32> {
    match dest {
        // Named destination - look up in Names/Dests
        Object::String(name, _) | Object::Name(name) => {
            resolve_named_destination(doc, name, page_map)
        }
        // Direct destination array
        Object::Array(arr) => get_page_from_dest_array(arr, page_map),
        // Reference to destination
        Object::Reference(r) => {
            if let Ok(obj) = doc.get_object(*r) {
                resolve_destination(doc, obj, page_map)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn resolve_named_destination(
    doc: &Document,
    name: &[u8],
    page_map: &[(ObjectId, u32)],
) -> Option<u32> {
    if let Ok(catalog) = doc.catalog() {
        // Try Names/Dests
        if let Ok(Object::Reference(names_ref)) = catalog.get(b"Names") {
            if let Ok(names_dict) = doc.get_dictionary(*names_ref) {
                if let Ok(Object::Reference(dests_ref)) = names_dict.get(b"Dests") {
                    if let Some(page) = search_name_tree(doc, *dests_ref, name, page_map) {
                        return Some(page);
                    }
                }
            }
        }

        // Try Dests dictionary (older style)
        if let Ok(Object::Reference(dests_ref)) = catalog.get(b"Dests") {
            if let Ok(dests_dict) = doc.get_dictionary(*dests_ref) {
                if let Ok(dest) = dests_dict.get(name) {
                    return resolve_destination(doc, dest, page_map);
                }
            }
        }
    }

    None
}

fn search_name_tree(
    doc: &Document,
    node_id: ObjectId,
    name: &[u8],
    page_map: &[(ObjectId, u32)],
) -> Option<u32> {
    let dict = doc.get_dictionary(node_id).ok()?;

    // Check Names array (leaf node)
    if let Ok(Object::Array(names)) = dict.get(b"Names") {
        for chunk in names.chunks(2) {
            if chunk.len() == 2 {
                if let Object::String(key, _) = &chunk[0] {
                    if key == name {
                        return resolve_destination(doc, &chunk[1], page_map);
                    }
                }
            }
        }
    }

    // Check Kids array (intermediate node)
    if let Ok(Object::Array(kids)) = dict.get(b"Kids") {
        for kid in kids {
            if let Object::Reference(kid_ref) = kid {
                if let Some(page) = search_name_tree(doc, *kid_ref, name, page_map) {
                    return Some(page);
                }
            }
        }
    }

    None
}

fn get_page_from_dest_array(arr: &[Object], page_map: &[(ObjectId, u32)]) -> Option<u32> {
    // Destination array format: [page_ref, /XYZ, left, top, zoom] or similar
    if let Some(Object::Reference(page_ref)) = arr.first() {
        for (id, page_num) in page_map {
            if id == page_ref {
                return Some(*page_num);
            }
        }
    }
    None
}

/// Map page object IDs to zero-based page indices, in page order.
fn build_page_map(doc: &Document) -> Vec<(ObjectId, u32)> {
    let mut pages: Vec<_> = doc.get_pages().into_iter().collect();
    pages.sort_by_key(|(num, _)| *num);
    pages
        .into_iter()
        .map(|(num, id)| (id, num.saturating_sub(1)))
        .collect()
}

fn decode_pdf_string(bytes: &[u8]) -> String {
    // Check for UTF-16 BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        // UTF-16 BE
        let u16_chars: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|chunk| {
                if chunk.len() == 2 {
                    Some(u16::from_be_bytes([chunk[0], chunk[1]]))
                } else {
                    None
                }
            })
            .collect();
        String::from_utf16_lossy(&u16_chars)
    } else {
        // PDFDocEncoding / Latin-1 (simplified)
        bytes.iter().map(|&b| b as char).collect()
    }
}

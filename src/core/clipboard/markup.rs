//! HTML clipboard parsing
//!
//! Spreadsheet applications put a `text/html` flavour on the clipboard that
//! holds a `<table>`. Reading cell boundaries from it is exact, so it is
//! preferred over guessing delimiters in the plain-text flavour. This path is
//! best effort: anything unusable yields `None` and the caller falls back.

use html5ever::tendril::TendrilSink;
use html5ever::{parse_document, ParseOpts};
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::debug;

use super::plain::clean_value;
use super::ParsedRow;

/// Parse the first table of an HTML clipboard blob.
///
/// Returns `None` when the input is empty, has no table, cannot be parsed,
/// or when every row of the table is empty after cleaning.
pub fn parse_markup_table(html: Option<&str>) -> Option<Vec<ParsedRow>> {
    let html = html.filter(|h| !h.trim().is_empty())?;
    if !has_table_tag(html) {
        return None;
    }

    match std::panic::catch_unwind(|| parse_table_rows(html)) {
        Ok(rows) => rows,
        Err(_) => {
            debug!("markup parser panicked, falling back to plain text");
            None
        }
    }
}

/// Cheap check before building a DOM
pub fn has_table_tag(html: &str) -> bool {
    html.to_ascii_lowercase().contains("<table")
}

fn parse_table_rows(html: &str) -> Option<Vec<ParsedRow>> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(html);
    let table = find_first_element(&dom.document, "table")?;

    let rows: Vec<ParsedRow> = table_rows(&table)
        .iter()
        .map(|tr| {
            element_children(tr)
                .iter()
                .filter(|cell| matches!(tag_name(cell), Some("td") | Some("th")))
                .map(|cell| clean_value(&text_content(cell)))
                .collect::<ParsedRow>()
        })
        .filter(|values| values.iter().any(|v| !v.is_empty()))
        .collect();

    if rows.is_empty() {
        debug!("markup table has no non-empty rows");
        None
    } else {
        Some(rows)
    }
}

/// Local name of an element node
fn tag_name(node: &Handle) -> Option<&str> {
    match node.data {
        NodeData::Element { ref name, .. } => Some(&*name.local),
        _ => None,
    }
}

fn element_children(node: &Handle) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|child| tag_name(child).is_some())
        .cloned()
        .collect()
}

/// Depth-first, document-order search
fn find_first_element(node: &Handle, name: &str) -> Option<Handle> {
    if tag_name(node) == Some(name) {
        return Some(node.clone());
    }
    for child in node.children.borrow().iter() {
        if let Some(found) = find_first_element(child, name) {
            return Some(found);
        }
    }
    None
}

/// Rows of this table only: `tr` children of the table and of its sections.
/// Rows of nested tables are not included.
fn table_rows(table: &Handle) -> Vec<Handle> {
    let mut rows = Vec::new();
    for child in element_children(table) {
        match tag_name(&child) {
            Some("tr") => rows.push(child.clone()),
            Some("thead") | Some("tbody") | Some("tfoot") => rows.extend(
                element_children(&child)
                    .into_iter()
                    .filter(|grandchild| tag_name(grandchild) == Some("tr")),
            ),
            _ => {}
        }
    }
    rows
}

/// Concatenated text of all descendant text nodes
fn text_content(node: &Handle) -> String {
    let mut text = String::new();
    collect_text(node, &mut text);
    text
}

fn collect_text(node: &Handle, out: &mut String) {
    if let NodeData::Text { ref contents } = node.data {
        out.push_str(&contents.borrow());
    }
    for child in node.children.borrow().iter() {
        collect_text(child, out);
    }
}

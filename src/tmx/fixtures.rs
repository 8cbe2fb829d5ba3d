//! TMX documents for tests.

use crate::codec::types::{MAP_HEIGHT, MAP_WIDTH};

/// A document laid out the way Tiled saves it, with the given layer size,
/// CSV rows and object lines.
pub fn tmx_document(width: usize, height: usize, rows: &[String], objects: &[&str]) -> String {
    let mut doc = String::new();
    doc.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    doc.push_str("<map version=\"1.0\" orientation=\"orthogonal\" width=\"32\" height=\"32\" tilewidth=\"8\" tileheight=\"8\">\n");
    doc.push_str(" <tileset firstgid=\"1\" source=\"tiles.tsx\"/>\n");
    doc.push_str(" <tileset firstgid=\"105\" source=\"events.tsx\"/>\n");
    doc.push_str(&format!(" <layer name=\"Track\" width=\"{width}\" height=\"{height}\">\n"));
    doc.push_str("  <data encoding=\"csv\">\n");
    for row in rows {
        doc.push_str(row);
        doc.push('\n');
    }
    doc.push_str("</data>\n </layer>\n <objectgroup name=\"Events\">\n");
    for object in objects {
        doc.push_str("  ");
        doc.push_str(object);
        doc.push('\n');
    }
    doc.push_str(" </objectgroup>\n</map>\n");
    doc
}

/// Full-size CSV rows with every tile set to `value`
pub fn rows_of(value: &str) -> Vec<String> {
    let row = vec![value; MAP_WIDTH].join(",");
    (0..MAP_HEIGHT)
        .map(|y| if y + 1 < MAP_HEIGHT { format!("{row},") } else { row.clone() })
        .collect()
}

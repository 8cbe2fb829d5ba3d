//! TMX reader.
//!
//! Expected layout (as written by Tiled with CSV layer encoding):
//! ```text
//! <?xml ...?>
//! <map ...>
//!  <tileset firstgid="1" .../>          tile layer tileset
//!  <tileset firstgid="105" .../>        object layer tileset
//!  <layer name="..." width="32" height="32">
//!   <data encoding="csv">
//! 1,1,1,...                             32 rows of 32 values
//!   </data>
//!  </layer>
//!  <objectgroup ...>
//!   <object gid="105" x="20" y="10" .../>   1 to 32 objects, one per line
//!  </objectgroup>
//! ```

use std::io::BufRead;

use tracing::{debug, info, warn};

use super::model::{TmxMap, TmxObject};
use super::scanner::{find_open_tag, parse_int, require_attribute, LineScanner};
use crate::codec::types::{MAP_HEIGHT, MAP_WIDTH, MAX_EVENTS};
use crate::error::{Error, Result};

/// Read a TMX document into a [`TmxMap`], stopping at the first structural error.
pub fn parse_tmx<R: BufRead>(reader: R) -> Result<TmxMap> {
    let mut scanner = LineScanner::new(reader);
    let mut map = TmxMap::default();

    expect_header(&mut scanner, "<?xml", Error::NotXml)?;
    expect_header(&mut scanner, "<map", Error::NotTmx)?;

    map.first_tile_gid = read_tileset(&mut scanner)?;
    map.first_object_gid = read_tileset(&mut scanner)?;
    debug!(
        first_tile_gid = map.first_tile_gid,
        first_object_gid = map.first_object_gid,
        "tilesets read"
    );

    let (width, height) = read_layer(&mut scanner)?;
    map.width = width;
    map.height = height;

    read_data_tag(&mut scanner)?;
    read_rows(&mut scanner, &mut map)?;
    debug!(line = scanner.line_number(), "tile layer read");

    scanner.find_tag("objectgroup")?;
    map.objects = read_objects(&mut scanner)?;

    info!(objects = map.objects.len(), "TMX file read");
    Ok(map)
}

fn expect_header<R: BufRead>(scanner: &mut LineScanner<R>, prefix: &str, err: Error) -> Result<()> {
    let line = scanner.expect_line()?;
    if !line.trim_start_matches('\u{feff}').starts_with(prefix) {
        return Err(err);
    }
    Ok(())
}

fn read_tileset<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<i32> {
    let tag = scanner.find_tag("tileset")?;
    let firstgid = require_attribute(tag, "tileset", "firstgid")?;
    parse_int(firstgid).ok_or_else(|| Error::InvalidNumber {
        name: "firstgid",
        value: firstgid.to_string(),
    })
}

fn read_layer<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<(usize, usize)> {
    let tag = scanner.find_tag("layer")?;
    let height = require_attribute(tag, "layer", "height")?;
    let width = require_attribute(tag, "layer", "width")?;
    let name = require_attribute(tag, "layer", "name")?;

    let valid = |value: &str, expected: usize| {
        parse_int(value).and_then(|v| usize::try_from(v).ok()) == Some(expected)
    };
    if !valid(width, MAP_WIDTH) || !valid(height, MAP_HEIGHT) {
        return Err(Error::InvalidDimensions {
            width: width.to_string(),
            height: height.to_string(),
            expected: MAP_WIDTH,
        });
    }

    debug!(layer = name, width = MAP_WIDTH, height = MAP_HEIGHT, "layer read");
    Ok((MAP_WIDTH, MAP_HEIGHT))
}

fn read_data_tag<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<()> {
    let line = scanner.expect_line()?;
    let pos = find_open_tag(line, "data").ok_or(Error::MissingTag { tag: "data" })?;
    let encoding = require_attribute(&line[pos..], "data", "encoding")?;
    if encoding != "csv" {
        return Err(Error::InvalidEncoding(encoding.to_string()));
    }
    Ok(())
}

fn read_rows<R: BufRead>(scanner: &mut LineScanner<R>, map: &mut TmxMap) -> Result<()> {
    map.tiles = Vec::with_capacity(map.width * map.height);

    for y in 0..map.height {
        let line = scanner.expect_line()?;
        let mut tokens = line.split(',').filter(|t| !t.trim().is_empty());

        for x in 0..map.width {
            let token = tokens.next().ok_or(Error::RowUnderflow { x, y })?;
            let value = parse_int(token).ok_or_else(|| Error::InvalidTile {
                x,
                y,
                token: token.trim().to_string(),
            })?;
            if !(0..=255).contains(&value) {
                warn!(x, y, value, "byte overflow");
                map.overflowed_tiles += 1;
            }
            map.tiles.push(value as u8);
        }
    }

    Ok(())
}

fn read_objects<R: BufRead>(scanner: &mut LineScanner<R>) -> Result<Vec<TmxObject>> {
    let mut objects = Vec::with_capacity(MAX_EVENTS);

    let mut line = scanner.expect_line()?;
    loop {
        let pos = find_open_tag(line, "object").ok_or(Error::MissingTag { tag: "object" })?;
        if objects.len() == MAX_EVENTS {
            return Err(Error::TooManyObjects { max: MAX_EVENTS });
        }
        let object = parse_object(&line[pos..])?;
        debug!(gid = object.gid, x = object.x, y = object.y, "object read");
        objects.push(object);

        line = scanner.expect_line()?;
        if line.contains("</objectgroup") {
            break;
        }
    }

    Ok(objects)
}

/// Zero is rejected for gid, x and y alike, so objects on the map's top or
/// left edge cannot be placed.
fn parse_object(tag: &str) -> Result<TmxObject> {
    let y = require_attribute(tag, "object", "y")?;
    let x = require_attribute(tag, "object", "x")?;
    let gid = require_attribute(tag, "object", "gid")?;

    let non_zero = |name: &'static str, value: &str| match parse_int(value) {
        Some(v) if v != 0 => Ok(v),
        _ => Err(Error::InvalidNumber { name, value: value.to_string() }),
    };

    Ok(TmxObject {
        gid: non_zero("gid", gid)?,
        x: non_zero("x", x)?,
        y: non_zero("y", y)?,
    })
}

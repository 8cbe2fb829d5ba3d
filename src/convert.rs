use std::fs::File;
use std::io::{BufReader, BufWriter, BufRead, Write};
use std::path::Path;

use tracing::debug;

use crate::codec::write_map;
use crate::error::Result;
use crate::tmx::parse_tmx;

/// What a conversion produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    pub tiles: usize,
    pub events: usize,
    pub overflowed_tiles: usize,
}

/// Parse the whole TMX document from `input`, then encode and write it to `output`.
pub fn convert<R: BufRead, W: Write>(input: R, output: W) -> Result<ConvertSummary> {
    let map = parse_tmx(input)?;
    write_map(&map, output)?;

    Ok(ConvertSummary {
        tiles: map.tiles.len(),
        events: map.objects.len(),
        overflowed_tiles: map.overflowed_tiles,
    })
}

/// File-based [`convert`]. The output file is only created once the input has
/// parsed successfully; a failed write may leave it truncated.
pub fn convert_files(input: &Path, output: &Path) -> Result<ConvertSummary> {
    let map = {
        let file = File::open(input)?;
        debug!(path = %input.display(), "reading TMX");
        parse_tmx(BufReader::new(file))?
    };

    let file = File::create(output)?;
    debug!(path = %output.display(), "writing map");
    write_map(&map, BufWriter::new(file))?;

    Ok(ConvertSummary {
        tiles: map.tiles.len(),
        events: map.objects.len(),
        overflowed_tiles: map.overflowed_tiles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::MapFile;
    use crate::error::{Error, ErrorKind};
    use crate::tmx::fixtures::{rows_of, tmx_document};
    use std::io::Cursor;

    const FINISH: &str = r#"<object id="1" gid="105" x="20" y="10" width="8" height="8"/>"#;

    #[test]
    fn test_minimal_map() {
        let doc = tmx_document(32, 32, &rows_of("1"), &[FINISH]);
        let mut out = Vec::new();
        let summary = convert(Cursor::new(doc), &mut out).unwrap();

        assert_eq!(summary, ConvertSummary { tiles: 1024, events: 1, overflowed_tiles: 0 });
        assert_eq!(out.len(), 1028);
        assert!(out[..1024].iter().all(|&b| b == 0));
        assert_eq!(&out[1024..], &[0x83, 5, 0, 0]);
    }

    #[test]
    fn test_events_keep_document_order() {
        let objects = [
            r#"<object id="1" gid="117" x="100" y="20"/>"#,
            FINISH,
            r#"<object id="3" gid="124" x="64" y="30"/>"#,
        ];
        let doc = tmx_document(32, 32, &rows_of("105"), &objects);
        let mut out = Vec::new();
        convert(Cursor::new(doc), &mut out).unwrap();

        let file = MapFile::read(&out).unwrap();
        assert!(file.tiles.iter().all(|&b| b == 135));
        let triggers: Vec<u8> = file.events.iter().map(|e| e.trigger_type).collect();
        // local 19: very easy L checkpoint
        assert_eq!(triggers, vec![0x04, 0x83, 0x01]);
        assert_eq!((file.events[2].checkpoint, file.events[2].kind, file.events[2].color), (32, 12, 1));
    }

    #[test]
    fn test_parse_error_writes_nothing() {
        let doc = tmx_document(16, 16, &rows_of("1"), &[FINISH]);
        let mut out = Vec::new();
        let err = convert(Cursor::new(doc), &mut out).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Format);
        assert!(out.is_empty());
    }

    #[test]
    fn test_missing_input_file() {
        let dir = std::env::temp_dir();
        let result = convert_files(
            &dir.join("tmx2map-missing-input.tmx"),
            &dir.join("tmx2map-missing-input.map"),
        );
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_convert_files() {
        let dir = std::env::temp_dir();
        let input = dir.join(format!("tmx2map-{}.tmx", std::process::id()));
        let output = dir.join(format!("tmx2map-{}.map", std::process::id()));
        std::fs::write(&input, tmx_document(32, 32, &rows_of("1"), &[FINISH])).unwrap();

        let summary = convert_files(&input, &output).unwrap();
        let data = std::fs::read(&output).unwrap();
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        assert_eq!(summary.events, 1);
        assert_eq!(data.len(), 1028);
    }
}

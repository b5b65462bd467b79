use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::{Segment, SegmentKind};

/// One record of the upstream per-broadcast table
///
/// Extra columns are ignored; `Speakers` is frequently empty and `Duration`
/// may be blank on non-speech rows.
#[derive(Debug, Deserialize)]
struct SegmentRow {
    #[serde(rename = "Type")]
    kind: String,
    #[serde(rename = "Speakers")]
    speakers: Option<String>,
    #[serde(rename = "Duration")]
    duration: Option<f64>,
}

/// Load an ordered segment sequence from a CSV file
pub fn read_segments_file(path: &Path) -> Result<Vec<Segment>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open segment file: {:?}", path))?;
    read_segments(&mut reader)
}

/// Parse an ordered segment sequence from CSV text
pub fn read_segments_csv(data: &str) -> Result<Vec<Segment>> {
    let mut reader = csv::Reader::from_reader(data.as_bytes());
    read_segments(&mut reader)
}

fn read_segments<R: Read>(reader: &mut csv::Reader<R>) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();

    for (position, row) in reader.deserialize::<SegmentRow>().enumerate() {
        let row = row.with_context(|| format!("Failed to parse segment row {}", position))?;
        let kind = if row.kind == "speech" {
            SegmentKind::Speech
        } else {
            SegmentKind::Other
        };
        segments.push(Segment {
            position,
            kind,
            raw_speakers: row.speakers.filter(|s| !s.is_empty()),
            duration: row.duration.unwrap_or(0.0),
        });
    }

    Ok(segments)
}

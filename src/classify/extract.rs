use regex::Regex;

use crate::models::{Segment, SegmentKind};

/// Derives a canonical speaker label from a segment's raw speaker field
///
/// Extraction is deliberately pluggable: aggregation and classification only
/// ever see the returned label, so alternate strategies (multi-label,
/// confidence-scored) can be swapped in here.
pub trait LabelExtractor {
    /// Return the canonical label for a segment, or `None` when the segment
    /// is not speech, the field is absent, or nothing in it matches.
    fn extract(&self, raw: Option<&str>, kind: SegmentKind) -> Option<String>;
}

/// Default extractor: first `SPEAKER_<digits>` token found in the field
///
/// When a field names several speakers, only the first match is kept; the
/// segment is attributed to a single dominant label.
#[derive(Debug, Clone)]
pub struct RegexLabelExtractor {
    pattern: Regex,
}

impl RegexLabelExtractor {
    /// Diarizer label token, e.g. `SPEAKER_07`
    pub const DEFAULT_PATTERN: &'static str = r"SPEAKER_\d+";

    pub fn new() -> Self {
        Self {
            pattern: Regex::new(Self::DEFAULT_PATTERN).expect("built-in pattern compiles"),
        }
    }

    /// Use a custom label pattern instead of the default
    pub fn with_pattern(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }
}

impl Default for RegexLabelExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl LabelExtractor for RegexLabelExtractor {
    fn extract(&self, raw: Option<&str>, kind: SegmentKind) -> Option<String> {
        if kind != SegmentKind::Speech {
            return None;
        }
        let raw = raw?;
        self.pattern.find(raw).map(|m| m.as_str().to_string())
    }
}

/// Extract one label per segment, aligned with the input order
pub fn extract_labels(segments: &[Segment], extractor: &dyn LabelExtractor) -> Vec<Option<String>> {
    segments
        .iter()
        .map(|s| extractor.extract(s.raw_speakers.as_deref(), s.kind))
        .collect()
}

use std::collections::HashMap;

use thiserror::Error;

use crate::models::Segment;

/// No speech segment yielded a label, so there is nobody to rank
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no labeled speech segments; cannot select a host")]
pub struct NoHostFound;

/// Total speaking time per label, remembering first-seen order
///
/// The order matters: when two labels tie on total duration, the one that
/// appeared first in the sequence ranks higher.
#[derive(Debug, Clone, Default)]
pub struct DurationTable {
    totals: HashMap<String, f64>,
    order: Vec<String>,
}

impl DurationTable {
    pub fn add(&mut self, label: &str, duration: f64) {
        if !self.totals.contains_key(label) {
            self.order.push(label.to_string());
        }
        *self.totals.entry(label.to_string()).or_insert(0.0) += duration;
    }

    pub fn get(&self, label: &str) -> f64 {
        self.totals.get(label).copied().unwrap_or(0.0)
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Labels in first-seen order
    pub fn labels(&self) -> &[String] {
        &self.order
    }

    /// Labels with totals, duration-descending; ties keep first-seen order
    pub fn ranked(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .order
            .iter()
            .map(|label| (label.as_str(), self.totals[label]))
            .collect();
        // stable sort, so equal totals preserve insertion order
        entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        entries
    }
}

/// Sum speech durations per extracted label
///
/// Segments without a label (non-speech, missing or malformed speaker
/// fields) contribute nothing.
pub fn aggregate_durations(segments: &[Segment], labels: &[Option<String>]) -> DurationTable {
    let mut table = DurationTable::default();

    for (segment, label) in segments.iter().zip(labels) {
        if !segment.is_speech() {
            continue;
        }
        if let Some(label) = label {
            table.add(label, segment.duration);
        }
    }

    table
}

/// Pick the host: greatest total duration, first-seen label on a tie
pub fn select_host(table: &DurationTable) -> Result<(String, f64), NoHostFound> {
    table
        .ranked()
        .first()
        .map(|&(label, duration)| (label.to_string(), duration))
        .ok_or(NoHostFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SegmentKind;

    fn speech(position: usize, speaker: &str, duration: f64) -> Segment {
        Segment {
            position,
            kind: SegmentKind::Speech,
            raw_speakers: Some(speaker.to_string()),
            duration,
        }
    }

    fn labels_of(segments: &[Segment]) -> Vec<Option<String>> {
        segments.iter().map(|s| s.raw_speakers.clone()).collect()
    }

    #[test]
    fn test_aggregate_sums_per_label() {
        let segments = vec![
            speech(0, "SPEAKER_00", 5.0),
            speech(1, "SPEAKER_01", 2.0),
            speech(2, "SPEAKER_00", 3.5),
        ];

        let table = aggregate_durations(&segments, &labels_of(&segments));

        assert_eq!(table.len(), 2);
        assert_eq!(table.get("SPEAKER_00"), 8.5);
        assert_eq!(table.get("SPEAKER_01"), 2.0);
    }

    #[test]
    fn test_unlabeled_and_non_speech_excluded() {
        let mut segments = vec![speech(0, "SPEAKER_00", 5.0)];
        segments.push(Segment {
            position: 1,
            kind: SegmentKind::Other,
            raw_speakers: Some("SPEAKER_00".to_string()),
            duration: 30.0,
        });
        segments.push(Segment {
            position: 2,
            kind: SegmentKind::Speech,
            raw_speakers: None,
            duration: 4.0,
        });
        let labels = vec![Some("SPEAKER_00".to_string()), None, None];

        let table = aggregate_durations(&segments, &labels);

        assert_eq!(table.get("SPEAKER_00"), 5.0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_ranked_descending() {
        let segments = vec![
            speech(0, "SPEAKER_01", 2.0),
            speech(1, "SPEAKER_00", 9.0),
            speech(2, "SPEAKER_02", 4.0),
        ];

        let table = aggregate_durations(&segments, &labels_of(&segments));
        let ranked = table.ranked();

        assert_eq!(ranked[0], ("SPEAKER_00", 9.0));
        assert_eq!(ranked[1], ("SPEAKER_02", 4.0));
        assert_eq!(ranked[2], ("SPEAKER_01", 2.0));
    }

    #[test]
    fn test_host_tie_breaks_first_seen() {
        let segments = vec![
            speech(0, "SPEAKER_05", 10.0),
            speech(1, "SPEAKER_02", 10.0),
        ];

        let table = aggregate_durations(&segments, &labels_of(&segments));
        let (host, duration) = select_host(&table).unwrap();

        assert_eq!(host, "SPEAKER_05");
        assert_eq!(duration, 10.0);
    }

    #[test]
    fn test_empty_table_has_no_host() {
        let table = DurationTable::default();
        assert_eq!(select_host(&table), Err(NoHostFound));
    }
}

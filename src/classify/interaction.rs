use std::collections::HashMap;

use crate::models::Segment;

/// Neighborhood scanned around each non-host speech occurrence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InteractionWindow {
    /// Position offsets probed in order; the scan stops at the first host hit
    pub offsets: Vec<i64>,
}

impl InteractionWindow {
    /// Window of the given radius on both sides: `-r..=-1` then `1..=r`
    pub fn with_radius(radius: usize) -> Self {
        let r = radius as i64;
        let mut offsets: Vec<i64> = (-r..0).collect();
        offsets.extend(1..=r);
        Self { offsets }
    }
}

impl Default for InteractionWindow {
    fn default() -> Self {
        Self::with_radius(3)
    }
}

/// Count, per label, how many of that speaker's occurrences have the host
/// speaking within the window
///
/// Each occurrence contributes at most one interaction no matter how many
/// neighboring host segments exist; this measures "did the host speak near
/// me at least once", not raw adjacency. The host's own count stays 0.
/// Neighbor positions index the full sequence, so non-speech segments keep
/// speakers apart just by occupying positions.
pub fn count_interactions(
    segments: &[Segment],
    labels: &[Option<String>],
    host: &str,
    window: &InteractionWindow,
) -> HashMap<String, u32> {
    let sequence_len = segments.len();

    // label at each occupied position; unlabeled positions are absent
    let label_at: HashMap<usize, &str> = segments
        .iter()
        .zip(labels)
        .filter_map(|(segment, label)| label.as_deref().map(|l| (segment.position, l)))
        .collect();

    // every labeled speaker gets an entry, host included at zero
    let mut counts: HashMap<String, u32> = labels
        .iter()
        .flatten()
        .map(|label| (label.clone(), 0))
        .collect();

    for (segment, label) in segments.iter().zip(labels) {
        if !segment.is_speech() {
            continue;
        }
        let Some(speaker) = label.as_deref() else {
            continue;
        };
        if speaker == host {
            continue;
        }

        for &offset in &window.offsets {
            let Some(neighbor) = offset_position(segment.position, offset, sequence_len) else {
                continue;
            };
            if label_at.get(&neighbor).copied() == Some(host) {
                *counts.entry(speaker.to_string()).or_insert(0) += 1;
                break;
            }
        }
    }

    counts
}

/// Apply an offset to a position, clipped to `0..sequence_len`
fn offset_position(position: usize, offset: i64, sequence_len: usize) -> Option<usize> {
    let target = position as i64 + offset;
    if target < 0 || target >= sequence_len as i64 {
        None
    } else {
        Some(target as usize)
    }
}

use std::collections::{HashMap, HashSet};

/// Thresholds splitting non-host speakers into guests and incidental voices
#[derive(Debug, Clone, PartialEq)]
pub struct GuestThresholds {
    /// Floor below which nobody qualifies on relative standing alone
    pub min_absolute: u32,
    /// Required fraction of the top non-host speaker's interaction count
    pub relative_ratio: f64,
    /// Count that always qualifies, independent of the top performer
    pub free_pass: u32,
}

impl Default for GuestThresholds {
    fn default() -> Self {
        Self {
            min_absolute: 12,
            relative_ratio: 0.2,
            free_pass: 20,
        }
    }
}

impl GuestThresholds {
    /// Cutoff for the relative test, given the best non-host count
    pub fn cutoff(&self, top_count: u32) -> f64 {
        (self.min_absolute as f64).max(top_count as f64 * self.relative_ratio)
    }

    /// Whether a count clears the free pass or the given cutoff
    pub fn qualifies(&self, count: u32, cutoff: f64) -> bool {
        count >= self.free_pass || count as f64 >= cutoff
    }
}

/// Outcome of the guest/other split
#[derive(Debug, Clone, Default)]
pub struct GuestSplit {
    /// Labels that cleared a threshold
    pub guests: HashSet<String>,
    /// Best non-host speaker, used as the relative benchmark
    pub benchmark: Option<String>,
    /// The benchmark's interaction count
    pub top_count: u32,
    /// Effective cutoff applied to every candidate
    pub cutoff: f64,
}

/// Decide which non-host speakers count as guests
///
/// With no non-host candidates the split is empty and no thresholds apply.
pub fn split_guests(
    counts: &HashMap<String, u32>,
    host: &str,
    thresholds: &GuestThresholds,
) -> GuestSplit {
    let mut candidates: Vec<(&str, u32)> = counts
        .iter()
        .filter(|(label, _)| label.as_str() != host)
        .map(|(label, &count)| (label.as_str(), count))
        .collect();
    // count-descending; label order tie-break keeps the benchmark stable
    candidates.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    let Some(&(benchmark, top_count)) = candidates.first() else {
        return GuestSplit::default();
    };

    let cutoff = thresholds.cutoff(top_count);
    let guests = candidates
        .iter()
        .filter(|&&(_, count)| thresholds.qualifies(count, cutoff))
        .map(|&(label, _)| label.to_string())
        .collect();

    GuestSplit {
        guests,
        benchmark: Some(benchmark.to_string()),
        top_count,
        cutoff,
    }
}

pub mod duration;
pub mod extract;
pub mod interaction;
pub mod report;
pub mod thresholds;

pub use duration::*;
pub use extract::*;
pub use interaction::*;
pub use report::*;
pub use thresholds::*;

use tracing::{debug, info, warn};

use crate::models::{RoleRecord, Segment};

/// Tunables for a full classification pass
#[derive(Debug, Clone, Default)]
pub struct ClassifyConfig {
    /// Neighborhood scanned when counting host interactions
    pub window: InteractionWindow,
    /// Guest qualification thresholds
    pub thresholds: GuestThresholds,
}

/// Result of a classification pass
#[derive(Debug, Clone, Default)]
pub struct ClassificationOutcome {
    /// Output rows, total-duration descending; empty when nothing was labeled
    pub records: Vec<RoleRecord>,
    /// Selected host label, if any
    pub host: Option<String>,
    /// The host's total speaking time in seconds
    pub host_duration: f64,
}

impl ClassificationOutcome {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Run the full role classification pipeline over an ordered segment sequence
///
/// Steps: extract labels, aggregate speaking time, select the host, count
/// host interactions per non-host speaker, split guests from incidental
/// voices, assemble the role table. A sequence with no extractable labels
/// produces an empty outcome rather than an error.
pub fn classify(
    segments: &[Segment],
    config: &ClassifyConfig,
    extractor: &dyn LabelExtractor,
) -> ClassificationOutcome {
    let labels = extract_labels(segments, extractor);
    let durations = aggregate_durations(segments, &labels);

    let (host, host_duration) = match select_host(&durations) {
        Ok(selection) => selection,
        Err(NoHostFound) => {
            warn!("No labeled speech segments; producing empty role table");
            return ClassificationOutcome::default();
        }
    };
    info!("Host identified: {} ({:.1}s speaking time)", host, host_duration);

    let counts = count_interactions(segments, &labels, &host, &config.window);
    let split = split_guests(&counts, &host, &config.thresholds);

    if let Some(benchmark) = &split.benchmark {
        info!(
            "Benchmark: {} ({} interactions), cutoff {:.1}, free pass at {}",
            benchmark, split.top_count, split.cutoff, config.thresholds.free_pass
        );
    }

    let profiles = build_profiles(&durations.ranked(), &host, &counts, &split.guests);
    for profile in &profiles {
        if profile.label != host {
            debug!(
                "{}: {} interactions -> {}",
                profile.label, profile.interaction_count, profile.role
            );
        }
    }

    let records = build_records(&profiles, host_duration);
    ClassificationOutcome {
        records,
        host: Some(host),
        host_duration,
    }
}

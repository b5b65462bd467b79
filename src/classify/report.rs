use std::collections::{HashMap, HashSet};

use crate::models::{Role, RoleRecord, SpeakerProfile};

/// Build one profile per speaker, in host-ranking (duration-descending) order
pub fn build_profiles(
    ranked: &[(&str, f64)],
    host: &str,
    counts: &HashMap<String, u32>,
    guests: &HashSet<String>,
) -> Vec<SpeakerProfile> {
    ranked
        .iter()
        .map(|&(label, total_duration)| {
            let role = if label == host {
                Role::Host
            } else if guests.contains(label) {
                Role::Guest
            } else {
                Role::Other
            };
            SpeakerProfile {
                label: label.to_string(),
                total_duration,
                interaction_count: counts.get(label).copied().unwrap_or(0),
                role,
            }
        })
        .collect()
}

/// Render profiles into output rows, keeping their order
pub fn build_records(profiles: &[SpeakerProfile], host_duration: f64) -> Vec<RoleRecord> {
    profiles
        .iter()
        .map(|profile| RoleRecord::from_profile(profile, host_duration))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roles_assigned_in_rank_order() {
        let ranked = vec![("SPEAKER_00", 40.0), ("SPEAKER_01", 30.0), ("SPEAKER_02", 1.0)];
        let counts: HashMap<String, u32> = [
            ("SPEAKER_00".to_string(), 0),
            ("SPEAKER_01".to_string(), 25),
            ("SPEAKER_02".to_string(), 1),
        ]
        .into_iter()
        .collect();
        let guests: HashSet<String> = ["SPEAKER_01".to_string()].into_iter().collect();

        let profiles = build_profiles(&ranked, "SPEAKER_00", &counts, &guests);

        assert_eq!(profiles.len(), 3);
        assert_eq!(profiles[0].role, Role::Host);
        assert_eq!(profiles[0].interaction_count, 0);
        assert_eq!(profiles[1].role, Role::Guest);
        assert_eq!(profiles[2].role, Role::Other);

        let records = build_records(&profiles, 40.0);
        assert_eq!(records[0].ratio_to_host, "100.0%");
        assert_eq!(records[1].ratio_to_host, "75.0%");
        assert_eq!(records[2].ratio_to_host, "2.5%");
    }
}

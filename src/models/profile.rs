use std::fmt;

use serde::{Deserialize, Serialize};

/// Semantic role assigned to a speaker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// The speaker with the greatest total speaking time
    #[serde(rename = "DJ")]
    Host,
    /// A non-host speaker who interacts with the host often enough
    #[serde(rename = "GUEST")]
    Guest,
    /// Incidental speech (inserted advertisements and the like)
    #[serde(rename = "AD_SPEAKER")]
    Other,
}

impl Role {
    /// Wire name used in the output table
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Host => "DJ",
            Role::Guest => "GUEST",
            Role::Other => "AD_SPEAKER",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-speaker aggregate built during classification
#[derive(Debug, Clone, PartialEq)]
pub struct SpeakerProfile {
    /// Canonical speaker label
    pub label: String,
    /// Sum of speech durations over this speaker's segments, in seconds
    pub total_duration: f64,
    /// Occurrences with the host nearby; always 0 for the host
    pub interaction_count: u32,
    /// Assigned role
    pub role: Role,
}

/// One row of the final role table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRecord {
    #[serde(rename = "Speaker")]
    pub speaker: String,
    #[serde(rename = "Role")]
    pub role: Role,
    #[serde(rename = "Total_Duration", serialize_with = "two_decimals")]
    pub total_duration: f64,
    #[serde(rename = "Ratio_to_DJ")]
    pub ratio_to_host: String,
    #[serde(rename = "Interaction_Count")]
    pub interaction_count: u32,
}

impl RoleRecord {
    /// Build the output row for a profile, computing the duration ratio
    /// against the host (0.0% when the host never spoke).
    pub fn from_profile(profile: &SpeakerProfile, host_duration: f64) -> Self {
        let ratio = if host_duration > 0.0 {
            profile.total_duration / host_duration * 100.0
        } else {
            0.0
        };
        Self {
            speaker: profile.label.clone(),
            role: profile.role,
            total_duration: (profile.total_duration * 100.0).round() / 100.0,
            ratio_to_host: format!("{ratio:.1}%"),
            interaction_count: profile.interaction_count,
        }
    }
}

fn two_decimals<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format!("{value:.2}"))
}

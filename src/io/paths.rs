use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;

/// Input/output locations for one dated broadcast session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Derive the transcript paths the upstream pipeline uses for a session:
/// `<base>/<date>/transcript/<date>_with_speaker_ratio.csv` in,
/// `<base>/<date>/transcript/<date>-dj_stats.csv` out.
pub fn session_paths(base_dir: &Path, date: &str) -> Result<SessionPaths> {
    NaiveDate::parse_from_str(date, "%Y%m%d")
        .with_context(|| format!("Invalid session date (expected YYYYMMDD): {}", date))?;

    let dir = base_dir.join(date).join("transcript");
    Ok(SessionPaths {
        input: dir.join(format!("{date}_with_speaker_ratio.csv")),
        output: dir.join(format!("{date}-dj_stats.csv")),
    })
}

use std::path::Path;

use anyhow::{Context, Result};

use crate::models::RoleRecord;

const OUTPUT_HEADERS: [&str; 5] = [
    "Speaker",
    "Role",
    "Total_Duration",
    "Ratio_to_DJ",
    "Interaction_Count",
];

/// Write the role table as CSV
///
/// An empty record set still produces the header row, so downstream loaders
/// see a well-formed (if empty) table.
pub fn write_records_file(path: &Path, records: &[RoleRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create output file: {:?}", path))?;

    if records.is_empty() {
        writer
            .write_record(OUTPUT_HEADERS)
            .context("Failed to write CSV header")?;
    }
    for record in records {
        writer
            .serialize(record)
            .context("Failed to write role record")?;
    }
    writer.flush().context("Failed to flush output file")?;

    Ok(())
}

/// Fixed-width console rendering of the role table
pub struct ReportTable<'a> {
    records: &'a [RoleRecord],
    top: usize,
}

impl<'a> ReportTable<'a> {
    pub fn new(records: &'a [RoleRecord]) -> Self {
        Self { records, top: 15 }
    }

    /// Limit the rendering to the first `top` rows
    pub fn with_top(mut self, top: usize) -> Self {
        self.top = top;
        self
    }

    /// Format the table between `=` rules, highest-duration speakers first
    pub fn format(&self) -> String {
        let rule = "=".repeat(70);
        let mut output = String::new();

        output.push_str(&rule);
        output.push('\n');
        output.push_str(&format!(
            "{:<12} {:<10} {:>14} {:>11} {:>17}\n",
            "Speaker", "Role", "Total_Duration", "Ratio_to_DJ", "Interaction_Count"
        ));
        for record in self.records.iter().take(self.top) {
            output.push_str(&format!(
                "{:<12} {:<10} {:>14.2} {:>11} {:>17}\n",
                record.speaker,
                record.role.as_str(),
                record.total_duration,
                record.ratio_to_host,
                record.interaction_count
            ));
        }
        output.push_str(&rule);
        output.push('\n');

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn sample_records() -> Vec<RoleRecord> {
        vec![
            RoleRecord {
                speaker: "SPEAKER_00".to_string(),
                role: Role::Host,
                total_duration: 1234.56,
                ratio_to_host: "100.0%".to_string(),
                interaction_count: 0,
            },
            RoleRecord {
                speaker: "SPEAKER_03".to_string(),
                role: Role::Guest,
                total_duration: 456.7,
                ratio_to_host: "37.0%".to_string(),
                interaction_count: 42,
            },
        ]
    }

    #[test]
    fn test_write_and_reread_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roles.csv");

        write_records_file(&path, &sample_records()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("Speaker,Role,Total_Duration,Ratio_to_DJ,Interaction_Count")
        );
        assert_eq!(lines.next(), Some("SPEAKER_00,DJ,1234.56,100.0%,0"));
        assert_eq!(lines.next(), Some("SPEAKER_03,GUEST,456.70,37.0%,42"));

        // and it parses back with the same values
        let mut reader = csv::Reader::from_reader(content.as_bytes());
        let reread: Vec<RoleRecord> = reader
            .deserialize()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(reread, sample_records());
    }

    #[test]
    fn test_empty_records_write_header_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        write_records_file(&path, &[]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.trim_end(),
            "Speaker,Role,Total_Duration,Ratio_to_DJ,Interaction_Count"
        );
    }

    #[test]
    fn test_report_table_format() {
        let records = sample_records();
        let table = ReportTable::new(&records).format();

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.first(), Some(&"=".repeat(70).as_str()));
        assert_eq!(lines.last(), Some(&"=".repeat(70).as_str()));
        assert!(lines[1].starts_with("Speaker"));
        assert!(lines[2].contains("SPEAKER_00"));
        assert!(lines[2].contains("DJ"));
        assert!(lines[3].contains("37.0%"));
    }

    #[test]
    fn test_report_table_top_limit() {
        let records = sample_records();
        let table = ReportTable::new(&records).with_top(1).format();

        assert!(table.contains("SPEAKER_00"));
        assert!(!table.contains("SPEAKER_03"));
    }
}

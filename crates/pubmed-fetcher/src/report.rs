//! Output assembly: one CSV row per paper.

use std::path::Path;

use anyhow::Context;
use serde_json::{Map, Value};

use crate::models::{OutputRecord, PaperSummary};
use crate::screen;

/// Bookkeeping key the esummary result map embeds alongside paper entries.
const UIDS_KEY: &str = "uids";

/// Build one output record per paper entry, in map order.
///
/// The `"uids"` entry is skipped. Missing or malformed fields degrade to
/// defaults; building never fails for a whole batch.
#[must_use]
pub fn build_records(result: &Map<String, Value>) -> Vec<OutputRecord> {
    let mut records = Vec::with_capacity(result.len().saturating_sub(1));

    for (paper_id, value) in result {
        if paper_id == UIDS_KEY {
            continue;
        }

        let summary = PaperSummary::from_value(value);
        let (authors, companies) = screen::partition_non_academic(&summary.affiliations);

        records.push(OutputRecord {
            pubmed_id: paper_id.clone(),
            title: summary.title_or_default().to_string(),
            publication_date: summary.pubdate_or_default().to_string(),
            non_academic_authors: authors.join(", "),
            company_affiliations: companies.join(", "),
            corresponding_author_email: screen::extract_email(summary.correspondence.as_deref()),
        });
    }

    records
}

/// Write records to a CSV file, header row included even when empty.
pub fn write_csv(path: &Path, records: &[OutputRecord]) -> anyhow::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;

    writer.write_record(OutputRecord::HEADER).context("failed to write CSV header")?;

    for record in records {
        writer.serialize(record).context("failed to write CSV record")?;
    }

    writer.flush().context("failed to flush CSV")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn result_map(entries: &[(&str, Value)]) -> Map<String, Value> {
        entries.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    #[test]
    fn test_build_records_skips_uids() {
        let result = result_map(&[
            ("uids", json!(["12345"])),
            ("12345", json!({"title": "Cancer Research", "pubdate": "2024-01-01"})),
        ]);

        let records = build_records(&result);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pubmed_id, "12345");
        assert_eq!(records[0].title, "Cancer Research");
        assert_eq!(records[0].publication_date, "2024-01-01");
    }

    #[test]
    fn test_build_records_uids_only_yields_nothing() {
        let result = result_map(&[("uids", json!(["12345", "67890"]))]);
        assert!(build_records(&result).is_empty());
    }

    #[test]
    fn test_build_records_defaults_for_missing_fields() {
        let result = result_map(&[("111", json!({}))]);

        let records = build_records(&result);
        assert_eq!(records[0].title, "N/A");
        assert_eq!(records[0].publication_date, "N/A");
        assert_eq!(records[0].non_academic_authors, "");
        assert_eq!(records[0].company_affiliations, "");
        assert_eq!(records[0].corresponding_author_email, "N/A");
    }

    #[test]
    fn test_build_records_full_entry() {
        let result = result_map(&[(
            "222",
            json!({
                "title": "Trial Outcomes",
                "pubdate": "2023 Nov",
                "affiliations": {
                    "Dr. Smith": "XYZ Pharmaceuticals",
                    "Dr. Johnson": "Harvard University",
                    "Dr. Lee": "ABC Biotech"
                },
                "correspondence": "Contact: john.doe@biotech.com for further info."
            }),
        )]);

        let records = build_records(&result);
        assert_eq!(records[0].non_academic_authors, "Dr. Smith, Dr. Lee");
        assert_eq!(records[0].company_affiliations, "XYZ Pharmaceuticals, ABC Biotech");
        assert_eq!(records[0].corresponding_author_email, "john.doe@biotech.com");
    }

    #[test]
    fn test_build_records_preserves_map_order() {
        let result: Map<String, Value> =
            serde_json::from_str(r#"{"999": {}, "111": {}, "555": {}}"#).unwrap();

        let records = build_records(&result);
        let ids: Vec<&str> = records.iter().map(|r| r.pubmed_id.as_str()).collect();
        assert_eq!(ids, vec!["999", "111", "555"]);
    }

    #[test]
    fn test_write_csv_quotes_embedded_commas() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        let records = vec![OutputRecord {
            pubmed_id: "12345".to_string(),
            title: "Title, with a comma".to_string(),
            publication_date: "2024".to_string(),
            non_academic_authors: "Dr. Smith, Dr. Lee".to_string(),
            company_affiliations: "XYZ Pharmaceuticals, ABC Biotech".to_string(),
            corresponding_author_email: "N/A".to_string(),
        }];

        write_csv(&path, &records).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let mut lines = contents.lines();
        assert_eq!(
            lines.next().unwrap(),
            "PubmedID,Title,Publication Date,Non-academic Author(s),\
             Company Affiliation(s),Corresponding Author Email"
        );
        assert!(contents.contains("\"Title, with a comma\""));
        assert!(contents.contains("\"Dr. Smith, Dr. Lee\""));
    }

    #[test]
    fn test_write_csv_empty_still_writes_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("papers.csv");

        write_csv(&path, &[]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("PubmedID,Title,"));
        assert_eq!(contents.lines().count(), 1);
    }
}

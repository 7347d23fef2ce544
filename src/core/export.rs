use crate::domain::model::{LeadRecord, LEAD_HEADERS};
use crate::utils::error::{LeadsError, Result};
use std::fs::File;
use std::path::Path;

/// Writes the header row and one row per lead, replacing any existing file.
///
/// The file is opened before anything is written, so an unwritable path
/// fails with [`LeadsError::IoError`] and leaves nothing behind. A failure
/// part-way through leaves a truncated file.
pub fn export_csv<P: AsRef<Path>>(records: &[LeadRecord], headers: &[String], path: P) -> Result<()> {
    let path = path.as_ref();
    if headers.len() != LEAD_HEADERS.len() {
        return Err(LeadsError::ConfigError {
            message: format!(
                "expected {} column headers, got {}",
                LEAD_HEADERS.len(),
                headers.len()
            ),
        });
    }

    let file = File::create(path)?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(headers)?;
    for record in records {
        writer.write_record(record.to_row())?;
    }
    writer.flush()?;

    tracing::info!("Wrote {} leads to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{LeadSource, LeadValue};
    use tempfile::TempDir;

    fn headers() -> Vec<String> {
        LEAD_HEADERS.iter().map(|s| s.to_string()).collect()
    }

    fn sample_records() -> Vec<LeadRecord> {
        vec![
            LeadRecord {
                name: "Chef A".into(),
                location: "Miami, USA".to_string(),
                address: LeadValue::not_available(),
                contact: LeadValue::not_available(),
                website: LeadValue::not_available(),
                rating: LeadValue::Number(serde_json::Number::from_f64(4.5).unwrap()),
                reviews: LeadValue::not_available(),
                source: LeadSource::GooglePlaces,
            },
            LeadRecord {
                name: LeadValue::Absent,
                location: "Miami, USA".to_string(),
                address: LeadValue::List(vec![
                    "1 Ocean Dr".to_string(),
                    "Miami, FL 33139".to_string(),
                ]),
                contact: "+13055550100".into(),
                website: "https://www.yelp.com/biz/chef".into(),
                rating: LeadValue::Number(serde_json::Number::from(5)),
                reviews: LeadValue::Number(serde_json::Number::from(9)),
                source: LeadSource::Yelp,
            },
        ]
    }

    #[test]
    fn test_export_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chef_leads.csv");
        let records = sample_records();

        export_csv(&records, &headers(), &path).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_path(&path)
            .unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();

        assert_eq!(rows.len(), records.len() + 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), LEAD_HEADERS.to_vec());
        assert_eq!(
            rows[1].iter().collect::<Vec<_>>(),
            vec!["Chef A", "Miami, USA", "N/A", "N/A", "N/A", "4.5", "N/A", "Google Places"]
        );
        assert_eq!(&rows[2][0], "");
        assert_eq!(&rows[2][2], "1 Ocean Dr, Miami, FL 33139");
        assert_eq!(&rows[2][7], "Yelp");
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chef_leads.csv");
        std::fs::write(&path, "old,content\n1,2\n3,4\n5,6\n").unwrap();

        export_csv(&[], &headers(), &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            content,
            "Name,Location,Address,Contact,Website,Rating,Reviews,Source\n"
        );
    }

    #[test]
    fn test_export_to_unwritable_path_fails() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing_dir").join("chef_leads.csv");

        let err = export_csv(&sample_records(), &headers(), &path).unwrap_err();

        assert!(matches!(err, LeadsError::IoError(_)));
        assert!(!path.exists());
    }

    #[test]
    fn test_export_rejects_wrong_header_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("chef_leads.csv");
        let short = vec!["Name".to_string(), "Location".to_string()];

        let err = export_csv(&sample_records(), &short, &path).unwrap_err();

        assert!(matches!(err, LeadsError::ConfigError { .. }));
        assert!(!path.exists());
    }
}

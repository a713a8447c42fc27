use crate::data::list::KeyValueList;
use anyhow::{anyhow, Context, Result};
use chrono::Local;
use serde_json::Value as JsonValue;
use std::fs::File;
use std::path::Path;
use tracing::debug;

/// Handles exporting listings to files
///
/// JSON output is an array of `[key, value]` pairs rather than an object:
/// listings allow duplicate keys and an object would silently drop them.
/// Both exporters write something the loaders read back unchanged.
pub struct DataExporter;

impl DataExporter {
    /// Export a listing to a CSV file with a `key,value` header row
    pub fn export_to_csv<P: AsRef<Path>>(list: &KeyValueList, path: P) -> Result<String> {
        if list.is_empty() {
            return Err(anyhow!("No entries to export"));
        }

        let mut wtr = csv::Writer::from_path(&path)
            .with_context(|| format!("Failed to create CSV file: {:?}", path.as_ref()))?;

        wtr.write_record(["key", "value"])?;
        for entry in list {
            wtr.write_record([entry.key(), entry.value_text().as_str()])?;
        }
        wtr.flush()?;

        debug!("Exported {} entries to {:?}", list.len(), path.as_ref());
        Ok(format!(
            "✓ Exported {} entries to CSV file: {}",
            list.len(),
            path.as_ref().display()
        ))
    }

    /// Export a listing to a JSON pair-array file
    pub fn export_to_json<P: AsRef<Path>>(list: &KeyValueList, path: P) -> Result<String> {
        if list.is_empty() {
            return Err(anyhow!("No entries to export"));
        }

        let pairs: Vec<(String, JsonValue)> = list
            .iter()
            .map(|entry| (entry.key().to_string(), entry.value().to_json()))
            .collect();

        let file = File::create(&path)
            .with_context(|| format!("Failed to create JSON file: {:?}", path.as_ref()))?;
        serde_json::to_writer_pretty(file, &pairs)?;

        debug!("Exported {} entries to {:?}", list.len(), path.as_ref());
        Ok(format!(
            "✓ Exported {} entries to JSON file: {}",
            list.len(),
            path.as_ref().display()
        ))
    }

    /// Export to CSV under a generated `entries_<timestamp>.csv` name
    pub fn export_to_csv_timestamped(list: &KeyValueList) -> Result<String> {
        Self::export_to_csv(list, timestamped_filename("csv"))
    }

    /// Export to JSON under a generated `entries_<timestamp>.json` name
    pub fn export_to_json_timestamped(list: &KeyValueList) -> Result<String> {
        Self::export_to_json(list, timestamped_filename("json"))
    }
}

fn timestamped_filename(extension: &str) -> String {
    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    format!("entries_{}.{}", timestamp, extension)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamped_filename_shape() {
        let name = timestamped_filename("csv");
        assert!(name.starts_with("entries_"));
        assert!(name.ends_with(".csv"));
        // entries_YYYYMMDD_HHMMSS.csv
        assert_eq!(name.len(), "entries_".len() + 15 + ".csv".len());
    }

    #[test]
    fn test_export_refuses_empty_listing() {
        let result = DataExporter::export_to_csv(&KeyValueList::new(), "unused.csv");
        assert!(result.is_err());
    }
}

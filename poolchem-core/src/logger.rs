use crate::error::{PoolChemError, Result};
use chrono::{DateTime, Utc};
use csv::{ReaderBuilder, WriterBuilder};
use log::debug;
use poolchem_schemas::{pool::PoolType, record::CalculationRecord};
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, OpenOptions},
    path::{Path, PathBuf},
};

/// Destination for finished calculations. The engine never calls this
/// itself; saving is a separate step taken by the caller.
pub trait RecordSink {
    fn save(&mut self, record: &CalculationRecord) -> Result<()>;
}

#[derive(Debug, Serialize, Deserialize)]
struct LogEntry {
    timestamp: DateTime<Utc>,
    client_id: Option<String>,
    technician_id: Option<String>,
    pool_type: PoolType,
    pool_volume: Option<f64>,
    test_results_json: String,
    chemical_recommendations_json: String,
}

/// Append-only CSV history, one calculation per row with readings and
/// recommendations stored as JSON columns.
pub struct CsvRecordLogger {
    path: PathBuf,
}

impl CsvRecordLogger {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn path_str(&self) -> String {
        self.path.display().to_string()
    }
}

impl RecordSink for CsvRecordLogger {
    fn save(&mut self, record: &CalculationRecord) -> Result<()> {
        let needs_header = fs::metadata(&self.path).map_or(true, |m| m.len() == 0);
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| PoolChemError::FileIO(self.path_str(), e))?;
        let mut writer = WriterBuilder::new().has_headers(needs_header).from_writer(file);

        let entry = LogEntry {
            timestamp: record.timestamp,
            client_id: record.client_id.clone(),
            technician_id: record.technician_id.clone(),
            pool_type: record.pool_type,
            pool_volume: record.pool_volume,
            test_results_json: serde_json::to_string(&record.test_results)?,
            chemical_recommendations_json: serde_json::to_string(
                &record.chemical_recommendations,
            )?,
        };

        writer
            .serialize(entry)
            .map_err(|e| PoolChemError::CsvError(self.path_str(), e))?;
        writer
            .flush()
            .map_err(|e| PoolChemError::FileIO(self.path_str(), e))?;
        debug!("Saved calculation record to '{}'", self.path_str());
        Ok(())
    }
}

/// Reads every record previously written by `CsvRecordLogger`.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationRecord>> {
    let path_str = path.as_ref().display().to_string();
    let mut reader = ReaderBuilder::new()
        .from_path(&path)
        .map_err(|e| PoolChemError::CsvError(path_str.clone(), e))?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let entry: LogEntry = result.map_err(|e| PoolChemError::CsvError(path_str.clone(), e))?;
        records.push(CalculationRecord {
            pool_volume: entry.pool_volume,
            pool_type: entry.pool_type,
            client_id: entry.client_id,
            technician_id: entry.technician_id,
            test_results: serde_json::from_str(&entry.test_results_json)?,
            chemical_recommendations: serde_json::from_str(&entry.chemical_recommendations_json)?,
            timestamp: entry.timestamp,
        });
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::RecommendationEngine;
    use chrono::TimeZone;
    use poolchem_schemas::{
        parameter::ParameterId,
        pool::PoolProfile,
        reading::TestReading,
    };

    #[test]
    fn appends_rows_and_reads_them_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.csv");
        let engine = RecommendationEngine::default();
        let mut logger = CsvRecordLogger::new(&path);

        let profile = PoolProfile::new(18000.0, PoolType::Salt).with_client("C-9");
        let first = engine
            .calculate(
                &profile,
                &[TestReading::new(ParameterId::Ph, 7.9), TestReading::new(ParameterId::CyanuricAcid, 90.0)],
                Some("T-1".to_string()),
                Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            )
            .unwrap();
        let second = engine
            .calculate(
                &profile,
                &[TestReading::new(ParameterId::Ph, 7.4)],
                None,
                Utc.with_ymd_and_hms(2024, 5, 8, 8, 0, 0).unwrap(),
            )
            .unwrap();

        logger.save(&first).unwrap();
        logger.save(&second).unwrap();

        let records = read_records(&path).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].timestamp, first.timestamp);
        assert_eq!(records[0].client_id.as_deref(), Some("C-9"));
        assert_eq!(records[0].technician_id.as_deref(), Some("T-1"));
        assert_eq!(records[0].pool_type, PoolType::Salt);
        assert_eq!(records[0].test_results, first.test_results);
        assert_eq!(records[1].technician_id, None);
        assert_eq!(records[1].chemical_recommendations, second.chemical_recommendations);

        let saved = &records[0].chemical_recommendations;
        assert_eq!(saved.len(), first.chemical_recommendations.len());
        for (read, written) in saved.iter().zip(&first.chemical_recommendations) {
            assert_eq!(read.chemical_name, written.chemical_name);
            assert_eq!(read.priority, written.priority);
            match (read.amount.quantity(), written.amount.quantity()) {
                (Some(a), Some(b)) => approx::assert_relative_eq!(a, b, max_relative = 1e-12),
                (None, None) => assert_eq!(read.amount, written.amount),
                _ => panic!("amount kind changed on disk"),
            }
        }
    }

    #[test]
    fn missing_history_is_a_csv_error() {
        let err = read_records("/nonexistent/history.csv").unwrap_err();
        assert!(matches!(err, PoolChemError::CsvError(ref p, _) if p == "/nonexistent/history.csv"));
    }
}

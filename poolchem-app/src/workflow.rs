use crate::config;
use anyhow::{bail, Context, Result};
use chrono::Utc;
use poolchem_core::{
    classifier::{classify_all, classify_str},
    logger::{read_records, CsvRecordLogger, RecordSink},
    RangeTable,
};
use poolchem_schemas::{
    parameter::format_reading,
    reading::TestReading,
    record::CalculationRecord,
};
use std::path::Path;

/// Options for a full recommendation run.
pub struct RecommendOptions<'a> {
    pub visit_path: &'a Path,
    pub ranges_path: Option<&'a Path>,
    pub coefficients_path: Option<&'a Path>,
    pub history_path: Option<&'a Path>,
    pub json: bool,
}

/// Computes recommendations for one visit, prints them, and optionally
/// appends the calculation to a history file.
pub fn run_recommendation(options: &RecommendOptions<'_>) -> Result<()> {
    let visit = config::load_visit(options.visit_path)?;
    let engine = config::build_engine(options.ranges_path, options.coefficients_path)?;

    let record = engine
        .calculate(&visit.pool, &visit.readings, visit.technician_id.clone(), Utc::now())
        .context("Failed to compute recommendations")?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("\n--- [Readings] ---");
        for row in reading_rows(engine.ranges(), &visit.readings) {
            println!("{}", row);
        }
        print_summary_report(&record);
    }

    if let Some(path) = options.history_path {
        let mut sink = CsvRecordLogger::new(path);
        sink.save(&record)
            .with_context(|| format!("Failed to save calculation to {:?}", path))?;
        println!("\nCalculation saved to {:?}", sink.path());
    }
    Ok(())
}

/// One report line per visit row, each showing that row's own value and status.
fn reading_rows(ranges: &RangeTable, readings: &[TestReading]) -> Vec<String> {
    readings
        .iter()
        .zip(classify_all(ranges, readings))
        .map(|(reading, (parameter, status))| {
            let entered = reading
                .value
                .map_or_else(|| "-".to_string(), |v| format_reading(parameter, v));
            format!(
                "  - {:<17} {:>8}  [{}] target {}",
                parameter.label(),
                entered,
                status,
                ranges.get(parameter).band_label()
            )
        })
        .collect()
}

/// Live single-value classification. An empty value is `unknown`.
pub fn run_classify(parameter: &str, value: Option<&str>) -> Result<()> {
    let value = match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(raw) => Some(
            raw.parse::<f64>()
                .with_context(|| format!("'{}' is not a number", raw))?,
        ),
        None => None,
    };
    let status = classify_str(parameter, value)?;
    println!("{}", status);
    Ok(())
}

/// Prints every calculation stored in a history file.
pub fn run_history(path: &Path) -> Result<()> {
    let records = read_records(path)
        .with_context(|| format!("Failed to read history from {:?}", path))?;
    if records.is_empty() {
        bail!("History file {:?} contains no calculations", path);
    }
    for record in &records {
        print_summary_report(record);
    }
    println!("\n{} calculation(s) in {:?}", records.len(), path);
    Ok(())
}

fn print_summary_report(record: &CalculationRecord) {
    println!("\n--- [Recommendations] {} ---", record.timestamp.format("%Y-%m-%d %H:%M UTC"));
    println!("========================================");
    println!(
        "Pool: {:?}, {} gallons",
        record.pool_type,
        record.pool_volume.map_or_else(|| "?".to_string(), |v| format!("{:.0}", v))
    );
    if let Some(client) = &record.client_id {
        println!("Client: {}", client);
    }
    if let Some(technician) = &record.technician_id {
        println!("Technician: {}", technician);
    }
    println!("----------------------------------------");
    for (i, rec) in record.chemical_recommendations.iter().enumerate() {
        println!(
            "  {}. [{:<6}] {}: {}",
            i + 1,
            rec.priority,
            rec.chemical_name,
            rec.amount
        );
        println!("     {}", rec.reason_text);
    }
    println!("========================================");
}

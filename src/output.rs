use std::fs;

use crate::error::TeeTimeError;
use crate::model::TeeTimeRecord;

pub fn save_records(records: &[TeeTimeRecord], path: &str) -> Result<(), TeeTimeError> {
    if path.ends_with(".csv") {
        save_csv(records, path)
    } else if path.ends_with(".json") {
        save_json(records, path)
    } else {
        Err(TeeTimeError::UnsupportedFormat(path.to_string()))
    }
}

fn save_csv(records: &[TeeTimeRecord], path: &str) -> Result<(), TeeTimeError> {
    let mut writer =
        csv::Writer::from_path(path).map_err(|e| TeeTimeError::OutputFailed(e.to_string()))?;

    // serialize() only emits the header alongside the first record, so an
    // empty result set needs the header written explicitly.
    if records.is_empty() {
        writer
            .write_record(["date", "time", "course", "price", "players", "start_hole"])
            .map_err(|e| TeeTimeError::OutputFailed(e.to_string()))?;
    }

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TeeTimeError::OutputFailed(e.to_string()))?;
    }

    writer
        .flush()
        .map_err(|e| TeeTimeError::OutputFailed(e.to_string()))
}

fn save_json(records: &[TeeTimeRecord], path: &str) -> Result<(), TeeTimeError> {
    let json = serde_json::to_string_pretty(records)
        .map_err(|e| TeeTimeError::OutputFailed(e.to_string()))?;
    fs::write(path, json).map_err(|e| TeeTimeError::OutputFailed(e.to_string()))
}

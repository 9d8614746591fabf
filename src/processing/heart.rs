//! Single and bulk heart-disease predictions.

use std::path::Path;

use thiserror::Error;

use crate::HEART_FEATURE_COUNT;
use crate::artifacts::heart::HeartModels;
use crate::domain::heart::{HEART_FEATURE_COLUMNS, HeartRecord};
use crate::inference::Classifier;
use crate::inference::linear::LogisticRegression;

/// Column appended to bulk prediction output.
pub const PREDICTION_COLUMN: &str = "Prediction LR";

/// One model's verdict for a single patient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelVerdict {
    pub model: &'static str,
    pub positive: bool,
}

/// Evaluate all four classifiers against one record.
pub fn predict_single(models: &HeartModels, record: &HeartRecord) -> Vec<ModelVerdict> {
    let features = record.to_features();
    models
        .named()
        .into_iter()
        .map(|(model, classifier)| ModelVerdict {
            model,
            positive: classifier.predict(&features),
        })
        .collect()
}

#[derive(Debug, Error)]
pub enum BulkPredictError {
    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),
    #[error("row {row}: column {column} is not numeric: {value:?}")]
    InvalidValue {
        row: usize,
        column: String,
        value: String,
    },
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BulkStats {
    pub rows: usize,
    pub positives: usize,
}

/// Predict every row of a CSV with the logistic regression model and write
/// the input back out with an added [`PREDICTION_COLUMN`].
///
/// The header must contain all 11 schema columns; extra columns pass
/// through untouched. Nothing is written when the header is rejected.
pub fn bulk_predict(
    model: &LogisticRegression,
    input: &Path,
    output: &Path,
) -> Result<BulkStats, BulkPredictError> {
    let mut reader = csv::Reader::from_path(input)?;
    let headers = reader.headers()?.clone();

    let mut positions = Vec::with_capacity(HEART_FEATURE_COUNT);
    let mut missing = Vec::new();
    for column in HEART_FEATURE_COLUMNS {
        match headers.iter().position(|header| header == column) {
            Some(position) => positions.push(position),
            None => missing.push(column.to_string()),
        }
    }
    if !missing.is_empty() {
        return Err(BulkPredictError::MissingColumns(missing));
    }

    let mut writer = csv::Writer::from_path(output)?;
    let mut output_header = headers.clone();
    output_header.push_field(PREDICTION_COLUMN);
    writer.write_record(&output_header)?;

    let mut stats = BulkStats::default();
    for (row_index, result) in reader.records().enumerate() {
        let record = result?;
        let mut features = [0.0_f32; HEART_FEATURE_COUNT];
        for (slot, (column, position)) in
            HEART_FEATURE_COLUMNS.iter().zip(positions.iter()).enumerate()
        {
            let raw = record.get(*position).unwrap_or("").trim();
            features[slot] = raw.parse().map_err(|_| BulkPredictError::InvalidValue {
                row: row_index + 1,
                column: (*column).to_string(),
                value: raw.to_string(),
            })?;
        }

        let positive = model.predict(&features);
        let mut output_record = record.clone();
        output_record.push_field(if positive { "1" } else { "0" });
        writer.write_record(&output_record)?;

        stats.rows += 1;
        if positive {
            stats.positives += 1;
        }
    }
    writer.flush()?;

    log::info!(
        "Finished bulk predictions: rows={}, positives={}",
        stats.rows,
        stats.positives
    );
    Ok(stats)
}

//! Laptop price pipeline: one-hot encoder spec plus the regression head,
//! and the reference option lists used to populate selections.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::artifacts::{ArtifactResult, invalid, load_json};
use crate::domain::laptop::LaptopQuery;
use crate::inference::linear::LinearRegressor;

pub const PIPELINE_FILE: &str = "laptop_pipeline.json";
pub const OPTIONS_FILE: &str = "laptop_options.json";

/// Number of numeric passthrough features: ram, weight, touchscreen, ips,
/// pixel density, hdd, ssd.
const NUMERIC_FEATURE_COUNT: usize = 7;

#[derive(Debug, Error)]
#[error("unknown {column}: {value:?}")]
pub struct UnknownCategory {
    pub column: &'static str,
    pub value: String,
}

/// Preprocessing and regression in one callable unit. Categorical columns
/// are one-hot encoded against the category lists captured at training
/// time; the regressor predicts the natural log of the price.
///
/// Encoded layout: one-hot blocks for company, type name, CPU brand, GPU
/// brand and OS, followed by the numeric passthrough columns in form order
/// (ram, weight, touchscreen, ips, pixel density, hdd, ssd).
#[derive(Debug, Deserialize)]
pub struct LaptopPipeline {
    pub companies: Vec<String>,
    pub type_names: Vec<String>,
    pub cpu_brands: Vec<String>,
    pub gpu_brands: Vec<String>,
    pub oses: Vec<String>,
    pub regressor: LinearRegressor,
}

impl LaptopPipeline {
    pub fn load(dir: &Path) -> ArtifactResult<Self> {
        let path = dir.join(PIPELINE_FILE);
        let pipeline: LaptopPipeline = load_json(&path)?;
        let expected = pipeline.encoded_width();
        if pipeline.regressor.weights.len() != expected {
            return Err(invalid(
                &path,
                format!(
                    "regressor has {} weights, encoder produces {expected}",
                    pipeline.regressor.weights.len()
                ),
            ));
        }
        for (column, values) in [
            ("company", &pipeline.companies),
            ("type name", &pipeline.type_names),
            ("CPU brand", &pipeline.cpu_brands),
            ("GPU brand", &pipeline.gpu_brands),
            ("OS", &pipeline.oses),
        ] {
            if values.is_empty() {
                return Err(invalid(&path, format!("no {column} categories")));
            }
        }
        Ok(pipeline)
    }

    pub fn encoded_width(&self) -> usize {
        self.companies.len()
            + self.type_names.len()
            + self.cpu_brands.len()
            + self.gpu_brands.len()
            + self.oses.len()
            + NUMERIC_FEATURE_COUNT
    }

    /// Encode a query in the fixed 12-feature schema. The pixel density is
    /// computed by the caller from resolution and screen size.
    pub fn encode(&self, query: &LaptopQuery, ppi: f32) -> Result<Vec<f32>, UnknownCategory> {
        let mut features = Vec::with_capacity(self.encoded_width());
        push_one_hot(&mut features, &self.companies, &query.company, "company")?;
        push_one_hot(&mut features, &self.type_names, &query.type_name, "type name")?;
        push_one_hot(&mut features, &self.cpu_brands, &query.cpu_brand, "CPU brand")?;
        push_one_hot(&mut features, &self.gpu_brands, &query.gpu_brand, "GPU brand")?;
        push_one_hot(&mut features, &self.oses, &query.os, "OS")?;
        features.push(query.ram_gb as f32);
        features.push(query.weight_kg);
        features.push(if query.touchscreen { 1.0 } else { 0.0 });
        features.push(if query.ips { 1.0 } else { 0.0 });
        features.push(ppi);
        features.push(query.hdd_gb as f32);
        features.push(query.ssd_gb as f32);
        Ok(features)
    }
}

fn push_one_hot(
    features: &mut Vec<f32>,
    values: &[String],
    value: &str,
    column: &'static str,
) -> Result<(), UnknownCategory> {
    let position = values.iter().position(|candidate| candidate == value);
    let Some(position) = position else {
        return Err(UnknownCategory {
            column,
            value: value.to_string(),
        });
    };
    features.extend((0..values.len()).map(|i| if i == position { 1.0 } else { 0.0 }));
    Ok(())
}

/// Reference lists used only to populate and validate selections.
#[derive(Debug, Deserialize)]
pub struct LaptopOptions {
    pub companies: Vec<String>,
    pub type_names: Vec<String>,
    pub cpu_brands: Vec<String>,
    pub gpu_brands: Vec<String>,
    pub oses: Vec<String>,
    pub ram_gb: Vec<u32>,
    pub hdd_gb: Vec<u32>,
    pub ssd_gb: Vec<u32>,
    pub resolutions: Vec<String>,
}

impl LaptopOptions {
    pub fn load(dir: &Path) -> ArtifactResult<Self> {
        load_json(&dir.join(OPTIONS_FILE))
    }
}

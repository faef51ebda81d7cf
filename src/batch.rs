// src/batch.rs
use std::path::Path;

use anyhow::{Context, Result};
use log::info;
use ndarray::Array3;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::processing::IndexCatalog;

#[derive(Deserialize, Serialize, Debug, Default)]
pub struct BatchConfig {
    #[serde(default)]
    pub global: GlobalParams,
    /// Indices to compute; empty means every registered index.
    #[serde(default)]
    pub operations: Vec<Operation>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct GlobalParams {
    #[serde(default = "default_true")]
    pub float: bool,
    #[serde(default = "default_scale_factor")]
    pub scale_factor: i32,
    /// Worker threads, defaults to the number of CPUs.
    #[serde(default)]
    pub threads: Option<usize>,
}

impl Default for GlobalParams {
    fn default() -> Self {
        Self {
            float: default_true(),
            scale_factor: default_scale_factor(),
            threads: None,
        }
    }
}

fn default_scale_factor() -> i32 {
    1000
}

fn default_true() -> bool {
    true
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Operation {
    pub index: String,
    pub float: Option<bool>,
    pub scale_factor: Option<i32>,
}

impl Operation {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            float: None,
            scale_factor: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BatchData {
    /// Values with the fill value at masked pixels, plus the mask itself.
    Float { data: Array3<f32>, mask: Array3<bool> },
    Fixed { data: Array3<i16>, scale_factor: i32 },
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub index: String,
    pub data: BatchData,
    pub valid_pixels: usize,
}

pub fn load_batch_config<P: AsRef<Path>>(config_path: P) -> Result<BatchConfig> {
    let config_path = config_path.as_ref();
    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("reading batch config {}", config_path.display()))?;
    let config: BatchConfig = serde_json::from_str(&config_content)
        .with_context(|| format!("parsing batch config {}", config_path.display()))?;
    Ok(config)
}

/// Compute every operation of `config` against one catalog.
///
/// All index names are checked before any computation starts. Results come
/// back in request order.
pub fn process_batch(catalog: &IndexCatalog<'_>, config: &BatchConfig) -> Result<Vec<BatchOutput>> {
    let operations: Vec<Operation> = if config.operations.is_empty() {
        catalog.names().map(Operation::new).collect()
    } else {
        config.operations.clone()
    };

    for (i, op) in operations.iter().enumerate() {
        catalog
            .definition(&op.index)
            .with_context(|| format!("invalid operation {} of {}", i + 1, operations.len()))?;
    }

    let threads = config.global.threads.unwrap_or_else(num_cpus::get).max(1);
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .context("building batch thread pool")?;

    info!(
        "Starting batch processing with {} operations on {} threads",
        operations.len(),
        threads
    );

    let outputs = pool.install(|| {
        operations
            .par_iter()
            .enumerate()
            .map(|(i, op)| {
                info!("[{}/{}] Processing {}", i + 1, operations.len(), op.index);

                let float = op.float.unwrap_or(config.global.float);
                let scale_factor = op.scale_factor.unwrap_or(config.global.scale_factor);

                let raster = catalog
                    .compute(&op.index)
                    .with_context(|| format!("computing {}", op.index))?;
                let valid_pixels = raster.valid_count();

                let data = if float {
                    let (data, mask) = raster.into_parts();
                    BatchData::Float { data, mask }
                } else {
                    BatchData::Fixed {
                        data: raster.to_fixed_point(scale_factor),
                        scale_factor,
                    }
                };

                Ok(BatchOutput {
                    index: op.index.clone(),
                    data,
                    valid_pixels,
                })
            })
            .collect::<Result<Vec<_>>>()
    })?;

    info!("Batch processing complete!");
    Ok(outputs)
}

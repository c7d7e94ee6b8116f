use crate::convert::{convert_instance, ConvertSummary};
use crate::io::{read_edge_list, ConvertError, OutputLayout, ReadEdgeListError};
use clap::ValueEnum;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, error, info};

/// Instance ids converted when no range is given.
pub const DEFAULT_IDS: RangeInclusive<u32> = 1..=19;

pub fn input_file_name(id: u32) -> String {
    format!("instance_{id}.txt")
}

pub fn output_file_name(id: u32) -> String {
    format!("instance_transformed_{id}.txt")
}

/// What to do when an instance fails.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, ValueEnum)]
pub enum FailurePolicy {
    /// Report the error and go on with the next instance.
    #[default]
    Continue,
    /// Stop at the first error.
    FailFast,
}

#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub ids: RangeInclusive<u32>,
    pub layout: OutputLayout,
    pub policy: FailurePolicy,
    /// Read every output back and compare its edge count.
    pub verify: bool,
}

impl BatchConfig {
    /// Converts the default id range in `input_dir`, writing next to the inputs.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        let input_dir = input_dir.into();
        Self {
            output_dir: input_dir.clone(),
            input_dir,
            ids: DEFAULT_IDS,
            layout: OutputLayout::default(),
            policy: FailurePolicy::default(),
            verify: false,
        }
    }

    pub fn input_path(&self, id: u32) -> PathBuf {
        self.input_dir.join(input_file_name(id))
    }

    pub fn output_path(&self, id: u32) -> PathBuf {
        self.output_dir.join(output_file_name(id))
    }
}

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("instance {id}: {source}")]
    Convert {
        id: u32,
        #[source]
        source: ConvertError,
    },
    #[error("instance {id}: could not read output back: {source}")]
    ReadBack {
        id: u32,
        #[source]
        source: ReadEdgeListError,
    },
    #[error("instance {id}: output has {actual} edges (expected {expected})")]
    EdgeCountMismatch { id: u32, expected: usize, actual: usize },
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub converted: Vec<(u32, ConvertSummary)>,
    pub failed: Vec<(u32, BatchError)>,
}

impl BatchReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Converts every instance in `config.ids`, in increasing order.
///
/// With [`FailurePolicy::FailFast`] the first error is returned and later
/// instances are not touched. Otherwise failures are collected in the report.
pub fn run_batch(config: &BatchConfig) -> Result<BatchReport, BatchError> {
    let mut report = BatchReport::default();
    for id in config.ids.clone() {
        match convert_one(config, id) {
            Ok(summary) => report.converted.push((id, summary)),
            Err(err) => match config.policy {
                FailurePolicy::FailFast => return Err(err),
                FailurePolicy::Continue => {
                    error!(id, %err, "skipping instance");
                    report.failed.push((id, err));
                }
            },
        }
    }
    info!(converted = report.converted.len(), failed = report.failed.len());
    Ok(report)
}

fn convert_one(config: &BatchConfig, id: u32) -> Result<ConvertSummary, BatchError> {
    let input = config.input_path(id);
    let output = config.output_path(id);
    let summary =
        convert_instance(&input, &output, config.layout).map_err(|source| BatchError::Convert { id, source })?;

    if config.verify {
        let file = read_edge_list(&output).map_err(|source| BatchError::ReadBack { id, source })?;
        let actual = file.graph.edge_count();
        if actual != summary.num_edges {
            return Err(BatchError::EdgeCountMismatch { id, expected: summary.num_edges, actual });
        }
        debug!(id, n = file.graph.node_count(), m = actual, "verified");
    }
    Ok(summary)
}

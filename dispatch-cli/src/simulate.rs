//! Simulate command implementation for the dispatch CLI.

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use dispatch_batcher::DeliveryTimeCalculator;
use dispatch_core::{DeliveryPlan, MemoryAddressBook};
use dispatch_data::{bundled_address_table, load_address_table, load_manifest};
use log::{debug, info};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::report::write_plan;
use crate::{
    ARG_ADDRESSES, ARG_FORMAT, ARG_MANIFEST, ARG_MAX_DELIVERIES, CliError, ENV_MANIFEST,
    ReportFormat, require_existing,
};

/// CLI arguments for the `simulate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Group the orders of a JSON manifest into courier batches, \
                 route every batch from the pickup point and report the \
                 simulated delivery times. Addresses resolve through the \
                 bundled Moscow table unless another table is given.",
    about = "Simulate batching for an order manifest"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct SimulateArgs {
    /// Path to a JSON order manifest.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) manifest: Option<Utf8PathBuf>,
    /// Path to a JSON address table replacing the bundled one.
    #[arg(long = ARG_ADDRESSES, value_name = "path")]
    #[serde(default)]
    pub(crate) addresses: Option<Utf8PathBuf>,
    /// Override the batch cap from the manifest.
    #[arg(long = ARG_MAX_DELIVERIES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_deliveries: Option<usize>,
    /// Report format.
    #[arg(long = ARG_FORMAT, value_enum)]
    #[serde(default)]
    pub(crate) format: Option<ReportFormat>,
}

impl SimulateArgs {
    pub(crate) fn into_config(self) -> Result<SimulateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SimulateConfig::try_from(merged)
    }
}

/// Resolved `simulate` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SimulateConfig {
    pub(crate) manifest: Utf8PathBuf,
    /// `None` selects the bundled table.
    pub(crate) addresses: Option<Utf8PathBuf>,
    pub(crate) max_deliveries: Option<usize>,
    pub(crate) format: ReportFormat,
}

impl SimulateConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        require_existing(&self.manifest, ARG_MANIFEST)?;
        if let Some(addresses) = &self.addresses {
            require_existing(addresses, ARG_ADDRESSES)?;
        }
        Ok(())
    }
}

impl TryFrom<SimulateArgs> for SimulateConfig {
    type Error = CliError;

    fn try_from(args: SimulateArgs) -> Result<Self, Self::Error> {
        let manifest = args.manifest.ok_or(CliError::MissingArgument {
            field: ARG_MANIFEST,
            env: ENV_MANIFEST,
        })?;
        Ok(Self {
            manifest,
            addresses: args.addresses,
            max_deliveries: args.max_deliveries,
            format: args.format.unwrap_or_default(),
        })
    }
}

pub(crate) fn run_simulate(args: SimulateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    let plan = execute_simulation(&config)?;
    write_plan(writer, &plan, config.format)
}

pub(crate) fn execute_simulation(config: &SimulateConfig) -> Result<DeliveryPlan, CliError> {
    let book = load_book(config.addresses.as_deref())?;
    let simulation = load_manifest(&config.manifest)?.resolve(&book)?;
    let calculator = DeliveryTimeCalculator::new(&book);
    let max_deliveries = config
        .max_deliveries
        .or(simulation.max_deliveries)
        .unwrap_or(calculator.policy().max_deliveries);
    debug!(
        "simulating {} orders with at most {max_deliveries} per batch",
        simulation.orders.len()
    );
    let plan =
        calculator.calculate_delivery_time(&simulation.orders, &simulation.pickup, max_deliveries)?;
    info!(
        "planned {} batches totalling {:.1} minutes",
        plan.batches.len(),
        plan.total_minutes
    );
    Ok(plan)
}

pub(crate) fn load_book(path: Option<&Utf8Path>) -> Result<MemoryAddressBook, CliError> {
    Ok(path.map_or_else(bundled_address_table, load_address_table)?)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SimulateConfig, CliError> {
    let merged = SimulateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SimulateConfig::try_from(merged)
}

//! Escalate command: when to hand an order to a third-party courier.

use camino::Utf8PathBuf;
use clap::Parser;
use dispatch_batcher::{CalculationError, DeliveryTimeCalculator};
use dispatch_core::{AddressBook, DispatchPolicy, MemoryAddressBook, PickupPoint};
use dispatch_data::DEFAULT_PICKUP_POINT;
use log::debug;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::report::{EscalationReport, write_json};
use crate::simulate::load_book;
use crate::{
    ARG_ADDRESS, ARG_ADDRESSES, ARG_PICKUP_POINT, ARG_READY_IN, ARG_ROUTE_MINUTES, CliError,
    ENV_READY_IN, ENV_ROUTE_MINUTES, require_existing,
};

/// CLI arguments for the `escalate` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Compute how many minutes after creation an order must be \
                 passed to a third-party courier so it still arrives on \
                 time. The route time is either given directly or derived \
                 from the straight-line trip to a known address.",
    about = "Compute the third-party courier call time"
)]
#[ortho_config(prefix = "DISPATCH")]
pub(crate) struct EscalateArgs {
    /// Minutes until the order is ready.
    #[arg(long = ARG_READY_IN, value_name = "minutes")]
    #[serde(default)]
    pub(crate) ready_in: Option<u32>,
    /// Courier travel minutes from the pickup point.
    #[arg(long = ARG_ROUTE_MINUTES, value_name = "minutes")]
    #[serde(default)]
    pub(crate) route_minutes: Option<f64>,
    /// Address key to derive the travel minutes from.
    #[arg(long = ARG_ADDRESS, value_name = "key")]
    #[serde(default)]
    pub(crate) address: Option<String>,
    /// Address key of the pickup point used with `--address`.
    #[arg(long = ARG_PICKUP_POINT, value_name = "key")]
    #[serde(default)]
    pub(crate) pickup_point: Option<String>,
    /// Path to a JSON address table replacing the bundled one.
    #[arg(long = ARG_ADDRESSES, value_name = "path")]
    #[serde(default)]
    pub(crate) addresses: Option<Utf8PathBuf>,
}

impl EscalateArgs {
    pub(crate) fn into_config(self) -> Result<EscalateConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        EscalateConfig::try_from(merged)
    }
}

/// Where the courier travel time comes from.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RouteSource {
    Minutes(f64),
    Address {
        key: String,
        pickup_point: String,
        addresses: Option<Utf8PathBuf>,
    },
}

/// Resolved `escalate` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct EscalateConfig {
    pub(crate) ready_in: u32,
    pub(crate) route: RouteSource,
}

impl TryFrom<EscalateArgs> for EscalateConfig {
    type Error = CliError;

    fn try_from(args: EscalateArgs) -> Result<Self, Self::Error> {
        let ready_in = args.ready_in.ok_or(CliError::MissingArgument {
            field: ARG_READY_IN,
            env: ENV_READY_IN,
        })?;
        let route = match (args.route_minutes, args.address) {
            (Some(_), Some(_)) => {
                return Err(CliError::ConflictingArguments {
                    first: ARG_ROUTE_MINUTES,
                    second: ARG_ADDRESS,
                });
            }
            (Some(minutes), None) => {
                reject_with_route_minutes(args.pickup_point.is_some(), ARG_PICKUP_POINT)?;
                reject_with_route_minutes(args.addresses.is_some(), ARG_ADDRESSES)?;
                if !minutes.is_finite() || minutes < 0.0 {
                    return Err(CliError::InvalidRouteMinutes { value: minutes });
                }
                RouteSource::Minutes(minutes)
            }
            (None, Some(key)) => RouteSource::Address {
                key,
                pickup_point: args
                    .pickup_point
                    .unwrap_or_else(|| DEFAULT_PICKUP_POINT.to_owned()),
                addresses: args.addresses,
            },
            (None, None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_ROUTE_MINUTES,
                    env: ENV_ROUTE_MINUTES,
                });
            }
        };
        Ok(Self { ready_in, route })
    }
}

/// Address options only feed the direct-trip computation.
const fn reject_with_route_minutes(is_set: bool, field: &'static str) -> Result<(), CliError> {
    if is_set {
        Err(CliError::ConflictingArguments {
            first: ARG_ROUTE_MINUTES,
            second: field,
        })
    } else {
        Ok(())
    }
}

pub(crate) fn run_escalate(args: EscalateArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    let report = execute_escalation(config)?;
    write_json(writer, &report)
}

pub(crate) fn execute_escalation(config: EscalateConfig) -> Result<EscalationReport, CliError> {
    execute_escalation_with(config, DispatchPolicy::default())
}

/// Route time and call time both come from one calculator built on `policy`.
pub(crate) fn execute_escalation_with(
    config: EscalateConfig,
    policy: DispatchPolicy,
) -> Result<EscalationReport, CliError> {
    let book = match &config.route {
        RouteSource::Minutes(_) => MemoryAddressBook::new(),
        RouteSource::Address { addresses, .. } => {
            if let Some(path) = addresses {
                require_existing(path, ARG_ADDRESSES)?;
            }
            load_book(addresses.as_deref())?
        }
    };
    let calculator = DeliveryTimeCalculator::with_policy(book, policy)?;
    let (route_minutes, address) = match config.route {
        RouteSource::Minutes(minutes) => (minutes, None),
        RouteSource::Address {
            key, pickup_point, ..
        } => {
            let pickup = calculator
                .address_book()
                .resolve(&pickup_point)
                .map(PickupPoint::from_address)
                .map_err(CalculationError::from)?;
            let minutes = calculator.direct_route_minutes(&pickup, &key)?;
            debug!("direct trip from {pickup_point:?} to {key:?} takes {minutes:.2} minutes");
            (minutes, Some(key))
        }
    };
    Ok(EscalationReport {
        ready_in: config.ready_in,
        address,
        route_minutes,
        call_at_minutes: calculator.third_party_call_minutes(config.ready_in, route_minutes),
    })
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<EscalateConfig, CliError> {
    let merged = EscalateArgs::merge_from_layers(layers).map_err(CliError::from)?;
    EscalateConfig::try_from(merged)
}

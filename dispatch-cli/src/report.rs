//! Rendering simulation results for the terminal or other tools.

use std::io::Write;

use clap::ValueEnum;
use dispatch_core::DeliveryPlan;
use serde::{Deserialize, Serialize};

use crate::CliError;

/// Output format of the `simulate` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Pretty-printed JSON of the whole plan.
    #[default]
    Json,
    /// Human-readable summary with one block per batch.
    Text,
}

/// Result of the `escalate` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct EscalationReport {
    /// Minutes until the order is ready.
    pub(crate) ready_in: u32,
    /// Address the route time was computed for, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub(crate) address: Option<String>,
    /// Courier travel minutes from the pickup point.
    pub(crate) route_minutes: f64,
    /// Minutes after order creation at which to call a third-party courier.
    pub(crate) call_at_minutes: f64,
}

pub(crate) fn write_plan(
    writer: &mut dyn Write,
    plan: &DeliveryPlan,
    format: ReportFormat,
) -> Result<(), CliError> {
    match format {
        ReportFormat::Json => write_json(writer, plan),
        ReportFormat::Text => write_text(writer, plan).map_err(CliError::WriteOutput),
    }
}

pub(crate) fn write_json<T: Serialize>(writer: &mut dyn Write, value: &T) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseReport)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

fn write_text(writer: &mut dyn Write, plan: &DeliveryPlan) -> std::io::Result<()> {
    writeln!(writer, "Total delivery time: {:.1} min", plan.total_minutes)?;
    for (number, batch) in (1..).zip(&plan.batches) {
        writeln!(writer)?;
        writeln!(writer, "Batch {number}:")?;
        writeln!(writer, "Orders: {:?}", batch.order_ids)?;
        writeln!(writer, "Batch time: {:.2} min", batch.batch_minutes)?;
        writeln!(writer, "Route:")?;
        for leg in &batch.route {
            writeln!(
                writer,
                "  {} -> {} ({:.0} m, {:.1} min)",
                leg.from, leg.to, leg.distance_metres, leg.minutes
            )?;
        }
    }
    Ok(())
}

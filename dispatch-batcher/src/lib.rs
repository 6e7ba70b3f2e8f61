//! Greedy dispatch simulator for courier batching.
//!
//! This crate provides [`DeliveryTimeCalculator`], which partitions a set of
//! orders into courier batches, orders each batch's stops with a
//! nearest-neighbour heuristic and totals the simulated delivery time. The
//! results serve as expected values when checking a live dispatch platform:
//! the heuristic is deliberately a single forward greedy pass, not a vehicle
//! routing solve.
//!
//! The building blocks are public so callers can check individual steps:
//! [`Batcher`] groups orders, [`optimise_route`] sequences stops and
//! [`batch_minutes`] applies the time model.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod calculator;
mod escalation;
mod grouping;
mod route;
mod timing;

pub use calculator::{CalculationError, DeliveryTimeCalculator};
pub use escalation::{direct_route_minutes, third_party_call_minutes};
pub use grouping::Batcher;
pub use route::optimise_route;
pub use timing::{batch_minutes, timed_route};

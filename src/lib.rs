//! # Fleet - vehicle inventory core
//!
//! Domain model for a small vehicle fleet: per-vehicle tax, fleet-wide
//! summaries, bulk price adjustments, attribute filters, and export to text,
//! CSV and JSON.
//!
//! ## Modules
//!
//! - [`vehicle`] - Vehicle taxonomy, tax rules and flat records
//! - [`fleet`] - The ordered fleet registry and its summaries
//! - [`export`] - Text, CSV and JSON export
//! - [`input`] - Coercion of user-entered fields
//! - [`config`] - Optional `.fleet/config.md` configuration
//! - [`logging`] - `tracing` subscriber and audit line formatting
//! - [`sample`] - Demonstration fleet
//!
//! ## Example
//!
//! ```no_run
//! use std::path::Path;
//! use fleet::fleet::Fleet;
//! use fleet::vehicle::Vehicle;
//!
//! let mut fleet = Fleet::new();
//! fleet.add(Vehicle::new("Toyota", "Corolla", 25000.0, 2022));
//! fleet.add(Vehicle::electric("Tesla", "Model 3", 45000.0, 2023, 75.0, 500.0));
//!
//! let summary = fleet.summary();
//! assert_eq!(summary.total, 2);
//!
//! fleet::export::export(&fleet, Path::new("fleet.json"), "json")
//!     .expect("Failed to export fleet");
//! ```

pub mod config;
pub mod export;
pub mod fleet;
pub mod input;
pub mod logging;
pub mod sample;
pub mod vehicle;

//! Fleet registry: the ordered, mutable collection of vehicles.
//!
//! Mutating operations (`add`, `remove`, `apply_global_adjustment`,
//! `load_sample`) each begin with a call to [`audit`], which emits one
//! `tracing` event on the `fleet::audit` target. Read-only operations do not.
//!
//! `Fleet` has a single owner. Callers sharing it across threads must wrap it
//! in a lock so index-based removal sees a stable snapshot.

use chrono::Local;
use std::collections::BTreeMap;

use crate::sample;
use crate::vehicle::{Vehicle, VehicleKind, REGISTRATION_DATE_FORMAT};

/// Target used for audit events emitted by mutating operations.
pub const AUDIT_TARGET: &str = "fleet::audit";

/// Emit the audit line for a mutating operation.
fn audit(operation: &'static str) {
    let at = Local::now().format(REGISTRATION_DATE_FORMAT).to_string();
    tracing::info!(target: AUDIT_TARGET, operation, at = %at, "Executing: {}", operation);
}

/// Aggregate view over the fleet, computed on demand.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FleetSummary {
    pub total: usize,
    pub total_value: f64,
    pub total_tax: f64,
    pub counts_by_kind: BTreeMap<VehicleKind, usize>,
}

impl FleetSummary {
    /// Mean vehicle price, or zero for an empty fleet.
    pub fn average_value(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.total_value / self.total as f64
        }
    }

    /// Share of the fleet (0..=100) held by the given kind.
    pub fn share_percent(&self, kind: VehicleKind) -> f64 {
        let count = self.counts_by_kind.get(&kind).copied().unwrap_or(0);
        if self.total == 0 {
            0.0
        } else {
            count as f64 / self.total as f64 * 100.0
        }
    }
}

/// One row of a price adjustment preview.
#[derive(Debug, Clone, PartialEq)]
pub struct AdjustmentPreview {
    pub brand: String,
    pub model: String,
    pub old_price: f64,
    pub new_price: f64,
    /// Relative change in percent; zero when the old price is zero.
    pub change_percent: f64,
}

impl AdjustmentPreview {
    /// Old and new fleet totals across a set of preview rows.
    pub fn totals(rows: &[AdjustmentPreview]) -> (f64, f64) {
        rows.iter().fold((0.0, 0.0), |(old, new), row| {
            (old + row.old_price, new + row.new_price)
        })
    }
}

/// `price * (1 - percentage / 100)`: positive is a discount, negative a surcharge.
pub fn adjusted_price(price: f64, percentage: f64) -> f64 {
    price * (1.0 - percentage / 100.0)
}

#[derive(Debug, Clone, Default)]
pub struct Fleet {
    vehicles: Vec<Vehicle>,
}

impl Fleet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a fleet from existing vehicles without emitting audit events.
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self { vehicles }
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn get(&self, index: usize) -> Option<&Vehicle> {
        self.vehicles.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vehicle> {
        self.vehicles.iter()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Append a vehicle. Always succeeds.
    pub fn add(&mut self, vehicle: Vehicle) -> bool {
        audit("add");
        self.vehicles.push(vehicle);
        true
    }

    /// Remove the vehicle at `index`, shifting later vehicles down.
    ///
    /// Returns `None` and leaves the fleet unchanged when the index is out of range.
    pub fn remove(&mut self, index: usize) -> Option<Vehicle> {
        audit("remove");
        if index < self.vehicles.len() {
            Some(self.vehicles.remove(index))
        } else {
            None
        }
    }

    /// Adjust every price in place by `percentage` and return how many changed.
    pub fn apply_global_adjustment(&mut self, percentage: f64) -> usize {
        audit("apply_global_adjustment");
        for vehicle in &mut self.vehicles {
            vehicle.set_price(adjusted_price(vehicle.price(), percentage));
        }
        self.vehicles.len()
    }

    /// What `apply_global_adjustment` would do, without changing anything.
    pub fn preview_adjustment(&self, percentage: f64) -> Vec<AdjustmentPreview> {
        self.vehicles
            .iter()
            .map(|v| {
                let old_price = v.price();
                let new_price = adjusted_price(old_price, percentage);
                let change_percent = if old_price != 0.0 {
                    (new_price - old_price) / old_price * 100.0
                } else {
                    0.0
                };
                AdjustmentPreview {
                    brand: v.brand().to_string(),
                    model: v.model().to_string(),
                    old_price,
                    new_price,
                    change_percent,
                }
            })
            .collect()
    }

    /// Case-insensitive exact brand match, in fleet order.
    pub fn filter_by_brand(&self, brand: &str) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.has_brand(brand)).collect()
    }

    pub fn filter_by_year(&self, min_year: i32) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.is_from(min_year)).collect()
    }

    pub fn filter_by_kind(&self, kind: VehicleKind) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.kind() == kind).collect()
    }

    /// Vehicles accepted by `predicate`, paired with their 0-based position.
    pub fn positions_where<F>(&self, predicate: F) -> Vec<(usize, &Vehicle)>
    where
        F: Fn(&Vehicle) -> bool,
    {
        self.vehicles
            .iter()
            .enumerate()
            .filter(|(_, vehicle)| predicate(vehicle))
            .collect()
    }

    pub fn summary(&self) -> FleetSummary {
        let mut summary = FleetSummary {
            total: self.vehicles.len(),
            ..FleetSummary::default()
        };
        for vehicle in &self.vehicles {
            summary.total_value += vehicle.price();
            summary.total_tax += vehicle.calculate_tax();
            *summary.counts_by_kind.entry(vehicle.kind()).or_insert(0) += 1;
        }
        summary
    }

    /// Clear the fleet and repopulate it with the demonstration vehicles.
    pub fn load_sample(&mut self) -> usize {
        audit("load_sample");
        self.vehicles.clear();
        for vehicle in sample::sample_vehicles() {
            self.add(vehicle);
        }
        self.vehicles.len()
    }

    /// Remove every vehicle.
    pub fn clear(&mut self) {
        audit("clear");
        self.vehicles.clear();
    }
}

impl<'a> IntoIterator for &'a Fleet {
    type Item = &'a Vehicle;
    type IntoIter = std::slice::Iter<'a, Vehicle>;

    fn into_iter(self) -> Self::IntoIter {
        self.vehicles.iter()
    }
}

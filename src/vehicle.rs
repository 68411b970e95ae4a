//! Vehicle taxonomy: the base record, its variants, and the tax rules.
//!
//! Every vehicle carries exactly one [`VehicleDetails`] variant. The variant
//! decides the tax multiplier, the description, and which variant-specific
//! fields appear in exported records.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flat tax rate applied to every vehicle price.
pub const BASE_TAX_RATE: f64 = 0.23;
/// Electric cars pay half of the base tax.
pub const ELECTRIC_TAX_MULTIPLIER: f64 = 0.5;
/// Trucks pay a 30% surcharge on the base tax.
pub const TRUCK_TAX_MULTIPLIER: f64 = 1.3;
/// Format used for registration timestamps in records and exports.
pub const REGISTRATION_DATE_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Discriminator identifying which vehicle specialization a value is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VehicleKind {
    Vehicle,
    ElectricCar,
    Truck,
}

impl VehicleKind {
    /// All kinds, in display order.
    pub const ALL: [VehicleKind; 3] = [
        VehicleKind::Vehicle,
        VehicleKind::ElectricCar,
        VehicleKind::Truck,
    ];

    /// The exact tag string used in exports and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleKind::Vehicle => "Vehicle",
            VehicleKind::ElectricCar => "ElectricCar",
            VehicleKind::Truck => "Truck",
        }
    }
}

impl fmt::Display for VehicleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for VehicleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vehicle" | "base" => Ok(VehicleKind::Vehicle),
            "electriccar" | "electric" => Ok(VehicleKind::ElectricCar),
            "truck" => Ok(VehicleKind::Truck),
            _ => Err(format!(
                "Unknown vehicle type '{}'. Expected one of: Vehicle, ElectricCar, Truck",
                s.trim()
            )),
        }
    }
}

/// Variant-specific data.
#[derive(Debug, Clone, PartialEq)]
pub enum VehicleDetails {
    Base,
    Electric {
        /// Battery capacity in kWh
        battery_capacity: f64,
        /// Range in km
        autonomy: f64,
    },
    Truck {
        /// Load capacity in tonnes
        load_capacity: f64,
        /// Length in metres
        length: f64,
    },
}

impl VehicleDetails {
    pub fn kind(&self) -> VehicleKind {
        match self {
            VehicleDetails::Base => VehicleKind::Vehicle,
            VehicleDetails::Electric { .. } => VehicleKind::ElectricCar,
            VehicleDetails::Truck { .. } => VehicleKind::Truck,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    brand: String,
    model: String,
    price: f64,
    year: i32,
    registration_date: DateTime<Local>,
    details: VehicleDetails,
}

impl Vehicle {
    /// Create a base vehicle registered now.
    pub fn new(brand: impl Into<String>, model: impl Into<String>, price: f64, year: i32) -> Self {
        Self::with_details(brand, model, price, year, VehicleDetails::Base)
    }

    pub fn electric(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        year: i32,
        battery_capacity: f64,
        autonomy: f64,
    ) -> Self {
        Self::with_details(
            brand,
            model,
            price,
            year,
            VehicleDetails::Electric {
                battery_capacity,
                autonomy,
            },
        )
    }

    pub fn truck(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        year: i32,
        load_capacity: f64,
        length: f64,
    ) -> Self {
        Self::with_details(
            brand,
            model,
            price,
            year,
            VehicleDetails::Truck {
                load_capacity,
                length,
            },
        )
    }

    pub fn with_details(
        brand: impl Into<String>,
        model: impl Into<String>,
        price: f64,
        year: i32,
        details: VehicleDetails,
    ) -> Self {
        Self {
            brand: brand.into(),
            model: model.into(),
            price,
            year,
            registration_date: Local::now(),
            details,
        }
    }

    /// Replace the registration timestamp. Only usable while building a value,
    /// since it consumes the vehicle.
    pub fn with_registration_date(mut self, registration_date: DateTime<Local>) -> Self {
        self.registration_date = registration_date;
        self
    }

    pub fn kind(&self) -> VehicleKind {
        self.details.kind()
    }

    /// Brand comparison ignoring case.
    pub fn has_brand(&self, brand: &str) -> bool {
        self.brand.to_lowercase() == brand.to_lowercase()
    }

    /// Built in `min_year` or later.
    pub fn is_from(&self, min_year: i32) -> bool {
        self.year >= min_year
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn registration_date(&self) -> DateTime<Local> {
        self.registration_date
    }

    pub fn details(&self) -> &VehicleDetails {
        &self.details
    }

    pub fn battery_capacity(&self) -> Option<f64> {
        match self.details {
            VehicleDetails::Electric {
                battery_capacity, ..
            } => Some(battery_capacity),
            _ => None,
        }
    }

    pub fn autonomy(&self) -> Option<f64> {
        match self.details {
            VehicleDetails::Electric { autonomy, .. } => Some(autonomy),
            _ => None,
        }
    }

    pub fn load_capacity(&self) -> Option<f64> {
        match self.details {
            VehicleDetails::Truck { load_capacity, .. } => Some(load_capacity),
            _ => None,
        }
    }

    pub fn length(&self) -> Option<f64> {
        match self.details {
            VehicleDetails::Truck { length, .. } => Some(length),
            _ => None,
        }
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    /// Tax before any variant multiplier.
    pub fn base_tax(&self) -> f64 {
        self.price * BASE_TAX_RATE
    }

    /// Tax owed for this vehicle.
    pub fn calculate_tax(&self) -> f64 {
        match self.details {
            VehicleDetails::Base => self.base_tax(),
            VehicleDetails::Electric { .. } => self.base_tax() * ELECTRIC_TAX_MULTIPLIER,
            VehicleDetails::Truck { .. } => self.base_tax() * TRUCK_TAX_MULTIPLIER,
        }
    }

    /// One-line human readable summary.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    pub fn formatted_registration_date(&self) -> String {
        self.registration_date
            .format(REGISTRATION_DATE_FORMAT)
            .to_string()
    }

    /// Flat key/value representation used by the JSON and CSV exports.
    pub fn to_record(&self) -> VehicleRecord {
        VehicleRecord {
            kind: self.kind(),
            brand: self.brand.clone(),
            model: self.model.clone(),
            price: self.price,
            year: self.year,
            tax: self.calculate_tax(),
            registration_date: self.formatted_registration_date(),
            battery_capacity: self.battery_capacity(),
            autonomy: self.autonomy(),
            load_capacity: self.load_capacity(),
            length: self.length(),
        }
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.details {
            VehicleDetails::Base => write!(
                f,
                "{} {} - €{:.2} (Year: {})",
                self.brand, self.model, self.price, self.year
            ),
            VehicleDetails::Electric {
                battery_capacity,
                autonomy,
            } => write!(
                f,
                "{} {} (Electric) - €{:.2} - Battery: {}kWh - Range: {}km",
                self.brand, self.model, self.price, battery_capacity, autonomy
            ),
            VehicleDetails::Truck {
                load_capacity,
                length,
            } => write!(
                f,
                "{} {} (Truck) - €{:.2} - Load: {}t - Length: {}m",
                self.brand, self.model, self.price, load_capacity, length
            ),
        }
    }
}

/// Flat record of a vehicle as written to structured exports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    #[serde(rename = "type")]
    pub kind: VehicleKind,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub year: i32,
    pub tax: f64,
    pub registration_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub battery_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub autonomy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
}

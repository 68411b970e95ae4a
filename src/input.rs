//! Coercion of user-entered text into vehicles, years and percentages.
//!
//! Nothing here touches a fleet; callers only mutate once coercion succeeded.

use thiserror::Error;

use crate::vehicle::{Vehicle, VehicleDetails, VehicleKind};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{0} is required")]
    Empty(&'static str),

    #[error("{field}: '{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{0} cannot be negative")]
    Negative(&'static str),

    #[error("{0}")]
    UnknownKind(String),
}

/// Raw vehicle form fields, exactly as typed.
#[derive(Debug, Clone, Default)]
pub struct VehicleForm {
    pub kind: String,
    pub brand: String,
    pub model: String,
    pub price: String,
    pub year: String,
    pub battery_capacity: String,
    pub autonomy: String,
    pub load_capacity: String,
    pub length: String,
}

impl VehicleForm {
    /// Coerce the form into a vehicle. Variant fields of other kinds are ignored.
    pub fn into_vehicle(self) -> Result<Vehicle, InputError> {
        let kind = parse_kind(&self.kind)?;
        let brand = required_text("brand", &self.brand)?;
        let model = required_text("model", &self.model)?;
        let price = parse_price(&self.price)?;
        let year = parse_year(&self.year)?;

        let details = match kind {
            VehicleKind::Vehicle => VehicleDetails::Base,
            VehicleKind::ElectricCar => VehicleDetails::Electric {
                battery_capacity: parse_measure("battery capacity", &self.battery_capacity)?,
                autonomy: parse_measure("autonomy", &self.autonomy)?,
            },
            VehicleKind::Truck => VehicleDetails::Truck {
                load_capacity: parse_measure("load capacity", &self.load_capacity)?,
                length: parse_measure("length", &self.length)?,
            },
        };

        Ok(Vehicle::with_details(brand, model, price, year, details))
    }
}

fn required_text(field: &'static str, value: &str) -> Result<String, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field));
    }
    Ok(trimmed.to_string())
}

fn parse_number(field: &'static str, value: &str) -> Result<f64, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty(field));
    }
    match trimmed.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(InputError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        }),
    }
}

fn non_negative(field: &'static str, value: &str) -> Result<f64, InputError> {
    let n = parse_number(field, value)?;
    if n < 0.0 {
        return Err(InputError::Negative(field));
    }
    Ok(n)
}

pub fn parse_kind(value: &str) -> Result<VehicleKind, InputError> {
    if value.trim().is_empty() {
        return Ok(VehicleKind::Vehicle);
    }
    value.parse().map_err(InputError::UnknownKind)
}

pub fn parse_price(value: &str) -> Result<f64, InputError> {
    non_negative("price", value)
}

pub fn parse_measure(field: &'static str, value: &str) -> Result<f64, InputError> {
    non_negative(field, value)
}

pub fn parse_year(value: &str) -> Result<i32, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty("year"));
    }
    trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field: "year",
        value: trimmed.to_string(),
    })
}

/// Adjustment percentage; any finite value, negative meaning a surcharge.
pub fn parse_percentage(value: &str) -> Result<f64, InputError> {
    parse_number("percentage", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(kind: &str) -> VehicleForm {
        VehicleForm {
            kind: kind.to_string(),
            brand: " Tesla ".to_string(),
            model: "Model Y".to_string(),
            price: "52000".to_string(),
            year: "2024".to_string(),
            battery_capacity: "75".to_string(),
            autonomy: "533".to_string(),
            load_capacity: "3.5".to_string(),
            length: "7".to_string(),
        }
    }

    #[test]
    fn test_form_into_electric() {
        let vehicle = form("ElectricCar").into_vehicle().unwrap();
        assert_eq!(vehicle.kind(), VehicleKind::ElectricCar);
        assert_eq!(vehicle.brand(), "Tesla");
        assert_eq!(vehicle.battery_capacity(), Some(75.0));
        assert_eq!(vehicle.load_capacity(), None);
    }

    #[test]
    fn test_form_base_ignores_variant_fields() {
        let mut f = form("Vehicle");
        f.battery_capacity = "not a number".to_string();
        let vehicle = f.into_vehicle().unwrap();
        assert_eq!(vehicle.kind(), VehicleKind::Vehicle);
    }

    #[test]
    fn test_form_empty_kind_defaults_to_base() {
        let vehicle = form("").into_vehicle().unwrap();
        assert_eq!(vehicle.kind(), VehicleKind::Vehicle);
    }

    #[test]
    fn test_form_rejects_bad_price() {
        let mut f = form("Truck");
        f.price = "12k".to_string();
        let err = f.into_vehicle().unwrap_err();
        assert_eq!(
            err,
            InputError::InvalidNumber {
                field: "price",
                value: "12k".to_string()
            }
        );
        assert!(err.to_string().contains("price"));
    }

    #[test]
    fn test_form_rejects_missing_truck_length() {
        let mut f = form("truck");
        f.length = "  ".to_string();
        assert_eq!(f.into_vehicle().unwrap_err(), InputError::Empty("length"));
    }

    #[test]
    fn test_form_rejects_blank_brand() {
        let mut f = form("Vehicle");
        f.brand = "   ".to_string();
        assert_eq!(f.into_vehicle().unwrap_err(), InputError::Empty("brand"));
    }

    #[test]
    fn test_negative_price_rejected() {
        assert_eq!(parse_price("-1"), Err(InputError::Negative("price")));
        assert_eq!(parse_price("0"), Ok(0.0));
    }

    #[test]
    fn test_unknown_kind() {
        assert!(matches!(parse_kind("hovercraft"), Err(InputError::UnknownKind(_))));
    }

    #[test]
    fn test_parse_year() {
        assert_eq!(parse_year(" 2021 "), Ok(2021));
        assert!(parse_year("2021.5").is_err());
    }

    #[test]
    fn test_parse_percentage() {
        assert_eq!(parse_percentage("-12.5"), Ok(-12.5));
        assert!(parse_percentage("NaN").is_err());
        assert!(parse_percentage("inf").is_err());
        assert!(parse_percentage("ten").is_err());
    }
}

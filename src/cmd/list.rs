//! Vehicle listing with brand, year and type filters.

use anyhow::{Context, Result};

use fleet::fleet::Fleet;
use fleet::input;
use fleet::vehicle::Vehicle;

use crate::render;

/// Criteria for the list command; all present criteria must match.
#[derive(Debug, Clone, Default)]
pub struct ListFilter {
    pub brand: Option<String>,
    pub min_year: Option<i32>,
    pub kind: Option<String>,
}

impl ListFilter {
    pub fn is_empty(&self) -> bool {
        self.brand.is_none() && self.min_year.is_none() && self.kind.is_none()
    }
}

/// Vehicles matching every present criterion, paired with their fleet position.
pub fn filter_vehicles<'a>(fleet: &'a Fleet, filter: &ListFilter) -> Result<Vec<(usize, &'a Vehicle)>> {
    let kind = match filter.kind.as_deref() {
        Some(kind) => Some(input::parse_kind(kind).context("Invalid --type")?),
        None => None,
    };

    Ok(fleet.positions_where(|vehicle| {
        filter.brand.as_deref().map_or(true, |brand| vehicle.has_brand(brand))
            && filter.min_year.map_or(true, |year| vehicle.is_from(year))
            && kind.map_or(true, |kind| vehicle.kind() == kind)
    }))
}

pub fn cmd_list(fleet: &Fleet, filter: &ListFilter) -> Result<()> {
    let vehicles = filter_vehicles(fleet, filter)?;
    println!("{}", render::vehicle_table(&vehicles));
    if !filter.is_empty() {
        println!("\n{} of {} vehicles match", vehicles.len(), fleet.len());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet::sample::sample_vehicles;

    fn sample_fleet() -> Fleet {
        Fleet::with_vehicles(sample_vehicles())
    }

    #[test]
    fn test_no_filter_lists_everything() {
        let fleet = sample_fleet();
        let vehicles = filter_vehicles(&fleet, &ListFilter::default()).unwrap();
        assert_eq!(vehicles.len(), 10);
        assert_eq!(vehicles[3].0, 3);
    }

    #[test]
    fn test_combined_filters_intersect() {
        let fleet = sample_fleet();
        let filter = ListFilter {
            brand: None,
            min_year: Some(2022),
            kind: Some("ElectricCar".to_string()),
        };
        let vehicles = filter_vehicles(&fleet, &filter).unwrap();
        let brands: Vec<_> = vehicles.iter().map(|(_, v)| v.brand()).collect();
        assert_eq!(brands, vec!["Tesla", "Nissan", "Hyundai"]);
    }

    #[test]
    fn test_positions_are_fleet_positions() {
        let fleet = sample_fleet();
        let filter = ListFilter {
            brand: Some("volvo".to_string()),
            ..ListFilter::default()
        };
        let vehicles = filter_vehicles(&fleet, &filter).unwrap();
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].0, 5);
    }

    #[test]
    fn test_invalid_type_is_an_error() {
        let fleet = sample_fleet();
        let filter = ListFilter {
            kind: Some("boat".to_string()),
            ..ListFilter::default()
        };
        assert!(filter_vehicles(&fleet, &filter).is_err());
    }
}

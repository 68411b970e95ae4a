use chrono::{DateTime, Local, TimeZone};
use fleet::fleet::Fleet;
use fleet::vehicle::Vehicle;

/// Fixed registration time so records and rows compare exactly.
pub fn registered_at() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 8, 45, 30).unwrap()
}

/// VehicleFactory provides convenient methods to create vehicles of each kind.
pub struct VehicleFactory;

impl VehicleFactory {
    /// Toyota Corolla, 25000, 2022.
    pub fn corolla() -> Vehicle {
        Vehicle::new("Toyota", "Corolla", 25000.0, 2022).with_registration_date(registered_at())
    }

    /// Tesla Model 3, 45000, 2023, 75 kWh, 500 km.
    pub fn model_3() -> Vehicle {
        Vehicle::electric("Tesla", "Model 3", 45000.0, 2023, 75.0, 500.0)
            .with_registration_date(registered_at())
    }

    /// Volvo FH, 92000, 2021, 20 t, 13.2 m.
    pub fn volvo_fh() -> Vehicle {
        Vehicle::truck("Volvo", "FH", 92000.0, 2021, 20.0, 13.2)
            .with_registration_date(registered_at())
    }
}

/// FleetFactory builds fleets for common scenarios.
pub struct FleetFactory;

impl FleetFactory {
    /// The two-vehicle fleet from the export round-trip scenario.
    pub fn corolla_and_tesla() -> Fleet {
        Fleet::with_vehicles(vec![VehicleFactory::corolla(), VehicleFactory::model_3()])
    }

    /// One vehicle of every kind.
    pub fn one_of_each() -> Fleet {
        Fleet::with_vehicles(vec![
            VehicleFactory::corolla(),
            VehicleFactory::model_3(),
            VehicleFactory::volvo_fh(),
        ])
    }

    pub fn sample() -> Fleet {
        Fleet::with_vehicles(fleet::sample::sample_vehicles())
    }
}

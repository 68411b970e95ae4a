//! Demonstration fleet loaded on startup and by the `sample` shell command.

use crate::vehicle::Vehicle;

pub fn sample_vehicles() -> Vec<Vehicle> {
    vec![
        Vehicle::new("Toyota", "Corolla", 25000.0, 2022),
        Vehicle::new("Ford", "Focus", 22000.0, 2021),
        Vehicle::electric("Tesla", "Model 3", 45000.0, 2023, 75.0, 500.0),
        Vehicle::electric("Nissan", "Leaf", 32000.0, 2022, 40.0, 270.0),
        Vehicle::truck("Mercedes", "Actros", 85000.0, 2020, 18.0, 12.5),
        Vehicle::truck("Volvo", "FH", 92000.0, 2021, 20.0, 13.2),
        Vehicle::new("BMW", "3 Series", 42000.0, 2023),
        Vehicle::electric("Hyundai", "Kona Electric", 38000.0, 2022, 64.0, 450.0),
        Vehicle::new("Volkswagen", "Golf", 28000.0, 2021),
        Vehicle::truck("MAN", "TGX", 78000.0, 2019, 16.0, 11.8),
    ]
}

//! Command module structure for the fleet CLI

use anyhow::Result;
use std::path::Path;

use fleet::config::Config;
use fleet::fleet::Fleet;
use fleet::sample;

pub mod adjust;
pub mod export;
pub mod list;
pub mod shell;
pub mod summary;

/// Load the config from an explicit path, or `.fleet/config.md` when present.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// The fleet one-shot commands operate on.
///
/// Built directly rather than through `Fleet::add`, so startup emits no audit lines.
pub fn working_fleet(config: &Config) -> Fleet {
    if config.fleet.load_sample {
        Fleet::with_vehicles(sample::sample_vehicles())
    } else {
        Fleet::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_working_fleet_respects_load_sample() {
        let mut config = Config::default();
        assert_eq!(working_fleet(&config).len(), 10);

        config.fleet.load_sample = false;
        assert!(working_fleet(&config).is_empty());
    }
}

//! Global price adjustment: discounts (positive) and surcharges (negative).

use anyhow::{Context, Result};
use colored::Colorize;

use fleet::fleet::Fleet;
use fleet::input;

use crate::render;

/// Human wording for an adjustment, e.g. `10% discount` or `5% surcharge`.
pub fn describe_adjustment(percentage: f64) -> String {
    if percentage >= 0.0 {
        format!("{}% discount", percentage)
    } else {
        format!("{}% surcharge", -percentage)
    }
}

pub fn cmd_adjust(fleet: &mut Fleet, percentage: &str, preview: bool) -> Result<()> {
    let percentage = input::parse_percentage(percentage).context("Invalid adjustment")?;

    if preview {
        println!(
            "{} {}\n",
            "Preview:".bold(),
            describe_adjustment(percentage)
        );
        println!("{}", render::adjustment_preview(&fleet.preview_adjustment(percentage)));
        return Ok(());
    }

    let count = fleet.apply_global_adjustment(percentage);
    println!(
        "{} Applied {} to {} vehicle(s)",
        "✓".green(),
        describe_adjustment(percentage),
        count
    );
    println!();
    println!("{}", render::summary(&fleet.summary()));
    Ok(())
}

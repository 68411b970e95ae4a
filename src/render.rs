//! Terminal rendering for fleet tables, summaries and previews.

use colored::{ColoredString, Colorize};

use fleet::fleet::{AdjustmentPreview, FleetSummary};
use fleet::vehicle::{Vehicle, VehicleKind};

/// Colored, padded variant tag.
pub fn kind_label(kind: VehicleKind, width: usize) -> ColoredString {
    let padded = format!("{:<width$}", kind.as_str(), width = width);
    match kind {
        VehicleKind::Vehicle => padded.white(),
        VehicleKind::ElectricCar => padded.green(),
        VehicleKind::Truck => padded.yellow(),
    }
}

/// Format an amount as `€12,345.67`.
pub fn money(amount: f64) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{}€{}.{}", sign, grouped, cents)
}

/// Numbered table of vehicles. Numbers are 1-based, matching `remove` in the shell.
pub fn vehicle_table(vehicles: &[(usize, &Vehicle)]) -> String {
    if vehicles.is_empty() {
        return "  (no vehicles)".dimmed().to_string();
    }

    let mut lines = vec![format!(
        "{:>4}  {:<12} {:<12} {:<16} {:>14} {:>6} {:>12}",
        "#", "Type", "Brand", "Model", "Price", "Year", "Tax"
    )
    .bold()
    .to_string()];

    for (index, vehicle) in vehicles {
        lines.push(format!(
            "{:>4}  {} {:<12} {:<16} {:>14} {:>6} {:>12}",
            index + 1,
            kind_label(vehicle.kind(), 12),
            vehicle.brand(),
            vehicle.model(),
            money(vehicle.price()),
            vehicle.year(),
            money(vehicle.calculate_tax()),
        ));
    }

    lines.join("\n")
}

fn distribution_bar(percent: f64, width: usize) -> String {
    let filled = ((percent / 100.0) * width as f64).round() as usize;
    let filled = filled.min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Dashboard-style summary: totals, average, and distribution by type.
pub fn summary(summary: &FleetSummary) -> String {
    let mut output = vec![
        "Fleet Summary".bold().to_string(),
        "=============".to_string(),
        format!("  {:<16} {}", "Total vehicles:", summary.total),
        format!("  {:<16} {}", "Total value:", money(summary.total_value)),
        format!("  {:<16} {}", "Total tax:", money(summary.total_tax)),
        format!("  {:<16} {}", "Average value:", money(summary.average_value())),
    ];

    if !summary.counts_by_kind.is_empty() {
        output.push(String::new());
        output.push("By Type".bold().to_string());
        output.push("───────".to_string());
        for (kind, count) in &summary.counts_by_kind {
            let share = summary.share_percent(*kind);
            output.push(format!(
                "  {} {} {} ({:.1}%)",
                kind_label(*kind, 12),
                distribution_bar(share, 20),
                count,
                share
            ));
        }
    }

    output.join("\n")
}

/// Most recently added vehicles, newest last.
pub fn recent(vehicles: &[Vehicle], limit: usize) -> String {
    let start = vehicles.len().saturating_sub(limit);
    let mut output = vec!["Recent Vehicles".bold().to_string(), "───────────────".to_string()];
    for vehicle in &vehicles[start..] {
        output.push(format!(
            "  {}  {}",
            vehicle.describe(),
            format!("Tax: {}", money(vehicle.calculate_tax())).dimmed()
        ));
    }
    output.join("\n")
}

/// Old price, new price and change for each vehicle, with fleet totals.
pub fn adjustment_preview(rows: &[AdjustmentPreview]) -> String {
    let mut lines = vec![format!(
        "{:<12} {:<16} {:>14} {:>14} {:>9}",
        "Brand", "Model", "Old Price", "New Price", "Change"
    )
    .bold()
    .to_string()];

    for row in rows {
        let change = format!("{:>+8.1}%", row.change_percent);
        let change = if row.change_percent < 0.0 {
            change.green()
        } else if row.change_percent > 0.0 {
            change.red()
        } else {
            change.normal()
        };
        lines.push(format!(
            "{:<12} {:<16} {:>14} {:>14} {}",
            row.brand,
            row.model,
            money(row.old_price),
            money(row.new_price),
            change
        ));
    }

    let (old_total, new_total) = AdjustmentPreview::totals(rows);
    lines.push(String::new());
    lines.push(format!("  {:<14} {}", "Current total:", money(old_total)));
    lines.push(format!("  {:<14} {}", "New total:", money(new_total)));
    lines.push(format!(
        "  {:<14} {}",
        "Difference:",
        money(new_total - old_total)
    ));

    lines.join("\n")
}

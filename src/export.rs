//! Export engine: writes the fleet as text, CSV or JSON.
//!
//! The document is rendered in memory first, written to a sibling `.tmp` file
//! and renamed over the destination. A failed export never leaves a partial
//! file and never truncates a previous export.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::fleet::Fleet;
use crate::vehicle::{Vehicle, VehicleDetails, VehicleRecord, REGISTRATION_DATE_FORMAT};

/// Exact CSV header, in column order.
pub const CSV_COLUMNS: [&str; 11] = [
    "type",
    "brand",
    "model",
    "price",
    "tax",
    "year",
    "battery_capacity",
    "autonomy",
    "load_capacity",
    "length",
    "registration_date",
];

/// Timestamp format for the `export_date` field of JSON exports.
pub const JSON_EXPORT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const HEAVY_RULE_WIDTH: usize = 50;
const LIGHT_RULE_WIDTH: usize = 40;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] = [ExportFormat::Csv, ExportFormat::Text, ExportFormat::Json];

    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Text => "Text (readable)",
            ExportFormat::Csv => "CSV (spreadsheet)",
            ExportFormat::Json => "JSON (structured)",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "txt" | "text" => Ok(ExportFormat::Text),
            "csv" => Ok(ExportFormat::Csv),
            "json" => Ok(ExportFormat::Json),
            _ => Err(ExportError::UnsupportedFormat(s.trim().to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("There are no vehicles to export, nothing to export")]
    Empty,

    #[error("Unsupported export format '{0}'. Supported formats: txt, csv, json")]
    UnsupportedFormat(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize export document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Export document is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// What a successful export wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub format: ExportFormat,
    pub vehicles: usize,
}

impl fmt::Display for ExportOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Inventory of {} vehicle(s) exported to '{}'",
            self.vehicles,
            self.path.display()
        )
    }
}

/// Structured export document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub export_date: String,
    pub total_vehicles: usize,
    pub total_value: f64,
    pub total_tax: f64,
    pub vehicles: Vec<VehicleRecord>,
}

impl ExportDocument {
    pub fn from_fleet(fleet: &Fleet, now: DateTime<Local>) -> Self {
        let summary = fleet.summary();
        Self {
            export_date: now.format(JSON_EXPORT_DATE_FORMAT).to_string(),
            total_vehicles: summary.total,
            total_value: summary.total_value,
            total_tax: summary.total_tax,
            vehicles: fleet.iter().map(Vehicle::to_record).collect(),
        }
    }

    /// Parse a document previously written by [`render_json`].
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Export with a format given as text (`txt`, `csv` or `json`).
pub fn export(fleet: &Fleet, destination: &Path, format: &str) -> Result<ExportOutcome, ExportError> {
    if fleet.is_empty() {
        return Err(ExportError::Empty);
    }
    let format = format.parse::<ExportFormat>()?;
    export_as(fleet, destination, format)
}

pub fn export_as(
    fleet: &Fleet,
    destination: &Path,
    format: ExportFormat,
) -> Result<ExportOutcome, ExportError> {
    if fleet.is_empty() {
        return Err(ExportError::Empty);
    }

    let content = render(fleet, format, Local::now())?;
    write_file(destination, &content)?;

    tracing::debug!(
        path = %destination.display(),
        format = %format,
        bytes = content.len(),
        "export written"
    );

    Ok(ExportOutcome {
        path: destination.to_path_buf(),
        format,
        vehicles: fleet.len(),
    })
}

/// Render the fleet in the given format without touching the filesystem.
pub fn render(fleet: &Fleet, format: ExportFormat, now: DateTime<Local>) -> Result<String, ExportError> {
    match format {
        ExportFormat::Text => Ok(render_text(fleet, now)),
        ExportFormat::Csv => Ok(render_csv(fleet)),
        ExportFormat::Json => render_json(fleet, now),
    }
}

/// Sibling path the export is staged in before the rename.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_file(path: &Path, content: &str) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let tmp_path = staging_path(path);
    let written = fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, path));
    if written.is_err() {
        let _ = fs::remove_file(&tmp_path);
    }
    written.map_err(io_err)
}

fn heavy_rule() -> String {
    "=".repeat(HEAVY_RULE_WIDTH)
}

/// Variant-specific lines for the text layouts.
fn detail_lines(vehicle: &Vehicle) -> Vec<String> {
    match vehicle.details() {
        VehicleDetails::Base => Vec::new(),
        VehicleDetails::Electric {
            battery_capacity,
            autonomy,
        } => vec![
            format!("Battery capacity: {}kWh", battery_capacity),
            format!("Autonomy: {}km", autonomy),
        ],
        VehicleDetails::Truck {
            load_capacity,
            length,
        } => vec![
            format!("Load capacity: {}t", load_capacity),
            format!("Length: {}m", length),
        ],
    }
}

fn vehicle_block(output: &mut String, number: usize, vehicle: &Vehicle) {
    output.push_str(&format!("VEHICLE {}:\n", number));
    output.push_str(&format!("  Type: {}\n", vehicle.kind()));
    output.push_str(&format!("  Brand: {}\n", vehicle.brand()));
    output.push_str(&format!("  Model: {}\n", vehicle.model()));
    output.push_str(&format!("  Price: €{:.2}\n", vehicle.price()));
    output.push_str(&format!("  Tax: €{:.2}\n", vehicle.calculate_tax()));
    output.push_str(&format!("  Year: {}\n", vehicle.year()));
    for line in detail_lines(vehicle) {
        output.push_str(&format!("  {}\n", line));
    }
}

fn summary_block(output: &mut String, fleet: &Fleet) {
    let summary = fleet.summary();
    output.push_str(&heavy_rule());
    output.push('\n');
    output.push_str("FLEET SUMMARY\n");
    output.push_str(&format!("Total vehicles: {}\n", summary.total));
    output.push_str(&format!("Total fleet value: €{:.2}\n", summary.total_value));
    output.push_str(&format!("Total tax: €{:.2}\n", summary.total_tax));
    output.push_str(&heavy_rule());
    output.push('\n');
}

pub fn render_text(fleet: &Fleet, now: DateTime<Local>) -> String {
    let mut output = String::new();

    output.push_str(&heavy_rule());
    output.push('\n');
    output.push_str("FLEET INVENTORY\n");
    output.push_str(&format!(
        "Export date: {}\n",
        now.format(REGISTRATION_DATE_FORMAT)
    ));
    output.push_str(&heavy_rule());
    output.push_str("\n\n");

    for (i, vehicle) in fleet.iter().enumerate() {
        vehicle_block(&mut output, i + 1, vehicle);
        output.push('\n');
        output.push_str(&"-".repeat(LIGHT_RULE_WIDTH));
        output.push_str("\n\n");
    }

    summary_block(&mut output, fleet);
    output
}

/// Escape a value for CSV output
fn csv_escape(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn optional_cell(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn csv_row(vehicle: &Vehicle) -> Vec<String> {
    vec![
        vehicle.kind().to_string(),
        vehicle.brand().to_string(),
        vehicle.model().to_string(),
        vehicle.price().to_string(),
        vehicle.calculate_tax().to_string(),
        vehicle.year().to_string(),
        optional_cell(vehicle.battery_capacity()),
        optional_cell(vehicle.autonomy()),
        optional_cell(vehicle.load_capacity()),
        optional_cell(vehicle.length()),
        vehicle.formatted_registration_date(),
    ]
}

pub fn render_csv(fleet: &Fleet) -> String {
    let mut output = String::new();

    output.push_str(&CSV_COLUMNS.join(","));
    output.push('\n');

    for vehicle in fleet {
        let values: Vec<String> = csv_row(vehicle).iter().map(|v| csv_escape(v)).collect();
        output.push_str(&values.join(","));
        output.push('\n');
    }

    output
}

pub fn render_json(fleet: &Fleet, now: DateTime<Local>) -> Result<String, ExportError> {
    let document = ExportDocument::from_fleet(fleet, now);

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    document.serialize(&mut serializer)?;
    buffer.push(b'\n');

    Ok(String::from_utf8(buffer)?)
}

/// Short text preview of the first `limit` vehicles followed by the summary.
pub fn preview(fleet: &Fleet, limit: usize) -> String {
    if fleet.is_empty() {
        return "There are no vehicles to preview.\n".to_string();
    }

    let mut output = String::from("EXPORT PREVIEW\n");
    output.push_str(&heavy_rule());
    output.push_str("\n\n");

    for (i, vehicle) in fleet.iter().take(limit).enumerate() {
        vehicle_block(&mut output, i + 1, vehicle);
        output.push('\n');
    }

    if fleet.len() > limit {
        output.push_str(&format!(
            "... and {} more vehicles\n\n",
            fleet.len() - limit
        ));
    }

    summary_block(&mut output, fleet);
    output
}

/// Default export file name: `fleet_YYYYMMDD_HHMMSS.<ext>`.
pub fn default_file_name(format: ExportFormat, now: DateTime<Local>) -> String {
    format!("fleet_{}.{}", now.format("%Y%m%d_%H%M%S"), format.extension())
}

/// Append the format's extension unless the path already ends with it.
pub fn with_extension(path: &Path, format: ExportFormat) -> PathBuf {
    let has_extension = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case(format.extension()))
        .unwrap_or(false);
    if has_extension {
        path.to_path_buf()
    } else {
        let mut name = path.as_os_str().to_os_string();
        name.push(".");
        name.push(format.extension());
        PathBuf::from(name)
    }
}

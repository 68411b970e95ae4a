//! Interactive session holding one fleet in memory.
//!
//! Commands are parsed by [`Shell::execute`], which returns the text to show,
//! so the whole command set runs without a terminal. Only the bare `add`
//! command drops into a dialoguer form.

use anyhow::Result;
use colored::Colorize;
use dialoguer::{Input, Select};
use std::io::{self, BufRead, Write};
use std::path::Path;

use fleet::config::Config;
use fleet::export::{self, ExportFormat};
use fleet::fleet::Fleet;
use fleet::input::{self, VehicleForm};
use fleet::vehicle::{Vehicle, VehicleKind};

use crate::cmd::adjust::describe_adjustment;
use crate::render;

const HELP: &str = "\
Commands:
  list                           List every vehicle
  filter brand|year|type <VALUE> List matching vehicles
  add                            Add a vehicle (interactive form)
  add <TYPE> | <BRAND> | <MODEL> | <PRICE> | <YEAR> [| <A> | <B>]
                                 Add a vehicle inline; A/B are battery kWh and
                                 range km (ElectricCar) or load t and length m (Truck)
  remove <N>                     Remove vehicle number N
  adjust <PERCENT>               Apply a discount (positive) or surcharge (negative)
  preview <PERCENT>              Show an adjustment without applying it
  summary                        Fleet totals and distribution by type
  export <FORMAT> [PATH]         Export to txt, csv or json
  sample                         Reload the demonstration fleet
  clear                          Remove every vehicle
  help                           Show this help
  quit                           Leave the shell";

#[derive(Debug, PartialEq)]
pub enum ShellOutcome {
    Continue(String),
    /// Bare `add`: the caller should collect a form interactively.
    AddForm,
    Quit,
}

pub struct Shell {
    pub fleet: Fleet,
    config: Config,
}

/// Build a form from `TYPE | BRAND | MODEL | PRICE | YEAR [| A | B]`.
pub fn parse_inline_form(args: &str) -> VehicleForm {
    let parts: Vec<String> = args.split('|').map(|p| p.trim().to_string()).collect();
    let field = |i: usize| parts.get(i).cloned().unwrap_or_default();

    let mut form = VehicleForm {
        kind: field(0),
        brand: field(1),
        model: field(2),
        price: field(3),
        year: field(4),
        ..VehicleForm::default()
    };
    match input::parse_kind(&form.kind) {
        Ok(VehicleKind::ElectricCar) => {
            form.battery_capacity = field(5);
            form.autonomy = field(6);
        }
        Ok(VehicleKind::Truck) => {
            form.load_capacity = field(5);
            form.length = field(6);
        }
        _ => {}
    }
    form
}

fn error(message: impl std::fmt::Display) -> String {
    format!("{} {}", "Error:".red(), message)
}

fn success(message: impl std::fmt::Display) -> String {
    format!("{} {}", "✓".green(), message)
}

impl Shell {
    pub fn new(fleet: Fleet, config: Config) -> Self {
        Self { fleet, config }
    }

    pub fn execute(&mut self, line: &str) -> ShellOutcome {
        let line = line.trim();
        let (command, args) = line
            .split_once(char::is_whitespace)
            .map(|(c, a)| (c, a.trim()))
            .unwrap_or((line, ""));

        let output = match command.to_lowercase().as_str() {
            "" => String::new(),
            "help" | "?" => HELP.to_string(),
            "quit" | "exit" => return ShellOutcome::Quit,
            "list" | "ls" => self.list(),
            "filter" => self.filter(args),
            "add" if args.is_empty() => return ShellOutcome::AddForm,
            "add" => self.add(parse_inline_form(args)),
            "remove" | "rm" => self.remove(args),
            "adjust" => self.adjust(args),
            "preview" => self.preview(args),
            "summary" => render::summary(&self.fleet.summary()),
            "export" => self.export(args),
            "sample" => {
                let count = self.fleet.load_sample();
                success(format!("{} sample vehicles loaded", count))
            }
            "clear" => {
                self.fleet.clear();
                success("Fleet cleared")
            }
            other => error(format!("Unknown command '{}'. Type 'help' for commands.", other)),
        };

        ShellOutcome::Continue(output)
    }

    fn list(&self) -> String {
        self.numbered(|_| true)
    }

    fn numbered(&self, predicate: impl Fn(&Vehicle) -> bool) -> String {
        render::vehicle_table(&self.fleet.positions_where(predicate))
    }

    fn filter(&self, args: &str) -> String {
        let (by, value) = args.split_once(char::is_whitespace).unwrap_or((args, ""));
        let value = value.trim();
        if value.is_empty() {
            return error("Usage: filter brand|year|type <VALUE>");
        }

        match by.to_lowercase().as_str() {
            "brand" => self.numbered(|v| v.has_brand(value)),
            "year" => match input::parse_year(value) {
                Ok(year) => self.numbered(|v| v.is_from(year)),
                Err(e) => error(e),
            },
            "type" => match input::parse_kind(value) {
                Ok(kind) => self.numbered(|v| v.kind() == kind),
                Err(e) => error(e),
            },
            other => error(format!("Cannot filter by '{}'. Use brand, year or type.", other)),
        }
    }

    pub fn add(&mut self, form: VehicleForm) -> String {
        match form.into_vehicle() {
            Ok(vehicle) => {
                let description = vehicle.describe();
                self.fleet.add(vehicle);
                success(format!("Vehicle added: {}", description))
            }
            Err(e) => error(e),
        }
    }

    fn remove(&mut self, args: &str) -> String {
        let number = match args.parse::<usize>() {
            Ok(n) if n > 0 => n,
            _ => return error("Usage: remove <N> where N is a vehicle number from 'list'"),
        };
        match self.fleet.remove(number - 1) {
            Some(vehicle) => success(format!(
                "Removed {} {}",
                vehicle.brand(),
                vehicle.model()
            )),
            None => error(format!("No vehicle number {}", number)),
        }
    }

    fn adjust(&mut self, args: &str) -> String {
        match input::parse_percentage(args) {
            Ok(percentage) => {
                let count = self.fleet.apply_global_adjustment(percentage);
                success(format!(
                    "Applied {} to {} vehicle(s)",
                    describe_adjustment(percentage),
                    count
                ))
            }
            Err(e) => error(e),
        }
    }

    fn preview(&self, args: &str) -> String {
        match input::parse_percentage(args) {
            Ok(percentage) => {
                render::adjustment_preview(&self.fleet.preview_adjustment(percentage))
            }
            Err(e) => error(e),
        }
    }

    fn export(&self, args: &str) -> String {
        let mut parts = args.splitn(2, char::is_whitespace);
        let format = parts.next().unwrap_or("").trim();
        let path = parts.next().map(str::trim).filter(|p| !p.is_empty());

        let format = if format.is_empty() {
            self.config.export.default_format()
        } else {
            match format.parse::<ExportFormat>() {
                Ok(f) => f,
                Err(e) => return error(e),
            }
        };
        let destination =
            super::export::resolve_destination(&self.config, path.map(Path::new), format);

        match export::export_as(&self.fleet, &destination, format) {
            Ok(outcome) => success(outcome),
            Err(e) => error(e),
        }
    }
}

/// Collect a vehicle form with dialoguer prompts.
fn prompt_form() -> Result<VehicleForm> {
    let kinds: Vec<&str> = VehicleKind::ALL.iter().map(|k| k.as_str()).collect();
    let selection = Select::new()
        .with_prompt("Vehicle type:")
        .items(&kinds)
        .default(0)
        .interact()?;
    let kind = VehicleKind::ALL[selection];

    let ask = |prompt: &str| -> Result<String> {
        Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    };

    let mut form = VehicleForm {
        kind: kind.as_str().to_string(),
        brand: ask("Brand")?,
        model: ask("Model")?,
        price: ask("Price (€)")?,
        year: ask("Year")?,
        ..VehicleForm::default()
    };

    match kind {
        VehicleKind::Vehicle => {}
        VehicleKind::ElectricCar => {
            form.battery_capacity = ask("Battery capacity (kWh)")?;
            form.autonomy = ask("Autonomy (km)")?;
        }
        VehicleKind::Truck => {
            form.load_capacity = ask("Load capacity (t)")?;
            form.length = ask("Length (m)")?;
        }
    }

    Ok(form)
}

pub fn cmd_shell(fleet: Fleet, config: Config) -> Result<()> {
    let interactive = atty::is(atty::Stream::Stdin);
    let mut shell = Shell::new(fleet, config);

    if interactive {
        println!(
            "{} {} vehicle(s) loaded. Type 'help' for commands.",
            "Fleet shell".bold(),
            shell.fleet.len()
        );
    }

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        if interactive {
            print!("{} ", "fleet>".cyan());
            io::stdout().flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };

        match shell.execute(&line?) {
            ShellOutcome::Continue(output) => {
                if !output.is_empty() {
                    println!("{}", output);
                }
            }
            ShellOutcome::AddForm if interactive => match prompt_form() {
                Ok(form) => println!("{}", shell.add(form)),
                Err(e) => println!("{}", error(e)),
            },
            ShellOutcome::AddForm => {
                println!("{}", error("Interactive form needs a terminal. Use: add <TYPE> | <BRAND> | ..."));
            }
            ShellOutcome::Quit => break,
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn shell() -> Shell {
        colored::control::set_override(false);
        Shell::new(
            Fleet::with_vehicles(fleet::sample::sample_vehicles()),
            Config::default(),
        )
    }

    fn output(outcome: ShellOutcome) -> String {
        match outcome {
            ShellOutcome::Continue(text) => text,
            other => panic!("unexpected outcome {:?}", other),
        }
    }

    #[test]
    fn test_inline_add_truck() {
        let mut shell = shell();
        let text = output(shell.execute("add Truck | Scania | R 450 | 98000 | 2024 | 24 | 13.6"));
        assert!(text.contains("Vehicle added"));
        assert_eq!(shell.fleet.len(), 11);
        let added = shell.fleet.get(10).unwrap();
        assert_eq!(added.model(), "R 450");
        assert_eq!(added.length(), Some(13.6));
    }

    #[test]
    fn test_inline_add_invalid_keeps_fleet() {
        let mut shell = shell();
        let text = output(shell.execute("add Vehicle | Fiat | Panda | cheap | 2020"));
        assert!(text.contains("price"));
        assert_eq!(shell.fleet.len(), 10);
    }

    #[test]
    fn test_bare_add_requests_form() {
        assert_eq!(shell().execute("add"), ShellOutcome::AddForm);
    }

    #[test]
    fn test_remove_is_one_based() {
        let mut shell = shell();
        let text = output(shell.execute("remove 1"));
        assert!(text.contains("Toyota Corolla"));
        assert_eq!(shell.fleet.get(0).unwrap().brand(), "Ford");
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut shell = shell();
        assert!(output(shell.execute("remove 42")).contains("No vehicle number 42"));
        assert!(output(shell.execute("remove 0")).contains("Usage"));
        assert_eq!(shell.fleet.len(), 10);
    }

    #[test]
    fn test_adjust_and_preview() {
        let mut shell = shell();
        let before = shell.fleet.get(0).unwrap().price();
        output(shell.execute("preview 10"));
        assert_eq!(shell.fleet.get(0).unwrap().price(), before);

        let text = output(shell.execute("adjust -10"));
        assert!(text.contains("10% surcharge"));
        assert!((shell.fleet.get(0).unwrap().price() - before * 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_filter_type() {
        let mut shell = shell();
        let text = output(shell.execute("filter type truck"));
        assert!(text.contains("Actros"));
        assert!(!text.contains("Corolla"));
    }

    #[test]
    fn test_export_json() {
        let tmp = TempDir::new().unwrap();
        let mut shell = shell();
        let path = tmp.path().join("fleet");
        let text = output(shell.execute(&format!("export json {}", path.display())));
        assert!(text.contains("exported"));
        assert!(tmp.path().join("fleet.json").exists());
    }

    #[test]
    fn test_export_empty_fleet() {
        let tmp = TempDir::new().unwrap();
        let mut shell = shell();
        output(shell.execute("clear"));
        let path = tmp.path().join("fleet.csv");
        let text = output(shell.execute(&format!("export csv {}", path.display())));
        assert!(text.contains("nothing to export"));
        assert!(!path.exists());
    }

    #[test]
    fn test_sample_reload_and_quit() {
        let mut shell = shell();
        output(shell.execute("clear"));
        assert!(shell.fleet.is_empty());
        output(shell.execute("sample"));
        assert_eq!(shell.fleet.len(), 10);
        assert_eq!(shell.execute("quit"), ShellOutcome::Quit);
    }

    #[test]
    fn test_unknown_command() {
        let mut shell = shell();
        assert!(output(shell.execute("fly")).contains("Unknown command"));
    }
}

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// TestHarness provides an isolated working directory for running the fleet binary.
/// Each harness creates a temporary directory with a `.fleet/config.md`.
pub struct TestHarness {
    pub dir: TempDir,
    pub config_path: PathBuf,
    pub fleet_binary: PathBuf,
}

impl TestHarness {
    /// Creates a harness whose config sends exports into the temp directory
    /// and starts from the sample fleet.
    pub fn new() -> Self {
        Self::with_config(
            r#"---
export:
  format: csv
  directory: .
fleet:
  load_sample: true
log:
  level: warn
---

# Fleet Config
"#,
        )
    }

    pub fn with_config(config: &str) -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let fleet_dir = temp_dir.path().join(".fleet");
        fs::create_dir_all(&fleet_dir).expect("Failed to create .fleet dir");

        let config_path = fleet_dir.join("config.md");
        fs::write(&config_path, config).expect("Failed to write config");

        TestHarness {
            dir: temp_dir,
            config_path,
            fleet_binary: PathBuf::from(env!("CARGO_BIN_EXE_fleet")),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Run the binary inside the harness directory with colors disabled.
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(&self.fleet_binary)
            .args(args)
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run fleet binary")
    }

    /// Run the shell subcommand feeding `script` on stdin.
    pub fn run_shell(&self, script: &str) -> Output {
        use std::io::Write;
        use std::process::Stdio;

        let mut child = Command::new(&self.fleet_binary)
            .arg("shell")
            .current_dir(self.path())
            .env("NO_COLOR", "1")
            .env("RUST_LOG", "info")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn fleet shell");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(script.as_bytes())
            .expect("Failed to write shell script");

        child.wait_with_output().expect("Failed to wait for fleet shell")
    }
}

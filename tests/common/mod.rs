#![allow(dead_code)]

pub mod mock_data;
pub mod stub_gemini;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Helper struct to run smarthelp commands against an isolated config root
pub struct SmartHelpTest {
    pub temp_dir: TempDir,
    binary_path: &'static str,
}

impl SmartHelpTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        SmartHelpTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_smarthelp"),
        }
    }

    fn root(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".smarthelp")
    }

    /// Run with no AI credential in the environment, so the mock is used
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(self.binary_path)
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("SMARTHELP_ROOT", self.root())
            .env("NO_COLOR", "1")
            .env_remove("API_KEY")
            .env_remove("GEMINI_API_KEY")
            .env_remove("SMARTHELP_LOG")
            .output()
            .expect("Failed to execute smarthelp command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn run_json(&self, args: &[&str]) -> serde_json::Value {
        let stdout = self.run_success(args);
        serde_json::from_str(&stdout)
            .unwrap_or_else(|e| panic!("invalid JSON from {:?}: {}\n{}", args, e, stdout))
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create .smarthelp directory");
        fs::write(self.root().join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.root().join("config.yaml")).ok()
    }
}

#![allow(dead_code)]

pub mod mock_data;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Runs the taskdeck binary against an isolated taskdeck root
pub struct TaskdeckTest {
    pub temp_dir: TempDir,
}

impl TaskdeckTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        TaskdeckTest { temp_dir }
    }

    pub fn root(&self) -> std::path::PathBuf {
        self.temp_dir.path().join(".taskdeck")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_taskdeck"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("TASKDECK_ROOT", self.root())
            .env_remove("TASKDECK_API_TOKEN")
            .output()
            .expect("Failed to execute taskdeck command")
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

    pub fn write_tasks_yaml(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create .taskdeck directory");
        fs::write(self.root().join("tasks.yaml"), content).expect("Failed to write tasks file");
    }

    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.root()).expect("Failed to create .taskdeck directory");
        fs::write(self.root().join("config.yaml"), content).expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.root().join("config.yaml")).ok()
    }
}

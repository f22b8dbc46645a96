use std::path::PathBuf;

/// Returns the taskdeck root directory.
/// Respects the TASKDECK_ROOT environment variable, defaulting to ".taskdeck".
pub fn taskdeck_root() -> PathBuf {
    if let Ok(root) = std::env::var("TASKDECK_ROOT") {
        PathBuf::from(root)
    } else {
        PathBuf::from(".taskdeck")
    }
}

/// Returns the path to the default task file.
pub fn default_tasks_path() -> PathBuf {
    taskdeck_root().join("tasks.yaml")
}

/// Returns the path to the log file written while the TUI is running.
pub fn log_dir() -> PathBuf {
    taskdeck_root()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_taskdeck_root_default() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::remove_var("TASKDECK_ROOT") };
        assert_eq!(taskdeck_root(), PathBuf::from(".taskdeck"));
    }

    #[test]
    #[serial]
    fn test_taskdeck_root_with_env_var() {
        // SAFETY: We use #[serial] to ensure single-threaded access
        unsafe { std::env::set_var("TASKDECK_ROOT", "/custom/path/.taskdeck") };
        assert_eq!(taskdeck_root(), PathBuf::from("/custom/path/.taskdeck"));
        assert_eq!(
            default_tasks_path(),
            PathBuf::from("/custom/path/.taskdeck/tasks.yaml")
        );
        unsafe { std::env::remove_var("TASKDECK_ROOT") };
    }
}

use std::fmt;
use std::path::PathBuf;

use crate::notify::ErrorNotifier;
use crate::plan::LaunchPlan;
use crate::spawn::ProcessSpawner;

/// Title shared by both failure dialogs.
pub const DIALOG_TITLE: &str = "Launch Error";

/// The two terminal failures of a launch attempt. Both map to exit code 1
/// and are surfaced to the user exactly once.
#[derive(Debug)]
pub enum LaunchError {
    ResourceNotFound {
        jar_path: PathBuf,
    },
    SpawnFailed {
        command_line: String,
        source: std::io::Error,
    },
}

impl fmt::Display for LaunchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResourceNotFound { jar_path } => write!(
                f,
                "Application package not found at:\n{}\nPlease ensure the application is installed correctly.",
                jar_path.display()
            ),
            Self::SpawnFailed { command_line, .. } => write!(
                f,
                "Failed to launch the application. Command: {command_line}\nEnsure a Java runtime is installed."
            ),
        }
    }
}

impl std::error::Error for LaunchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ResourceNotFound { .. } => None,
            Self::SpawnFailed { source, .. } => Some(source),
        }
    }
}

/// Runs the launch sequence: probe the package for existence, spawn the
/// child, release it. Linear, no retries, no alternate search paths. Each
/// failure notifies the user once and returns; the caller maps the error to
/// a non-zero exit code.
pub fn run(
    plan: &LaunchPlan,
    spawner: &dyn ProcessSpawner,
    notifier: &dyn ErrorNotifier,
) -> Result<(), LaunchError> {
    // Existence probe only; readability and file type are the runtime's
    // problem once the child starts.
    if !plan.jar_path.exists() {
        let err = LaunchError::ResourceNotFound {
            jar_path: plan.jar_path.clone(),
        };
        notifier.notify(DIALOG_TITLE, &err.to_string());
        return Err(err);
    }

    if let Err(source) = spawner.spawn(plan) {
        let err = LaunchError::SpawnFailed {
            command_line: plan.command_line(),
            source,
        };
        notifier.notify(DIALOG_TITLE, &err.to_string());
        return Err(err);
    }

    Ok(())
}

use std::path::{Path, PathBuf};

use anyhow::anyhow;
use serde::{Deserialize, Serialize};

/// Filename of the application package expected beside the launcher binary.
pub const DEFAULT_JAR_NAME: &str = "app.jar";

/// Java runtime invoked for the package, resolved through the OS executable
/// search path rather than an absolute location.
pub fn default_program() -> &'static str {
    if cfg!(windows) {
        "javaw"
    } else {
        "java"
    }
}

/// Everything the launcher is about to execute: which program, which
/// package, and from which working directory. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub program: String,
    pub jar_path: PathBuf,
    pub cwd: PathBuf,
}

impl LaunchPlan {
    /// Derives the plan from the launcher's own executable path. The package
    /// is always a sibling of the launcher, and the child always runs with
    /// the launcher's directory as its working directory, independent of the
    /// caller's current directory.
    ///
    /// An executable path with no containing directory cannot occur for a
    /// normally installed binary; it fails fast here instead of being left
    /// undefined.
    pub fn for_jar(exe_path: &Path, jar_name: &str, program: &str) -> anyhow::Result<Self> {
        let base_dir = exe_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                anyhow!(
                    "cannot determine the directory containing {}",
                    exe_path.display()
                )
            })?;
        Ok(Self {
            program: program.to_string(),
            jar_path: base_dir.join(jar_name),
            cwd: base_dir.to_path_buf(),
        })
    }

    /// The command string as a user would type it, with the package path
    /// quoted. This exact string appears in the launch-failure dialog.
    pub fn command_line(&self) -> String {
        format!("{} -jar \"{}\"", self.program, self.jar_path.display())
    }
}

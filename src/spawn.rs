use std::io;
use std::process::Command;

use crate::plan::LaunchPlan;

/// Process-creation seam. The launcher only needs to know whether the child
/// started; it never holds on to the child afterwards.
pub trait ProcessSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<()>;
}

/// Spawns the child on the host OS with the parent's environment and the
/// plan's working directory.
pub struct HostSpawner;

impl ProcessSpawner for HostSpawner {
    fn spawn(&self, plan: &LaunchPlan) -> io::Result<()> {
        let child = Command::new(&plan.program)
            .arg("-jar")
            .arg(&plan.jar_path)
            .current_dir(&plan.cwd)
            .spawn()?;
        // Fire-and-forget: dropping the Child releases the OS handles
        // without waiting. The launcher never supervises the application
        // it starts and must exit promptly regardless of its runtime.
        drop(child);
        Ok(())
    }
}

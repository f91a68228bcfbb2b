#![cfg(unix)]

use std::os::unix::fs::PermissionsExt;
use std::sync::Mutex;
use std::time::Instant;

use tempfile::tempdir;

use jarlaunch::launcher::{self, LaunchError};
use jarlaunch::notify::ErrorNotifier;
use jarlaunch::plan::{LaunchPlan, DEFAULT_JAR_NAME};
use jarlaunch::spawn::HostSpawner;

struct PanicNotifier;

impl ErrorNotifier for PanicNotifier {
    fn notify(&self, title: &str, body: &str) {
        panic!("unexpected diagnostic: {title}: {body}");
    }
}

#[derive(Default)]
struct RecordingNotifier {
    shown: Mutex<Vec<(String, String)>>,
}

impl ErrorNotifier for RecordingNotifier {
    fn notify(&self, title: &str, body: &str) {
        self.shown
            .lock()
            .expect("lock")
            .push((title.to_string(), body.to_string()));
    }
}

fn write_slow_interpreter(dir: &std::path::Path) -> std::path::PathBuf {
    let script = dir.join("slow-java.sh");
    std::fs::write(&script, "#!/bin/sh\nsleep 10\n").expect("write script");
    let mut perms = std::fs::metadata(&script).expect("metadata").permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&script, perms).expect("chmod");
    script
}

#[test]
fn handoff_does_not_wait_for_the_child() {
    let dir = tempdir().expect("tempdir");
    let mut plan =
        LaunchPlan::for_jar(&dir.path().join("launcher"), DEFAULT_JAR_NAME, "java").expect("plan");
    std::fs::write(&plan.jar_path, b"payload").expect("write jar");
    plan.program = write_slow_interpreter(dir.path()).display().to_string();

    let started = Instant::now();
    launcher::run(&plan, &HostSpawner, &PanicNotifier).expect("handoff");
    assert!(
        started.elapsed().as_secs() < 5,
        "launcher must exit promptly instead of waiting on the child"
    );
}

#[test]
fn missing_interpreter_surfaces_the_attempted_command() {
    let dir = tempdir().expect("tempdir");
    let mut plan =
        LaunchPlan::for_jar(&dir.path().join("launcher"), DEFAULT_JAR_NAME, "java").expect("plan");
    std::fs::write(&plan.jar_path, b"payload").expect("write jar");
    plan.program = "jarlaunch-no-such-interpreter".to_string();

    let notifier = RecordingNotifier::default();
    let err = launcher::run(&plan, &HostSpawner, &notifier).expect_err("must fail");
    assert!(matches!(err, LaunchError::SpawnFailed { .. }));

    let shown = notifier.shown.lock().expect("lock");
    assert_eq!(shown.len(), 1);
    assert!(shown[0].1.contains(&plan.command_line()));
}

#[test]
fn independent_invocations_do_not_interfere() {
    let dir = tempdir().expect("tempdir");
    let mut plan =
        LaunchPlan::for_jar(&dir.path().join("launcher"), DEFAULT_JAR_NAME, "java").expect("plan");
    std::fs::write(&plan.jar_path, b"payload").expect("write jar");
    plan.program = "true".to_string();

    for _ in 0..3 {
        launcher::run(&plan, &HostSpawner, &PanicNotifier).expect("handoff");
    }
}

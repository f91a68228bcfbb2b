#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use std::process::ExitCode;

use clap::Parser;

use jarlaunch::launcher;
use jarlaunch::notify::{DialogNotifier, ErrorNotifier, StderrNotifier};
use jarlaunch::plan::{default_program, LaunchPlan, DEFAULT_JAR_NAME};
use jarlaunch::spawn::HostSpawner;

#[derive(Parser, Debug)]
#[command(
    name = "jarlaunch",
    version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("JARLAUNCH_GIT_SHA"),
        ", ",
        env!("JARLAUNCH_TARGET"),
        ")"
    ),
    about = "Start the application package installed beside this launcher"
)]
struct Cli {
    /// Filename of the application package expected beside the launcher.
    #[arg(long, default_value = DEFAULT_JAR_NAME)]
    jar: String,

    /// Java runtime used to run the package, resolved via the OS search path.
    #[arg(long, default_value_t = default_program().to_string())]
    java: String,

    /// Print the launch plan as JSON and exit without spawning.
    #[arg(long)]
    print_plan: bool,

    /// Report failures on stderr instead of a modal dialog.
    #[arg(long)]
    no_dialog: bool,

    /// Anything else on the command line is accepted and discarded, so a
    /// decorated invocation still launches.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    #[allow(dead_code)]
    ignored: Vec<std::ffi::OsString>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let exe_path = match std::env::current_exe() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ERROR: cannot determine the launcher's own path: {e}");
            return ExitCode::FAILURE;
        }
    };

    let plan = match LaunchPlan::for_jar(&exe_path, &cli.jar, &cli.java) {
        Ok(plan) => plan,
        Err(e) => {
            eprintln!("ERROR: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cli.print_plan {
        return match serde_json::to_string_pretty(&plan) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                eprintln!("ERROR: failed to serialize launch plan: {e}");
                ExitCode::FAILURE
            }
        };
    }

    let notifier: Box<dyn ErrorNotifier> = if cli.no_dialog {
        Box::new(StderrNotifier)
    } else {
        Box::new(DialogNotifier)
    };

    match launcher::run(&plan, &HostSpawner, notifier.as_ref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

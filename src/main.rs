use std::ffi::OsString;
use std::process;

use ipaddr_launcher::error::exit_code;
use ipaddr_launcher::styling::println;
use ipaddr_launcher::{LaunchError, Launcher, Layout, Outcome};

/// Variable holding the log filter (`env_logger` syntax, e.g. `debug`).
const LOG_ENV: &str = "IPADDR_LAUNCHER_LOG";

fn main() {
    init_logging();

    // No flags of our own: everything after argv[0] belongs to the child
    let args: Vec<OsString> = std::env::args_os().skip(1).collect();

    if let Err(e) = run(args) {
        match e.downcast_ref::<LaunchError>() {
            Some(err) => println!("{}", err.render()),
            None => println!("{}", ipaddr_launcher::styling::error_message(format!("{e:#}"))),
        }
        process::exit(exit_code(&e));
    }
}

fn run(args: Vec<OsString>) -> anyhow::Result<()> {
    let launcher = Launcher::detect(Layout::get())?;

    match launcher.run(args)? {
        // The child's own status does not become ours
        Outcome::Exited(status) => log::debug!("Child finished ({status}); exiting 0"),
        Outcome::SpawnFailed(err) => println!("{}", err.render()),
    }
    Ok(())
}

/// Log to stderr so diagnostics on stdout and the child's streams stay clean.
fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or(LOG_ENV, "warn"))
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}

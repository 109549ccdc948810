//! fontmount CLI.

use std::io::{self, Write};

use anyhow::Result;
use clap::{ArgAction, CommandFactory, Parser, ValueHint};
use log::debug;

use fontmount_core::driver::{process, RegistrationReport, RegistrationResult, Task};
use fontmount_core::output::{write_json_pretty, write_ndjson};
use fontmount_core::registry;

/// CLI entrypoint for fontmount.
///
/// The task flags form a last-one-wins group: `-a -r` removes, `-r -a`
/// adds. With no task flag the tool shows usage.
#[derive(Debug, Parser)]
#[command(
    name = "fontmount",
    about = "Temporarily register or unregister fonts for the running session",
    disable_version_flag = true
)]
pub struct Cli {
    /// Add the specified fonts for this session
    #[arg(short = 'a', long = "add", action = ArgAction::SetTrue,
          overrides_with_all = ["remove", "version"])]
    add: bool,

    /// Remove the specified fonts from this session
    #[arg(short = 'r', long = "remove", action = ArgAction::SetTrue,
          overrides_with_all = ["add", "version"])]
    remove: bool,

    /// Print version information
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue,
          overrides_with_all = ["add", "remove"])]
    version: bool,

    /// Trace every validation and registration step to stderr
    #[arg(short = 'd', long = "debug", action = ArgAction::SetTrue)]
    debug: bool,

    /// Emit per-file results as a single JSON array
    #[arg(long = "json", action = ArgAction::SetTrue, conflicts_with = "ndjson")]
    json: bool,

    /// Emit per-file results as newline-delimited JSON
    #[arg(long = "ndjson", action = ArgAction::SetTrue)]
    ndjson: bool,

    /// Font files; give PostScript Type 1 fonts as metric.pfm|outline.pfb
    #[arg(value_hint = ValueHint::FilePath)]
    fonts: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CliTask {
    Add,
    Remove,
    Help,
    Version,
}

impl Cli {
    /// The task left standing after flag overrides.
    fn task(&self) -> CliTask {
        if self.add {
            CliTask::Add
        } else if self.remove {
            CliTask::Remove
        } else if self.version {
            CliTask::Version
        } else {
            CliTask::Help
        }
    }
}

/// Parse CLI args and execute the selected task.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    match cli.task() {
        CliTask::Help => print_usage(),
        CliTask::Version => {
            println!("fontmount {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        CliTask::Add => run_task(Task::Add, &cli),
        CliTask::Remove => run_task(Task::Remove, &cli),
    }
}

fn init_logging(debug: bool) {
    let default_level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run_task(task: Task, cli: &Cli) -> Result<()> {
    let fonts = expand_globs(&cli.fonts);
    if fonts.is_empty() {
        eprintln!("no font files specified");
        return print_usage();
    }

    debug!("{task:?} over {} file(s)", fonts.len());
    let platform = registry::platform();
    let reports = process(task, &fonts, &platform);

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        write_json_pretty(&reports, &mut handle)?;
        writeln!(handle)?;
    } else if cli.ndjson {
        write_ndjson(&reports, &mut handle)?;
    } else {
        write_plain(&reports, task, &mut handle, io::stderr().lock())?;
    }

    Ok(())
}

fn print_usage() -> Result<()> {
    let mut command = Cli::command();
    command.print_help()?;
    Ok(())
}

/// Expand shell-style wildcards in plain arguments. Windows shells hand
/// patterns to the process unexpanded. Pair arguments and patterns that
/// match nothing are kept verbatim so the per-file loop reports them.
fn expand_globs(raw: &[String]) -> Vec<String> {
    let mut fonts = Vec::new();

    for arg in raw {
        if arg.contains('|') || !arg.contains(['*', '?', '[']) {
            fonts.push(arg.clone());
            continue;
        }

        let mut matched = false;
        if let Ok(paths) = glob::glob(arg) {
            for path in paths.flatten() {
                fonts.push(path.display().to_string());
                matched = true;
            }
        }
        if !matched {
            fonts.push(arg.clone());
        }
    }

    fonts
}

/// Render one status line per report: successes on the output stream,
/// failures on the error stream, both in input order.
fn write_plain(
    reports: &[RegistrationReport],
    task: Task,
    mut out: impl Write,
    mut err: impl Write,
) -> Result<()> {
    for report in reports {
        match report.result {
            RegistrationResult::Registered => writeln!(out, "Added font {}", report.spec)?,
            RegistrationResult::Unregistered => writeln!(out, "Removed font {}", report.spec)?,
            RegistrationResult::OperationFailed => {
                let verb = match task {
                    Task::Add => "adding",
                    Task::Remove => "removing",
                };
                match &report.error {
                    Some(reason) => writeln!(err, "Error {verb} {}: {reason}", report.spec)?,
                    None => writeln!(err, "Error {verb} {}", report.spec)?,
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;

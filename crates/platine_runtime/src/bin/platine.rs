//! Platine CLI entry point.

use platine_runtime::Repl;
use std::env;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    scripts: Vec<String>,
    batch_mode: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            path => config.scripts.push(path.to_string()),
        }
    }

    Ok(config)
}

/// Console logging to stderr. The session echoes warnings itself, so
/// the subscriber stays at errors unless `RUST_LOG` widens it.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("platine {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    init_tracing();

    // Create the shell
    let mut repl = Repl::new()?;

    // Run any specified scripts; QUIT inside a script ends the run
    for script in &config.scripts {
        if !repl.run_script(script)? {
            return Ok(());
        }
    }

    // If batch mode, exit now
    if config.batch_mode {
        return Ok(());
    }

    // If scripts already ran, suppress the banner
    if !config.scripts.is_empty() {
        repl = repl.without_banner();
    }

    repl.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mPlatine\x1b[0m - Scriptable schematic symbol editor

\x1b[1mUSAGE:\x1b[0m
    platine [OPTIONS] [SCRIPTS...]

\x1b[1mARGUMENTS:\x1b[0m
    [SCRIPTS...]    Command scripts to run before the shell starts

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    -b, --batch        Run the scripts and exit (no shell)

\x1b[1mEXAMPLES:\x1b[0m
    platine                      Start the interactive shell
    platine lib.scr              Run lib.scr, then edit interactively
    platine -b lib.scr           Run lib.scr and exit
    platine pins.scr wires.scr   Run multiple scripts in order

\x1b[1mSHELL COMMANDS:\x1b[0m
    EDIT 'name'          Open a symbol for editing
    PIN 'name' (x y)     Add a pin to the active symbol
    WIRE (x y) (x y)     Add wire segments
    NAME 'name'          Rename the active symbol
    GRID 0.05 inch       Change the grid pitch and unit
    UNDO / REDO          Walk the command journal
    SCRIPT path          Run a command script
    HELP                 Full command list
    Ctrl+D               Exit the shell
    Ctrl+C               Cancel current input

For more information, visit https://github.com/ndouglas/platine"
    );
}

//! Quine-McCluskey Boolean engine - command line interface
//!
//! Runs a command script (assignment / simplify / compare / table)
//! against the library interpreter and prints the results.

use clap::Parser;
use quine_logic::{Error, ErrorPolicy, Interpreter, InterpreterConfig};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::io::Read;
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(name = "quine")]
#[command(about = "Sum-of-products Boolean expression interpreter", long_about = None)]
#[command(version)]
struct Args {
    /// Input script file (reads stdin when omitted)
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Keep processing commands after an error instead of stopping
    #[arg(short = 'k', long = "keep-going")]
    keep_going: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,

    /// Silence all logging
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    quiet: bool,
}

fn main() {
    let args = Args::parse();

    let level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );

    let source = match &args.script {
        Some(path) => match std::fs::read_to_string(path) {
            Ok(source) => source,
            Err(err) => {
                eprintln!("Error reading script '{}': {}", path.display(), err);
                process::exit(1);
            }
        },
        None => {
            let mut source = String::new();
            if let Err(err) = std::io::stdin().read_to_string(&mut source) {
                eprintln!("Error reading stdin: {}", err);
                process::exit(1);
            }
            source
        }
    };

    let config = InterpreterConfig {
        error_policy: if args.keep_going {
            ErrorPolicy::Skip
        } else {
            ErrorPolicy::Abort
        },
    };
    let mut interp = Interpreter::with_config(config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match interp.run_script(&source, &mut out) {
        Ok(()) => {}
        Err(Error::Io(err)) => {
            eprintln!("Error writing output: {}", err);
            process::exit(1);
        }
        // Command errors were already reported on stdout
        Err(_) => process::exit(1),
    }
}

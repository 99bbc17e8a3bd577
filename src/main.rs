use std::fs;
use std::path::Path;

use symtab::config::CONFIG_FILE_NAME;
use symtab::{Run, RunError, TableConfig, run_demo, run_source};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    env_logger::init();

    let args = std::env::args().collect::<Vec<String>>();
    let program = args.first().map(String::as_str).unwrap_or("symtab");

    let mut config_path = None;
    let mut script = None;
    let mut rest = args.iter().skip(1);
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--version" | "-v" => {
                println!("symtab {}", VERSION);
                return;
            }
            "--help" | "-h" => {
                print_usage(program);
                return;
            }
            "--config" | "-c" => match rest.next() {
                Some(path) => config_path = Some(path.clone()),
                None => {
                    print_usage(program);
                    std::process::exit(1);
                }
            },
            _ if script.is_none() => script = Some(arg.clone()),
            _ => {
                print_usage(program);
                std::process::exit(1);
            }
        }
    }

    let Some(file) = script else {
        // No script: run the built-in demo
        report(run_demo(), "", None);
        return;
    };

    let source = match fs::read_to_string(&file) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: {}: {}", file, e);
            std::process::exit(1);
        }
    };

    let config = match load_config(config_path.as_deref(), &file) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    report(run_source(&source, &config), &source, Some(&file));
}

/// Explicit `--config`, else `symtab.toml` next to the script, else defaults
fn load_config(explicit: Option<&str>, script: &str) -> Result<TableConfig, RunError> {
    if let Some(path) = explicit {
        return Ok(TableConfig::load(path)?);
    }
    let beside = Path::new(script)
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(CONFIG_FILE_NAME);
    if beside.is_file() {
        Ok(TableConfig::load(beside)?)
    } else {
        Ok(TableConfig::default())
    }
}

fn report(result: Result<Run, RunError>, source: &str, file: Option<&str>) {
    match result {
        Ok(run) => {
            for line in &run.output {
                println!("{}", line);
            }
        }
        Err(e) => {
            eprintln!("{}", e.format_with_source_and_file(source, file));
            std::process::exit(1);
        }
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [--config <symtab.toml>] [script.sym]", program);
    eprintln!();
    eprintln!("Without a script, runs a short demo on a case-folding table.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --config     Table configuration file");
    eprintln!("  -h, --help       Print this help message");
    eprintln!("  -v, --version    Print version information");
}

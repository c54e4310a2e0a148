use std::env;
use std::path::PathBuf;
use std::process;

use sectioned::{config::Config, data, errors::SectionedResult, logging};

fn main() {
    if let Err(e) = try_main() {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn try_main() -> SectionedResult<()> {
    let config_path = parse_args();
    logging::init()?;

    let config = Config::load(config_path.as_deref())?;
    let theme = config.resolve_theme();
    sectioned::app::run(data::default_model(), theme)
}

fn parse_args() -> Option<PathBuf> {
    let args: Vec<String> = env::args().skip(1).collect();
    let mut args_iter = args.iter();

    while let Some(arg) = args_iter.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                process::exit(0);
            }
            "-V" | "--version" => {
                println!("sectioned {}", env!("CARGO_PKG_VERSION"));
                process::exit(0);
            }
            "-c" | "--config" => {
                let path = args_iter.next().unwrap_or_else(|| {
                    eprintln!("error: option '{}' requires an argument", arg);
                    process::exit(1);
                });
                return Some(PathBuf::from(path));
            }
            arg => {
                eprintln!("error: unknown option '{}'", arg);
                print_help();
                process::exit(1);
            }
        }
    }

    None
}

fn print_help() {
    println!("sectioned - A list of collapsible sections");
    println!();
    println!("USAGE:");
    println!("    sectioned [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --config <path>  Read colors from <path>");
    println!("    -h, --help           Print help information");
    println!("    -V, --version        Print version information");
    println!();
    println!("Set {}=debug to write a log file.", logging::LOG_ENV);
}

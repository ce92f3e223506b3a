use clap::Parser;
use tracing::{debug, error};

use shrmpl_conf::{ConfigStore, ValueKind};

/// Print values from a key:value config file
#[derive(Parser, Debug)]
#[command(name = "shrmpl-conf-cli", version)]
struct Args {
    /// Path to the config file
    config_file: String,

    /// Key to print. Without it every entry is printed.
    key: Option<String>,

    /// Type to convert the value to: str, int, int64, float32, float64, bool
    #[arg(long = "as", default_value = "str")]
    kind: ValueKind,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let config = match ConfigStore::load(&args.config_file) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let Some(key) = args.key else {
        let mut entries: Vec<(&str, &str)> = config.iter().collect();
        entries.sort();
        if entries.is_empty() {
            println!("(no keys)");
        }
        for (key, value) in entries {
            println!("{}: {}", key, value);
        }
        return;
    };

    debug!("Reading {} as {}", key, args.kind);
    let printed = match args.kind {
        ValueKind::Str => Ok(config.get(&key).to_string()),
        ValueKind::Int => config.get_int(&key).map(|v| v.to_string()),
        ValueKind::Int64 => config.get_int64(&key).map(|v| v.to_string()),
        ValueKind::Float32 => config.get_float32(&key).map(|v| v.to_string()),
        ValueKind::Float64 => config.get_float64(&key).map(|v| v.to_string()),
        ValueKind::Bool => config.get_bool(&key).map(|v| v.to_string()),
    };

    match printed {
        Ok(value) => println!("{}", value),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

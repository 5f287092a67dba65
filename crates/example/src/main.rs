//! Example tool-definition CLI.
//!
//! Prints the chat-completion `tools` array for the sample tools.
//!
//! # Usage
//!
//! ```bash
//! tooldef-demo [config.json] [manifest.json]
//! ```
//!
//! # Example
//!
//! ```bash
//! TOOLDEF_LOG=tooldef_schema=debug tooldef-demo ./config.json
//! ```

use example::logging::Logging;
use example::{describe_all, load_config};
use std::path::Path;
use std::process::ExitCode;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let (logging, format_error) = Logging::from_env();
    logging.init();
    if let Some(err) = format_error {
        tracing::warn!("{err}; using {:?}", logging.format());
    }

    let args: Vec<String> = std::env::args().collect();
    let config_path = args.get(1).map(Path::new);
    let manifest_path = args.get(2).map(Path::new);

    let config = match load_config(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = describe_all(&config, manifest_path)
        .map_err(|e| e.to_string())
        .and_then(|tools| serde_json::to_string_pretty(&tools).map_err(|e| e.to_string()));

    match output {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

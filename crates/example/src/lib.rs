//! Example tool-definition generator built with tooldef.
//!
//! Describes a handful of sample tools, a file toolset and any
//! functions listed in a JSON signature manifest, then prints the resulting
//! `tools` array.
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌──────────────┐
//! │ #[describe]  │──▶│               │   │              │
//! ├──────────────┤   │   Generator   │──▶│  tools JSON  │
//! │ manifest.json│──▶│               │   │              │
//! └──────────────┘   └───────▲───────┘   └──────────────┘
//!                            │
//!                      config.json
//! ```

pub mod logging;
pub mod tools;

use std::path::{Path, PathBuf};
use tooldef::prelude::*;

pub use tools::FileTools;

/// Errors raised while assembling the demo output.
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// A config or manifest file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The configuration file is not valid JSON.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
    /// The signature manifest is malformed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),
    /// A function could not be described.
    #[error(transparent)]
    Schema(#[from] SchemaError),
}

fn read(path: &Path) -> Result<String, DemoError> {
    std::fs::read_to_string(path).map_err(|source| DemoError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a generator configuration file, or the defaults when `path` is `None`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig, DemoError> {
    match path {
        Some(path) => Ok(GeneratorConfig::from_json(&read(path)?)?),
        None => Ok(GeneratorConfig::new()),
    }
}

/// Describes the sample functions, the file toolset and the optional manifest.
///
/// Method signatures are always described with the receiver skipped.
///
/// # Errors
///
/// Returns the first file, manifest or schema error encountered.
pub fn describe_all(
    config: &GeneratorConfig,
    manifest: Option<&Path>,
) -> Result<Vec<ToolDescriptor>, DemoError> {
    let generator = Generator::new(config.clone());
    let mut tools = generator.generate(tools::function_signatures())?;

    let methods = Generator::new(config.clone().with_ignore_first_param(true));
    tools.extend(methods.generate(FileTools::signatures())?);

    if let Some(path) = manifest {
        let signatures = load_manifest(&read(path)?)?;
        tools.extend(generator.generate(&signatures)?);
    }

    tracing::info!(tools = tools.len(), "described tools");
    Ok(tools)
}

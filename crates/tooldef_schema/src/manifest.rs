//! JSON signature manifests for functions defined outside Rust.
//!
//! ```json
//! {
//!   "name": "lookup",
//!   "doc": "Finds a record.",
//!   "returns": "string",
//!   "parameters": [
//!     { "name": "id", "type": "integer", "description": "Record key" },
//!     { "name": "raw", "type": "string" },
//!     { "name": "blob" }
//!   ]
//! }
//! ```
//!
//! A parameter with both `type` and `description` is described, one with only
//! `type` is bare, and one with neither is unannotated.

use crate::error::ManifestError;
use crate::reflect::{Annotation, FunctionSignature, HostType};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawParameter {
    name: String,
    #[serde(default, rename = "type")]
    ty: Option<HostType>,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSignature {
    name: String,
    #[serde(default)]
    doc: Option<String>,
    #[serde(default)]
    parameters: Vec<RawParameter>,
    #[serde(default)]
    returns: Option<HostType>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawManifest {
    One(RawSignature),
    Many(Vec<RawSignature>),
}

impl TryFrom<RawSignature> for FunctionSignature {
    type Error = ManifestError;

    fn try_from(raw: RawSignature) -> Result<Self, Self::Error> {
        let mut signature = FunctionSignature::new(raw.name.as_str());
        if let Some(doc) = raw.doc {
            signature = signature.with_doc(doc);
        }
        if let Some(returns) = raw.returns {
            signature = signature.with_return(returns);
        }

        for param in raw.parameters {
            let annotation = match (param.ty, param.description) {
                (None, None) => Annotation::Absent,
                (Some(ty), None) => Annotation::Bare(ty),
                (Some(ty), Some(description)) => Annotation::described(ty, description),
                (None, Some(_)) => {
                    return Err(ManifestError::DescriptionWithoutType {
                        function: raw.name,
                        parameter: param.name,
                    });
                }
            };
            signature = signature.with_parameter(param.name, annotation);
        }

        Ok(signature)
    }
}

/// Parses a manifest holding one signature object or an array of them.
///
/// # Errors
///
/// Returns [`ManifestError::SerializationError`] for malformed JSON and
/// [`ManifestError::DescriptionWithoutType`] for a described but untyped
/// parameter.
pub fn load_manifest(json: &str) -> Result<Vec<FunctionSignature>, ManifestError> {
    let raw = match serde_json::from_str::<RawManifest>(json)? {
        RawManifest::One(signature) => vec![signature],
        RawManifest::Many(signatures) => signatures,
    };

    let signatures = raw
        .into_iter()
        .map(FunctionSignature::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    tracing::debug!(signatures = signatures.len(), "loaded signature manifest");
    Ok(signatures)
}

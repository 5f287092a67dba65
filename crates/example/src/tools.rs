//! Sample tools described with `#[describe]` and `#[describe_methods]`.

use tooldef::prelude::*;

#[describe]
/// Count the words in a piece of text.
pub fn word_count(
    /// Text to count words in.
    text: String,
) -> String {
    text.split_whitespace().count().to_string()
}

#[describe]
/// Repeat text in upper case.
pub fn shout(
    /// Text to shout.
    text: &str,
    /// How many times to repeat it.
    times: u32,
) -> String {
    let loud = text.to_uppercase();
    vec![loud.as_str(); times as usize].join(" ")
}

/// File tools exposed to the model. Only their signatures are described;
/// the bodies just echo the request.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileTools;

#[describe_methods]
impl FileTools {
    #[describe]
    /// List files in a directory.
    pub fn list_files(
        &self,
        /// Directory path (relative to working directory).
        path: String,
    ) -> Result<String, String> {
        Ok(format!("list {path}"))
    }

    #[describe]
    /// Read the contents of a file.
    pub fn read_file(
        &self,
        /// File path (relative to working directory).
        path: String,
    ) -> Result<String, String> {
        Ok(format!("read {path}"))
    }

    #[describe]
    /// Write content to a file.
    pub fn write_file(
        &self,
        /// File path (relative to working directory).
        path: String,
        /// Content to write.
        content: String,
    ) -> Result<String, String> {
        Ok(format!("write {} bytes to {path}", content.len()))
    }
}

/// Signatures of the free-standing sample tools.
#[must_use]
pub fn function_signatures() -> Vec<&'static dyn Introspect> {
    vec![
        &WordCountSignature as &'static dyn Introspect,
        &ShoutSignature,
    ]
}

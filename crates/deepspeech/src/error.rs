use thiserror::Error;

/// Failure kinds surfaced by the binding.
///
/// Native status codes are not retained structurally; each variant carries a
/// human-readable message sourced from the native library's own
/// code-to-message table (plus the hex code for log correlation). Callers
/// branch on the variant, not on message content.
#[derive(Debug, Error)]
pub enum Error {
    /// Loading the model file failed: missing, corrupt, or incompatible
    /// with the linked native library version.
    #[error("model initialization failed: {0}")]
    Initialization(String),

    /// A configuration mutator was rejected, e.g. an invalid beam width or
    /// scorer hyperparameters set while no scorer is enabled.
    #[error("configuration rejected: {0}")]
    Configuration(String),

    /// One-shot transcription failed. Also covers a null result from the
    /// native call with no accompanying status code.
    #[error("inference failed: {0}")]
    Inference(String),

    /// Streaming decode failed. A null result with no accompanying status
    /// code also maps here; an empty transcription is a success, not this
    /// error.
    #[error("streaming decode failed: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

//! Safe Rust bindings for the Mozilla DeepSpeech speech-to-text library.
//!
//! The native library does the actual work (acoustic model inference,
//! beam-search decoding, language-model scoring); this crate marshals calls
//! and data across the FFI boundary and enforces the resource-ownership
//! rules the C API only documents:
//!
//! * a [`Model`] exclusively owns one native model handle and frees it on
//!   drop;
//! * a [`Stream`] borrows its `Model`, owns one native decoder state, and is
//!   consumed by exactly one terminal operation ([`Stream::finish`],
//!   [`Stream::finish_with_metadata`] or [`Stream::discard`]); a second
//!   terminal call does not compile;
//! * a [`Metadata`] result tree is freed exactly once on drop, and its
//!   transcript/token views cannot outlive it.
//!
//! All operations are synchronous, blocking calls into the native library.
//! None of the handle types are `Send` or `Sync`: the native library makes
//! no thread-safety promises, so parallel callers must use independent
//! models on separate threads.
//!
//! ```no_run
//! use deepspeech::Model;
//!
//! # fn run(samples: &[i16]) -> Result<(), deepspeech::Error> {
//! let model = Model::load("deepspeech-0.9.3-models.pbmm")?;
//! let text = model.speech_to_text(samples)?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

mod error;
mod marshal;
mod metadata;
mod model;
mod stream;

pub use error::{Error, Result};
pub use metadata::{CandidateTranscript, Metadata, TokenMetadata};
pub use model::Model;
pub use stream::Stream;

use deepspeech_sys as ds;

/// Returns the version of the linked native library as a SemVer string.
pub fn version() -> String {
    // DS_Version never returns null in any shipped build; fall back to an
    // empty string rather than trusting that.
    unsafe { marshal::take_native_string(ds::DS_Version()) }.unwrap_or_default()
}

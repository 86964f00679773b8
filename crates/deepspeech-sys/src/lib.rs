//! Raw FFI declarations for the DeepSpeech C API.
//!
//! Everything in this crate mirrors `deepspeech.h` from the native library
//! one-to-one; no behavior lives here. The safe wrapper is the `deepspeech`
//! crate.

#![allow(non_snake_case)]

use std::os::raw::{c_char, c_double, c_float, c_int, c_uint};

/// Opaque state of a loaded acoustic model.
#[repr(C)]
pub struct ModelState {
    _private: [u8; 0],
}

/// Opaque state of an in-progress streaming inference.
#[repr(C)]
pub struct StreamingState {
    _private: [u8; 0],
}

/// One decoded token with its timing information.
///
/// All fields are owned by the enclosing [`Metadata`] allocation and are
/// freed together by `DS_FreeMetadata`.
#[repr(C)]
pub struct TokenMetadata {
    /// NUL-terminated UTF-8 text of the token.
    pub text: *const c_char,
    /// Position of the token in units of 20ms frames.
    pub timestep: c_uint,
    /// Position of the token in seconds.
    pub start_time: c_float,
}

/// One candidate transcript with its tokens and confidence.
#[repr(C)]
pub struct CandidateTranscript {
    pub tokens: *const TokenMetadata,
    pub num_tokens: c_uint,
    /// Sum of the acoustic model logit values that produced this transcript.
    pub confidence: c_double,
}

/// Result tree returned by the `*WithMetadata` calls.
#[repr(C)]
pub struct Metadata {
    /// Candidate transcripts, ranked best first.
    pub transcripts: *const CandidateTranscript,
    pub num_transcripts: c_uint,
}

// Status codes returned by the fallible DS_* calls. The native library owns
// the code-to-message table; see DS_ErrorCodeToErrorMessage.
pub const DS_ERR_OK: c_int = 0x0000;
pub const DS_ERR_NO_MODEL: c_int = 0x1000;
pub const DS_ERR_INVALID_ALPHABET: c_int = 0x2000;
pub const DS_ERR_INVALID_SHAPE: c_int = 0x2001;
pub const DS_ERR_INVALID_SCORER: c_int = 0x2002;
pub const DS_ERR_MODEL_INCOMPATIBLE: c_int = 0x2003;
pub const DS_ERR_SCORER_NOT_ENABLED: c_int = 0x2004;
pub const DS_ERR_SCORER_UNREADABLE: c_int = 0x2005;
pub const DS_ERR_SCORER_INVALID_LM: c_int = 0x2006;
pub const DS_ERR_SCORER_NO_TRIE: c_int = 0x2007;
pub const DS_ERR_SCORER_INVALID_TRIE: c_int = 0x2008;
pub const DS_ERR_SCORER_VERSION_MISMATCH: c_int = 0x2009;
pub const DS_ERR_FAIL_INIT_MMAP: c_int = 0x3000;
pub const DS_ERR_FAIL_INIT_SESS: c_int = 0x3001;
pub const DS_ERR_FAIL_INTERPRETER: c_int = 0x3002;
pub const DS_ERR_FAIL_RUN_SESS: c_int = 0x3003;
pub const DS_ERR_FAIL_CREATE_STREAM: c_int = 0x3004;
pub const DS_ERR_FAIL_READ_PROTOBUF: c_int = 0x3005;
pub const DS_ERR_FAIL_CREATE_SESS: c_int = 0x3006;
pub const DS_ERR_FAIL_CREATE_MODEL: c_int = 0x3007;

extern "C" {
    pub fn DS_CreateModel(model_path: *const c_char, retval: *mut *mut ModelState) -> c_int;

    pub fn DS_FreeModel(ctx: *mut ModelState);

    pub fn DS_GetModelBeamWidth(ctx: *const ModelState) -> c_uint;

    pub fn DS_SetModelBeamWidth(ctx: *mut ModelState, beam_width: c_uint) -> c_int;

    pub fn DS_GetModelSampleRate(ctx: *const ModelState) -> c_int;

    pub fn DS_EnableExternalScorer(ctx: *mut ModelState, scorer_path: *const c_char) -> c_int;

    pub fn DS_DisableExternalScorer(ctx: *mut ModelState) -> c_int;

    pub fn DS_SetScorerAlphaBeta(ctx: *mut ModelState, alpha: c_float, beta: c_float) -> c_int;

    pub fn DS_SpeechToText(
        ctx: *mut ModelState,
        buffer: *const i16,
        buffer_size: c_uint,
    ) -> *mut c_char;

    pub fn DS_SpeechToTextWithMetadata(
        ctx: *mut ModelState,
        buffer: *const i16,
        buffer_size: c_uint,
        num_results: c_uint,
    ) -> *mut Metadata;

    pub fn DS_CreateStream(ctx: *mut ModelState, retval: *mut *mut StreamingState) -> c_int;

    pub fn DS_FeedAudioContent(sctx: *mut StreamingState, buffer: *const i16, buffer_size: c_uint);

    pub fn DS_IntermediateDecode(sctx: *const StreamingState) -> *mut c_char;

    pub fn DS_IntermediateDecodeWithMetadata(
        sctx: *const StreamingState,
        num_results: c_uint,
    ) -> *mut Metadata;

    pub fn DS_FinishStream(sctx: *mut StreamingState) -> *mut c_char;

    pub fn DS_FinishStreamWithMetadata(
        sctx: *mut StreamingState,
        num_results: c_uint,
    ) -> *mut Metadata;

    pub fn DS_FreeStream(sctx: *mut StreamingState);

    pub fn DS_FreeMetadata(m: *mut Metadata);

    pub fn DS_FreeString(s: *mut c_char);

    pub fn DS_Version() -> *mut c_char;

    pub fn DS_ErrorCodeToErrorMessage(error_code: c_int) -> *mut c_char;
}

use std::borrow::Cow;
use std::ffi::CStr;
use std::fmt;
use std::ptr::NonNull;
use std::slice;

use deepspeech_sys as ds;

/// Result tree of a `*_with_metadata` call: zero or more ranked candidate
/// transcripts, each with a confidence score and timed tokens.
///
/// The tree is allocated by the native library in one block; dropping the
/// `Metadata` frees the whole tree exactly once. Transcript and token views
/// borrow from this value, so they cannot be used after it is gone. The
/// tree shares no storage with the `Model` or `Stream` that produced it and
/// may outlive both.
pub struct Metadata {
    raw: NonNull<ds::Metadata>,
}

impl Metadata {
    /// # Safety
    ///
    /// `raw` must be null or a metadata tree allocated by the native
    /// library, with ownership transferring to the returned value.
    pub(crate) unsafe fn from_raw(raw: *mut ds::Metadata) -> Option<Metadata> {
        NonNull::new(raw).map(|raw| Metadata { raw })
    }

    /// Candidate transcripts ranked best-first. The slice length is at most
    /// the `max_results` requested from the producing call.
    pub fn transcripts(&self) -> &[CandidateTranscript] {
        let raw = unsafe { self.raw.as_ref() };
        if raw.transcripts.is_null() || raw.num_transcripts == 0 {
            return &[];
        }
        // CandidateTranscript is a transparent wrapper over the C struct.
        unsafe {
            slice::from_raw_parts(
                raw.transcripts as *const CandidateTranscript,
                raw.num_transcripts as usize,
            )
        }
    }
}

impl Drop for Metadata {
    fn drop(&mut self) {
        unsafe { ds::DS_FreeMetadata(self.raw.as_ptr()) }
    }
}

impl fmt::Debug for Metadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Metadata")
            .field("num_transcripts", &self.transcripts().len())
            .finish()
    }
}

/// One ranked transcript hypothesis.
#[repr(transparent)]
pub struct CandidateTranscript(ds::CandidateTranscript);

impl CandidateTranscript {
    /// Ordered tokens making up this transcript.
    pub fn tokens(&self) -> &[TokenMetadata] {
        if self.0.tokens.is_null() || self.0.num_tokens == 0 {
            return &[];
        }
        unsafe {
            slice::from_raw_parts(
                self.0.tokens as *const TokenMetadata,
                self.0.num_tokens as usize,
            )
        }
    }

    /// Approximated confidence: roughly the sum of acoustic-model logits
    /// over the timesteps that produced this transcript. Higher is better;
    /// only comparable across candidates of the same decode call.
    pub fn confidence(&self) -> f64 {
        self.0.confidence
    }

    /// The transcript text, i.e. all token texts concatenated.
    pub fn text(&self) -> String {
        self.tokens().iter().map(|t| t.text()).collect()
    }
}

impl fmt::Debug for CandidateTranscript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateTranscript")
            .field("text", &self.text())
            .field("confidence", &self.confidence())
            .field("num_tokens", &self.tokens().len())
            .finish()
    }
}

/// Smallest timed unit of decoded output: a character or sub-word fragment.
#[repr(transparent)]
pub struct TokenMetadata(ds::TokenMetadata);

impl TokenMetadata {
    /// Text of the token.
    pub fn text(&self) -> Cow<'_, str> {
        if self.0.text.is_null() {
            return Cow::Borrowed("");
        }
        unsafe { CStr::from_ptr(self.0.text) }.to_string_lossy()
    }

    /// Position of the token in units of 20ms frames from audio start.
    pub fn timestep(&self) -> u32 {
        self.0.timestep
    }

    /// Position of the token in seconds from audio start.
    pub fn start_time(&self) -> f32 {
        self.0.start_time
    }
}

impl fmt::Debug for TokenMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenMetadata")
            .field("text", &self.text())
            .field("timestep", &self.timestep())
            .field("start_time", &self.start_time())
            .finish()
    }
}

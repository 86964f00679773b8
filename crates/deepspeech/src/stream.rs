use std::marker::PhantomData;
use std::mem;
use std::os::raw::c_uint;
use std::ptr::NonNull;

use deepspeech_sys as ds;

use crate::error::{Error, Result};
use crate::marshal;
use crate::metadata::Metadata;
use crate::model::Model;

/// An in-progress streaming decode session.
///
/// Created from a [`Model`] via [`Model::create_stream`]; the borrow keeps
/// the model alive for as long as the stream exists. The stream accepts any
/// number of [`feed_audio`] and intermediate-decode calls, then ends with
/// exactly one terminal operation: [`finish`], [`finish_with_metadata`] or
/// [`discard`]. Each of those takes the stream by value, so a second
/// terminal call is a compile error rather than a dangling native pointer.
/// Dropping an unfinished stream discards it.
///
/// [`feed_audio`]: Stream::feed_audio
/// [`finish`]: Stream::finish
/// [`finish_with_metadata`]: Stream::finish_with_metadata
/// [`discard`]: Stream::discard
pub struct Stream<'m> {
    state: NonNull<ds::StreamingState>,
    model: PhantomData<&'m Model>,
}

impl<'m> Stream<'m> {
    /// # Safety
    ///
    /// `state` must be a live streaming state created from a model that
    /// outlives `'m`, and ownership of it must transfer to the returned
    /// value.
    pub(crate) unsafe fn from_parts(state: NonNull<ds::StreamingState>) -> Stream<'m> {
        Stream {
            state,
            model: PhantomData,
        }
    }

    /// Appends 16-bit mono samples to the decoder's audio accumulation.
    ///
    /// `buffer` is borrowed for the duration of this call only. The native
    /// layer reports no failures here; audio is buffered for a later
    /// decode.
    pub fn feed_audio(&mut self, buffer: &[i16]) {
        unsafe {
            ds::DS_FeedAudioContent(self.state.as_ptr(), buffer.as_ptr(), buffer.len() as c_uint)
        }
    }

    /// Decodes everything fed so far and returns the current transcript,
    /// leaving the stream open.
    ///
    /// Expensive: the native decoder is not incremental, so every call
    /// re-decodes from the start of the audio. Cost grows with the total
    /// audio fed, not with what is new; polling this in a tight loop is an
    /// anti-pattern.
    pub fn intermediate_decode(&self) -> Result<String> {
        let raw = unsafe { ds::DS_IntermediateDecode(self.state.as_ptr()) };
        unsafe { marshal::take_native_string(raw) }
            .ok_or_else(|| Error::Decode("intermediate decode returned no result".into()))
    }

    /// Like [`intermediate_decode`], returning up to `max_results` ranked
    /// candidates with per-token timing. Same cost profile.
    ///
    /// [`intermediate_decode`]: Stream::intermediate_decode
    pub fn intermediate_decode_with_metadata(&self, max_results: u32) -> Result<Metadata> {
        let raw =
            unsafe { ds::DS_IntermediateDecodeWithMetadata(self.state.as_ptr(), max_results) };
        unsafe { Metadata::from_raw(raw) }
            .ok_or_else(|| Error::Decode("intermediate decode returned no result".into()))
    }

    /// Performs the final decode and returns the transcript, consuming the
    /// stream.
    ///
    /// An empty transcript is a valid success (e.g. no audio was fed); only
    /// an absent result is an error.
    pub fn finish(self) -> Result<String> {
        let raw = unsafe { ds::DS_FinishStream(self.state.as_ptr()) };
        // The native call consumed the streaming state; skip Drop's free.
        mem::forget(self);
        unsafe { marshal::take_native_string(raw) }
            .ok_or_else(|| Error::Decode("final decode returned no result".into()))
    }

    /// Performs the final decode and returns up to `max_results` ranked
    /// candidates with per-token timing, consuming the stream.
    pub fn finish_with_metadata(self, max_results: u32) -> Result<Metadata> {
        let raw = unsafe { ds::DS_FinishStreamWithMetadata(self.state.as_ptr(), max_results) };
        mem::forget(self);
        unsafe { Metadata::from_raw(raw) }
            .ok_or_else(|| Error::Decode("final decode returned no result".into()))
    }

    /// Abandons the stream without performing the costly final decode.
    ///
    /// Equivalent to dropping the stream; provided so the choice reads
    /// explicitly at call sites.
    pub fn discard(self) {}
}

impl Drop for Stream<'_> {
    fn drop(&mut self) {
        unsafe { ds::DS_FreeStream(self.state.as_ptr()) }
    }
}

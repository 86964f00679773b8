use std::ffi::CString;
use std::os::raw::c_uint;
use std::path::Path;
use std::ptr::{self, NonNull};

use tracing::debug;

use deepspeech_sys as ds;

use crate::error::{Error, Result};
use crate::marshal;
use crate::metadata::Metadata;
use crate::stream::Stream;

/// A loaded, configured acoustic model.
///
/// The value exclusively owns its native model handle; the handle is freed
/// when the `Model` is dropped and is never exposed to callers. A single
/// model may be used to create any number of independent [`Stream`]s, each
/// of which snapshots the model's configuration at creation time.
///
/// `Model` is neither `Send` nor `Sync`: the native library does not
/// document thread-safety for concurrent use of one handle, so sharing a
/// model across threads requires external ownership transfer the caller
/// takes responsibility for.
pub struct Model {
    state: NonNull<ds::ModelState>,
}

impl Model {
    /// Loads model weights and metadata from `path`.
    ///
    /// The file format is defined entirely by the native library; it is not
    /// parsed here. Sample rate and default beam width come from the model
    /// file.
    pub fn load(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            return Err(Error::Initialization(format!(
                "model file '{}' does not exist",
                path
            )));
        }
        let c_path = CString::new(path).map_err(|_| {
            Error::Initialization(format!("model path '{}' contains a NUL byte", path))
        })?;

        let mut state = ptr::null_mut();
        let code = unsafe { ds::DS_CreateModel(c_path.as_ptr(), &mut state) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Initialization(marshal::describe_code(code)));
        }
        // A zero status with no state is undocumented; refuse to wrap it.
        let state = NonNull::new(state).ok_or_else(|| {
            Error::Initialization("native layer reported success without a model handle".into())
        })?;

        debug!(path, "model loaded");
        Ok(Model { state })
    }

    /// Returns the beam width currently in use: either the value baked into
    /// the model file or the last one passed to [`set_beam_width`].
    ///
    /// [`set_beam_width`]: Model::set_beam_width
    pub fn beam_width(&self) -> u32 {
        unsafe { ds::DS_GetModelBeamWidth(self.state.as_ptr()) }
    }

    /// Sets the beam width used by the decoder.
    ///
    /// A larger width trades decoding time for accuracy. Streams created
    /// before this call keep the width they were created with.
    pub fn set_beam_width(&self, width: u32) -> Result<()> {
        let code = unsafe { ds::DS_SetModelBeamWidth(self.state.as_ptr(), width as c_uint) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Configuration(marshal::describe_code(code)));
        }
        Ok(())
    }

    /// Returns the sample rate the model was trained on, in Hz.
    pub fn sample_rate(&self) -> u32 {
        unsafe { ds::DS_GetModelSampleRate(self.state.as_ptr()) as u32 }
    }

    /// Attaches an external language-model scorer from `path`.
    ///
    /// At most one scorer is active at a time; enabling while another is
    /// active is handled by the native library (replace or reject, per its
    /// version).
    pub fn enable_external_scorer(&self, path: &str) -> Result<()> {
        let c_path = CString::new(path).map_err(|_| {
            Error::Configuration(format!("scorer path '{}' contains a NUL byte", path))
        })?;
        let code = unsafe { ds::DS_EnableExternalScorer(self.state.as_ptr(), c_path.as_ptr()) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Configuration(marshal::describe_code(code)));
        }
        debug!(path, "external scorer enabled");
        Ok(())
    }

    /// Detaches the active external scorer, if any.
    pub fn disable_external_scorer(&self) -> Result<()> {
        let code = unsafe { ds::DS_DisableExternalScorer(self.state.as_ptr()) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Configuration(marshal::describe_code(code)));
        }
        Ok(())
    }

    /// Sets the scorer hyperparameters: `alpha` is the language-model
    /// weight, `beta` the word-insertion weight.
    ///
    /// Fails when no scorer is enabled.
    pub fn set_scorer_alpha_beta(&self, alpha: f32, beta: f32) -> Result<()> {
        let code = unsafe { ds::DS_SetScorerAlphaBeta(self.state.as_ptr(), alpha, beta) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Configuration(marshal::describe_code(code)));
        }
        Ok(())
    }

    /// Runs one-shot inference over `buffer` and returns the transcript.
    ///
    /// `buffer` holds 16-bit mono samples at [`sample_rate`]; it is borrowed
    /// for the duration of this call only and never copied. Blocks the
    /// calling thread for the full forward pass and decode, which can be
    /// seconds for long audio.
    ///
    /// [`sample_rate`]: Model::sample_rate
    pub fn speech_to_text(&self, buffer: &[i16]) -> Result<String> {
        let raw = unsafe {
            ds::DS_SpeechToText(
                self.state.as_ptr(),
                buffer.as_ptr(),
                buffer.len() as c_uint,
            )
        };
        unsafe { marshal::take_native_string(raw) }
            .ok_or_else(|| Error::Inference("speech-to-text returned no result".into()))
    }

    /// Like [`speech_to_text`], but returns up to `max_results` ranked
    /// candidate transcripts with per-token timing.
    ///
    /// [`speech_to_text`]: Model::speech_to_text
    pub fn speech_to_text_with_metadata(
        &self,
        buffer: &[i16],
        max_results: u32,
    ) -> Result<Metadata> {
        let raw = unsafe {
            ds::DS_SpeechToTextWithMetadata(
                self.state.as_ptr(),
                buffer.as_ptr(),
                buffer.len() as c_uint,
                max_results as c_uint,
            )
        };
        unsafe { Metadata::from_raw(raw) }
            .ok_or_else(|| Error::Inference("speech-to-text returned no result".into()))
    }

    /// Creates a new streaming inference state bound to this model's
    /// configuration as of this call.
    pub fn create_stream(&self) -> Result<Stream<'_>> {
        let mut state = ptr::null_mut();
        let code = unsafe { ds::DS_CreateStream(self.state.as_ptr(), &mut state) };
        if code != ds::DS_ERR_OK {
            return Err(Error::Initialization(marshal::describe_code(code)));
        }
        let state = NonNull::new(state).ok_or_else(|| {
            Error::Initialization("native layer reported success without a stream handle".into())
        })?;
        Ok(unsafe { Stream::from_parts(state) })
    }
}

impl Drop for Model {
    fn drop(&mut self) {
        unsafe { ds::DS_FreeModel(self.state.as_ptr()) }
    }
}

impl std::fmt::Debug for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model").finish_non_exhaustive()
    }
}

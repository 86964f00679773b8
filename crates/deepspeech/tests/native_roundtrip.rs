//! Exercises the binding against a real native library and trained model.
//!
//! These tests need libdeepspeech at link time plus model fixtures at run
//! time, so they are `#[ignore]`d by default. Point `DEEPSPEECH_TEST_MODEL`
//! at a model file, optionally `DEEPSPEECH_TEST_AUDIO` (16-bit mono WAV at
//! the model's rate) and `DEEPSPEECH_TEST_TRANSCRIPT` (its expected text),
//! then run `cargo test -- --ignored`.

use deepspeech::{Error, Model};

fn load_test_model() -> Model {
    let path = std::env::var("DEEPSPEECH_TEST_MODEL")
        .expect("DEEPSPEECH_TEST_MODEL must point at a model file");
    Model::load(&path).expect("loading test model")
}

fn load_test_audio(model: &Model) -> Vec<i16> {
    let path = std::env::var("DEEPSPEECH_TEST_AUDIO")
        .expect("DEEPSPEECH_TEST_AUDIO must point at a WAV fixture");
    let mut reader = hound::WavReader::open(&path).expect("opening WAV fixture");
    let spec = reader.spec();
    assert_eq!(spec.channels, 1, "fixture must be mono");
    assert_eq!(spec.bits_per_sample, 16, "fixture must be 16-bit");
    assert_eq!(
        spec.sample_rate,
        model.sample_rate(),
        "fixture must match the model's sample rate"
    );
    reader
        .samples::<i16>()
        .map(|s| s.expect("reading WAV sample"))
        .collect()
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn version_reports_a_semver_string() {
    let version = deepspeech::version();
    assert!(!version.is_empty());
    assert!(version.as_bytes()[0].is_ascii_digit());
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn sample_rate_is_positive() {
    let model = load_test_model();
    assert!(model.sample_rate() > 0);
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn beam_width_accepts_positive_values() {
    let model = load_test_model();
    let default_width = model.beam_width();
    assert!(default_width > 0, "model file should bake in a beam width");

    model.set_beam_width(500).expect("positive width");
    assert_eq!(model.beam_width(), 500);

    // Zero width is accepted or rejected depending on the native version;
    // either way the model must stay usable.
    let _ = model.set_beam_width(0);
    model
        .set_beam_width(default_width)
        .expect("restoring default width");
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn scorer_hyperparameters_require_a_scorer() {
    let model = load_test_model();
    let err = model.set_scorer_alpha_beta(0.93, 1.18).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    // Disabling when nothing is enabled is a native-layer decision; it must
    // not invalidate the model either way.
    let _ = model.disable_external_scorer();
    assert!(model.sample_rate() > 0);
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn unfed_stream_finishes_to_empty_transcript() {
    let model = load_test_model();
    let stream = model.create_stream().expect("creating stream");
    let text = stream.finish().expect("empty input is a valid success");
    assert_eq!(text, "");
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn golden_transcript_matches_exactly() {
    let expected = std::env::var("DEEPSPEECH_TEST_TRANSCRIPT")
        .expect("DEEPSPEECH_TEST_TRANSCRIPT must hold the fixture's text");
    let model = load_test_model();
    if let Ok(scorer) = std::env::var("DEEPSPEECH_TEST_SCORER") {
        model
            .enable_external_scorer(&scorer)
            .expect("enabling scorer fixture");
    }
    let audio = load_test_audio(&model);
    let text = model.speech_to_text(&audio).expect("one-shot transcription");
    assert_eq!(text, expected);
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn metadata_is_bounded_and_consistent_with_plain_text() {
    let model = load_test_model();
    let audio = load_test_audio(&model);

    let plain = model.speech_to_text(&audio).expect("one-shot transcription");
    let metadata = model
        .speech_to_text_with_metadata(&audio, 1)
        .expect("metadata transcription");

    let transcripts = metadata.transcripts();
    assert!(transcripts.len() <= 1);
    let best = transcripts.first().expect("at least one candidate");
    assert_eq!(best.text(), plain);

    // Tokens arrive in time order.
    let steps: Vec<u32> = best.tokens().iter().map(|t| t.timestep()).collect();
    assert!(steps.windows(2).all(|w| w[0] <= w[1]));
    let starts: Vec<f32> = best.tokens().iter().map(|t| t.start_time()).collect();
    assert!(starts.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn streaming_final_decode_matches_one_shot() {
    let model = load_test_model();
    let audio = load_test_audio(&model);
    let plain = model.speech_to_text(&audio).expect("one-shot transcription");

    let mut stream = model.create_stream().expect("creating stream");
    for chunk in audio.chunks(4096) {
        stream.feed_audio(chunk);
    }
    // Intermediate decode re-reads everything fed so far and leaves the
    // stream open; its hypothesis may still differ from the final one.
    stream.intermediate_decode().expect("intermediate decode");

    let final_text = stream.finish().expect("final decode");
    assert_eq!(final_text, plain);
}

#[test]
#[ignore = "requires libdeepspeech and model fixtures"]
fn one_model_serves_multiple_streams() {
    let model = load_test_model();
    let audio = load_test_audio(&model);

    let mut kept = model.create_stream().expect("first stream");
    let mut abandoned = model.create_stream().expect("second stream");

    for chunk in audio.chunks(4096) {
        kept.feed_audio(chunk);
        abandoned.feed_audio(chunk);
    }
    abandoned.discard();

    let text = kept.finish().expect("final decode");
    assert_eq!(text, model.speech_to_text(&audio).expect("one-shot"));
}

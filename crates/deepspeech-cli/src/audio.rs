//! WAV input handling for the demo tool.

use std::path::Path;

use anyhow::{bail, Context, Result};
use tracing::warn;

/// Reads a 16-bit mono WAV file into raw samples.
///
/// The file's sample rate is checked against `expected_rate`; a mismatch
/// logs a warning and proceeds, since off-rate audio still decodes, just
/// badly.
pub fn read_wav_samples(path: &Path, expected_rate: u32) -> Result<Vec<i16>> {
    let mut reader =
        hound::WavReader::open(path).with_context(|| format!("opening {}", path.display()))?;
    let spec = reader.spec();

    if spec.channels != 1 {
        bail!(
            "{}: expected mono audio, got {} channels",
            path.display(),
            spec.channels
        );
    }
    if spec.bits_per_sample != 16 || spec.sample_format != hound::SampleFormat::Int {
        bail!(
            "{}: expected 16-bit integer samples, got {}-bit {:?}",
            path.display(),
            spec.bits_per_sample,
            spec.sample_format
        );
    }
    if spec.sample_rate != expected_rate {
        warn!(
            file_rate = spec.sample_rate,
            expected_rate, "sample rate differs from the model's; quality may suffer"
        );
    }

    reader
        .samples::<i16>()
        .collect::<Result<Vec<_>, _>>()
        .with_context(|| format!("reading samples from {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hound::{SampleFormat, WavSpec, WavWriter};

    fn write_wav(path: &Path, channels: u16, rate: u32, samples: &[i16]) {
        let spec = WavSpec {
            channels,
            sample_rate: rate,
            bits_per_sample: 16,
            sample_format: SampleFormat::Int,
        };
        let mut writer = WavWriter::create(path, spec).unwrap();
        for &s in samples {
            writer.write_sample(s).unwrap();
        }
        writer.finalize().unwrap();
    }

    #[test]
    fn reads_mono_16bit_samples_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ramp.wav");
        let samples: Vec<i16> = (0..64).map(|i| i * 128).collect();
        write_wav(&path, 1, 16_000, &samples);

        let read = read_wav_samples(&path, 16_000).unwrap();
        assert_eq!(read, samples);
    }

    #[test]
    fn rejects_stereo_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stereo.wav");
        write_wav(&path, 2, 16_000, &[0; 64]);

        let err = read_wav_samples(&path, 16_000).unwrap_err();
        assert!(err.to_string().contains("mono"));
    }

    #[test]
    fn rate_mismatch_warns_but_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("slow.wav");
        write_wav(&path, 1, 8_000, &[0; 32]);

        assert_eq!(read_wav_samples(&path, 16_000).unwrap().len(), 32);
    }

    #[test]
    fn missing_file_reports_its_path() {
        let err = read_wav_samples(Path::new("/nonexistent/audio.wav"), 16_000).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/audio.wav"));
    }
}

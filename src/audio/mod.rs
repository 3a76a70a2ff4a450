//! Audio output.

mod wav;

pub use wav::WavWriter;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{AudioError, AudioWriter};
    use tempfile::TempDir;

    #[test]
    fn test_wav_writer_writes_header_and_samples() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.wav");
        let samples = vec![0i16, 1000, -1000, i16::MAX, i16::MIN];

        WavWriter::new().write(&path, &samples, 22050).unwrap();

        let mut reader = hound::WavReader::open(&path).unwrap();
        let spec = reader.spec();
        assert_eq!(spec.channels, 1);
        assert_eq!(spec.sample_rate, 22050);
        assert_eq!(spec.bits_per_sample, 16);
        assert_eq!(spec.sample_format, hound::SampleFormat::Int);

        let read: Vec<i16> = reader.samples::<i16>().map(|s| s.unwrap()).collect();
        assert_eq!(read, samples);
    }

    #[test]
    fn test_wav_writer_uses_given_sample_rate() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.wav");

        WavWriter::new().write(&path, &[0i16; 16], 16000).unwrap();

        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 16000);
        assert_eq!(reader.duration(), 16);
    }

    #[test]
    fn test_wav_writer_non_wav_extension_still_writes_wav() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.flac");

        WavWriter::new().write(&path, &[0i16; 8], 22050).unwrap();

        assert!(!WavWriter::is_wav_path(&path));
        let reader = hound::WavReader::open(&path).unwrap();
        assert_eq!(reader.spec().sample_rate, 22050);
    }

    #[test]
    fn test_is_wav_path() {
        use std::path::Path;

        assert!(WavWriter::is_wav_path(Path::new("out.wav")));
        assert!(WavWriter::is_wav_path(Path::new("OUT.WAV")));
        assert!(!WavWriter::is_wav_path(Path::new("out.flac")));
        assert!(!WavWriter::is_wav_path(Path::new("out")));
    }

    #[test]
    fn test_wav_writer_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.wav");

        let err = WavWriter::new().write(&path, &[0i16; 4], 22050).unwrap_err();

        assert!(matches!(err, AudioError::Io { .. }));
    }
}

//! Text to phoneme conversion and phoneme-id encoding.

use std::collections::HashMap;
use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;
use unicode_normalization::UnicodeNormalization;

use super::config::{PhonemeType, PiperConfig};
use crate::engine::VoiceError;

const BOS: &str = "^";
const EOS: &str = "$";
const PAD: &str = "_";

/// espeak-ng executable used for IPA phonemization.
const ESPEAK_BIN: &str = "espeak-ng";

/// Convert `text` into sentences of phonemes according to the voice config.
pub fn phonemize(text: &str, config: &PiperConfig) -> Result<Vec<Vec<char>>, VoiceError> {
    match config.phoneme_type {
        PhonemeType::Text => Ok(vec![text.nfd().collect()]),
        PhonemeType::Espeak => {
            let ipa = espeak_ipa(text, &config.espeak.voice)?;
            Ok(split_sentences(&ipa))
        }
    }
}

/// One sentence per non-empty line of espeak-ng output.
pub fn split_sentences(ipa: &str) -> Vec<Vec<char>> {
    ipa.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().collect())
        .collect()
}

fn espeak_ipa(text: &str, voice: &str) -> Result<String, VoiceError> {
    let mut child = Command::new(ESPEAK_BIN)
        .args(["-q", "--ipa", "--stdin", "-v", voice])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| VoiceError::Phonemize(format!("failed to run {ESPEAK_BIN}: {e}")))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| VoiceError::Phonemize(e.to_string()))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| VoiceError::Phonemize(e.to_string()))?;

    if !output.status.success() {
        return Err(VoiceError::Phonemize(format!(
            "{ESPEAK_BIN} exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        )));
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// Encode phonemes as model input ids.
///
/// Layout: `^`, pad, then each phoneme followed by pad, then `$`.
/// Phonemes missing from the map are skipped.
pub fn phoneme_ids(phonemes: &[char], id_map: &HashMap<String, Vec<i64>>) -> Vec<i64> {
    let lookup = |key: &str| id_map.get(key).map(Vec::as_slice).unwrap_or_default();
    let pad = lookup(PAD);

    let mut ids = Vec::with_capacity(phonemes.len() * 2 + 3);
    ids.extend_from_slice(lookup(BOS));
    ids.extend_from_slice(pad);

    let mut key = String::with_capacity(4);
    for phoneme in phonemes {
        key.clear();
        key.push(*phoneme);
        match id_map.get(&key) {
            Some(phoneme_ids) => {
                ids.extend_from_slice(phoneme_ids);
                ids.extend_from_slice(pad);
            }
            None => debug!(phoneme = %phoneme, "phoneme not in id map, skipping"),
        }
    }

    ids.extend_from_slice(lookup(EOS));
    ids
}

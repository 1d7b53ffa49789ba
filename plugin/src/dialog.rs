use std::path::{Path, PathBuf};

use rand::seq::SliceRandom;
use serde_json::json;

use crate::bus::{BusHandle, BusMessage};
use crate::config::Config;
use crate::error::PluginError;

/// Load the candidate utterances for a dialog file.
///
/// Lines that are blank or start with `#` are comments, not utterances. A
/// missing file is an error for the caller to deal with, never a silent skip.
pub fn load_dialog(path: &Path) -> Result<Vec<String>, PluginError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PluginError::DialogRead {
        path: path.to_path_buf(),
        source,
    })?;

    let utterances: Vec<String> = contents
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();

    if utterances.is_empty() {
        return Err(PluginError::DialogEmpty {
            path: path.to_path_buf(),
        });
    }
    Ok(utterances)
}

fn dialog_path(config: &Config, key: &str) -> PathBuf {
    config
        .locale_dir
        .join(&config.lang)
        .join(format!("{key}.dialog"))
}

/// Speak a random sentence from a dialog file.
///
/// `key` names the file, e.g. "debug_wifi_error" speaks from
/// `locale/en-us/debug_wifi_error.dialog`.
pub fn speak_dialog(
    bus: &BusHandle,
    config: &Config,
    skill_id: &str,
    key: &str,
) -> Result<(), PluginError> {
    let path = dialog_path(config, key);
    let utterances = load_dialog(&path)?;
    let utterance = utterances
        .choose(&mut rand::thread_rng())
        .cloned()
        .unwrap_or_default();

    bus.emit(BusMessage::new(
        "speak",
        json!({
            "utterance": utterance,
            "expect_response": false,
            "meta": { "dialog": key, "skill": skill_id },
            "lang": config.lang,
        }),
    ));
    Ok(())
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub show_banner: bool,
    /// Default seed; `--seed` wins when both are set.
    pub seed: Option<u64>,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            show_banner: true,
            seed: None,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    let mut base = dirs::config_dir().or_else(dirs::data_dir)?;
    base.push("LoadoutRoulette");
    base.push("console.json");
    Some(base)
}

fn parse(data: &str) -> io::Result<ConsoleConfig> {
    serde_json::from_str(data).map_err(io::Error::from)
}

/// Read the console config.
///
/// A path given on the command line must exist and parse. The default
/// location is best effort: a missing file is created with defaults and
/// a broken one is ignored.
pub fn load(explicit: Option<&Path>) -> io::Result<ConsoleConfig> {
    if let Some(path) = explicit {
        let data = fs::read_to_string(path)?;
        return parse(&data);
    }

    let Some(path) = config_path() else {
        return Ok(ConsoleConfig::default());
    };

    match fs::read_to_string(&path) {
        Ok(data) => Ok(parse(&data).unwrap_or_else(|err| {
            warn!("ignoring malformed config {}: {err}", path.display());
            ConsoleConfig::default()
        })),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            let cfg = ConsoleConfig::default();
            save(&path, &cfg);
            Ok(cfg)
        }
        Err(err) => {
            warn!("could not read config {}: {err}", path.display());
            Ok(ConsoleConfig::default())
        }
    }
}

pub fn save(path: &Path, cfg: &ConsoleConfig) {
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    match serde_json::to_string_pretty(cfg) {
        Ok(data) => match fs::write(path, data) {
            Ok(()) => debug!("wrote default config to {}", path.display()),
            Err(err) => warn!("could not write config {}: {err}", path.display()),
        },
        Err(err) => warn!("could not serialise config: {err}"),
    }
}

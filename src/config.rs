use crate::error::{Result, ShowcaseError};
use crate::types::config::ShowcaseConfig;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".showcase/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/showcase-scores/config.toml";

pub fn load_config(root: &Path) -> Result<Option<ShowcaseConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

/// Merges the global, repository and local layers, later layers winning key by
/// key. Only a repository `showcase.toml` switches configuration on; the other
/// layers are optional overlays.
pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<ShowcaseConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let local_path = root.join(DEFAULT_LOCAL_FILE);
    let layers = global_path
        .into_iter()
        .chain([repo_path.as_path(), local_path.as_path()])
        .filter(|path| path.exists());

    let mut merged = Value::Table(Map::new());
    for path in layers {
        tracing::debug!(path = %path.display(), "applying config layer");
        overlay(&mut merged, parse_layer(path)?);
    }

    let cfg = ShowcaseConfig::deserialize(merged)
        .map_err(|e| ShowcaseError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn parse_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| ShowcaseError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Tables merge recursively; any other value replaces what was there.
fn overlay(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Table(base_table), Value::Table(layer_table)) => {
            for (key, value) in layer_table {
                match base_table.get_mut(&key) {
                    Some(slot) => overlay(slot, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

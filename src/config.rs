use std::{collections::HashMap, env, fs, path::Path, path::PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::menu::Capabilities;

pub const CONFIG_ENV: &str = "MENUCONF_CONFIG";

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub capabilities: CapabilityConfig,

    /// Localization overrides: table name -> title key -> text.
    #[serde(default)]
    pub strings: HashMap<String, HashMap<String, String>>,
}

/// Capability switches; unset entries fall through to the next layer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CapabilityConfig {
    #[serde(default)]
    pub private_browsing: Option<bool>,
    #[serde(default)]
    pub desktop_toggle: Option<bool>,
}

impl CapabilityConfig {
    fn apply(&self, caps: &mut Capabilities) {
        if let Some(v) = self.private_browsing {
            caps.private_browsing = v;
        }
        if let Some(v) = self.desktop_toggle {
            caps.desktop_toggle = v;
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub capabilities: Capabilities,
    pub strings: HashMap<String, HashMap<String, String>>,
}

pub fn load_optional() -> Result<Option<Config>> {
    let Some(path) = resolve_config_path() else {
        return Ok(None);
    };
    if !path.exists() {
        debug!(path = %path.display(), "no config file");
        return Ok(None);
    }
    load_from(&path).map(Some)
}

pub fn load_from(path: &Path) -> Result<Config> {
    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let cfg: Config =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    debug!(path = %path.display(), "loaded config");
    Ok(cfg)
}

pub fn resolve_config_path() -> Option<PathBuf> {
    if let Ok(p) = env::var(CONFIG_ENV) {
        if !p.trim().is_empty() {
            return Some(PathBuf::from(p));
        }
    }

    let local = PathBuf::from("menuconf.json");
    if local.exists() {
        return Some(local);
    }

    if let Some(appdata) = env::var_os("APPDATA") {
        return Some(PathBuf::from(appdata).join("menuconf").join("config.json"));
    }

    if let Some(home) = env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config").join("menuconf").join("config.json"));
    }

    None
}

fn require_config_path() -> Result<PathBuf> {
    resolve_config_path().ok_or_else(|| {
        anyhow!("No config path available (set {CONFIG_ENV} or ensure APPDATA/HOME is present)")
    })
}

pub fn ensure_config_file_exists() -> Result<PathBuf> {
    let path = require_config_path()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }

    if !path.exists() {
        let template = serde_json::json!({
            "capabilities": {
                "private_browsing": true,
                "desktop_toggle": true
            },
            "strings": {}
        });
        let mut s = serde_json::to_string_pretty(&template).context("serialize config template")?;
        s.push('\n');
        fs::write(&path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    }

    Ok(path)
}

pub const CAPABILITY_NAMES: [&str; 2] = ["private_browsing", "desktop_toggle"];

/// Flips one capability in the config file, leaving any other keys alone.
pub fn patch_capability(name: &str, enabled: bool) -> Result<PathBuf> {
    let path = require_config_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create config dir {}", parent.display()))?;
    }
    patch_capability_at(&path, name, enabled)?;
    Ok(path)
}

pub fn patch_capability_at(path: &Path, name: &str, enabled: bool) -> Result<()> {
    if !CAPABILITY_NAMES.contains(&name) {
        bail!(
            "Unknown capability '{name}'. Known capabilities: {}",
            CAPABILITY_NAMES.join(", ")
        );
    }

    let mut root = read_json_or_empty_object(path)?;
    let obj = root
        .as_object_mut()
        .ok_or_else(|| anyhow!("config root must be a JSON object"))?;

    let caps = obj
        .entry("capabilities")
        .or_insert_with(|| Value::Object(Default::default()))
        .as_object_mut()
        .ok_or_else(|| anyhow!("\"capabilities\" must be a JSON object"))?;
    caps.insert(name.to_string(), Value::Bool(enabled));

    let mut s = serde_json::to_string_pretty(&root).context("serialize config")?;
    s.push('\n');
    fs::write(path, s.as_bytes()).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

fn read_json_or_empty_object(path: &Path) -> Result<Value> {
    if !path.exists() {
        return Ok(Value::Object(Default::default()));
    }

    let bytes = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
    let v: Value =
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;
    Ok(v)
}

/// Layers built-in defaults, then the config file, then command-line overrides.
pub fn resolve(config: Option<&Config>, overrides: CapabilityConfig) -> ResolvedConfig {
    let mut capabilities = Capabilities::default();
    let mut strings = HashMap::new();

    if let Some(cfg) = config {
        cfg.capabilities.apply(&mut capabilities);
        strings.clone_from(&cfg.strings);
    }
    overrides.apply(&mut capabilities);

    ResolvedConfig {
        capabilities,
        strings,
    }
}

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::models::{PolicyVerdict, ScanStatus};

/// Policy key used for unrecognized text and directories without a license file.
pub const UNKNOWN_KEY: &str = "unknown";
/// Policy key used for directories holding several license files.
pub const AMBIGUOUS_KEY: &str = "ambiguous";

/// Root configuration structure, deserialized from `.license-guess/config.toml`.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// License policy rules.
    pub policy: PolicyConfig,
}

/// Defines how scan outcomes are judged.
#[derive(Debug, Deserialize)]
pub struct PolicyConfig {
    /// Verdict applied to any license not explicitly listed in `licenses`.
    /// Defaults to `warn`.
    #[serde(default = "default_policy_action")]
    pub default: PolicyAction,
    /// Per-license overrides keyed by catalog identifier (e.g. `"MIT"`,
    /// `"GPL-3.0"`), plus the special keys `unknown` and `ambiguous`.
    #[serde(default)]
    pub licenses: HashMap<String, PolicyAction>,
}

fn default_policy_action() -> PolicyAction {
    PolicyAction::Warn
}

/// The action to take when a scan outcome matches a policy rule.
#[derive(Debug, Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum PolicyAction {
    Pass,
    Warn,
    /// The CLI exits with code 1.
    Error,
}

impl PolicyAction {
    pub fn to_verdict(self) -> PolicyVerdict {
        match self {
            PolicyAction::Pass => PolicyVerdict::Pass,
            PolicyAction::Warn => PolicyVerdict::Warn,
            PolicyAction::Error => PolicyVerdict::Error,
        }
    }
}

impl Default for Config {
    /// Built-in policy used when no config file is found.
    ///
    /// Permissive licenses pass, weak-copyleft licenses and unidentified
    /// projects warn, GPL-family licenses and ambiguous directories error.
    fn default() -> Self {
        let mut licenses = HashMap::new();
        for id in ["MIT", "BSD-3-Clause", "BSD-2-Clause", "ISC", "Apache-2.0", "Unlicense"] {
            licenses.insert(id.to_string(), PolicyAction::Pass);
        }
        for id in ["MPL-2.0", "LGPL-3.0"] {
            licenses.insert(id.to_string(), PolicyAction::Warn);
        }
        for id in ["GPL-2.0", "GPL-3.0", "AGPL-3.0"] {
            licenses.insert(id.to_string(), PolicyAction::Error);
        }
        licenses.insert(UNKNOWN_KEY.to_string(), PolicyAction::Warn);
        licenses.insert(AMBIGUOUS_KEY.to_string(), PolicyAction::Error);

        Config {
            policy: PolicyConfig {
                default: PolicyAction::Warn,
                licenses,
            },
        }
    }
}

/// Load the policy configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.license-guess/config.toml`
/// 3. `~/.config/license-guess/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".license-guess").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("license-guess")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    debug!("no config file found, using built-in policy");
    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    debug!(path = %path.display(), "loading config");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

/// Determine the verdict for one scan outcome.
///
/// Unreadable paths always error; they are not a policy question.
pub fn apply_policy(config: &Config, status: ScanStatus, license_type: Option<&str>) -> PolicyVerdict {
    let key = match status {
        ScanStatus::Identified => license_type.unwrap_or(UNKNOWN_KEY),
        ScanStatus::Unrecognized | ScanStatus::Missing => UNKNOWN_KEY,
        ScanStatus::Ambiguous => AMBIGUOUS_KEY,
        ScanStatus::Unreadable => return PolicyVerdict::Error,
    };

    config
        .policy
        .licenses
        .get(key)
        .copied()
        .unwrap_or(config.policy.default)
        .to_verdict()
}

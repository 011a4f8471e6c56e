//! Generator settings.
//!
//! Settings are persisted by the project generator in the Yeoman-compatible
//! `.yo-rc.json` store and are only ever read here. Resolution order (lowest
//! to highest priority):
//!
//! 1. Built-in defaults (`USE_REQUIRE_SYNTAX = false`, `TEST_FRAMEWORK = none`)
//! 2. `.yo-rc.json`, under the `generator-ko` namespace
//! 3. Environment variables (`KOGEN_USE_REQUIRE_SYNTAX`, `KOGEN_TEST_FRAMEWORK`)

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

/// File name of the persisted settings store.
pub const STORE_FILE: &str = ".yo-rc.json";

/// Namespace inside the store that holds the generator's settings.
pub const STORE_NAMESPACE: &str = "generator-ko";

pub const USE_REQUIRE_SYNTAX: &str = "USE_REQUIRE_SYNTAX";
pub const TEST_FRAMEWORK: &str = "TEST_FRAMEWORK";

const ENV_PREFIX: &str = "KOGEN_";

/// Error type for loading generator settings.
#[derive(Debug)]
pub enum ConfigError {
    /// The store file could not be read or is not valid JSON.
    Load(String),
    /// A setting holds a value of the wrong type.
    TypeMismatch { key: String, expected: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Config load error: {msg}"),
            ConfigError::TypeMismatch { key, expected } => {
                write!(f, "Config type mismatch for '{key}': expected {expected}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Test framework the project was set up with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TestFramework {
    #[default]
    None,
    Mocha,
    Tape,
    /// Any value the generator has no template flavor for.
    Other(String),
}

impl TestFramework {
    pub fn parse(value: &str) -> Self {
        match value {
            "none" => TestFramework::None,
            "mocha" => TestFramework::Mocha,
            "tape" => TestFramework::Tape,
            other => TestFramework::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TestFramework::None => "none",
            TestFramework::Mocha => "mocha",
            TestFramework::Tape => "tape",
            TestFramework::Other(name) => name,
        }
    }

    /// Whether a test module is generated for non-template-only views.
    pub fn writes_tests(&self) -> bool {
        !matches!(self, TestFramework::None)
    }
}

impl std::fmt::Display for TestFramework {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable settings passed explicitly into every generation step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// `true` selects the CommonJS dialect (`require` / `module.exports`),
    /// `false` the ES module dialect (`import` / `export default`).
    pub use_require_syntax: bool,
    pub test_framework: TestFramework,
}

/// Where a resolved setting came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Default,
    Store,
    Env,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Origin::Default => f.write_str("default"),
            Origin::Store => f.write_str(STORE_FILE),
            Origin::Env => f.write_str("environment"),
        }
    }
}

/// A [`GeneratorConfig`] together with the origin of each setting.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub config: GeneratorConfig,
    pub use_require_syntax_origin: Origin,
    pub test_framework_origin: Origin,
}

#[derive(Debug, Default, Deserialize)]
struct StoredSettings {
    #[serde(rename = "USE_REQUIRE_SYNTAX")]
    use_require_syntax: Option<serde_json::Value>,
    #[serde(rename = "TEST_FRAMEWORK")]
    test_framework: Option<serde_json::Value>,
}

impl GeneratorConfig {
    /// Load settings for the project rooted at `project_dir`, overlaying the
    /// process environment.
    pub fn load(project_dir: &Path) -> Result<ResolvedConfig, ConfigError> {
        Self::load_with_env(project_dir, |key| std::env::var(key).ok())
    }

    /// Load settings with a custom environment lookup.
    pub fn load_with_env(
        project_dir: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let store_path = project_dir.join(STORE_FILE);
        let stored = if store_path.exists() {
            let content = std::fs::read_to_string(&store_path)
                .map_err(|e| ConfigError::Load(format!("{}: {e}", store_path.display())))?;
            parse_store(&content)?
        } else {
            tracing::debug!(path = %store_path.display(), "no settings store, using defaults");
            StoredSettings::default()
        };

        let mut resolved = ResolvedConfig {
            config: GeneratorConfig::default(),
            use_require_syntax_origin: Origin::Default,
            test_framework_origin: Origin::Default,
        };

        if let Some(value) = stored.use_require_syntax {
            resolved.config.use_require_syntax = match value {
                serde_json::Value::Bool(b) => b,
                serde_json::Value::Null => false,
                _ => {
                    return Err(ConfigError::TypeMismatch {
                        key: USE_REQUIRE_SYNTAX.to_string(),
                        expected: "bool",
                    })
                }
            };
            resolved.use_require_syntax_origin = Origin::Store;
        }

        if let Some(value) = stored.test_framework {
            resolved.config.test_framework = match value {
                serde_json::Value::String(s) => TestFramework::parse(&s),
                serde_json::Value::Null => TestFramework::None,
                _ => {
                    return Err(ConfigError::TypeMismatch {
                        key: TEST_FRAMEWORK.to_string(),
                        expected: "string",
                    })
                }
            };
            resolved.test_framework_origin = Origin::Store;
        }

        let env_key = format!("{ENV_PREFIX}{USE_REQUIRE_SYNTAX}");
        if let Some(raw) = env(&env_key) {
            resolved.config.use_require_syntax =
                parse_bool(&raw).ok_or(ConfigError::TypeMismatch {
                    key: env_key,
                    expected: "bool",
                })?;
            resolved.use_require_syntax_origin = Origin::Env;
        }

        // an empty variable counts as unset
        let framework = env(&format!("{ENV_PREFIX}{TEST_FRAMEWORK}"))
            .filter(|raw| !raw.trim().is_empty());
        if let Some(raw) = framework {
            resolved.config.test_framework = TestFramework::parse(raw.trim());
            resolved.test_framework_origin = Origin::Env;
        }

        if let TestFramework::Other(name) = &resolved.config.test_framework {
            tracing::warn!(framework = %name, "unknown test framework, test files get no framework import");
        }

        Ok(resolved)
    }
}

fn parse_store(content: &str) -> Result<StoredSettings, ConfigError> {
    let mut root: HashMap<String, serde_json::Value> =
        serde_json::from_str(content).map_err(|e| ConfigError::Load(e.to_string()))?;
    match root.remove(STORE_NAMESPACE) {
        Some(section) => {
            serde_json::from_value(section).map_err(|e| ConfigError::Load(e.to_string()))
        }
        None => Ok(StoredSettings::default()),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

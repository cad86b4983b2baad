use crate::error::{Result, ScoreError};
use crate::types::config::ScoreConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const PROJECT_FILE: &str = "mediascore.toml";
pub const LOCAL_FILE: &str = ".mediascore/local.toml";
/// Relative to `$HOME`.
pub const USER_FILE: &str = ".config/mediascore/config.toml";

/// Report defaults, log level and weight overrides for a scoring root.
pub fn load_config(root: &Path) -> Result<ScoreConfig> {
    let user = std::env::var_os("HOME").map(|home| PathBuf::from(home).join(USER_FILE));
    load_layers(&config_layers(root, user.as_deref()))
}

/// Existing settings files for `root`, weakest first. Empty unless the root
/// has its own `mediascore.toml`.
pub(crate) fn config_layers(root: &Path, user: Option<&Path>) -> Vec<PathBuf> {
    let project = root.join(PROJECT_FILE);
    if !project.is_file() {
        return Vec::new();
    }
    user.map(Path::to_path_buf)
        .into_iter()
        .chain([project, root.join(LOCAL_FILE)])
        .filter(|path| path.is_file())
        .collect()
}

pub(crate) fn load_layers(layers: &[PathBuf]) -> Result<ScoreConfig> {
    if layers.is_empty() {
        return Ok(ScoreConfig::default());
    }
    let mut settings = Value::Table(Map::new());
    for path in layers {
        overlay(&mut settings, read_layer(path)?);
    }
    settings.try_into().map_err(|err: toml::de::Error| {
        ScoreError::ConfigParse(format!("merged mediascore settings: {err}"))
    })
}

fn read_layer(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path).map_err(|err| {
        ScoreError::ConfigParse(format!("cannot read mediascore config {}: {err}", path.display()))
    })?;
    toml::from_str(&content)
        .map_err(|err| ScoreError::ConfigParse(format!("mediascore config {}: {err}", path.display())))
}

/// Tables combine key by key; anything else in `layer` replaces `base`.
fn overlay(base: &mut Value, layer: Value) {
    match (base, layer) {
        (Value::Table(base), Value::Table(layer)) => {
            for (key, value) in layer {
                if let Some(slot) = base.get_mut(&key) {
                    overlay(slot, value);
                } else {
                    base.insert(key, value);
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::config::ReportFormatSetting;
    use std::fs;
    use tempfile::TempDir;

    fn write_user_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[report]
format = "csv"
decimals = 4

[logging]
level = "info"
"#,
        )
        .expect("user config should write");
        path
    }

    #[test]
    fn unconfigured_root_ignores_user_settings() {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let user = write_user_file(&home);

        assert!(config_layers(root.path(), Some(&user)).is_empty());
        let cfg = load_layers(&[]).expect("defaults should load");
        assert_eq!(cfg.report_format(), ReportFormatSetting::Md);
        assert_eq!(cfg.decimals(), 2);
    }

    #[test]
    fn layers_are_ordered_user_project_local() {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let user = write_user_file(&home);
        fs::write(root.path().join(PROJECT_FILE), "").expect("project config should write");

        // no local file yet
        assert_eq!(
            config_layers(root.path(), Some(&user)),
            vec![user.clone(), root.path().join(PROJECT_FILE)]
        );

        fs::create_dir_all(root.path().join(".mediascore")).expect("local dir should create");
        fs::write(root.path().join(LOCAL_FILE), "").expect("local config should write");
        assert_eq!(
            config_layers(root.path(), Some(&user)).last(),
            Some(&root.path().join(LOCAL_FILE))
        );
    }

    #[test]
    fn later_layers_override_weights_and_report_settings() {
        let root = TempDir::new().expect("root temp dir should be created");
        let home = TempDir::new().expect("home temp dir should be created");
        let user = write_user_file(&home);

        fs::write(
            root.path().join(PROJECT_FILE),
            r#"
[report]
format = "json"

[weights.portal_blog]
cpm = 0.18
cpc = 0.04
"#,
        )
        .expect("project config should write");

        fs::create_dir_all(root.path().join(".mediascore")).expect("local dir should create");
        fs::write(
            root.path().join(LOCAL_FILE),
            r#"
[weights.portal_blog]
cpc = 0.05
"#,
        )
        .expect("local override should write");

        let cfg = load_layers(&config_layers(root.path(), Some(&user)))
            .expect("settings should load");

        assert_eq!(cfg.report_format(), ReportFormatSetting::Json);
        assert_eq!(cfg.decimals(), 4);
        assert_eq!(cfg.log_level(), "info");
        assert_eq!(cfg.weights["portal_blog"].get("cpm"), Some(&0.18));
        assert_eq!(cfg.weights["portal_blog"].get("cpc"), Some(&0.05));
    }

    #[test]
    fn broken_project_file_is_named_in_the_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(PROJECT_FILE), "[report\nformat = ")
            .expect("broken config should write");
        let err = load_layers(&config_layers(root.path(), None)).expect_err("parse should fail");
        assert!(err.is_configuration());
        assert!(err.to_string().contains("mediascore config"));
        assert!(err.to_string().contains(PROJECT_FILE));
    }

    #[test]
    fn wrong_value_type_is_a_settings_error() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(PROJECT_FILE), "[report]\ndecimals = \"two\"\n")
            .expect("config should write");
        let err = load_layers(&config_layers(root.path(), None)).expect_err("type should fail");
        assert!(err.to_string().contains("merged mediascore settings"));
    }
}

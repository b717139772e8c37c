use std::env;
use std::fs;
use std::path::Path;

use orderlens_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());

    let fields: [(&str, String, &[&str]); 7] = [
        (
            "dataset.customers_path",
            config.dataset.customers_path.display().to_string(),
            &["ORDERLENS_DATASET_CUSTOMERS_PATH"],
        ),
        (
            "dataset.orders_path",
            config.dataset.orders_path.display().to_string(),
            &["ORDERLENS_DATASET_ORDERS_PATH"],
        ),
        (
            "server.transport",
            config.server.transport.as_str().to_string(),
            &["ORDERLENS_SERVER_TRANSPORT"],
        ),
        (
            "server.bind_address",
            config.server.bind_address.clone(),
            &["ORDERLENS_SERVER_BIND_ADDRESS"],
        ),
        ("server.port", config.server.port.to_string(), &["ORDERLENS_SERVER_PORT"]),
        (
            "logging.level",
            config.logging.level.clone(),
            &["ORDERLENS_LOGGING_LEVEL", "ORDERLENS_LOG_LEVEL"],
        ),
        (
            "logging.format",
            config.logging.format.as_str().to_string(),
            &["ORDERLENS_LOGGING_FORMAT", "ORDERLENS_LOG_FORMAT"],
        ),
    ];

    let mut lines = vec!["effective config (source precedence: env > file > default):".to_string()];
    for (key_path, value, env_keys) in &fields {
        lines.push(render_line(
            key_path,
            value,
            field_source(
                key_path,
                env_keys,
                config_file_doc.as_ref(),
                config_file_path.as_deref(),
            ),
        ));
    }

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    // first non-blank key wins, same as the loader
    let set_env_key = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = set_env_key {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}

#[cfg(test)]
mod tests {
    use toml::Value;

    use super::{contains_path, field_source};

    #[test]
    fn nested_keys_are_found_in_file_doc() {
        let doc: Value = "[dataset]\norders_path = \"x.json\"\n".parse().expect("toml");

        assert!(contains_path(&doc, "dataset.orders_path"));
        assert!(!contains_path(&doc, "dataset.customers_path"));
        assert!(!contains_path(&doc, "server.port"));
    }

    #[test]
    fn file_source_is_reported_when_env_is_absent() {
        let doc: Value = "[server]\nport = 9000\n".parse().expect("toml");

        let source = field_source(
            "server.port",
            &["ORDERLENS_TEST_NEVER_SET_PORT"],
            Some(&doc),
            Some(std::path::Path::new("orderlens.toml")),
        );

        assert_eq!(source, "file (orderlens.toml)");
    }

    #[test]
    fn alias_env_key_is_reported_when_primary_is_unset() {
        std::env::set_var("ORDERLENS_TEST_ALIAS_LEVEL", "debug");

        let source = field_source(
            "logging.level",
            &["ORDERLENS_TEST_PRIMARY_LEVEL_NEVER_SET", "ORDERLENS_TEST_ALIAS_LEVEL"],
            None,
            None,
        );

        std::env::remove_var("ORDERLENS_TEST_ALIAS_LEVEL");
        assert_eq!(source, "env (ORDERLENS_TEST_ALIAS_LEVEL)");
    }

    #[test]
    fn default_source_when_nothing_sets_the_key() {
        let source = field_source("logging.level", &[], None, None);
        assert_eq!(source, "default");
    }
}

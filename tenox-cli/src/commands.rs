//! CLI command implementations.

use crate::console;
use std::path::Path;
use tenox_core::{Config, ConfigError};
use tenox_watcher::{FileWatcher, StyleGenerator};
use tracing::debug;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads the configuration and runs one-shot or watch mode.
pub async fn run(config_path: &Path, watch_mode: bool) -> Result<()> {
    let config = match Config::load(config_path) {
        Ok(config) => config,
        Err(e @ ConfigError::NotFound(_)) => {
            console::config_missing();
            return Err(e.into());
        }
        Err(e) => return Err(e.into()),
    };
    debug!(
        "Loaded {} styles from {}",
        config.input_styles.len(),
        config_path.display()
    );

    let generator = StyleGenerator::new(config);

    if watch_mode {
        watch(&generator).await
    } else {
        generate(&generator)
    }
}

/// Single full scan over every matched markup file.
pub fn generate(generator: &StyleGenerator) -> Result<()> {
    let report = generator.generate_all()?;
    console::saved(report.output.display());
    console::generated();
    Ok(())
}

/// Regenerates on every markup change until the process is stopped.
pub async fn watch(generator: &StyleGenerator) -> Result<()> {
    console::watch_enabled();

    let watcher = FileWatcher::new(&generator.config().input_files)?;
    generator
        .watch(watcher, |path, _report| {
            console::file_changed(path.display());
            console::file_generated(path.display());
        })
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_run_one_shot() {
        let dir = tempdir().unwrap();
        let page = dir.path().join("index.html");
        let out = dir.path().join("out").join("styles.js");
        fs::write(&page, r#"<main class="used"></main>"#).unwrap();

        let config = serde_json::json!({
            "inputStyles": { ".used": { "color": "red" }, ".unused": { "color": "blue" } },
            "inputFiles": format!("{}/*.html", dir.path().display()),
            "outputStyles": out,
        });
        let config_path = dir.path().join("tenoxui.config.json");
        fs::write(&config_path, config.to_string()).unwrap();

        run(&config_path, false).await.unwrap();

        let text = fs::read_to_string(&out).unwrap();
        assert_eq!(
            text,
            "const styles = {\n  \".used\": {\n    \"color\": \"red\"\n  }\n};\nmakeStyles(styles)"
        );
    }

    #[tokio::test]
    async fn test_run_without_config_fails() {
        let dir = tempdir().unwrap();
        let err = run(&dir.path().join("tenoxui.config.json"), false)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}

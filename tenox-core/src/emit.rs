//! Output module rendering.
//!
//! The generated file is a small JavaScript module consumed by the TenoxUI
//! runtime: the filtered styles bound to a constant, then handed to the
//! runtime's entry point. Its shape is a compatibility contract.

use crate::error::{Result, StyleError};
use crate::styles::StyleMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Name the filtered mapping is bound to.
pub const STYLES_IDENT: &str = "styles";

/// Runtime function that applies the styles.
pub const CONSUMER_FN: &str = "makeStyles";

/// Renders the module text. There is no trailing newline.
pub fn render_module(styles: &StyleMap) -> Result<String> {
    let body = serde_json::to_string_pretty(styles)?;
    Ok(format!(
        "const {STYLES_IDENT} = {body};\n{CONSUMER_FN}({STYLES_IDENT})"
    ))
}

/// Writes the rendered module to `path`, replacing any previous content.
///
/// The parent directory is created first if it does not exist yet.
pub fn write_module(path: &Path, styles: &StyleMap) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| StyleError::io(parent, e))?;
    }

    let content = render_module(styles)?;
    fs::write(path, content).map_err(|e| StyleError::io(path, e))?;
    debug!("Wrote {} styles to {}", styles.len(), path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;

    #[test]
    fn test_render_exact_shape() {
        let mut styles = StyleMap::new();
        styles.insert(".used".into(), json!({ "color": "red" }));

        let rendered = render_module(&styles).unwrap();
        assert_eq!(
            rendered,
            "const styles = {\n  \".used\": {\n    \"color\": \"red\"\n  }\n};\nmakeStyles(styles)"
        );
    }

    #[test]
    fn test_numbers_render_as_parsed() {
        let styles: StyleMap =
            serde_json::from_str(r#"{".grid": {"flex": 1.0, "order": 2, "opacity": 0.5}}"#).unwrap();

        let rendered = render_module(&styles).unwrap();
        assert!(rendered.contains("\"flex\": 1.0,"));
        assert!(rendered.contains("\"order\": 2,"));
        assert!(rendered.contains("\"opacity\": 0.5"));
    }

    #[test]
    fn test_render_empty() {
        let rendered = render_module(&StyleMap::new()).unwrap();
        assert_eq!(rendered, "const styles = {};\nmakeStyles(styles)");
    }

    #[test]
    fn test_write_creates_parent_directory() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("dist").join("js").join("styles.js");

        write_module(&out, &StyleMap::new()).unwrap();
        assert!(out.exists());

        // Second write into the existing directory must not fail.
        write_module(&out, &StyleMap::new()).unwrap();
        assert_eq!(
            fs::read_to_string(&out).unwrap(),
            "const styles = {};\nmakeStyles(styles)"
        );
    }
}

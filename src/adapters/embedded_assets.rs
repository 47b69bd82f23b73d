use include_dir::{Dir, include_dir};

use crate::domain::AppError;

static ASSETS_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets");

pub const REGISTRY_FILE: &str = "registry.toml";
pub const INSTRUCTIONS_TEMPLATE: &str = "instructions.txt.j2";

/// Built-in dataset registry (TOML).
pub fn default_registry_source() -> Result<&'static str, AppError> {
    asset_utf8(REGISTRY_FILE)
}

/// Template for the workflow instructions block.
pub fn instructions_template_source() -> Result<&'static str, AppError> {
    asset_utf8(INSTRUCTIONS_TEMPLATE)
}

fn asset_utf8(path: &str) -> Result<&'static str, AppError> {
    let file = ASSETS_DIR
        .get_file(path)
        .ok_or_else(|| AppError::InternalError(format!("Missing embedded asset: {}", path)))?;
    file.contents_utf8()
        .ok_or_else(|| AppError::InternalError(format!("Embedded asset is not UTF-8: {}", path)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_assets_are_present() {
        assert!(default_registry_source().unwrap().contains("[[datasets]]"));
        assert!(instructions_template_source().unwrap().contains("Analysis Workflow Instructions"));
    }

    #[test]
    fn unknown_asset_is_internal_error() {
        let err = asset_utf8("missing.txt").unwrap_err();
        assert!(matches!(err, AppError::InternalError(ref msg) if msg.contains("missing.txt")));
    }
}

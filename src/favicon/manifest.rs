use std::fs;
use std::path::Path;
use crate::constants::{APP_NAME, MANIFEST_BACKGROUND_COLOR, MANIFEST_THEME_COLOR};
use crate::error::AssetError;
use crate::types::{ManifestIcon, PngTarget, WebManifest};

// android-chrome アイコンからマニフェストを構成
pub fn build_manifest(targets: &[PngTarget]) -> WebManifest {
    let icons = targets
        .iter()
        .filter(|t| t.file_name.starts_with("android-chrome"))
        .map(|t| ManifestIcon {
            src: format!("/{}", t.file_name),
            sizes: format!("{}x{}", t.size, t.size),
            mime_type: "image/png".to_string(),
        })
        .collect();

    WebManifest {
        name: APP_NAME.to_string(),
        short_name: APP_NAME.to_string(),
        icons,
        theme_color: MANIFEST_THEME_COLOR.to_string(),
        background_color: MANIFEST_BACKGROUND_COLOR.to_string(),
        display: "standalone".to_string(),
    }
}

/// site.webmanifest を書き出す。既存ファイルは上書きしない
///
/// 書き出した場合は `true`、既に存在してスキップした場合は `false` を返す
pub fn write_manifest_if_absent(path: &Path, targets: &[PngTarget]) -> Result<bool, AssetError> {
    if path.exists() {
        return Ok(false);
    }

    let json = serde_json::to_string_pretty(&build_manifest(targets))?;
    fs::write(path, json).map_err(|source| AssetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(true)
}

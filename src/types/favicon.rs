use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::constants::{
    FAVICON_ICO_SIZES, FAVICON_OUTPUT_DIR, FAVICON_PNG_TARGETS, FAVICON_SOURCE,
};

// PNG 出力先（ファイル名と正方形サイズ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PngTarget {
    pub file_name: String,
    pub size: u32,
}

/// favicon 生成設定
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaviconConfig {
    /// 元画像（ロゴ）
    pub source: PathBuf,
    /// 出力ディレクトリ
    pub output_dir: PathBuf,
    pub png_targets: Vec<PngTarget>,
    /// favicon.ico に埋め込むサイズ
    pub ico_sizes: Vec<u32>,
    /// site.webmanifest を（存在しなければ）生成するか
    #[serde(default = "default_true")]
    pub write_manifest: bool,
}

fn default_true() -> bool {
    true
}

impl FaviconConfig {
    // 任意のルート配下に同じレイアウトを構成（テスト用の一時ディレクトリなど）
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            source: root.join(FAVICON_SOURCE),
            output_dir: root.join(FAVICON_OUTPUT_DIR),
            png_targets: FAVICON_PNG_TARGETS
                .iter()
                .map(|&(file_name, size)| PngTarget {
                    file_name: file_name.to_string(),
                    size,
                })
                .collect(),
            ico_sizes: FAVICON_ICO_SIZES.to_vec(),
            write_manifest: true,
        }
    }
}

impl Default for FaviconConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new(""))
    }
}

/// 書き出したファイル
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedFile {
    pub path: PathBuf,
    pub size: u32,
}

/// favicon 生成結果
#[derive(Debug, Default, Serialize)]
pub struct FaviconReport {
    pub pngs: Vec<GeneratedFile>,
    pub ico: Option<PathBuf>,
    pub manifest_written: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = FaviconConfig::default();
        assert_eq!(config.source, Path::new("public/images/famico-logo-20251123041515.png"));
        assert_eq!(config.output_dir, Path::new("public"));
        let sizes: Vec<u32> = config.png_targets.iter().map(|t| t.size).collect();
        assert_eq!(sizes, vec![16, 32, 180, 192, 512]);
        assert_eq!(config.ico_sizes, vec![16, 32, 48]);
    }
}

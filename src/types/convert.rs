use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use crate::constants::{ICON_CONVERT_JOBS, ICON_OUTPUT_DIR, ICON_SOURCE};

/// SVG → PNG 変換の単位（元SVG・出力PNG・サイズ）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertJob {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub size: u32,
}

/// アイコン変換設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconConvertConfig {
    pub jobs: Vec<ConvertJob>,
}

impl IconConvertConfig {
    pub fn rooted_at(root: &Path) -> Self {
        let source = root.join(ICON_SOURCE);
        let output_dir = root.join(ICON_OUTPUT_DIR);
        let jobs = ICON_CONVERT_JOBS
            .iter()
            .map(|&(file_name, size)| ConvertJob {
                source: source.clone(),
                destination: output_dir.join(file_name),
                size,
            })
            .collect();

        Self { jobs }
    }
}

impl Default for IconConvertConfig {
    fn default() -> Self {
        Self::rooted_at(Path::new(""))
    }
}

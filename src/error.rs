use std::path::PathBuf;
use thiserror::Error;

/// アセット生成の統合エラー型
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("画像読み込みエラー: {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("無効な画像サイズ: {0}")]
    InvalidDimensions(String),

    #[error("画像書き出しエラー: {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("ファイル操作エラー: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("マニフェスト生成エラー: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// 変換メカニズム単位の失敗理由（診断ログ用、制御フローには影響しない）
#[derive(Debug, Error)]
pub enum MechanismError {
    #[error("ツールが見つかりません: {0}")]
    ToolMissing(String),

    #[error("{tool} が異常終了しました ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("SVG解析エラー: {0}")]
    Parse(String),

    #[error("レンダリングエラー: {0}")]
    Render(String),

    #[error("I/Oエラー: {0}")]
    Io(#[from] std::io::Error),
}

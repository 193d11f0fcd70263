mod manifest;

pub use self::manifest::{build_manifest, write_manifest_if_absent};

use std::fs;
use log::{debug, info, warn};
use crate::constants::{FAVICON_ICO_NAME, WEB_MANIFEST_NAME};
use crate::error::AssetError;
use crate::image_utils::{open_source, save_ico, save_resized_png};
use crate::types::{FaviconConfig, FaviconReport, GeneratedFile};

/// ロゴ画像から favicon 一式を生成する
///
/// 元画像が開けない場合は即座にエラーを返す（それまでに書き出したファイルは残る）。
/// 出力ファイルは毎回上書きされる。
pub fn generate_favicons(config: &FaviconConfig) -> Result<FaviconReport, AssetError> {
    if let Ok(json) = serde_json::to_string(config) {
        debug!("favicon config: {}", json);
    }

    let img = open_source(&config.source)?;
    info!(
        "元画像: {} ({}x{})",
        config.source.display(),
        img.width(),
        img.height()
    );
    if img.width() != img.height() {
        warn!(
            "元画像が正方形ではありません ({}x{})。縦横比を無視してリサイズします",
            img.width(),
            img.height()
        );
    }

    fs::create_dir_all(&config.output_dir).map_err(|source| AssetError::Io {
        path: config.output_dir.clone(),
        source,
    })?;

    let mut report = FaviconReport::default();

    for target in &config.png_targets {
        let output_path = config.output_dir.join(&target.file_name);
        save_resized_png(&img, target.size, &output_path)?;
        println!(
            "✅ Generated {} ({}x{})",
            output_path.display(),
            target.size,
            target.size
        );
        report.pngs.push(GeneratedFile {
            path: output_path,
            size: target.size,
        });
    }

    let ico_path = config.output_dir.join(FAVICON_ICO_NAME);
    save_ico(&img, &config.ico_sizes, &ico_path)?;
    println!(
        "✅ Generated {} ({})",
        ico_path.display(),
        describe_sizes(&config.ico_sizes)
    );
    report.ico = Some(ico_path);

    if config.write_manifest {
        let manifest_path = config.output_dir.join(WEB_MANIFEST_NAME);
        report.manifest_written = write_manifest_if_absent(&manifest_path, &config.png_targets)?;
        if report.manifest_written {
            println!("✅ Generated {}", manifest_path.display());
        } else {
            println!("⏭️  {} already exists, skipped", manifest_path.display());
        }
    }

    Ok(report)
}

// "16x16, 32x32, 48x48"
fn describe_sizes(sizes: &[u32]) -> String {
    sizes
        .iter()
        .map(|s| format!("{}x{}", s, s))
        .collect::<Vec<_>>()
        .join(", ")
}

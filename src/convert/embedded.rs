use std::fs;
use std::path::Path;
use std::sync::Arc;
use resvg::{tiny_skia, usvg};
use crate::error::MechanismError;
use super::Mechanism;

/// resvg による組み込みレンダリング（外部ツール不要）
pub struct ResvgMechanism {
    options: usvg::Options<'static>,
}

impl ResvgMechanism {
    pub fn new() -> Self {
        // テキスト要素を描画できるようにシステムフォントを読み込む
        let mut options = usvg::Options::default();
        Arc::make_mut(&mut options.fontdb).load_system_fonts();
        Self { options }
    }
}

impl Default for ResvgMechanism {
    fn default() -> Self {
        Self::new()
    }
}

impl Mechanism for ResvgMechanism {
    fn name(&self) -> &str {
        "resvg"
    }

    fn attempt(&self, input: &Path, output: &Path, size: u32) -> Result<(), MechanismError> {
        let svg_data = fs::read(input)?;
        let tree = usvg::Tree::from_data(&svg_data, &self.options)
            .map_err(|e| MechanismError::Parse(e.to_string()))?;

        let mut pixmap = tiny_skia::Pixmap::new(size, size)
            .ok_or_else(|| MechanismError::Render(format!("{}x{} のピクセルマップを作成できません", size, size)))?;

        // 縦横それぞれを出力サイズに合わせる
        let svg_size = tree.size();
        let transform = tiny_skia::Transform::from_scale(
            size as f32 / svg_size.width(),
            size as f32 / svg_size.height(),
        );
        resvg::render(&tree, transform, &mut pixmap.as_mut());

        // レンダリング成功後にのみ書き出す
        pixmap
            .save_png(output)
            .map_err(|e| MechanismError::Render(e.to_string()))
    }
}

use std::fs;
use std::path::Path;
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{DynamicImage, ExtendedColorType, ImageFormat};
use crate::constants::{MAX_IMAGE_DIMENSION, MAX_PIXEL_COUNT};
use crate::error::AssetError;

// 画像サイズ検証（DoS防止）
pub fn validate_dimensions(width: u32, height: u32) -> Result<(), AssetError> {
    if width == 0 || height == 0 {
        return Err(AssetError::InvalidDimensions(
            "幅または高さが0".to_string(),
        ));
    }
    if width > MAX_IMAGE_DIMENSION || height > MAX_IMAGE_DIMENSION {
        return Err(AssetError::InvalidDimensions(format!(
            "画像サイズが大きすぎます: {}x{} (最大: {})",
            width, height, MAX_IMAGE_DIMENSION
        )));
    }
    let pixel_count = (width as u64) * (height as u64);
    if pixel_count > MAX_PIXEL_COUNT {
        return Err(AssetError::InvalidDimensions(format!(
            "ピクセル数が多すぎます: {} (最大: {})",
            pixel_count, MAX_PIXEL_COUNT
        )));
    }
    Ok(())
}

// 元画像を読み込み、サイズを検証
pub fn open_source(path: &Path) -> Result<DynamicImage, AssetError> {
    let img = image::open(path).map_err(|source| AssetError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    validate_dimensions(img.width(), img.height())?;

    Ok(img)
}

// 正方形にリサイズ（Lanczos3: 高品質リサンプリング）
pub fn resize_square(img: &DynamicImage, size: u32) -> DynamicImage {
    img.resize_exact(size, size, FilterType::Lanczos3)
}

// 指定サイズにリサイズして PNG で保存（既存ファイルは上書き）
pub fn save_resized_png(img: &DynamicImage, size: u32, output_path: &Path) -> Result<(), AssetError> {
    resize_square(img, size)
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|source| AssetError::Encode {
            path: output_path.to_path_buf(),
            source,
        })
}

// 複数解像度を埋め込んだ ICO を保存（各エントリは PNG 圧縮）
pub fn save_ico(img: &DynamicImage, sizes: &[u32], output_path: &Path) -> Result<(), AssetError> {
    let encode_err = |source| AssetError::Encode {
        path: output_path.to_path_buf(),
        source,
    };

    // フレームはバッファを借用するため、先に全サイズをリサイズしておく
    let resized: Vec<(u32, Vec<u8>)> = sizes
        .iter()
        .map(|&size| (size, resize_square(img, size).to_rgba8().into_raw()))
        .collect();

    let frames = resized
        .iter()
        .map(|(size, rgba)| IcoFrame::as_png(rgba, *size, *size, ExtendedColorType::Rgba8))
        .collect::<Result<Vec<_>, _>>()
        .map_err(encode_err)?;

    let file = fs::File::create(output_path).map_err(|source| AssetError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    IcoEncoder::new(file)
        .encode_images(&frames)
        .map_err(encode_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn gradient(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
            image::Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255])
        }))
    }

    #[test]
    fn test_validate_dimensions() {
        assert!(validate_dimensions(512, 512).is_ok());
        assert!(matches!(
            validate_dimensions(0, 10),
            Err(AssetError::InvalidDimensions(_))
        ));
        assert!(validate_dimensions(MAX_IMAGE_DIMENSION + 1, 1).is_err());
        assert!(validate_dimensions(20_000, 20_000).is_err());
    }

    #[test]
    fn test_resize_square_non_square_source() {
        let resized = resize_square(&gradient(300, 200), 48);
        assert_eq!((resized.width(), resized.height()), (48, 48));
    }

    #[test]
    fn test_save_ico_entries() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("favicon.ico");

        save_ico(&gradient(64, 64), &[16, 32, 48], &path).unwrap();

        let icon_dir = ico::IconDir::read(fs::File::open(&path).unwrap()).unwrap();
        let sizes: Vec<(u32, u32)> = icon_dir
            .entries()
            .iter()
            .map(|e| (e.width(), e.height()))
            .collect();
        assert_eq!(sizes, vec![(16, 16), (32, 32), (48, 48)]);
    }

    #[test]
    fn test_open_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_source(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(AssetError::Open { .. })));
    }
}

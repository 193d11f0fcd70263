// favicon 生成元（ロゴ画像）と出力先
pub const FAVICON_SOURCE: &str = "public/images/famico-logo-20251123041515.png";
pub const FAVICON_OUTPUT_DIR: &str = "public";

// favicon PNG の出力ファイル名とサイズ（正方形）
pub const FAVICON_PNG_TARGETS: &[(&str, u32)] = &[
    ("favicon-16x16.png", 16),
    ("favicon-32x32.png", 32),
    ("apple-touch-icon.png", 180),
    ("android-chrome-192x192.png", 192),
    ("android-chrome-512x512.png", 512),
];

// favicon.ico に埋め込む解像度
pub const FAVICON_ICO_NAME: &str = "favicon.ico";
pub const FAVICON_ICO_SIZES: &[u32] = &[16, 32, 48];

// Web マニフェスト（存在しない場合のみ生成）
pub const WEB_MANIFEST_NAME: &str = "site.webmanifest";
pub const APP_NAME: &str = "Famico";
pub const MANIFEST_THEME_COLOR: &str = "#ffffff";
pub const MANIFEST_BACKGROUND_COLOR: &str = "#ffffff";

// アプリアイコン（Expo アセット）
pub const ICON_SOURCE: &str = "assets/icon.svg";
pub const ICON_OUTPUT_DIR: &str = "assets";
pub const APP_ICON_SIZE: u32 = 1024;
pub const ICON_CONVERT_JOBS: &[(&str, u32)] = &[
    ("icon.png", APP_ICON_SIZE),
    ("adaptive-icon.png", APP_ICON_SIZE),
    ("splash-icon.png", APP_ICON_SIZE),
];

// 外部変換ツール
pub const RSVG_CONVERT_PROGRAM: &str = "rsvg-convert";
pub const INKSCAPE_PROGRAM: &str = "inkscape";

// 全変換失敗時に表示するインストール方法
pub const INSTALL_HINTS: &[&str] = &[
    "rsvg-convert: brew install librsvg / sudo apt install librsvg2-bin",
    "inkscape:     brew install --cask inkscape / sudo apt install inkscape",
];

// 画像サイズ制限（DoS防止）
pub const MAX_IMAGE_DIMENSION: u32 = 65535;      // 最大辺長
pub const MAX_PIXEL_COUNT: u64 = 100_000_000;    // 最大ピクセル数（100メガピクセル）

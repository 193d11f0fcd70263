use log::LevelFilter;

// ロガー初期化（RUST_LOG で上書き可能、既定は warn）
pub fn init() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .parse_default_env()
        .init();
}

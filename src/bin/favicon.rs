use anyhow::Context;
use icon_assets_lib::types::FaviconConfig;
use icon_assets_lib::{generate_favicons, logging};

fn main() -> anyhow::Result<()> {
    logging::init();

    let config = FaviconConfig::default();
    let report = generate_favicons(&config)
        .with_context(|| format!("favicon生成に失敗しました: {}", config.source.display()))?;

    println!(
        "🎉 Favicon generation complete ({} PNG + favicon.ico)",
        report.pngs.len()
    );
    Ok(())
}

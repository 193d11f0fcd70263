mod command;
mod embedded;

pub use self::command::CommandMechanism;
pub use self::embedded::ResvgMechanism;

use std::path::Path;
use log::debug;
use crate::constants::INSTALL_HINTS;
use crate::error::MechanismError;
use crate::types::{ConvertJob, IconConvertConfig};

/// SVG → PNG 変換手段の共通インターフェース
///
/// `Err` はすべて「この手段は使えない」として扱われ、次の手段にフォールバックする。
/// エラーの内容は診断ログにのみ使われる。
pub trait Mechanism {
    fn name(&self) -> &str;
    fn attempt(&self, input: &Path, output: &Path, size: u32) -> Result<(), MechanismError>;
}

/// 優先順の変換手段: 組み込みライブラリ → rsvg-convert → inkscape
pub fn default_mechanisms() -> Vec<Box<dyn Mechanism>> {
    vec![
        Box::new(ResvgMechanism::new()),
        Box::new(CommandMechanism::rsvg_convert()),
        Box::new(CommandMechanism::inkscape()),
    ]
}

/// ジョブ単位の結果（成功した手段の名前、全滅なら None）
#[derive(Debug, Clone)]
pub struct JobOutcome {
    pub job: ConvertJob,
    pub mechanism: Option<String>,
}

impl JobOutcome {
    pub fn succeeded(&self) -> bool {
        self.mechanism.is_some()
    }
}

#[derive(Debug, Default)]
pub struct ConvertSummary {
    pub outcomes: Vec<JobOutcome>,
}

impl ConvertSummary {
    pub fn any_succeeded(&self) -> bool {
        self.outcomes.iter().any(JobOutcome::succeeded)
    }

    // 1件でも成功すれば 0
    pub fn exit_code(&self) -> u8 {
        if self.any_succeeded() {
            0
        } else {
            1
        }
    }
}

// 1ジョブを最初に成功した手段で変換
fn convert_job(job: &ConvertJob, mechanisms: &[Box<dyn Mechanism>]) -> Option<String> {
    for mechanism in mechanisms {
        match mechanism.attempt(&job.source, &job.destination, job.size) {
            Ok(()) => return Some(mechanism.name().to_string()),
            Err(e) => debug!(
                "{} で {} の変換に失敗: {}",
                mechanism.name(),
                job.destination.display(),
                e
            ),
        }
    }
    None
}

/// 全ジョブを順番に変換する
///
/// 失敗したジョブは警告を出して次のジョブに進む（途中で中断しない）。
pub fn run_conversions(
    config: &IconConvertConfig,
    mechanisms: &[Box<dyn Mechanism>],
) -> ConvertSummary {
    let mut summary = ConvertSummary::default();

    for job in &config.jobs {
        let mechanism = convert_job(job, mechanisms);
        match &mechanism {
            Some(name) => println!(
                "✅ {} ({}x{}) via {}",
                job.destination.display(),
                job.size,
                job.size,
                name
            ),
            None => eprintln!("⚠️  Failed to convert {}", job.destination.display()),
        }
        summary.outcomes.push(JobOutcome {
            job: job.clone(),
            mechanism,
        });
    }

    summary
}

/// 最終結果を表示して終了コードを返す（全滅時はインストール方法を案内）
pub fn report_summary(summary: &ConvertSummary) -> u8 {
    if summary.any_succeeded() {
        println!("🎉 Icon conversion complete");
    } else {
        eprintln!("❌ No icon could be converted. Install one of the following tools and retry:");
        for hint in INSTALL_HINTS {
            eprintln!("   {}", hint);
        }
    }
    summary.exit_code()
}

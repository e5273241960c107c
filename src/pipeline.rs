//! 執行流程：讀表 → 排料 → 寫入分組結果 → 報表

use cutlist_calc::{CutPacker, LayoutBuilder, SkipCounts};
use cutlist_core::{CutRequest, RunConfig};
use cutlist_io::{read_table, write_grouped_cuts, write_report, CsvDirectorySink, Result};
use cutlist_report::{
    IssueReport, MetricsEngine, ProcurementCalculator, SummaryCalculator, ValidationCalculator,
    WasteCalculator, ISSUES_SHEET, PROCUREMENT_SHEET, SUMMARY_SHEET, VALIDATION_SHEET,
    WASTE_REPORT_SHEET,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// 一次執行的結果
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// 實際輸出目錄（寫入副本時為帶時間戳的新目錄）
    pub output_dir: PathBuf,

    /// 分組結果的輸出名稱（可能帶序號）
    pub grouped_destination: String,

    /// 本次寫入的所有輸出名稱（依寫入順序）
    pub destinations: Vec<String>,

    /// 原料條總數
    pub total_bars: usize,

    /// 資料品質剔除計數
    pub skipped: SkipCounts,

    /// 超長件問題數
    pub issue_count: usize,

    /// 驗證是否通過
    pub validation_passed: bool,
}

/// 執行一次下料最佳化
///
/// 鋸縫與欄位錯誤在寫入任何輸出之前回報。
pub fn run<P, Q>(input_path: P, output_dir: Q, config: &RunConfig) -> Result<RunOutcome>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let start = Instant::now();
    let input_path = input_path.as_ref();

    // Step 1: 鋸縫
    let packing = config.packing_config()?;
    tracing::info!(
        "開始下料最佳化: {}（鋸縫 {}，拆分超長件: {}）",
        input_path.display(),
        packing.kerf,
        packing.allow_split_oversize
    );

    // Step 2: 讀表與欄位檢查
    let table = read_table(input_path)?;
    let requests = CutRequest::from_table(&table)?;
    tracing::debug!("Step 2: 讀取 {} 筆切割需求", requests.len());

    // Step 3: 排料
    let packed = CutPacker::new(packing).pack(&requests)?;
    for warning in &packed.warnings {
        tracing::debug!("[{}] {}", warning.material, warning.message);
    }

    // Step 4: 寫入分組結果
    let mut sink = if config.output.write_to_copy {
        CsvDirectorySink::copy_to_timestamped(output_dir.as_ref())?
    } else {
        CsvDirectorySink::open(output_dir.as_ref())?
    };

    let layout = LayoutBuilder::to_table(&LayoutBuilder::build(&packed.groups));
    let grouped_destination = write_grouped_cuts(&mut sink, &layout, &config.output)?;
    let mut destinations = vec![grouped_destination.clone()];

    // Step 5: 報表
    let metrics = MetricsEngine::compute(&packed.groups, packing.kerf);
    let reports = &config.reports;

    if reports.summary {
        write_report(
            &mut sink,
            SUMMARY_SHEET,
            &SummaryCalculator::to_table(&metrics.summary),
        )?;
        destinations.push(SUMMARY_SHEET.to_string());

        if !metrics.procurement.is_empty() {
            write_report(
                &mut sink,
                PROCUREMENT_SHEET,
                &ProcurementCalculator::to_table(&metrics.procurement),
            )?;
            destinations.push(PROCUREMENT_SHEET.to_string());
        }
    }

    if reports.validation {
        write_report(
            &mut sink,
            VALIDATION_SHEET,
            &ValidationCalculator::to_table(&metrics.validation),
        )?;
        destinations.push(VALIDATION_SHEET.to_string());
    }

    if reports.waste_report {
        write_report(
            &mut sink,
            WASTE_REPORT_SHEET,
            &WasteCalculator::to_table(&metrics.waste),
        )?;
        destinations.push(WASTE_REPORT_SHEET.to_string());
    }

    if let Some(issues) = IssueReport::to_table(&packed.issues) {
        write_report(&mut sink, ISSUES_SHEET, &issues)?;
        destinations.push(ISSUES_SHEET.to_string());
    }

    let outcome = RunOutcome {
        output_dir: sink.root().to_path_buf(),
        grouped_destination,
        destinations,
        total_bars: packed.total_bars(),
        skipped: packed.skipped,
        issue_count: packed.issues.len(),
        validation_passed: metrics.validation.passed(),
    };

    tracing::info!(
        "完成: {} 組，{} 根原料，{} 個問題，輸出至 {}（{} ms）",
        packed.groups.len(),
        outcome.total_bars,
        outcome.issue_count,
        outcome.output_dir.display(),
        start.elapsed().as_millis()
    );

    Ok(outcome)
}

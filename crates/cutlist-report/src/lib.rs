//! # Cutlist Metrics
//!
//! 由裝箱結果推導的報表：彙總、驗證、損耗明細、採購、問題
//!
//! 所有報表都是 `(GroupedBins, kerf)` 的純函數，每次重新計算，不快取。

pub mod issues;
pub mod procurement;
pub mod summary;
pub mod validation;
pub mod waste;

// Re-export 主要類型
pub use issues::IssueReport;
pub use procurement::{ProcurementCalculator, ProcurementRow};
pub use summary::{SummaryCalculator, SummaryRow};
pub use validation::{ValidationCalculator, ValidationResult};
pub use waste::{WasteCalculator, WasteRow};

use cutlist_core::GroupedBins;

/// 報表名稱
pub const SUMMARY_SHEET: &str = "Summary";
pub const VALIDATION_SHEET: &str = "Validation";
pub const WASTE_REPORT_SHEET: &str = "Waste Report";
pub const PROCUREMENT_SHEET: &str = "Procurement";
pub const ISSUES_SHEET: &str = "Issues";

/// 全部報表
#[derive(Debug, Clone, PartialEq)]
pub struct MetricsReport {
    /// 彙總（每分組一列）
    pub summary: Vec<SummaryRow>,

    /// 驗證結果
    pub validation: ValidationResult,

    /// 損耗明細（每根原料條一列）
    pub waste: Vec<WasteRow>,

    /// 採購彙總
    pub procurement: Vec<ProcurementRow>,
}

/// 報表計算器
pub struct MetricsEngine;

impl MetricsEngine {
    /// 計算全部報表
    pub fn compute(groups: &GroupedBins, kerf: f64) -> MetricsReport {
        tracing::debug!("計算報表：分組 {} 個，鋸縫 {}", groups.len(), kerf);

        let summary = SummaryCalculator::calculate(groups, kerf);
        let validation = ValidationCalculator::validate(groups, kerf, &summary);
        let waste = WasteCalculator::calculate(groups, kerf);
        let procurement = ProcurementCalculator::aggregate(&summary);

        if !validation.passed() {
            tracing::warn!("驗證未通過: {}", validation.notes_text());
        }

        MetricsReport {
            summary,
            validation,
            waste,
            procurement,
        }
    }
}

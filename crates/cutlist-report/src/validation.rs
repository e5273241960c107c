//! 驗證報表（可執行的交叉檢查，只報告不修正）

use cutlist_core::{Cell, GroupedBins, Table};
use serde::Serialize;

use crate::summary::SummaryRow;

const NEGATIVE_WASTE_TOLERANCE: f64 = -1e-6;

/// 驗證結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    /// 超出原料長度的原料條數
    pub infeasible_bars: usize,

    /// 出現負餘料的彙總列數
    pub negative_waste_rows: usize,

    /// 問題說明
    pub notes: Vec<String>,
}

impl ValidationResult {
    /// 每根原料條均在原料長度內
    pub fn feasibility_passed(&self) -> bool {
        self.infeasible_bars == 0
    }

    /// 沒有負餘料
    pub fn non_negative_waste_passed(&self) -> bool {
        self.negative_waste_rows == 0
    }

    /// 全部檢查通過
    pub fn passed(&self) -> bool {
        self.feasibility_passed() && self.non_negative_waste_passed()
    }

    /// 說明文字
    pub fn notes_text(&self) -> String {
        if self.notes.is_empty() {
            "All checks passed.".to_string()
        } else {
            self.notes.join("; ")
        }
    }
}

/// 驗證計算器
pub struct ValidationCalculator;

impl ValidationCalculator {
    /// 執行驗證（不重新裝箱）
    pub fn validate(groups: &GroupedBins, kerf: f64, summary: &[SummaryRow]) -> ValidationResult {
        let infeasible_bars = groups
            .iter()
            .flat_map(|(key, bins)| bins.iter().map(move |b| (key.stock_length, b)))
            .filter(|(stock_length, bin)| !bin.is_feasible(*stock_length, kerf))
            .count();

        let negative_waste_rows = summary
            .iter()
            .filter(|row| row.estimated_waste < NEGATIVE_WASTE_TOLERANCE)
            .count();

        let mut notes = Vec::new();
        if infeasible_bars > 0 {
            notes.push(format!(
                "{} bar(s) exceed stock length feasibility.",
                infeasible_bars
            ));
        }
        if negative_waste_rows > 0 {
            notes.push("Negative waste detected (should not happen).".to_string());
        }

        ValidationResult {
            infeasible_bars,
            negative_waste_rows,
            notes,
        }
    }

    /// 轉為表格
    pub fn to_table(result: &ValidationResult) -> Table {
        let verdict = |pass: bool| Cell::from(if pass { "PASS" } else { "FAIL" });

        Table::new(["Check", "Result"])
            .with_row(vec![
                Cell::from("Per-bin feasibility (<= stock length)"),
                verdict(result.feasibility_passed()),
            ])
            .with_row(vec![
                Cell::from("Non-negative waste"),
                verdict(result.non_negative_waste_passed()),
            ])
            .with_row(vec![Cell::from("Notes"), Cell::from(result.notes_text())])
    }
}

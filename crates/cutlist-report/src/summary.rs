//! 彙總報表

use cutlist_core::{round_to, Cell, GroupedBins, Table};
use serde::Serialize;

/// 彙總列（每分組一列）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    /// 分組標籤
    pub group_label: String,

    /// 材質
    pub material: String,

    /// 原料長度
    pub stock_length: f64,

    /// 使用原料條數
    pub bars_used: usize,

    /// 切割件總長
    pub total_cut_length: f64,

    /// 鋸縫損耗
    pub kerf_used: f64,

    /// 估計餘料
    pub estimated_waste: f64,

    /// 利用率（%），無原料條時為 0
    pub utilization_pct: f64,
}

/// 彙總計算器
pub struct SummaryCalculator;

impl SummaryCalculator {
    /// 計算彙總，依（材質, 原料長度）排序
    pub fn calculate(groups: &GroupedBins, kerf: f64) -> Vec<SummaryRow> {
        let mut rows: Vec<SummaryRow> = groups
            .iter()
            .map(|(key, bins)| {
                let stock_length = key.stock_length;
                let bars_used = bins.len();

                let total_cut_length: f64 = bins.iter().map(|b| b.total_length()).sum();
                let kerf_used: f64 = bins
                    .iter()
                    .filter(|b| !b.is_empty())
                    .map(|b| b.kerf_charge(kerf))
                    .sum();
                let estimated_waste: f64 = bins
                    .iter()
                    .filter(|b| !b.is_empty())
                    .map(|b| b.remaining(stock_length, kerf).max(0.0))
                    .sum();

                let stock_total = stock_length * bars_used as f64;
                let utilization_pct = if bars_used == 0 {
                    0.0
                } else {
                    100.0 * (stock_total - estimated_waste) / stock_total
                };

                SummaryRow {
                    group_label: key.label(),
                    material: key.material.clone(),
                    stock_length,
                    bars_used,
                    total_cut_length,
                    kerf_used,
                    estimated_waste,
                    utilization_pct,
                }
            })
            .collect();

        rows.sort_by(|a, b| {
            a.material
                .cmp(&b.material)
                .then_with(|| a.stock_length.total_cmp(&b.stock_length))
        });
        rows
    }

    /// 轉為表格（長度取 3 位小數，利用率取 2 位）
    pub fn to_table(rows: &[SummaryRow]) -> Table {
        let mut table = Table::new([
            "Group",
            "Material",
            "Stock Length",
            "Bars Used",
            "Total Cut Length",
            "Approx Kerf Used",
            "Estimated Waste",
            "Utilization %",
        ]);
        for row in rows {
            table.push_row(vec![
                Cell::from(row.group_label.clone()),
                Cell::from(row.material.clone()),
                Cell::from(row.stock_length),
                Cell::from(row.bars_used),
                Cell::from(round_to(row.total_cut_length, 3)),
                Cell::from(round_to(row.kerf_used, 3)),
                Cell::from(round_to(row.estimated_waste, 3)),
                Cell::from(round_to(row.utilization_pct, 2)),
            ]);
        }
        table
    }
}

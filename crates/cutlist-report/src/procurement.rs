//! 採購彙總（需購入多少原料）

use cutlist_core::{round_to, Cell, Table};
use serde::Serialize;

use crate::summary::SummaryRow;

/// 採購列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcurementRow {
    /// 材質
    pub material: String,

    /// 原料長度
    pub stock_length: f64,

    /// 原料條數
    pub bars_used: usize,

    /// 估計餘料
    pub estimated_waste: f64,
}

/// 採購計算器
pub struct ProcurementCalculator;

impl ProcurementCalculator {
    /// 按（材質, 原料長度）彙總原料條數與餘料
    pub fn aggregate(summary: &[SummaryRow]) -> Vec<ProcurementRow> {
        let mut sorted: Vec<&SummaryRow> = summary.iter().collect();
        sorted.sort_by(|a, b| {
            a.material
                .cmp(&b.material)
                .then_with(|| a.stock_length.total_cmp(&b.stock_length))
        });

        let mut rows: Vec<ProcurementRow> = Vec::new();
        for row in sorted {
            match rows.last_mut() {
                Some(last)
                    if last.material == row.material && last.stock_length == row.stock_length =>
                {
                    last.bars_used += row.bars_used;
                    last.estimated_waste += row.estimated_waste;
                }
                _ => rows.push(ProcurementRow {
                    material: row.material.clone(),
                    stock_length: row.stock_length,
                    bars_used: row.bars_used,
                    estimated_waste: row.estimated_waste,
                }),
            }
        }

        rows
    }

    /// 轉為表格
    pub fn to_table(rows: &[ProcurementRow]) -> Table {
        let mut table = Table::new(["Material", "Stock Length", "Bars Used", "Estimated Waste"]);
        for row in rows {
            table.push_row(vec![
                Cell::from(row.material.clone()),
                Cell::from(row.stock_length),
                Cell::from(row.bars_used),
                Cell::from(round_to(row.estimated_waste, 3)),
            ]);
        }
        table
    }
}

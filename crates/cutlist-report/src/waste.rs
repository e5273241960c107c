//! 損耗明細（每根原料條一列）

use cutlist_core::{round_to, sorted_by_total_desc, Cell, GroupedBins, Table};
use serde::Serialize;

/// 損耗明細列
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WasteRow {
    pub group_label: String,
    pub material: String,
    pub stock_length: f64,

    /// 分組內序號（依總長由大到小，從 1 開始）
    pub bar_number: usize,

    /// 切割件顯示文字
    pub pieces: String,

    pub sum_cuts: f64,
    pub kerf_used: f64,
    pub used_total: f64,

    /// 餘料（不小於 0）
    pub leftover: f64,

    /// 單條利用率（%）
    pub utilization_pct: f64,
}

/// 損耗明細計算器
pub struct WasteCalculator;

impl WasteCalculator {
    /// 計算損耗明細：分組依分組鍵順序，分組內依原料條總長由大到小
    pub fn calculate(groups: &GroupedBins, kerf: f64) -> Vec<WasteRow> {
        let mut rows = Vec::new();

        for (key, bins) in groups {
            let stock_length = key.stock_length;
            let label = key.label();

            for (i, bin) in sorted_by_total_desc(bins).into_iter().enumerate() {
                let sum_cuts = bin.total_length();
                let kerf_used = bin.kerf_charge(kerf);
                let used_total = sum_cuts + kerf_used;

                rows.push(WasteRow {
                    group_label: label.clone(),
                    material: key.material.clone(),
                    stock_length,
                    bar_number: i + 1,
                    pieces: bin.pretty(),
                    sum_cuts,
                    kerf_used,
                    used_total,
                    leftover: (stock_length - used_total).max(0.0),
                    utilization_pct: used_total / stock_length * 100.0,
                });
            }
        }

        rows
    }

    /// 轉為表格
    pub fn to_table(rows: &[WasteRow]) -> Table {
        let mut table = Table::new([
            "Group",
            "Material",
            "Stock Length",
            "Bar #",
            "Pieces",
            "Sum Cuts",
            "Kerf Used",
            "Used Total",
            "Leftover",
            "Util % (bar)",
        ]);
        for row in rows {
            table.push_row(vec![
                Cell::from(row.group_label.clone()),
                Cell::from(row.material.clone()),
                Cell::from(row.stock_length),
                Cell::from(row.bar_number),
                Cell::from(row.pieces.clone()),
                Cell::from(round_to(row.sum_cuts, 3)),
                Cell::from(round_to(row.kerf_used, 3)),
                Cell::from(round_to(row.used_total, 3)),
                Cell::from(round_to(row.leftover, 3)),
                Cell::from(round_to(row.utilization_pct, 2)),
            ]);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutlist_core::{Bin, GroupKey};

    #[test]
    fn test_waste_rows_per_bar() {
        let mut groups = GroupedBins::new();
        groups.insert(
            GroupKey::new(120.0, "Steel Rod"),
            vec![
                Bin::with_cut(50.0),
                Bin {
                    cuts: vec![100.0, 15.0],
                    full_stock: false,
                },
            ],
        );

        let rows = WasteCalculator::calculate(&groups, 0.125);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].bar_number, 1);
        assert_eq!(rows[0].pieces, "[100, 15]");
        assert_eq!(rows[0].sum_cuts, 115.0);
        assert_eq!(rows[0].kerf_used, 0.25);
        assert_eq!(rows[0].used_total, 115.25);
        assert_eq!(rows[0].leftover, 4.75);
        assert_eq!(rows[1].bar_number, 2);
        assert_eq!(rows[1].pieces, "[50]");
        assert_eq!(rows[1].leftover, 69.875);
    }

    #[test]
    fn test_over_full_bar_has_zero_leftover() {
        let mut groups = GroupedBins::new();
        groups.insert(GroupKey::new(96.0, "PVC"), vec![Bin::with_cut(96.0)]);

        let rows = WasteCalculator::calculate(&groups, 0.125);

        assert_eq!(rows[0].leftover, 0.0);
        assert!(rows[0].utilization_pct > 100.0);
    }

    #[test]
    fn test_waste_table() {
        let mut groups = GroupedBins::new();
        groups.insert(GroupKey::new(96.0, "PVC"), vec![Bin::with_cut(48.0)]);

        let table = WasteCalculator::to_table(&WasteCalculator::calculate(&groups, 0.0));

        assert_eq!(table.headers[3], "Bar #");
        assert_eq!(table.cell(0, 4), &Cell::from("[48]"));
        assert_eq!(table.cell(0, 9), &Cell::Number(50.0));
    }
}

//! 分組結果版面（每個分組一欄，每根原料條一行）

use cutlist_core::{sorted_by_total_desc, Cell, GroupedBins, Table};

/// 單一分組的顯示版面
#[derive(Debug, Clone, PartialEq)]
pub struct GroupLayout {
    /// 分組標籤
    pub label: String,

    /// 每根原料條一行，例如 `Group 1: [100, 15]`
    pub lines: Vec<String>,
}

/// 版面產生器
pub struct LayoutBuilder;

impl LayoutBuilder {
    /// 產生各分組版面（原料條依總長由大到小）
    pub fn build(groups: &GroupedBins) -> Vec<GroupLayout> {
        groups
            .iter()
            .map(|(key, bins)| GroupLayout {
                label: key.label(),
                lines: sorted_by_total_desc(bins)
                    .iter()
                    .enumerate()
                    .map(|(i, bin)| format!("Group {}: {}", i + 1, bin.pretty()))
                    .collect(),
            })
            .collect()
    }

    /// 轉為表格：表頭為分組標籤，其下逐行列出原料條
    pub fn to_table(layouts: &[GroupLayout]) -> Table {
        let mut table = Table::new(layouts.iter().map(|l| l.label.clone()));
        let depth = layouts.iter().map(|l| l.lines.len()).max().unwrap_or(0);

        for row in 0..depth {
            table.push_row(
                layouts
                    .iter()
                    .map(|l| match l.lines.get(row) {
                        Some(line) => Cell::Text(line.clone()),
                        None => Cell::Empty,
                    })
                    .collect(),
            );
        }

        table
    }
}

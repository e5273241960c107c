//! 問題報表

use cutlist_core::{Cell, Issue, Table};

/// 問題報表
pub struct IssueReport;

impl IssueReport {
    /// 轉為表格；沒有問題時不產生報表
    pub fn to_table(issues: &[Issue]) -> Option<Table> {
        if issues.is_empty() {
            return None;
        }

        let mut table = Table::new(["Material", "Stock Length", "Cut Length", "Problem"]);
        for issue in issues {
            table.push_row(vec![
                Cell::from(issue.material.clone()),
                Cell::from(issue.stock_length),
                Cell::from(issue.cut_length),
                Cell::from(issue.problem.clone()),
            ]);
        }
        Some(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_issues_no_table() {
        assert!(IssueReport::to_table(&[]).is_none());
    }

    #[test]
    fn test_issue_table() {
        let table = IssueReport::to_table(&[Issue::oversize("Steel Rod", 96.0, 130.0)]).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table.cell(0, 0), &Cell::from("Steel Rod"));
        assert_eq!(table.cell(0, 2), &Cell::Number(130.0));
        assert_eq!(
            table.cell(0, 3),
            &Cell::from(cutlist_core::OVERSIZE_PROBLEM)
        );
    }
}

//! 問題記錄模型

use serde::{Deserialize, Serialize};

/// 超長件無法生產的說明
pub const OVERSIZE_PROBLEM: &str =
    "Cut length exceeds stock; cannot be produced as a single piece.";

/// 拆分所需整根原料超過上限的說明
pub const SPLIT_LIMIT_PROBLEM: &str =
    "Cut length needs more full stock bars than the split limit allows.";

/// 問題記錄（切割件無法排入）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// 材質
    pub material: String,

    /// 原料長度
    pub stock_length: f64,

    /// 切割件長度
    pub cut_length: f64,

    /// 問題描述
    pub problem: String,
}

impl Issue {
    /// 創建超長件問題記錄
    pub fn oversize(material: impl Into<String>, stock_length: f64, cut_length: f64) -> Self {
        Self {
            material: material.into(),
            stock_length,
            cut_length,
            problem: OVERSIZE_PROBLEM.to_string(),
        }
    }

    /// 創建拆分超出上限的問題記錄
    pub fn split_limit(material: impl Into<String>, stock_length: f64, cut_length: f64) -> Self {
        Self {
            material: material.into(),
            stock_length,
            cut_length,
            problem: SPLIT_LIMIT_PROBLEM.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oversize_issue() {
        let issue = Issue::oversize("Steel Rod", 96.0, 130.0);

        assert_eq!(issue.material, "Steel Rod");
        assert_eq!(issue.stock_length, 96.0);
        assert_eq!(issue.cut_length, 130.0);
        assert_eq!(issue.problem, OVERSIZE_PROBLEM);
    }

    #[test]
    fn test_split_limit_issue() {
        let issue = Issue::split_limit("PVC", 1.0, 1e17);

        assert_eq!(issue.problem, SPLIT_LIMIT_PROBLEM);
        assert_ne!(issue.problem, OVERSIZE_PROBLEM);
    }
}

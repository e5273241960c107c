//! 原料條（箱）模型

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::group::{format_length, GroupKey};

/// 可行性檢查的浮點容差
pub const FEASIBILITY_EPSILON: f64 = 1e-6;

/// 分組裝箱結果：分組鍵 → 原料條（依開條順序）
pub type GroupedBins = BTreeMap<GroupKey, Vec<Bin>>;

/// 原料條：一根原料及分配到其上的切割件
///
/// 鋸縫按件計算：`k` 件的原料條承擔 `k` 次鋸縫（含第一件），
/// 超長件拆分時切出的整根原料（`full_stock`）亦同，因此鋸縫大於 0 時
/// 這類原料條在驗證中會被報告為超出原料長度。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bin {
    /// 切割件長度（依放置順序）
    pub cuts: Vec<f64>,

    /// 是否為超長件拆分出的整根原料
    pub full_stock: bool,
}

impl Bin {
    /// 以單一切割件開新條
    pub fn with_cut(cut: f64) -> Self {
        Self {
            cuts: vec![cut],
            full_stock: false,
        }
    }

    /// 整根原料（超長件拆分）
    pub fn full_stock(stock_length: f64) -> Self {
        Self {
            cuts: vec![stock_length],
            full_stock: true,
        }
    }

    /// 放入切割件
    pub fn push(&mut self, cut: f64) {
        self.cuts.push(cut);
    }

    /// 切割件數量
    pub fn len(&self) -> usize {
        self.cuts.len()
    }

    /// 是否沒有切割件
    pub fn is_empty(&self) -> bool {
        self.cuts.is_empty()
    }

    /// 切割件總長
    pub fn total_length(&self) -> f64 {
        self.cuts.iter().sum()
    }

    /// 鋸縫損耗
    pub fn kerf_charge(&self, kerf: f64) -> f64 {
        kerf * self.cuts.len() as f64
    }

    /// 已使用長度（切割件 + 鋸縫）
    pub fn used_length(&self, kerf: f64) -> f64 {
        self.total_length() + self.kerf_charge(kerf)
    }

    /// 剩餘長度（可能為負，表示超出原料長度）
    pub fn remaining(&self, stock_length: f64, kerf: f64) -> f64 {
        stock_length - self.used_length(kerf)
    }

    /// 是否在原料長度內（含容差）
    pub fn is_feasible(&self, stock_length: f64, kerf: f64) -> bool {
        self.used_length(kerf) - stock_length <= FEASIBILITY_EPSILON
    }

    /// 顯示格式，例如 `[100, 15.125]`
    pub fn pretty(&self) -> String {
        let parts: Vec<String> = self.cuts.iter().map(|c| format_length(*c)).collect();
        format!("[{}]", parts.join(", "))
    }
}

/// 依總長由大到小排列（穩定排序，僅供顯示/報表使用）
pub fn sorted_by_total_desc(bins: &[Bin]) -> Vec<&Bin> {
    let mut sorted: Vec<&Bin> = bins.iter().collect();
    sorted.sort_by(|a, b| b.total_length().total_cmp(&a.total_length()));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kerf_per_piece() {
        let mut bin = Bin::with_cut(100.0);
        bin.push(15.0);

        assert_eq!(bin.len(), 2);
        assert_eq!(bin.total_length(), 115.0);
        assert_eq!(bin.kerf_charge(0.125), 0.25);
        assert_eq!(bin.remaining(120.0, 0.125), 4.75);
        assert!(bin.is_feasible(120.0, 0.125));
    }

    #[test]
    fn test_full_stock_bin_is_charged_kerf() {
        let bin = Bin::full_stock(96.0);

        assert!(bin.full_stock);
        assert_eq!(bin.kerf_charge(0.125), 0.125);
        assert_eq!(bin.remaining(96.0, 0.125), -0.125);
        assert!(!bin.is_feasible(96.0, 0.125));
        assert!(bin.is_feasible(96.0, 0.0));
    }

    #[test]
    fn test_infeasible_bin() {
        let bin = Bin::with_cut(96.0);
        assert!(!bin.is_feasible(96.0, 0.125));
        assert!(bin.is_feasible(96.0, 0.0));
    }

    #[test]
    fn test_pretty() {
        let mut bin = Bin::with_cut(100.0);
        bin.push(12.3456);
        assert_eq!(bin.pretty(), "[100, 12.346]");
    }

    #[test]
    fn test_sorted_by_total_desc_is_stable() {
        let bins = vec![
            Bin::with_cut(50.0),
            Bin::with_cut(80.0),
            Bin { cuts: vec![30.0, 20.0], full_stock: false },
        ];
        let sorted = sorted_by_total_desc(&bins);

        assert_eq!(sorted[0].cuts, vec![80.0]);
        assert_eq!(sorted[1].cuts, vec![50.0]);
        assert_eq!(sorted[2].cuts, vec![30.0, 20.0]);
    }
}

//! 分組鍵模型

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// 分組鍵：（原料長度, 材質）
///
/// 每個分組鍵對應一個獨立的裝箱問題。
/// 排序依原料長度、再依材質，與報表輸出順序一致。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupKey {
    /// 原料長度
    pub stock_length: f64,

    /// 材質
    pub material: String,
}

impl GroupKey {
    /// 創建新的分組鍵
    pub fn new(stock_length: f64, material: impl Into<String>) -> Self {
        Self {
            stock_length,
            material: material.into(),
        }
    }

    /// 分組標籤，例如 `120 Steel Rod`、`96.5 PVC`
    pub fn label(&self) -> String {
        format!("{} {}", self.stock_length, self.material)
    }
}

impl PartialEq for GroupKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GroupKey {}

impl PartialOrd for GroupKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for GroupKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.stock_length
            .total_cmp(&other.stock_length)
            .then_with(|| self.material.cmp(&other.material))
    }
}

/// 四捨五入到指定小數位
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// 長度顯示格式：整數原樣輸出，非整數四捨五入到 3 位小數
pub fn format_length(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value)
    } else {
        format!("{}", round_to(value, 3))
    }
}

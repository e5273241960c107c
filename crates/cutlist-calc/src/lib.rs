//! # Cutlist Packing Engine
//!
//! 分組與最佳適配遞減（best-fit decreasing）裝箱引擎

pub mod best_fit;
pub mod grouping;
pub mod layout;
pub mod oversize;
pub mod packer;

// Re-export 主要類型
pub use best_fit::BestFitSelector;
pub use grouping::{GroupingCalculator, GroupingOutcome};
pub use layout::{GroupLayout, LayoutBuilder};
pub use packer::CutPacker;

use cutlist_core::{GroupedBins, Issue};
use serde::{Deserialize, Serialize};

/// 裝箱結果
#[derive(Debug, Clone)]
pub struct PackingResult {
    /// 各分組的原料條（依開條順序）
    pub groups: GroupedBins,

    /// 超長件問題記錄
    pub issues: Vec<Issue>,

    /// 資料品質剔除計數
    pub skipped: SkipCounts,

    /// 警告信息
    pub warnings: Vec<PackingWarning>,

    /// 計算耗時（毫秒）
    pub calculation_time_ms: Option<u128>,
}

impl PackingResult {
    /// 創建空的裝箱結果
    pub fn empty() -> Self {
        Self {
            groups: GroupedBins::new(),
            issues: Vec::new(),
            skipped: SkipCounts::default(),
            warnings: Vec::new(),
            calculation_time_ms: None,
        }
    }

    /// 添加警告
    pub fn add_warning(&mut self, warning: PackingWarning) {
        self.warnings.push(warning);
    }

    /// 原料條總數
    pub fn total_bars(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}

/// 資料品質剔除計數
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipCounts {
    /// 切割長度非數值或不為正，被剔除的列
    pub dropped_cuts: usize,

    /// 原料長度非數值或不為正，整列略過
    pub skipped_rows: usize,
}

impl SkipCounts {
    /// 剔除總數
    pub fn total(&self) -> usize {
        self.dropped_cuts + self.skipped_rows
    }
}

/// 裝箱警告
#[derive(Debug, Clone, PartialEq)]
pub struct PackingWarning {
    pub material: String,
    pub message: String,
    pub severity: WarningSeverity,
}

impl PackingWarning {
    pub fn new(material: String, message: String, severity: WarningSeverity) -> Self {
        Self {
            material,
            message,
            severity,
        }
    }

    pub fn info(material: String, message: String) -> Self {
        Self::new(material, message, WarningSeverity::Info)
    }

    pub fn warning(material: String, message: String) -> Self {
        Self::new(material, message, WarningSeverity::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    Info,
    Warning,
}

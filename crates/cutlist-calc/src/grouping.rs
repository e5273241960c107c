//! 按（原料長度, 材質）分組

use cutlist_core::{CutRequest, GroupKey};
use std::collections::BTreeMap;

use crate::SkipCounts;

/// 分組結果
#[derive(Debug, Clone, Default)]
pub struct GroupingOutcome {
    /// 分組鍵 → 切割長度（輸入順序）
    pub groups: BTreeMap<GroupKey, Vec<f64>>,

    /// 資料品質剔除計數
    pub skipped: SkipCounts,
}

/// 分組計算器
pub struct GroupingCalculator;

impl GroupingCalculator {
    /// 將切割需求按分組鍵歸類
    ///
    /// - 原料長度非數值或不為正：整列略過，不建立分組
    /// - 切割長度非數值或不為正：剔除該件，分組仍保留（可能為空）
    pub fn group(requests: &[CutRequest]) -> GroupingOutcome {
        let mut outcome = GroupingOutcome::default();

        for request in requests {
            let stock_length = match request.stock_length.as_f64() {
                Some(v) if v > 0.0 => v,
                _ => {
                    tracing::debug!(
                        "略過原料長度無效的列: 材質 {}, 原料長度 {:?}",
                        request.material,
                        request.stock_length
                    );
                    outcome.skipped.skipped_rows += 1;
                    continue;
                }
            };

            let cuts = outcome
                .groups
                .entry(GroupKey::new(stock_length, request.material.clone()))
                .or_default();

            match request.cut_length.as_f64() {
                Some(cut) if cut > 0.0 => cuts.push(cut),
                _ => {
                    tracing::debug!(
                        "剔除切割長度無效的列: 材質 {}, 切割長度 {:?}",
                        request.material,
                        request.cut_length
                    );
                    outcome.skipped.dropped_cuts += 1;
                }
            }
        }

        outcome
    }

    /// 切割長度由長到短排列（穩定排序）
    pub fn sort_descending(cuts: &mut [f64]) {
        cuts.sort_by(|a, b| b.total_cmp(a));
    }
}

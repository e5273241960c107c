//! 下料裝箱主計算器

use cutlist_core::{Bin, CutRequest, GroupKey, Issue, PackingConfig};
use rayon::prelude::*;

use crate::best_fit::BestFitSelector;
use crate::grouping::GroupingCalculator;
use crate::oversize::{OversizeHandler, OversizeOutcome};
use crate::{PackingResult, PackingWarning};

/// 單一分組的裝箱結果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroupPacking {
    /// 原料條（依開條順序）
    pub bins: Vec<Bin>,

    /// 超長件問題記錄
    pub issues: Vec<Issue>,
}

/// 下料裝箱計算器
pub struct CutPacker {
    /// 裝箱參數
    config: PackingConfig,
}

impl CutPacker {
    /// 創建新的裝箱計算器
    pub fn new(config: PackingConfig) -> Self {
        Self { config }
    }

    /// 裝箱主入口
    ///
    /// 各分組互不影響，並行計算；結果按分組鍵排序，與排程無關。
    pub fn pack(&self, requests: &[CutRequest]) -> cutlist_core::Result<PackingResult> {
        self.config.validate()?;

        tracing::info!(
            "開始裝箱：切割需求 {} 筆，鋸縫 {}，允許拆分超長件 {}",
            requests.len(),
            self.config.kerf,
            self.config.allow_split_oversize
        );

        let start_time = std::time::Instant::now();

        // Step 1: 分組
        tracing::debug!("Step 1: 按原料長度與材質分組");
        let grouping = GroupingCalculator::group(requests);
        tracing::debug!("分組數量: {}", grouping.groups.len());

        // Step 2: 逐分組裝箱（並行）
        tracing::debug!("Step 2: 逐分組裝箱");
        let groups: Vec<(GroupKey, Vec<f64>)> = grouping.groups.into_iter().collect();
        let packed: Vec<(GroupKey, GroupPacking)> = groups
            .into_par_iter()
            .map(|(key, cuts)| {
                let packing = self.pack_group(&key, cuts);
                (key, packing)
            })
            .collect();

        // Step 3: 匯總
        let mut result = PackingResult::empty();
        result.skipped = grouping.skipped;

        for (key, packing) in packed {
            if !packing.issues.is_empty() {
                result.add_warning(PackingWarning::warning(
                    key.material.clone(),
                    format!(
                        "分組 {} 有 {} 件超過原料長度，未排入",
                        key.label(),
                        packing.issues.len()
                    ),
                ));
            }
            result.issues.extend(packing.issues);
            result.groups.insert(key, packing.bins);
        }

        if grouping.skipped.dropped_cuts > 0 {
            tracing::warn!("剔除切割長度無效的列: {} 筆", grouping.skipped.dropped_cuts);
            result.add_warning(PackingWarning::warning(
                String::new(),
                format!(
                    "{} 筆切割長度非數值或不為正，已剔除",
                    grouping.skipped.dropped_cuts
                ),
            ));
        }
        if grouping.skipped.skipped_rows > 0 {
            tracing::warn!("略過原料長度無效的列: {} 筆", grouping.skipped.skipped_rows);
            result.add_warning(PackingWarning::warning(
                String::new(),
                format!(
                    "{} 筆原料長度非數值或不為正，已略過",
                    grouping.skipped.skipped_rows
                ),
            ));
        }

        result.calculation_time_ms = Some(start_time.elapsed().as_millis());

        tracing::info!("裝箱完成，耗時 {:?}", start_time.elapsed());
        tracing::info!(
            "分組 {} 個，原料條 {} 根，問題 {} 筆",
            result.groups.len(),
            result.total_bars(),
            result.issues.len()
        );

        Ok(result)
    }

    /// 單一分組裝箱（最佳適配遞減）
    ///
    /// 原料條只存在於本次呼叫內，不與其他分組共享。
    pub fn pack_group(&self, key: &GroupKey, mut cuts: Vec<f64>) -> GroupPacking {
        GroupingCalculator::sort_descending(&mut cuts);

        let stock_length = key.stock_length;
        let kerf = self.config.kerf;
        let mut packing = GroupPacking::default();

        for cut in cuts {
            let piece = match OversizeHandler::resolve(
                key,
                cut,
                self.config.allow_split_oversize,
                &mut packing.bins,
            ) {
                OversizeOutcome::Place(piece) => piece,
                OversizeOutcome::Rejected(issue) => {
                    packing.issues.push(issue);
                    continue;
                }
            };

            match BestFitSelector::select(&packing.bins, stock_length, kerf, piece) {
                Some(idx) => packing.bins[idx].push(piece),
                None => packing.bins.push(Bin::with_cut(piece)),
            }
        }

        tracing::debug!(
            "分組 {} 裝箱: 原料條 {} 根，問題 {} 筆",
            key.label(),
            packing.bins.len(),
            packing.issues.len()
        );

        packing
    }

    /// 獲取裝箱參數
    pub fn config(&self) -> &PackingConfig {
        &self.config
    }
}

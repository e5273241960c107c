//! 超長件處理

use cutlist_core::{Bin, GroupKey, Issue};

/// 超長件處理結果
#[derive(Debug, Clone, PartialEq)]
pub enum OversizeOutcome {
    /// 切割件（或拆分後餘料）可進入裝箱
    Place(f64),
    /// 無法排入（未允許拆分或超過拆分上限），記為問題
    Rejected(Issue),
}

/// 單一切割件最多可拆出的整根原料數
pub const MAX_SPLIT_BARS: usize = 10_000;

/// 超長件處理器
pub struct OversizeHandler;

impl OversizeHandler {
    /// 處理單一切割件
    ///
    /// 不超長的切割件原樣返回。超長且允許拆分時，切出整根原料追加到 `bins`，
    /// 餘料（落在 `(0, 原料長度]`）返回繼續裝箱；所需整根原料超過
    /// [`MAX_SPLIT_BARS`] 時記為問題，不產生任何原料條。
    pub fn resolve(
        key: &GroupKey,
        cut: f64,
        allow_split: bool,
        bins: &mut Vec<Bin>,
    ) -> OversizeOutcome {
        let stock_length = key.stock_length;
        if cut <= stock_length {
            return OversizeOutcome::Place(cut);
        }

        if !allow_split {
            tracing::warn!(
                "切割件超過原料長度: 分組 {}, 切割長度 {}",
                key.label(),
                cut
            );
            return OversizeOutcome::Rejected(Issue::oversize(
                key.material.clone(),
                stock_length,
                cut,
            ));
        }

        let Some((carved, remainder)) = Self::split(cut, stock_length) else {
            tracing::warn!(
                "拆分所需整根原料超過上限 {}: 分組 {}, 切割長度 {}",
                MAX_SPLIT_BARS,
                key.label(),
                cut
            );
            return OversizeOutcome::Rejected(Issue::split_limit(
                key.material.clone(),
                stock_length,
                cut,
            ));
        };

        bins.extend((0..carved).map(|_| Bin::full_stock(stock_length)));

        tracing::debug!(
            "拆分超長件: 分組 {}, 切割長度 {} → 整根 {} 條 + 餘料 {}",
            key.label(),
            cut,
            carved,
            remainder
        );

        OversizeOutcome::Place(remainder)
    }

    /// 計算拆分：返回（整根原料數, 餘料）
    ///
    /// 整根數為 `ceil(cut / stock_length) - 1`，恰為整數倍時最後一段保留為
    /// 整長餘料。超過 [`MAX_SPLIT_BARS`] 或無法表示時返回 `None`。
    pub fn split(cut: f64, stock_length: f64) -> Option<(usize, f64)> {
        let bars = (cut / stock_length).ceil() - 1.0;
        if !bars.is_finite() || bars > MAX_SPLIT_BARS as f64 {
            return None;
        }

        let mut carved = bars.max(0.0) as usize;
        let mut remainder = cut - carved as f64 * stock_length;

        // 浮點誤差校正
        if remainder > stock_length {
            carved += 1;
            remainder -= stock_length;
        } else if remainder <= 0.0 && carved > 0 {
            carved -= 1;
            remainder += stock_length;
        }
        if carved > MAX_SPLIT_BARS {
            return None;
        }

        Some((carved, remainder.clamp(f64::MIN_POSITIVE, stock_length)))
    }
}

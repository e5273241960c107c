//! 最佳適配選條

use cutlist_core::Bin;

/// 最佳適配選擇器
pub struct BestFitSelector;

impl BestFitSelector {
    /// 為切割件選擇放入後剩餘最少的原料條
    ///
    /// 可放入條件：`剩餘長度 >= 切割件 + 鋸縫`（空條的第一件不加鋸縫）。
    /// 剩餘相同時取開條順序最早者；整根原料條不參與選擇。
    /// 沒有可放入的原料條時返回 `None`。
    pub fn select(bins: &[Bin], stock_length: f64, kerf: f64, piece: f64) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;

        for (idx, bin) in bins.iter().enumerate() {
            if bin.full_stock {
                continue;
            }

            let remaining = bin.remaining(stock_length, kerf);
            let needed = piece + if bin.is_empty() { 0.0 } else { kerf };
            if remaining < needed {
                continue;
            }

            let leftover = remaining - needed;
            match best {
                Some((_, least)) if leftover >= least => {}
                _ => best = Some((idx, leftover)),
            }
        }

        best.map(|(idx, _)| idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bin(cuts: &[f64]) -> Bin {
        Bin {
            cuts: cuts.to_vec(),
            full_stock: false,
        }
    }

    #[test]
    fn test_no_bins() {
        assert_eq!(BestFitSelector::select(&[], 120.0, 0.125, 50.0), None);
    }

    #[test]
    fn test_piece_does_not_fit() {
        // 120 - 100.125 = 19.875 < 50.125
        let bins = vec![bin(&[100.0])];
        assert_eq!(BestFitSelector::select(&bins, 120.0, 0.125, 50.0), None);
    }

    #[test]
    fn test_piece_fits() {
        // 19.875 >= 15.125
        let bins = vec![bin(&[100.0])];
        assert_eq!(BestFitSelector::select(&bins, 120.0, 0.125, 15.0), Some(0));
    }

    #[test]
    fn test_least_leftover_wins() {
        let bins = vec![bin(&[60.0]), bin(&[90.0]), bin(&[80.0])];
        // 剩餘：60 → 60, 90 → 30, 80 → 40；放入 25 後 90 的剩餘最少
        assert_eq!(BestFitSelector::select(&bins, 120.0, 0.0, 25.0), Some(1));
    }

    #[test]
    fn test_tie_breaks_on_first_bin() {
        let bins = vec![bin(&[50.0]), bin(&[70.0]), bin(&[70.0])];
        assert_eq!(BestFitSelector::select(&bins, 120.0, 0.0, 30.0), Some(1));
    }

    #[test]
    fn test_exact_fit() {
        let bins = vec![bin(&[60.0])];
        // 120 - 60.5 = 59.5 >= 59 + 0.5
        assert_eq!(BestFitSelector::select(&bins, 120.0, 0.5, 59.0), Some(0));
    }

    #[test]
    fn test_full_stock_bins_are_skipped() {
        let bins = vec![Bin::full_stock(96.0), bin(&[10.0])];
        assert_eq!(BestFitSelector::select(&bins, 96.0, 0.0, 5.0), Some(1));
    }
}

//! 鋸縫寬度解析

use crate::{CutlistError, Result};

/// 解析鋸縫寬度
///
/// 接受十進位（`0.125`）或簡單分數（`1/8`）。
/// 空白輸入、無法解析、除以零與負值均為錯誤。
pub fn parse_kerf(text: &str) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(CutlistError::EmptyKerf);
    }

    let invalid = || CutlistError::InvalidKerf(trimmed.to_string());

    let value = match trimmed.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.trim().parse().map_err(|_| invalid())?;
            let denominator: f64 = denominator.trim().parse().map_err(|_| invalid())?;
            if denominator == 0.0 {
                return Err(invalid());
            }
            numerator / denominator
        }
        None => trimmed.parse::<f64>().map_err(|_| invalid())?,
    };

    if !value.is_finite() {
        return Err(invalid());
    }
    if value < 0.0 {
        return Err(CutlistError::NegativeKerf(value));
    }

    Ok(value)
}

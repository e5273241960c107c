//! 切割需求模型

use serde::{Deserialize, Serialize};

use crate::table::{Cell, Table};
use crate::{CutlistError, Result};

/// 切割長度欄位
pub const CUT_LENGTH_COLUMN: &str = "Cut Length";

/// 原料長度欄位
pub const STOCK_LENGTH_COLUMN: &str = "Max Length";

/// 材質欄位
pub const MATERIAL_COLUMN: &str = "Material Type";

/// 切割需求（輸入表的一列）
///
/// 長度保留原始儲存格，數值轉換失敗的列在裝箱時剔除並計數。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CutRequest {
    /// 切割長度
    pub cut_length: Cell,

    /// 原料長度
    pub stock_length: Cell,

    /// 材質
    pub material: String,
}

impl CutRequest {
    /// 以數值創建切割需求
    pub fn new(cut_length: f64, stock_length: f64, material: impl Into<String>) -> Self {
        Self {
            cut_length: Cell::Number(cut_length),
            stock_length: Cell::Number(stock_length),
            material: material.into(),
        }
    }

    /// 以原始儲存格創建切割需求
    pub fn from_cells(cut_length: Cell, stock_length: Cell, material: impl Into<String>) -> Self {
        Self {
            cut_length,
            stock_length,
            material: material.into(),
        }
    }

    /// 從輸入表讀取切割需求
    ///
    /// 三個必要欄位缺一即返回 [`CutlistError::MissingColumns`]，不產生任何部分結果。
    pub fn from_table(table: &Table) -> Result<Vec<CutRequest>> {
        let required = [CUT_LENGTH_COLUMN, STOCK_LENGTH_COLUMN, MATERIAL_COLUMN];

        let mut missing: Vec<String> = required
            .iter()
            .filter(|name| table.column_index(name).is_none())
            .map(|name| name.to_string())
            .collect();

        let (cut_idx, stock_idx, material_idx) = match (
            table.column_index(CUT_LENGTH_COLUMN),
            table.column_index(STOCK_LENGTH_COLUMN),
            table.column_index(MATERIAL_COLUMN),
        ) {
            (Some(c), Some(s), Some(m)) => (c, s, m),
            _ => {
                missing.sort();
                let mut required: Vec<String> = required.iter().map(|s| s.to_string()).collect();
                required.sort();
                return Err(CutlistError::MissingColumns { required, missing });
            }
        };

        let requests = (0..table.len())
            .map(|row| {
                CutRequest::from_cells(
                    table.cell(row, cut_idx).clone(),
                    table.cell(row, stock_idx).clone(),
                    table.cell(row, material_idx).as_text(),
                )
            })
            .collect();

        Ok(requests)
    }
}

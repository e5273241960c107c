//! 表格模型（輸入表與報表記錄的共同契約）

use serde::{Deserialize, Serialize};

use crate::group::format_length;

/// 儲存格
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cell {
    /// 數值
    Number(f64),
    /// 文字
    Text(String),
    /// 空白
    Empty,
}

impl Cell {
    /// 數值轉換
    ///
    /// 數值直接返回；文字去除空白後按十進位解析；
    /// 空白、無法解析或非有限值（NaN、±inf）視為非數值。
    pub fn as_f64(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(v) => *v,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            Cell::Empty => return None,
        };
        value.is_finite().then_some(value)
    }

    /// 文字轉換（數值按長度格式輸出，空白為空字串）
    pub fn as_text(&self) -> String {
        match self {
            Cell::Number(v) => format_length(*v),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }

    /// 是否為空白（空字串亦視為空白）
    pub fn is_blank(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            Cell::Number(_) => false,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::Number(value)
    }
}

impl From<usize> for Cell {
    fn from(value: usize) -> Self {
        Cell::Number(value as f64)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

/// 表格：具名欄位 + 資料列
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// 欄位名稱（精確比對、區分大小寫）
    pub headers: Vec<String>,

    /// 資料列
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    /// 創建只有表頭的表格
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// 建構器模式：添加一列
    pub fn with_row(mut self, row: Vec<Cell>) -> Self {
        self.rows.push(row);
        self
    }

    /// 添加一列
    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// 查找欄位索引
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// 讀取儲存格（列長度不足時視為空白）
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        static EMPTY: Cell = Cell::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY)
    }

    /// 資料列數
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 是否沒有資料列
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

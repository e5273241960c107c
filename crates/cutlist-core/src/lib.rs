//! # Cutlist Core
//!
//! 核心資料模型與類型定義

pub mod bin;
pub mod config;
pub mod group;
pub mod issue;
pub mod kerf;
pub mod request;
pub mod table;

// Re-export 主要類型
pub use bin::{sorted_by_total_desc, Bin, GroupedBins, FEASIBILITY_EPSILON};
pub use config::{OutputOptions, PackingConfig, ReportOptions, RunConfig, DEFAULT_SHEET_NAME};
pub use group::{format_length, round_to, GroupKey};
pub use issue::{Issue, OVERSIZE_PROBLEM, SPLIT_LIMIT_PROBLEM};
pub use kerf::parse_kerf;
pub use request::{CutRequest, CUT_LENGTH_COLUMN, MATERIAL_COLUMN, STOCK_LENGTH_COLUMN};
pub use table::{Cell, Table};

/// 下料錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum CutlistError {
    #[error("輸入表缺少必要欄位: {missing:?}（必要欄位: {required:?}）")]
    MissingColumns {
        required: Vec<String>,
        missing: Vec<String>,
    },

    #[error("Kerf width is required.")]
    EmptyKerf,

    #[error("Invalid kerf format. Use decimal like 0.125 or fraction like 1/8. (輸入: {0})")]
    InvalidKerf(String),

    #[error("Kerf cannot be negative. (值: {0})")]
    NegativeKerf(f64),

    #[error("無效的配置: {0}")]
    InvalidConfig(String),

    #[error("其他錯誤: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, CutlistError>;

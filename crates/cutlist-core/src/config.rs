//! 下料配置模型

use serde::{Deserialize, Serialize};

use crate::kerf::parse_kerf;
use crate::{CutlistError, Result};

/// 預設的分組結果工作表名稱
pub const DEFAULT_SHEET_NAME: &str = "Grouped Cuts";

/// 裝箱參數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PackingConfig {
    /// 鋸縫寬度（每件計一次）
    pub kerf: f64,

    /// 是否允許拆分超長件
    /// - true: 超長件切出整根原料，餘料繼續裝箱
    /// - false: 超長件記為問題並略過（預設）
    pub allow_split_oversize: bool,
}

impl PackingConfig {
    /// 創建新的裝箱參數
    pub fn new(kerf: f64) -> Self {
        Self {
            kerf,
            allow_split_oversize: false,
        }
    }

    /// 建構器模式：設置是否允許拆分超長件
    pub fn with_allow_split_oversize(mut self, allow: bool) -> Self {
        self.allow_split_oversize = allow;
        self
    }

    /// 檢查參數
    pub fn validate(&self) -> Result<()> {
        if !self.kerf.is_finite() {
            return Err(CutlistError::InvalidConfig(format!(
                "鋸縫寬度必須為有限值: {}",
                self.kerf
            )));
        }
        if self.kerf < 0.0 {
            return Err(CutlistError::NegativeKerf(self.kerf));
        }
        Ok(())
    }
}

impl Default for PackingConfig {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// 報表選項
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportOptions {
    /// 彙總表（同時輸出採購表）
    pub summary: bool,

    /// 驗證表
    pub validation: bool,

    /// 損耗明細表
    pub waste_report: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            summary: true,
            validation: false,
            waste_report: false,
        }
    }
}

/// 輸出選項
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// 分組結果工作表名稱
    pub sheet_name: String,

    /// 同名工作表存在時是否覆蓋（否則加序號）
    pub overwrite_sheet: bool,

    /// 是否寫入帶時間戳的副本
    pub write_to_copy: bool,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            sheet_name: DEFAULT_SHEET_NAME.to_string(),
            overwrite_sheet: false,
            write_to_copy: false,
        }
    }
}

/// 一次執行的完整配置（可持久化）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// 使用者輸入的鋸縫寬度文字，例如 `1/8` 或 `0.125`
    pub kerf_text: String,

    /// 是否允許拆分超長件
    pub allow_split_oversize: bool,

    /// 報表選項
    pub reports: ReportOptions,

    /// 輸出選項
    pub output: OutputOptions,
}

impl RunConfig {
    /// 創建新的執行配置
    pub fn new(kerf_text: impl Into<String>) -> Self {
        Self {
            kerf_text: kerf_text.into(),
            ..Self::default()
        }
    }

    /// 建構器模式：設置是否允許拆分超長件
    pub fn with_allow_split_oversize(mut self, allow: bool) -> Self {
        self.allow_split_oversize = allow;
        self
    }

    /// 建構器模式：設置報表選項
    pub fn with_reports(mut self, reports: ReportOptions) -> Self {
        self.reports = reports;
        self
    }

    /// 建構器模式：設置輸出選項
    pub fn with_output(mut self, output: OutputOptions) -> Self {
        self.output = output;
        self
    }

    /// 解析鋸縫並產生裝箱參數
    pub fn packing_config(&self) -> Result<PackingConfig> {
        let kerf = parse_kerf(&self.kerf_text)?;
        Ok(PackingConfig::new(kerf).with_allow_split_oversize(self.allow_split_oversize))
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            kerf_text: String::new(),
            allow_split_oversize: false,
            reports: ReportOptions::default(),
            output: OutputOptions::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packing_config_builder() {
        let config = PackingConfig::new(0.125).with_allow_split_oversize(true);

        assert_eq!(config.kerf, 0.125);
        assert!(config.allow_split_oversize);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_packing_config_rejects_bad_kerf() {
        assert!(matches!(
            PackingConfig::new(-0.5).validate(),
            Err(CutlistError::NegativeKerf(_))
        ));
        assert!(matches!(
            PackingConfig::new(f64::NAN).validate(),
            Err(CutlistError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_run_config_defaults() {
        let config = RunConfig::default();

        assert!(config.reports.summary);
        assert!(!config.reports.validation);
        assert_eq!(config.output.sheet_name, DEFAULT_SHEET_NAME);
        assert!(matches!(config.packing_config(), Err(CutlistError::EmptyKerf)));
    }

    #[test]
    fn test_run_config_packing() {
        let config = RunConfig::new("1/8").with_allow_split_oversize(true);
        let packing = config.packing_config().unwrap();

        assert_eq!(packing.kerf, 0.125);
        assert!(packing.allow_split_oversize);
    }

    #[test]
    fn test_run_config_partial_json() {
        let config: RunConfig =
            serde_json::from_str(r#"{"kerf_text": "0.125", "reports": {"waste_report": true}}"#)
                .unwrap();

        assert_eq!(config.kerf_text, "0.125");
        assert!(config.reports.summary);
        assert!(config.reports.waste_report);
        assert!(!config.output.overwrite_sheet);
    }
}

//! 輸入表讀取
//!
//! 第一列為表頭，完全空白的列略過；數值轉換留給裝箱引擎處理。

use calamine::{open_workbook_auto, Data, Reader};
use csv::ReaderBuilder;
use cutlist_core::{Cell, Table};
use std::fs::File;
use std::path::Path;

use crate::{IoError, Result};

/// 輸入表讀取器
pub trait TableReader {
    fn read_table(&self, path: &Path) -> Result<Table>;
}

fn ensure_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(IoError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

fn text_cell(value: &str) -> Cell {
    let value = value.trim();
    if value.is_empty() {
        Cell::Empty
    } else {
        Cell::Text(value.to_string())
    }
}

// ==========================================
// CSV
// ==========================================
pub struct CsvTableReader;

impl TableReader for CsvTableReader {
    fn read_table(&self, path: &Path) -> Result<Table> {
        ensure_exists(path)?;

        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允許列長度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        let mut table = Table::new(headers);

        for record in reader.records() {
            let record = record?;
            let row: Vec<Cell> = record.iter().map(text_cell).collect();

            if row.iter().all(Cell::is_blank) {
                continue;
            }
            table.push_row(row);
        }

        tracing::debug!("讀取 CSV {}: {} 列", path.display(), table.len());
        Ok(table)
    }
}

// ==========================================
// Excel（第一個工作表）
// ==========================================
pub struct ExcelTableReader;

impl ExcelTableReader {
    fn convert(data: &Data) -> Cell {
        match data {
            Data::Float(v) => Cell::Number(*v),
            Data::Int(v) => Cell::Number(*v as f64),
            Data::String(s) => text_cell(s),
            Data::Empty => Cell::Empty,
            other => text_cell(&other.to_string()),
        }
    }
}

impl TableReader for ExcelTableReader {
    fn read_table(&self, path: &Path) -> Result<Table> {
        ensure_exists(path)?;

        let mut workbook =
            open_workbook_auto(path).map_err(|e| IoError::ExcelParseError(e.to_string()))?;

        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| IoError::ExcelParseError("Excel 檔案沒有工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| IoError::ExcelParseError(e.to_string()))?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| IoError::ExcelParseError("Excel 檔案沒有表頭列".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();
        let mut table = Table::new(headers);

        for data_row in rows {
            let row: Vec<Cell> = data_row.iter().map(Self::convert).collect();

            if row.iter().all(Cell::is_blank) {
                continue;
            }
            table.push_row(row);
        }

        tracing::debug!(
            "讀取 Excel {} [{}]: {} 列",
            path.display(),
            sheet_name,
            table.len()
        );
        Ok(table)
    }
}

/// 依副檔名選擇讀取器
pub fn read_table<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => CsvTableReader.read_table(path),
        "xlsx" | "xlsm" | "xls" => ExcelTableReader.read_table(path),
        _ => Err(IoError::UnsupportedFormat(ext)),
    }
}

//! 結果寫入（命名衝突處理）

use cutlist_core::{OutputOptions, Table};

use crate::sink::ResultSink;
use crate::Result;

/// 決定分組結果的輸出名稱
///
/// - 名稱不存在或允許覆蓋：使用原名（覆蓋由 `write_table` 整體替換，
///   寫入失敗時舊輸出保持不變）
/// - 名稱已存在且不覆蓋：依序嘗試 `"<名稱> 1"`、`"<名稱> 2"` ... 直到不衝突
pub fn resolve_destination_name<S: ResultSink + ?Sized>(
    sink: &S,
    base: &str,
    overwrite: bool,
) -> String {
    if overwrite || !sink.has_destination(base) {
        return base.to_string();
    }

    let mut counter = 1usize;
    loop {
        let candidate = format!("{} {}", base, counter);
        if !sink.has_destination(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}

/// 寫入分組結果，回傳實際使用的輸出名稱
pub fn write_grouped_cuts<S: ResultSink + ?Sized>(
    sink: &mut S,
    table: &Table,
    options: &OutputOptions,
) -> Result<String> {
    let name = resolve_destination_name(sink, &options.sheet_name, options.overwrite_sheet);
    sink.write_table(&name, table)?;

    tracing::info!("分組結果寫入 {}（{} 組）", name, table.headers.len());
    Ok(name)
}

/// 寫入報表（同名時原地替換）
pub fn write_report<S: ResultSink + ?Sized>(sink: &mut S, name: &str, table: &Table) -> Result<()> {
    sink.write_table(name, table)?;
    tracing::debug!("報表寫入 {}", name);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{CsvDirectorySink, MemorySink};
    use crate::IoError;
    use cutlist_core::Cell;
    use rstest::rstest;

    /// 寫入一律失敗的輸出目的地
    #[derive(Default)]
    struct FailingSink {
        inner: MemorySink,
    }

    impl ResultSink for FailingSink {
        fn has_destination(&self, name: &str) -> bool {
            self.inner.has_destination(name)
        }

        fn remove_destination(&mut self, name: &str) -> Result<()> {
            self.inner.remove_destination(name)
        }

        fn write_table(&mut self, name: &str, _table: &Table) -> Result<()> {
            Err(IoError::WriteError {
                destination: name.to_string(),
                message: "disk full".to_string(),
            })
        }

        fn destinations(&self) -> Result<Vec<String>> {
            self.inner.destinations()
        }
    }

    fn failing_sink_with(name: &str, table: Table) -> FailingSink {
        let mut sink = FailingSink::default();
        sink.inner.tables.insert(name.to_string(), table);
        sink
    }

    fn layout_table() -> Table {
        Table::new(["120 Steel Rod"]).with_row(vec![Cell::from("Group 1: [100, 15]")])
    }

    fn options(overwrite: bool) -> OutputOptions {
        OutputOptions {
            overwrite_sheet: overwrite,
            ..OutputOptions::default()
        }
    }

    #[test]
    fn test_fresh_name_is_used() {
        let mut sink = MemorySink::default();

        let name = write_grouped_cuts(&mut sink, &layout_table(), &options(false)).unwrap();

        assert_eq!(name, "Grouped Cuts");
        assert!(sink.has_destination("Grouped Cuts"));
    }

    #[test]
    fn test_collisions_get_incrementing_suffix() {
        let mut sink = MemorySink::default();

        let names: Vec<String> = (0..3)
            .map(|_| write_grouped_cuts(&mut sink, &layout_table(), &options(false)).unwrap())
            .collect();

        assert_eq!(names, vec!["Grouped Cuts", "Grouped Cuts 1", "Grouped Cuts 2"]);
    }

    #[rstest]
    #[case(vec![], "Grouped Cuts")]
    #[case(vec!["Grouped Cuts"], "Grouped Cuts 1")]
    #[case(vec!["Grouped Cuts", "Grouped Cuts 1"], "Grouped Cuts 2")]
    #[case(vec!["Grouped Cuts", "Grouped Cuts 2"], "Grouped Cuts 1")]
    fn test_resolve_name(#[case] existing: Vec<&str>, #[case] expected: &str) {
        let mut sink = MemorySink::default();
        for name in existing {
            sink.write_table(name, &Table::new(["x"])).unwrap();
        }

        let name = resolve_destination_name(&sink, "Grouped Cuts", false);

        assert_eq!(name, expected);
    }

    #[test]
    fn test_overwrite_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvDirectorySink::open(dir.path()).unwrap();

        write_grouped_cuts(&mut sink, &Table::new(["old"]), &options(false)).unwrap();
        let name = write_grouped_cuts(&mut sink, &layout_table(), &options(true)).unwrap();

        assert_eq!(name, "Grouped Cuts");
        assert_eq!(sink.destinations().unwrap(), vec!["Grouped Cuts"]);
        let content = std::fs::read_to_string(dir.path().join("Grouped Cuts.csv")).unwrap();
        assert!(content.starts_with("120 Steel Rod"));
    }

    #[test]
    fn test_failed_overwrite_keeps_previous_grouped_cuts() {
        let mut sink = failing_sink_with("Grouped Cuts", Table::new(["old"]));

        let result = write_grouped_cuts(&mut sink, &layout_table(), &options(true));

        assert!(matches!(result, Err(IoError::WriteError { .. })));
        assert_eq!(sink.inner.tables["Grouped Cuts"].headers, vec!["old"]);
    }

    #[test]
    fn test_failed_report_write_keeps_previous_report() {
        let mut sink = failing_sink_with("Summary", Table::new(["old"]));

        let result = write_report(&mut sink, "Summary", &Table::new(["new"]));

        assert!(matches!(result, Err(IoError::WriteError { .. })));
        assert_eq!(sink.inner.tables["Summary"].headers, vec!["old"]);
    }

    #[test]
    fn test_reports_replaced_in_place() {
        let mut sink = MemorySink::default();

        write_report(&mut sink, "Summary", &Table::new(["old"])).unwrap();
        write_report(&mut sink, "Summary", &Table::new(["new"])).unwrap();

        assert_eq!(sink.destinations().unwrap(), vec!["Summary"]);
        assert_eq!(sink.tables["Summary"].headers, vec!["new"]);
    }
}

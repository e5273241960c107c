//! # Cutlist
//!
//! 線材下料最佳化：依（原料長度, 材質）分組，以最佳適配遞減法排料，
//! 並輸出分組結果與彙總、驗證、損耗、採購、問題報表。
//!
//! ## 範例
//!
//! ```no_run
//! use cutlist::{run, RunConfig};
//!
//! let config = RunConfig::new("1/8").with_allow_split_oversize(true);
//! let outcome = run("cuts.csv", "out", &config)?;
//! println!("{:?}", outcome.destinations);
//! # Ok::<(), cutlist::IoError>(())
//! ```

pub mod logging;
pub mod pipeline;

pub use pipeline::{run, RunOutcome};

pub use cutlist_calc::{CutPacker, LayoutBuilder, PackingResult, SkipCounts};
pub use cutlist_core::{
    parse_kerf, Bin, Cell, CutRequest, CutlistError, GroupKey, GroupedBins, Issue, OutputOptions,
    PackingConfig, ReportOptions, RunConfig, Table,
};
pub use cutlist_io::{
    default_settings_path, load_settings, read_table, save_settings, CsvDirectorySink, IoError,
    ResultSink,
};
pub use cutlist_report::{MetricsEngine, MetricsReport};

//! cutlist CLI - 線材下料最佳化
//!
//! 讀取切割需求表（CSV / Excel），輸出分組結果與報表。

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use cutlist::{default_settings_path, load_settings, logging, run, save_settings, RunConfig};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "cutlist")]
#[command(about = "Group cut requests by stock length and material and pack them into bars", long_about = None)]
struct Cli {
    /// Settings file (default: user config dir, or $CUTLIST_SETTINGS_PATH)
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize a cut list
    Run(RunArgs),
}

#[derive(clap::Args)]
struct RunArgs {
    /// Input table (.csv, .xlsx, .xlsm, .xls)
    input: PathBuf,

    /// Output directory (default: <input dir>/<input name>)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Saw kerf width, decimal or fraction (e.g. 0.125 or 1/8)
    #[arg(short, long)]
    kerf: Option<String>,

    /// Split cuts longer than the stock into full bars plus a remainder
    #[arg(long, overrides_with = "no_split_oversize")]
    split_oversize: bool,

    /// Report cuts longer than the stock as issues
    #[arg(long, overrides_with = "split_oversize")]
    no_split_oversize: bool,

    /// Write the Summary and Procurement reports
    #[arg(long, overrides_with = "no_summary")]
    summary: bool,

    /// Skip the Summary and Procurement reports
    #[arg(long, overrides_with = "summary")]
    no_summary: bool,

    /// Add the Validation report
    #[arg(long, overrides_with = "no_validation")]
    validation: bool,

    /// Skip the Validation report
    #[arg(long, overrides_with = "validation")]
    no_validation: bool,

    /// Add the Waste Report
    #[arg(long, overrides_with = "no_waste_report")]
    waste_report: bool,

    /// Skip the Waste Report
    #[arg(long, overrides_with = "waste_report")]
    no_waste_report: bool,

    /// Overwrite an existing grouped-cuts destination instead of numbering a new one
    #[arg(long, overrides_with = "no_overwrite")]
    overwrite: bool,

    /// Number a new grouped-cuts destination when the name is taken
    #[arg(long, overrides_with = "overwrite")]
    no_overwrite: bool,

    /// Write into a timestamped copy of the output directory
    #[arg(long, overrides_with = "no_copy")]
    copy: bool,

    /// Write into the output directory itself
    #[arg(long, overrides_with = "copy")]
    no_copy: bool,

    /// Persist the effective options as the new defaults
    #[arg(long)]
    save_settings: bool,
}

impl RunArgs {
    /// 命令列選項覆蓋已保存的設定
    fn apply(&self, mut config: RunConfig) -> RunConfig {
        if let Some(kerf) = &self.kerf {
            config.kerf_text = kerf.clone();
        }
        let toggles = [
            (&mut config.allow_split_oversize, self.split_oversize, self.no_split_oversize),
            (&mut config.reports.summary, self.summary, self.no_summary),
            (&mut config.reports.validation, self.validation, self.no_validation),
            (&mut config.reports.waste_report, self.waste_report, self.no_waste_report),
            (&mut config.output.overwrite_sheet, self.overwrite, self.no_overwrite),
            (&mut config.output.write_to_copy, self.copy, self.no_copy),
        ];
        for (value, on, off) in toggles {
            if let Some(flag) = toggle(on, off) {
                *value = flag;
            }
        }
        config
    }

    fn output_dir(&self) -> PathBuf {
        match &self.out {
            Some(out) => out.clone(),
            None => default_output_dir(&self.input),
        }
    }
}

/// 開關旗標：未指定時為 `None`，沿用已保存的設定
fn toggle(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

fn default_output_dir(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "cutlist".into());
    input.with_file_name(stem)
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();
    let settings_path = cli.settings.unwrap_or_else(default_settings_path);

    match cli.command {
        Commands::Run(args) => run_command(&args, &settings_path)?,
    }

    Ok(())
}

fn run_command(args: &RunArgs, settings_path: &Path) -> Result<()> {
    let config = args.apply(load_settings(settings_path));
    let output_dir = args.output_dir();

    let outcome = run(&args.input, &output_dir, &config)
        .with_context(|| format!("Failed to optimize {}", args.input.display()))?;

    println!("Results saved to: {}", outcome.output_dir.display());
    println!("  Grouped cuts: {}", outcome.grouped_destination);
    println!("  Destinations: {}", outcome.destinations.join(", "));
    println!("  Bars used:    {}", outcome.total_bars);
    if outcome.skipped.total() > 0 {
        println!(
            "  Skipped rows: {} (non-numeric cut: {}, invalid stock: {})",
            outcome.skipped.total(),
            outcome.skipped.dropped_cuts,
            outcome.skipped.skipped_rows
        );
    }
    if outcome.issue_count > 0 {
        println!("  Oversize issues: {} (see Issues)", outcome.issue_count);
    }
    if config.reports.validation && !outcome.validation_passed {
        println!("  Validation FAILED (see Validation)");
    }

    if args.save_settings {
        save_settings(settings_path, &config)
            .with_context(|| format!("Failed to save settings to {}", settings_path.display()))?;
    }

    Ok(())
}

mod config_file;
mod reports;
mod scenarios;
mod script;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use config_file::FileConfigSource;
use scenarios::{ScenarioResult, all_scenarios, get_scenario, list_scenarios};
use script::Script;
use skuform_core::{ConfigSource, EditorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    Console,
    Json,
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "skuform-tester", version)]
#[command(about = "Replays option-editor scenarios and scripts against skuform-core")]
struct Args {
    /// Scenarios to run (comma-separated, or `all`). Defaults to `all`
    /// unless a script is given.
    #[arg(long)]
    scenarios: Option<String>,

    /// List all available scenarios and exit
    #[arg(long)]
    list_scenarios: bool,

    /// JSON editing script to replay after the named scenarios
    #[arg(long)]
    script: Option<PathBuf>,

    /// Editor configuration JSON (preset types, duplicate suffix, limits)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if maybe_list_scenarios(&args)? {
        return Ok(());
    }

    announce_banner();

    let config = load_config(args.config.as_deref())?;
    let start_time = Instant::now();
    let mut results = run_scenarios(&selected_scenarios(&args), &config);
    if let Some(path) = &args.script {
        let script = Script::load(path)?;
        results.push(script.run(&config));
    }

    write_reports(&args, &results, start_time.elapsed())?;

    if results.iter().any(|r| !r.passed) {
        std::process::exit(1);
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn maybe_list_scenarios(args: &Args) -> Result<bool> {
    if !args.list_scenarios {
        return Ok(false);
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    writeln!(output_target.writer(), "Available scenarios:")?;
    for (key, description) in list_scenarios() {
        writeln!(output_target.writer(), "  {key:20} - {description}")?;
    }
    output_target.flush_inner()?;
    Ok(true)
}

fn announce_banner() {
    eprintln!("{}", "🧩 Skuform Scenario Tester".bright_cyan().bold());
    eprintln!("{}", "==========================".cyan());
}

fn load_config(path: Option<&Path>) -> Result<EditorConfig> {
    let Some(path) = path else {
        return Ok(EditorConfig::default_config());
    };
    let source = FileConfigSource::new(path);
    let config = source
        .load_config()
        .with_context(|| format!("failed to load config {}", source.path().display()))?;
    log::info!("loaded config from {}", source.path().display());
    Ok(config)
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect()
}

fn selected_scenarios(args: &Args) -> Vec<String> {
    match (&args.scenarios, &args.script) {
        (Some(list), _) => expand_scenarios(list),
        (None, Some(_)) => Vec::new(),
        (None, None) => expand_scenarios("all"),
    }
}

fn expand_scenarios(scenarios_arg: &str) -> Vec<String> {
    let mut scenarios = split_csv(scenarios_arg);
    if scenarios.iter().any(|s| s == "all") {
        scenarios.retain(|s| s != "all");
        for scenario in all_scenarios() {
            if !scenarios.iter().any(|s| s == scenario.key) {
                scenarios.push(scenario.key.to_string());
            }
        }
    }
    scenarios
}

fn run_scenarios(names: &[String], config: &EditorConfig) -> Vec<ScenarioResult> {
    names
        .iter()
        .map(|name| match get_scenario(name) {
            Some(scenario) => scenario.execute(config),
            None => {
                log::warn!("unknown scenario {name:?}");
                ScenarioResult::failed(name, 0.0, format!("unknown scenario {name:?}"))
            }
        })
        .collect()
}

fn write_reports(args: &Args, results: &[ScenarioResult], elapsed: Duration) -> Result<()> {
    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Json => reports::generate_json_report(&mut output_target, results)?,
        ReportFormat::Markdown => {
            if results.is_empty() {
                writeln!(
                    &mut output_target,
                    "# Skuform Scenario Results\n\n_No scenarios executed._"
                )?;
            } else {
                reports::generate_markdown_report(&mut output_target, results)?;
            }
        }
        ReportFormat::Console => {
            if results.is_empty() {
                writeln!(&mut output_target, "No scenarios executed.")?;
            } else {
                reports::generate_console_report(&mut output_target, results, elapsed)?;
            }
        }
    }
    output_target.flush_inner()?;
    Ok(())
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> Args {
        Args {
            scenarios: None,
            list_scenarios: false,
            script: None,
            config: None,
            report: ReportFormat::Console,
            output: None,
            verbose: false,
        }
    }

    fn temp_path(label: &str) -> PathBuf {
        std::env::temp_dir().join(format!("skuform-main-{label}-{}", std::process::id()))
    }

    #[test]
    fn split_csv_trims_and_skips_empty_parts() {
        assert_eq!(split_csv(" a, ,b ,"), vec!["a", "b"]);
    }

    #[test]
    fn expand_all_keeps_explicit_order_first() {
        let expanded = expand_scenarios("custom-text,all");
        assert_eq!(expanded[0], "custom-text");
        assert_eq!(expanded.len(), all_scenarios().len());
    }

    #[test]
    fn script_only_runs_skip_builtin_scenarios() {
        let mut args = base_args();
        assert_eq!(selected_scenarios(&args).len(), all_scenarios().len());
        args.script = Some(PathBuf::from("steps.json"));
        assert!(selected_scenarios(&args).is_empty());
        args.scenarios = Some("stable-ids".into());
        assert_eq!(selected_scenarios(&args), vec!["stable-ids"]);
    }

    #[test]
    fn unknown_scenarios_fail() {
        let results = run_scenarios(&["bogus".to_string()], &EditorConfig::default_config());
        assert!(!results[0].passed);
        assert!(results[0].failures[0].contains("bogus"));
    }

    #[test]
    fn reports_write_to_output_file() {
        let path = temp_path("report");
        let mut args = base_args();
        args.report = ReportFormat::Markdown;
        args.output = Some(path.clone());
        let results = run_scenarios(&expand_scenarios("duplicate-option"), &EditorConfig::default_config());
        write_reports(&args, &results, Duration::from_millis(1)).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("Option Duplication"));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(Some(Path::new("/no/such/editor.json"))).unwrap_err();
        assert!(format!("{err:#}").contains("failed to load config"));
    }
}

mod config;
mod dedup;
mod loader;
mod parser;
mod pipeline;
mod records;
mod report;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};

use config::ExtractConfig;
use loader::FileFilter;
use report::{ReportFormat, ReportOptions};

#[derive(Parser)]
#[command(name = "lc_progress", about = "Extract solved problems from saved submission-history pages")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract, deduplicate and write the report
    Run {
        #[command(flatten)]
        input: InputArgs,
        /// Report path
        #[arg(short, long, env = "LCP_OUTPUT", default_value = "leetcode_problems.csv")]
        output: PathBuf,
        #[arg(long, value_enum, default_value_t = ReportFormat::Csv)]
        format: ReportFormat,
        /// Leave the last_result column out of the report
        #[arg(long)]
        no_last_result: bool,
        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// Show what a single saved page yields
    Inspect {
        file: PathBuf,
        #[command(flatten)]
        extract: ExtractArgs,
    },
    /// List the files `run` would process, in order
    Files {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args)]
struct InputArgs {
    /// Directory of saved pages
    #[arg(short, long, env = "LCP_INPUT_DIR", default_value = "html")]
    input: PathBuf,
    #[arg(long, value_enum, default_value_t = FileFilter::All)]
    filter: FileFilter,
}

#[derive(Args)]
struct ExtractArgs {
    /// Date for rows without one (YYYY.MM.DD or YYYY-MM-DD; default: today)
    #[arg(long, env = "LCP_TODAY", value_parser = config::parse_day)]
    today: Option<NaiveDate>,
    /// Prefix for problem links
    #[arg(long, env = "LCP_ORIGIN", default_value = config::DEFAULT_ORIGIN)]
    origin: String,
}

impl ExtractArgs {
    fn config(&self) -> ExtractConfig {
        let today = self.today.unwrap_or_else(|| Local::now().date_naive());
        ExtractConfig::new(today).with_origin(&self.origin)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            input,
            output,
            format,
            no_last_result,
            extract,
        } => {
            let config = extract.config().with_last_result(!no_last_result);
            let paths = loader::discover(&input.input, input.filter)?;
            if paths.is_empty() {
                println!("No input files found in {}.", input.input.display());
                return Ok(());
            }
            let documents = loader::load(&paths)?;

            println!("Processing {} files (fallback date {})...", documents.len(), config.today_label());
            let summary = pipeline::run(&documents, &config)?;
            summary.log();

            let options = ReportOptions {
                format,
                last_result: !no_last_result,
            };
            report::write_report(&output, &summary.records, options)?;
            summary.print();
            println!("Wrote {} unique problems to {}", summary.records.len(), output.display());
            Ok(())
        }
        Commands::Inspect { file, extract } => {
            let config = extract.config();
            let doc = loader::load_one(&file)?;
            let out = parser::extract(&doc.html, &config);

            println!("{}: {} rows, {} records, {} notes\n", doc.name, out.rows, out.records.len(), out.notes.len());
            if !out.records.is_empty() {
                println!(
                    "{:>3} | {:<10} | {:>7} | {:<40} | {:<10} | {:<20}",
                    "#", "Date", "Id", "Title", "Difficulty", "Last result"
                );
                println!("{}", "-".repeat(106));
                for (i, r) in out.records.iter().enumerate() {
                    println!(
                        "{:>3} | {:<10} | {:>7} | {:<40} | {:<10} | {:<20}",
                        i + 1,
                        r.date,
                        truncate(&r.problem_id, 7),
                        truncate(&r.problem_title, 40),
                        r.difficulty,
                        truncate(r.last_result.as_deref().unwrap_or("-"), 20),
                    );
                }
            }

            if !out.notes.is_empty() {
                println!("\n--- Notes ---");
                for note in &out.notes {
                    println!("  {}", note);
                }
            }
            Ok(())
        }
        Commands::Files { input } => {
            let paths = loader::discover(&input.input, input.filter)?;
            for p in &paths {
                println!("{}", p.display());
            }
            println!("\n{} files", paths.len());
            Ok(())
        }
    };

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {}", format_duration(elapsed));
    }

    result
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Elapsed time as `12.3s` or `4m 05s`.
fn format_duration(d: Duration) -> String {
    let secs = d.as_secs();
    match secs / 60 {
        0 => format!("{}.{}s", secs, d.subsec_millis() / 100),
        mins => format!("{}m {:02}s", mins, secs % 60),
    }
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn run_args_parse() {
        let cli = Cli::try_parse_from([
            "lc_progress", "run", "-i", "pages", "--filter", "progress", "--format", "json",
            "--no-last-result", "--today", "2024.01.18", "--origin", "https://leetcode.cn/",
        ])
        .unwrap();
        let Commands::Run { input, format, no_last_result, extract, .. } = cli.command else {
            panic!("expected run");
        };
        assert_eq!(input.input, PathBuf::from("pages"));
        assert_eq!(input.filter, FileFilter::Progress);
        assert_eq!(format, ReportFormat::Json);
        assert!(no_last_result);
        let config = extract.config();
        assert_eq!(config.today_label(), "2024.01.18");
        assert_eq!(config.origin, "https://leetcode.cn");
    }

    #[test]
    fn bad_today_is_rejected() {
        assert!(Cli::try_parse_from(["lc_progress", "inspect", "a.html", "--today", "soon"]).is_err());
    }

    #[test]
    fn elapsed_time_formats() {
        assert_eq!(format_duration(Duration::from_millis(1_250)), "1.2s");
        assert_eq!(format_duration(Duration::from_secs(59)), "59.0s");
        assert_eq!(format_duration(Duration::from_secs(245)), "4m 05s");
        assert_eq!(format_duration(Duration::from_secs(3_725)), "62m 05s");
    }

    #[test]
    fn truncate_keeps_width() {
        assert_eq!(truncate("Two Sum", 40), "Two Sum");
        assert_eq!(truncate("Binary Tree Inorder Traversal", 10), "Binary ...");
    }
}

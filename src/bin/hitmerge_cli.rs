use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};

use hitmerge::config::{MergeConfig, DEFAULT_ALIGNMENTS, DEFAULT_DOMAINS, DEFAULT_OUTPUT};
use hitmerge::table::{delimiter_byte, write_table};
use hitmerge::types::AlignmentLayout;
use hitmerge::{load_inputs, MergeError};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Layout {
    /// QueryID TargetID Identity AlignLength Evalue BitScore Qstart Qend Sstart Send
    Standard,
    /// QueryID TargetID Identity AlignLength Mismatch GapOpen Qstart Qend Sstart Send Evalue BitScore
    Extended,
}

#[derive(Parser, Debug)]
#[command(name = "hitmerge")]
#[command(about = "Merge a tabular BLASTp report with HMMER domain hits on QueryID")]
struct Cli {
    /// Tab-separated alignment report, no header (.gz accepted)
    #[arg(short, long, default_value = DEFAULT_ALIGNMENTS)]
    alignments: PathBuf,

    /// HMMER table; lines starting with '#' are skipped (.gz accepted)
    #[arg(short, long, default_value = DEFAULT_DOMAINS)]
    domains: PathBuf,

    /// Merged table. The directory must already exist
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Column preset of the alignment report
    #[arg(short, long, value_enum, default_value_t = Layout::Standard)]
    layout: Layout,

    /// Comma-separated alignment column names; overrides --layout
    #[arg(short, long, value_delimiter = ',')]
    columns: Option<Vec<String>>,

    /// Output field delimiter
    #[arg(long, default_value_t = '\t')]
    delimiter: char,

    /// Verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn into_config(self) -> Result<MergeConfig, MergeError> {
        let layout = match (&self.columns, self.layout) {
            (Some(columns), _) => AlignmentLayout::new(columns)?,
            (None, Layout::Standard) => AlignmentLayout::standard(),
            (None, Layout::Extended) => AlignmentLayout::extended(),
        };
        delimiter_byte(self.delimiter)?;
        Ok(MergeConfig {
            alignments_path: self.alignments,
            domains_path: self.domains,
            output_path: self.output,
            layout,
            delimiter: self.delimiter,
        })
    }
}

fn spinner(color: &str, message: &'static str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&[
                "⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏",
            ])
            .template(&format!("{{spinner:.{color}}} {{msg}}"))
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    spinner.set_message(message);
    spinner
}

fn run(config: &MergeConfig) -> Result<(), MergeError> {
    // 1. Read both reports
    let progress = spinner("blue", "Reading alignment and domain tables...");
    let inputs = match load_inputs(config) {
        Ok(inputs) => inputs,
        Err(e) => {
            progress.abandon_with_message("Reading failed.");
            return Err(e);
        }
    };
    progress.finish_with_message(format!(
        "Read {} alignment rows and {} domain hits.",
        inputs.alignments.len(),
        inputs.domain_hits.len()
    ));

    // 2. Join
    let progress = spinner("green", "Joining on QueryID...");
    let (records, stats) = inputs.merged();
    progress.finish_with_message(format!(
        "{} rows ({} alignments without domain hits).",
        stats.output_rows, stats.unmatched_rows
    ));

    // 3. Write
    let progress = spinner("yellow", "Writing merged table...");
    if let Err(e) = write_table(&records, &inputs.layout, &config.output_path, config.delimiter) {
        progress.abandon_with_message("Writing failed.");
        return Err(e);
    }
    progress.finish_with_message("Merged table written.");
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = cli.into_config().and_then(|config| {
        log::debug!("{config:?}");
        run(&config).map(|_| config)
    });

    match result {
        Ok(config) => {
            println!("Merged results saved as {}", config.output_path.display());
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_reproduce_amp_paths() {
        let config = Cli::try_parse_from(["hitmerge"]).unwrap().into_config().unwrap();
        assert_eq!(config, MergeConfig::default());
    }

    #[test]
    fn test_layout_and_columns() {
        let config = Cli::try_parse_from(["hitmerge", "-l", "extended", "-o", "AMP_output/Final_AMP_Results.tsv"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.layout, AlignmentLayout::extended());
        assert_eq!(config.output_path, PathBuf::from("AMP_output/Final_AMP_Results.tsv"));

        let config = Cli::try_parse_from(["hitmerge", "-l", "extended", "-c", "TargetID,QueryID,Evalue"])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.layout.columns(), ["TargetID", "QueryID", "Evalue"]);
        assert_eq!(config.layout.key_index(), 1);
    }

    #[test]
    fn test_multibyte_delimiter_rejected_before_reading() {
        let cli = Cli::try_parse_from(["hitmerge", "--delimiter", "§"]).unwrap();
        assert!(matches!(cli.into_config(), Err(MergeError::InvalidDelimiter('§'))));

        let config = Cli::try_parse_from(["hitmerge", "--delimiter", ","])
            .unwrap()
            .into_config()
            .unwrap();
        assert_eq!(config.delimiter, ',');
    }

    #[test]
    fn test_columns_without_key_rejected() {
        let cli = Cli::try_parse_from(["hitmerge", "-c", "TargetID,Evalue"]).unwrap();
        assert!(matches!(cli.into_config(), Err(MergeError::InvalidLayout(_))));
    }
}

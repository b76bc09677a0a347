use crate::report::ArtifactKind;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "mindmap-testcase")]
#[command(about = "Convert a mind-map test case tree into a spreadsheet and JSON reports")]
#[command(version)]
pub struct CliArgs {
    /// Suite tree document to convert (.json, or TOML for any other extension)
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Write the testcase spreadsheet (<input>.xlsx)
    #[arg(long)]
    pub xlsx: bool,

    /// Write the flat testcase list (<input>.json)
    #[arg(long)]
    pub json: bool,

    /// Write the testsuite statistics report (<input>_testsuite.json)
    #[arg(long)]
    pub suite_json: bool,

    /// Write every artifact
    #[arg(long, conflicts_with_all = ["xlsx", "json", "suite_json"])]
    pub all: bool,

    /// TOML file with separator, width, column title, dropdown and merge settings
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Separator between levels of a testcase's sub-suite path (default: "/")
    #[arg(long, value_name = "SEP")]
    pub separator: Option<String>,

    /// Minimum spreadsheet column width (default: 10)
    #[arg(long, value_name = "WIDTH")]
    pub min_width: Option<usize>,

    /// Maximum spreadsheet column width (default: 30)
    #[arg(long, value_name = "WIDTH")]
    pub max_width: Option<usize>,

    /// Don't print the statistics summary
    #[arg(long)]
    pub no_summary: bool,
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse()
    }

    /// Validate arguments that don't depend on the configuration file
    pub fn validate(&self) -> Result<(), String> {
        if !self.input.exists() {
            return Err(format!("Input document not found: {}", self.input.display()));
        }

        if let (Some(min), Some(max)) = (self.min_width, self.max_width)
            && min > max
        {
            return Err(format!("--min-width ({}) cannot exceed --max-width ({})", min, max));
        }

        Ok(())
    }

    /// Artifacts to produce; the spreadsheet alone when nothing is selected
    pub fn artifacts(&self) -> Vec<ArtifactKind> {
        if self.all {
            return vec![ArtifactKind::Spreadsheet, ArtifactKind::TestcaseJson, ArtifactKind::SuiteJson];
        }

        let mut kinds = Vec::new();
        if self.xlsx {
            kinds.push(ArtifactKind::Spreadsheet);
        }
        if self.json {
            kinds.push(ArtifactKind::TestcaseJson);
        }
        if self.suite_json {
            kinds.push(ArtifactKind::SuiteJson);
        }
        if kinds.is_empty() {
            kinds.push(ArtifactKind::Spreadsheet);
        }
        kinds
    }
}

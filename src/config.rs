/// Conversion configuration
///
/// This module handles:
/// - Built-in defaults for the separator, column titles, dropdowns, merges and widths
/// - Loading overrides from a TOML configuration file
/// - Applying command-line overrides on top
/// - Validating the result and deriving the spreadsheet layout
///
/// A `ConversionConfig` is an explicit value handed to each pipeline stage,
/// so independent conversions never share state.
use crate::classify::{Priority, TestResult};
use crate::cli::CliArgs;
use crate::error::{ConvertError, Result};
use crate::project::Column;
use crate::sheet::{Dropdown, SheetLayout};
use log::debug;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

pub const DEFAULT_SEPARATOR: &str = "/";
pub const DEFAULT_MIN_WIDTH: usize = 10;
pub const DEFAULT_MAX_WIDTH: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Separator between levels of a testcase's sub-suite path
    pub separator: String,
    /// Column title overrides; columns not listed use their default title
    pub titles: BTreeMap<Column, String>,
    pub dropdown_columns: Vec<Column>,
    pub merge_columns: Vec<Column>,
    pub min_width: usize,
    pub max_width: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR.to_string(),
            titles: BTreeMap::new(),
            dropdown_columns: vec![Column::Priority, Column::Result],
            merge_columns: vec![Column::FirstModule, Column::SecondModule, Column::ThirdModule],
            min_width: DEFAULT_MIN_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }
}

/// On-disk configuration; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub separator: Option<String>,
    pub min_width: Option<usize>,
    pub max_width: Option<usize>,
    pub dropdown_columns: Option<Vec<Column>>,
    pub merge_columns: Option<Vec<Column>>,
    #[serde(default)]
    pub columns: BTreeMap<Column, String>,
}

/// Closed value list for a dropdown column, if the column has one
pub fn dropdown_domain(column: Column) -> Option<Vec<String>> {
    match column {
        Column::Priority => Some(Priority::names()),
        Column::Result => Some(TestResult::texts()),
        _ => None,
    }
}

impl ConversionConfig {
    pub fn title(&self, column: Column) -> &str {
        self.titles.get(&column).map(String::as_str).unwrap_or(column.default_title())
    }

    /// Titles of all columns, in sheet order
    pub fn column_titles(&self) -> Vec<String> {
        Column::ALL.iter().map(|column| self.title(*column).to_string()).collect()
    }

    /// Overlay the keys present in a configuration file
    pub fn apply_file(&mut self, file: ConfigFile) {
        if let Some(separator) = file.separator {
            self.separator = separator;
        }
        if let Some(min_width) = file.min_width {
            self.min_width = min_width;
        }
        if let Some(max_width) = file.max_width {
            self.max_width = max_width;
        }
        if let Some(columns) = file.dropdown_columns {
            self.dropdown_columns = columns;
        }
        if let Some(columns) = file.merge_columns {
            self.merge_columns = columns;
        }
        self.titles.extend(file.columns);
    }

    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(ConvertError::Config("separator must not be empty".to_string()));
        }

        if self.min_width > self.max_width {
            return Err(ConvertError::Config(format!(
                "min_width ({}) is larger than max_width ({})",
                self.min_width, self.max_width
            )));
        }

        let mut seen = HashSet::new();
        for title in self.column_titles() {
            if !seen.insert(title.clone()) {
                return Err(ConvertError::Config(format!("duplicate column title '{}'", title)));
            }
        }

        if self.merge_columns.contains(&Column::Number) {
            return Err(ConvertError::Config(format!("column '{}' cannot be merged", Column::Number.id())));
        }

        if let Some(column) = self.dropdown_columns.iter().find(|c| dropdown_domain(**c).is_none()) {
            return Err(ConvertError::Config(format!("column '{}' has no dropdown values", column.id())));
        }

        Ok(())
    }

    /// Layout handed to the spreadsheet authoring engine
    pub fn sheet_layout(&self) -> SheetLayout {
        let dropdowns = self
            .dropdown_columns
            .iter()
            .filter_map(|column| {
                dropdown_domain(*column).map(|options| Dropdown { column: self.title(*column).to_string(), options })
            })
            .collect();

        SheetLayout {
            columns: self.column_titles(),
            dropdowns,
            merge_columns: self.merge_columns.iter().map(|column| self.title(*column).to_string()).collect(),
            min_width: self.min_width,
            max_width: self.max_width,
        }
    }
}

/// Parse a TOML configuration file
pub fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path).map_err(|source| ConvertError::Read { path: path.to_path_buf(), source })?;
    toml::from_str(&text)
        .map_err(|e| ConvertError::Config(format!("Failed to parse {}: {}", path.display(), e)))
}

/// Build the effective configuration: defaults, then the config file, then CLI flags
pub fn build_config(args: &CliArgs) -> Result<ConversionConfig> {
    let mut config = ConversionConfig::default();

    if let Some(ref path) = args.config {
        debug!("Loading configuration from {:?}", path);
        config.apply_file(load_config_file(path)?);
    }

    if let Some(ref separator) = args.separator {
        config.separator = separator.clone();
    }
    if let Some(min_width) = args.min_width {
        config.min_width = min_width;
    }
    if let Some(max_width) = args.max_width {
        config.max_width = max_width;
    }

    config.validate()?;
    debug!("Effective configuration: {:?}", config);

    Ok(config)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

// Copyright 2015 The Rust Project Developers. See the COPYRIGHT
// file at the top-level directory of this distribution and at
// http://rust-lang.org/COPYRIGHT.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

mod classify;
mod cli;
mod config;
mod convert;
mod error;
mod flatten;
mod project;
mod report;
mod sheet;
mod source;
mod types;
mod ui;

use config::ConversionConfig;
use std::path::PathBuf;

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    // Resolve configuration (defaults < config file < flags)
    let config = match config::build_config(&args) {
        Ok(c) => c,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let written = match run(&args, &config) {
        Ok(paths) => paths,
        Err(e) => {
            ui::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    for path in &written {
        ui::status(&format!("wrote {}", path.display()));
    }
}

/// Load the source document once and write every requested artifact
fn run(args: &cli::CliArgs, config: &ConversionConfig) -> error::Result<Vec<PathBuf>> {
    let kinds = args.artifacts();
    // Refuse the whole run before any artifact is written
    convert::plan_destinations(&args.input, &kinds)?;

    let products = source::load_document(&args.input)?;
    let reports = convert::testsuite_list(&products);

    let mut written = Vec::new();
    for kind in kinds {
        written.push(convert::write_artifact(kind, &args.input, &products, &reports, config)?);
    }

    if !args.no_summary {
        report::print_statistics_tables(&reports).map_err(error::ConvertError::Summary)?;
    }

    Ok(written)
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use polynest::io::{export, import};
use rhc::config::NestingConfig;
use rhc::io;
use rhc::io::cli::Cli;
use rhc::io::output::RHCOutput;
use rhc::Nester;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            NestingConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };

    info!("[MAIN] Successfully parsed NestingConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?;

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).context(format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        ))?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import::import_instance(&ext_instance)?;

    let solution = Nester::new(instance.parts, instance.sheet, config)?.solve()?;

    let mut ext_solution = export::export_layout(&solution.layout);
    //parts rejected during import are reported alongside the ones skipped by the nester
    ext_solution.skipped.splice(
        0..0,
        instance.rejected.iter().map(export::export_skipped_part),
    );

    let output = RHCOutput {
        instance: ext_instance,
        solution: ext_solution,
        config,
        stats: (&solution).into(),
    };

    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_file_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}

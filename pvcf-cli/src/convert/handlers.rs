use std::path::Path;

use anyhow::{Context, Result};
use clap::ArgMatches;

use pvcf_core::consts::DEFAULT_PLOIDY;
use pvcf_core::{ConvertOptions, HeaderMode, convert_file};

pub fn get_convert_options(matches: &ArgMatches) -> ConvertOptions {
    let ploidy = matches
        .get_one::<usize>("ploidy")
        .copied()
        .unwrap_or(DEFAULT_PLOIDY);

    let header_mode = match matches.get_flag("all-samples") {
        true => HeaderMode::AllTranscripts,
        false => HeaderMode::FirstTranscript,
    };

    ConvertOptions {
        ploidy,
        header_mode,
    }
}

pub fn run_convert(matches: &ArgMatches) -> Result<()> {
    let path = matches
        .get_one::<String>("path")
        .expect("A path to a haplotype JSON file is required.");

    let output = matches
        .get_one::<String>("output")
        .expect("A path to an output file is required.");

    let options = get_convert_options(matches);

    convert_file(path, Path::new(output), &options).context("Error converting JSON to VCF")?;

    Ok(())
}

mod convert;

use anyhow::Result;
use clap::Command;
use env_logger::Env;
use log::error;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "pvcf";
    pub const BIN_NAME: &str = "pvcf";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("An all-in-one tool for protein haplotype VCF operations.")
        .subcommand_required(true)
        .subcommand(convert::cli::create_convert_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // CONVERT
        //
        Some((convert::cli::CONVERT_CMD, matches)) => {
            if let Err(err) = convert::handlers::run_convert(matches) {
                error!("{:#}", err);
                std::process::exit(1);
            }
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

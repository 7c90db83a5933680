use clap::{ArgAction, Command, arg, value_parser};

pub use pvcf_core::consts::CONVERT_CMD;

pub const DEFAULT_PLOIDY_ARG: &str = "2";

pub fn create_convert_cli() -> Command {
    Command::new(CONVERT_CMD)
        .about("Convert Haplosaurus JSON output to VCF format.")
        .arg_required_else_help(true)
        .arg(
            arg!(-p --path <path> "Haplotype JSON to convert (.gz supported, '-' for stdin)")
                .required(true),
        )
        .arg(arg!(-o --output <output> "Table to append the converted rows to").required(true))
        .arg(
            arg!(--ploidy <ploidy> "Genotype calls per sample")
                .value_parser(value_parser!(usize))
                .default_value(DEFAULT_PLOIDY_ARG),
        )
        .arg(
            arg!(--"all-samples" "Build the header from the samples of every transcript instead of the first")
                .action(ArgAction::SetTrue),
        )
}

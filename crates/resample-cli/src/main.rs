use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;
use std::str::FromStr;

use resample_cli::input::{config_from_arguments, load_ensemble};
use resample_cli::ops::{BinaryOp, UnaryOp};
use resample_cli::output::{print_stats, write_output};
use resample_ensemble::{estimate, CalcConfig};

fn input_arg(name: &'static str, help: &'static str) -> Arg {
    Arg::new(name)
        .help(help)
        .required(true)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output_file")
        .short('o')
        .long("output")
        .help("Path to write the resulting ensemble. Defaults to stdout.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("RESAMPLE_LOG", "error,resample=info"))
        .init();

    let matches = Command::new("resample")
        .version(clap::crate_version!())
        .about("Arithmetic and error estimation on jackknife/bootstrap ensembles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON configuration file")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("resampling")
                .long("resampling")
                .global(true)
                .help("Resampling scheme of the input ensembles. Overrides the configuration file.")
                .value_parser(["jackknife", "bootstrap"]),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .global(true)
                .help("Digits printed after the decimal point. Overrides the configuration file.")
                .value_parser(clap::value_parser!(usize)),
        )
        .subcommand(
            Command::new("stats")
                .about("Print mean and standard error per time-slice")
                .arg(input_arg("input", "Ensemble file"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print estimates as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("unary")
                .about("Apply a single-operand operation")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(UnaryOp::NAMES),
                )
                .arg(input_arg("input", "Ensemble file"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("binary")
                .about("Combine two ensembles bin by bin")
                .arg(
                    Arg::new("op")
                        .help("Operation to apply")
                        .required(true)
                        .value_parser(BinaryOp::NAMES),
                )
                .arg(input_arg("left", "Left operand ensemble file"))
                .arg(input_arg("right", "Right operand ensemble file"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("scale")
                .about("Multiply by a constant, then add a constant")
                .arg(input_arg("input", "Ensemble file"))
                .arg(
                    Arg::new("mul")
                        .long("mul")
                        .help("Multiplicative factor")
                        .default_value("1")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(
                    Arg::new("add")
                        .long("add")
                        .help("Additive offset")
                        .default_value("0")
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f64)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("shift")
                .about("Shift along the time axis")
                .arg(input_arg("input", "Ensemble file"))
                .arg(
                    Arg::new("amount")
                        .help("Number of slices; positive moves later slices forward")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(isize)),
                )
                .arg(
                    Arg::new("circular")
                        .long("circular")
                        .help("Wrap around instead of zero-filling")
                        .action(ArgAction::SetTrue),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("extract")
                .about("Keep an inclusive range of time-slices")
                .arg(input_arg("input", "Ensemble file"))
                .arg(
                    Arg::new("first")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    Arg::new("last")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("concat")
                .about("Append the time-slices of one ensemble to another")
                .arg(input_arg("left", "First ensemble file"))
                .arg(input_arg("right", "Second ensemble file"))
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("replicate")
                .about("Repeat every bin a number of times")
                .arg(input_arg("input", "Ensemble file"))
                .arg(
                    Arg::new("times")
                        .required(true)
                        .value_parser(clap::value_parser!(usize)),
                )
                .arg(output_arg()),
        )
        .get_matches();

    let (name, sub_m) = matches
        .subcommand()
        .expect("Subcommand is required by CLI configuration");
    let config = config_from_arguments(sub_m)?;

    match run(name, sub_m, &config) {
        Ok(()) => Ok(()),
        Err(e) => {
            log::error!("{} failed: {:#}", name, e);
            std::process::exit(1)
        }
    }
}

fn run(name: &str, matches: &ArgMatches, config: &CalcConfig) -> Result<()> {
    let input = |id: &str| -> Result<_> {
        let path: &PathBuf = matches
            .get_one(id)
            .with_context(|| format!("Missing argument: {}", id))?;
        load_ensemble(path, config)
    };
    // `stats` has no output argument
    let output = matches
        .try_get_one::<PathBuf>("output_file")
        .ok()
        .flatten()
        .map(PathBuf::as_path);

    match name {
        "stats" => {
            let ensemble = input("input")?;
            print_stats(&estimate(&ensemble), config, matches.get_flag("json"))
        }
        "unary" => {
            let op = UnaryOp::from_str(op_name(matches)?).map_err(anyhow::Error::msg)?;
            let result = op.apply(&input("input")?)?;
            write_output(&result, output)
        }
        "binary" => {
            let op = BinaryOp::from_str(op_name(matches)?).map_err(anyhow::Error::msg)?;
            let result = op.apply(&input("left")?, &input("right")?)?;
            write_output(&result, output)
        }
        "scale" => {
            let factor = *matches.get_one::<f64>("mul").unwrap_or(&1.0);
            let offset = *matches.get_one::<f64>("add").unwrap_or(&0.0);
            let result = input("input")?.mul_scalar(factor).add_scalar(offset);
            write_output(&result, output)
        }
        "shift" => {
            let ensemble = input("input")?;
            let amount = *matches.get_one::<isize>("amount").unwrap_or(&0);
            let result = if matches.get_flag("circular") {
                ensemble.circular_shift(amount)
            } else {
                ensemble.shift(amount)?
            };
            write_output(&result, output)
        }
        "extract" => {
            let first = *matches.get_one::<usize>("first").unwrap_or(&0);
            let last = *matches.get_one::<usize>("last").unwrap_or(&0);
            let result = input("input")?.extract(first, last)?;
            write_output(&result, output)
        }
        "concat" => {
            let result = input("left")?.concatenate(&input("right")?)?;
            write_output(&result, output)
        }
        "replicate" => {
            let times = *matches.get_one::<usize>("times").unwrap_or(&1);
            let result = input("input")?.replicate(times)?;
            write_output(&result, output)
        }
        _ => unreachable!("Subcommands are fixed by the CLI configuration"),
    }
}

fn op_name(matches: &ArgMatches) -> Result<&str> {
    matches
        .get_one::<String>("op")
        .map(String::as_str)
        .context("Missing operation")
}

mod logger;

use crate::logger::setup_logger;
use anstyle::{AnsiColor, Color, Style};
use clap::{Args, Parser, Subcommand};
use identcase_core::{Conversion, hash};
use log::{debug, error, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "identcase",
    version,
    styles = get_styles(),
    about = "\x1b[1;33;4mOverview:\x1b[0m
  identcase converts identifiers between snake_case, TitleCase and camelCase,
  collapses acronym runs (GRPCError → GrpcError), strips diacritics from names
  and computes HMAC-SHA256 digests.",
    after_help = "\x1b[1;33;4mExamples:\x1b[0m
  snake_case to TitleCase:
      \x1b[32midentcase title\x1b[0m to_title_case

  TitleCase to snake_case:
      \x1b[32midentcase snake\x1b[0m HTMLFile URLs

  Convert every line of a file:
      \x1b[32midentcase norm-title\x1b[0m < names.txt

  Strip diacritics:
      \x1b[32midentcase normalize\x1b[0m \"Nguyễn Đăng\"

  Keyed digest (key may also come from IDENTCASE_HASH_KEY):
      \x1b[32midentcase hash -k\x1b[0m secret payload
"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (use -v for warnings, -vv for info, -vvv for debug, -vvvv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert snake_case to TitleCase
    Title(InputArgs),

    /// Convert TitleCase to camelCase
    Camel(InputArgs),

    /// Collapse acronym runs in TitleCase (GRPCError → GrpcError)
    NormTitle(InputArgs),

    /// Convert TitleCase to snake_case
    Snake(InputArgs),

    /// Trim and strip diacritics
    Normalize(InputArgs),

    /// Compute the HMAC-SHA256 of each input as lowercase hex
    Hash {
        /// Secret key
        #[arg(short = 'k', long = "key", env = "IDENTCASE_HASH_KEY", hide_env_values = true)]
        key: String,

        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(Args, Debug)]
struct InputArgs {
    /// Values to process; lines are read from stdin when none are given
    #[arg(value_name = "INPUT")]
    values: Vec<String>,
}

enum Operation<'a> {
    Convert(Conversion),
    Hash { key: &'a [u8] },
}

impl Command {
    fn operation(&self) -> Operation<'_> {
        match self {
            Command::Title(_) => Operation::Convert(Conversion::Title),
            Command::Camel(_) => Operation::Convert(Conversion::Camel),
            Command::NormTitle(_) => Operation::Convert(Conversion::NormTitle),
            Command::Snake(_) => Operation::Convert(Conversion::Snake),
            Command::Normalize(_) => Operation::Convert(Conversion::Normalize),
            Command::Hash { key, .. } => Operation::Hash {
                key: key.as_bytes(),
            },
        }
    }

    fn input(&self) -> &InputArgs {
        match self {
            Command::Title(input)
            | Command::Camel(input)
            | Command::NormTitle(input)
            | Command::Snake(input)
            | Command::Normalize(input)
            | Command::Hash { input, .. } => input,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = setup_logger(cli.verbose) {
        eprintln!("Failed to initialize logger: {e}");
    }

    info!("Starting identcase...");

    let values = &cli.command.input().values;
    let inputs = if values.is_empty() {
        debug!("No INPUT arguments, reading stdin");
        match read_lines(io::stdin().lock()) {
            Ok(lines) => lines,
            Err(e) => {
                error!("Failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        values.clone()
    };

    let mut stdout = io::stdout().lock();
    let failures = match process(&cli.command.operation(), &inputs, &mut stdout) {
        Ok(failures) => failures,
        Err(e) => {
            error!("Failed to write output: {}", e);
            return ExitCode::FAILURE;
        }
    };

    info!(
        "identcase processed {} input(s), {} failed.",
        inputs.len(),
        failures
    );

    if failures > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn read_lines<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    reader.lines().collect()
}

/// Write one output line per input and return how many inputs were rejected.
///
/// A rejected input is logged and skipped; the remaining inputs are still
/// processed.
fn process<W: Write>(
    operation: &Operation<'_>,
    inputs: &[String],
    out: &mut W,
) -> io::Result<usize> {
    let mut failures = 0;

    for input in inputs {
        match operation {
            Operation::Convert(conversion) => match conversion.apply(input) {
                Ok(converted) => {
                    debug!("{:?} -> {} {:?}", input, conversion.as_str(), converted);
                    writeln!(out, "{converted}")?;
                }
                Err(e) => {
                    error!("{}", e);
                    failures += 1;
                }
            },
            Operation::Hash { key } => {
                writeln!(out, "{}", hash(input.as_bytes(), key))?;
            }
        }
    }

    out.flush()?;
    Ok(failures)
}

pub fn get_styles() -> clap::builder::Styles {
    let heading = Style::new()
        .bold()
        .underline()
        .fg_color(Some(Color::Ansi(AnsiColor::Yellow)));

    clap::builder::Styles::styled()
        .usage(heading)
        .header(heading)
        .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
        .invalid(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .error(Style::new().bold().fg_color(Some(Color::Ansi(AnsiColor::Red))))
        .valid(
            Style::new()
                .bold()
                .underline()
                .fg_color(Some(Color::Ansi(AnsiColor::Green))),
        )
        .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::White))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run(operation: Operation<'_>, inputs: &[&str]) -> (String, usize) {
        let inputs: Vec<String> = inputs.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let failures = process(&operation, &inputs, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), failures)
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_snake_with_inputs() {
        let cli = Cli::try_parse_from(["identcase", "-vv", "snake", "HTMLFile", "URLs"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Command::Snake(_)));
        assert_eq!(cli.command.input().values, vec!["HTMLFile", "URLs"]);
    }

    #[test]
    fn test_parse_norm_title_without_inputs() {
        let cli = Cli::try_parse_from(["identcase", "norm-title"]).unwrap();
        assert!(matches!(
            cli.command.operation(),
            Operation::Convert(Conversion::NormTitle)
        ));
        assert!(cli.command.input().values.is_empty());
    }

    #[test]
    fn test_parse_hash_key_flag() {
        let cli = Cli::try_parse_from(["identcase", "hash", "--key", "k", "payload"]).unwrap();
        match cli.command.operation() {
            Operation::Hash { key } => assert_eq!(key, b"k"),
            Operation::Convert(_) => panic!("expected hash operation"),
        }
        assert_eq!(cli.command.input().values, vec!["payload"]);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["identcase", "kebab", "x"]).is_err());
    }

    #[test]
    fn test_process_writes_one_line_per_input() {
        let (out, failures) = run(
            Operation::Convert(Conversion::Snake),
            &["ToSnakeCase", "HTMLFile", "URLs"],
        );
        assert_eq!(out, "to_snake_case\nhtml_file\nurls\n");
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_process_continues_after_failure() {
        let (out, failures) = run(
            Operation::Convert(Conversion::Snake),
            &["1Abc", "Foo-Bar", "FooBar"],
        );
        assert_eq!(out, "foo_bar\n");
        assert_eq!(failures, 2);
    }

    #[test]
    fn test_process_hash() {
        let (out, failures) = run(Operation::Hash { key: b"key" }, &["hello"]);
        assert_eq!(
            out,
            "9307b3b915efb5171ff14d8cb55fbcc798c6c0ef1456d66ded1a6aa723a58b7b\n"
        );
        assert_eq!(failures, 0);
    }

    #[test]
    fn test_read_lines() {
        let lines = read_lines("GRPCError\nURLs\n".as_bytes()).unwrap();
        assert_eq!(lines, vec!["GRPCError", "URLs"]);
    }
}

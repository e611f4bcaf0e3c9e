//! Purpose: `wordpack` CLI entry point and argument surface.
//! Role: Binary crate root; parses args, runs the selected conversion.
//! Invariants: Conversions read and write whole files; nothing is printed to
//! stdout except shell completions.
//! Invariants: Errors are printed to stderr and the process exit code is
//! derived from `core::error::to_exit_code`.
use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};
use clap_complete::aot::Shell;
use tracing_subscriber::EnvFilter;

use wordpack::core::error::{to_exit_code, Error};

mod command_dispatch;
mod wordfile;

fn main() {
    init_tracing();
    let exit_code = match run() {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("wordpack: {err}");
            to_exit_code(err.kind())
        }
    };
    std::process::exit(exit_code);
}

fn run() -> Result<(), Error> {
    let cli = Cli::parse();
    command_dispatch::dispatch_command(cli.command)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(io::stderr)
        .try_init();
}

#[derive(Parser)]
#[command(
    name = "wordpack",
    version,
    about = "Convert proof-endpoint public inputs between JSON and uint256 word arrays",
    long_about = r#"Proof/verification endpoints accept public input only as a flat array of
uint256 words. `from-json` linearizes a JSON document into that array;
`from-uint` rebuilds the document from the array, guided by an exemplar
document with the same shape and leaf types (the array itself is untyped)."#,
    after_help = r#"EXAMPLES
  $ wordpack from-json --input proof_input.json --output words.json
  $ wordpack from-uint --input words.json --example data/example.json --output restored.json"#,
    arg_required_else_help = true
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    #[command(
        name = "from-json",
        about = "Encode a JSON document into a flat uint256 word array"
    )]
    FromJson {
        #[arg(
            long,
            default_value = "input.json",
            value_hint = ValueHint::FilePath,
            help = "Input JSON document path"
        )]
        input: PathBuf,
        #[arg(
            long,
            default_value = "output.json",
            value_hint = ValueHint::FilePath,
            help = "Output word-array path"
        )]
        output: PathBuf,
    },
    #[command(
        name = "from-uint",
        about = "Decode a flat uint256 word array back into a JSON document",
        long_about = r#"Decode a flat uint256 word array back into a JSON document.

The word array carries no type information, so decoding walks an exemplar
document whose shape and leaf types mirror the original. The walk must
consume the array exactly: running out of words or leaving words over both
abort the conversion."#
    )]
    FromUint {
        #[arg(
            long,
            default_value = "input.json",
            value_hint = ValueHint::FilePath,
            help = "Input word-array path"
        )]
        input: PathBuf,
        #[arg(
            long,
            default_value = "output.json",
            value_hint = ValueHint::FilePath,
            help = "Output JSON document path"
        )]
        output: PathBuf,
        #[arg(
            long,
            default_value = "data/example.json",
            value_hint = ValueHint::FilePath,
            help = "Exemplar document whose shape and leaf types guide decoding"
        )]
        example: PathBuf,
    },
    #[command(about = "Generate a shell completion script on stdout")]
    Completion {
        #[arg(value_enum)]
        shell: Shell,
    },
}

//! Purpose: Hold top-level CLI command dispatch for `wordpack`.
//! Exports: `dispatch_command`.
//! Role: Keep `main.rs` focused on parse/bootstrap and delegate command execution.
//! Invariants: Output files are only written after the conversion fully succeeds.

use std::io;

use clap::CommandFactory;
use tracing::{debug, info};

use wordpack::core::decode::decode_exact;
use wordpack::core::encode::encode;
use wordpack::core::error::Error;

use crate::wordfile;
use crate::{Cli, Command};

pub(crate) fn dispatch_command(command: Command) -> Result<(), Error> {
    match command {
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            clap_complete::aot::generate(shell, &mut cmd, "wordpack", &mut io::stdout());
            Ok(())
        }
        Command::FromJson { input, output } => {
            let tree = wordfile::read_document(&input)?;
            let words = encode(&tree)?;
            debug!(words = words.len(), input = %input.display(), "encoded document");
            wordfile::write_words(&output, &words)?;
            info!(words = words.len(), output = %output.display(), "wrote word array");
            Ok(())
        }
        Command::FromUint {
            input,
            output,
            example,
        } => {
            let words = wordfile::read_words(&input)?;
            let exemplar = wordfile::read_document(&example)?;
            let tree = decode_exact(&exemplar, &words)?;
            debug!(words = words.len(), example = %example.display(), "decoded word array");
            wordfile::write_document(&output, &tree)?;
            info!(output = %output.display(), "wrote document");
            Ok(())
        }
    }
}

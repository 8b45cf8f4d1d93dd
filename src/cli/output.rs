//! Reading command input and writing command output.

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use super::OutputArgs;
use crate::log;

/// Read a file, or stdin when `path` is `-`.
pub(super) fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        return Ok(buf);
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Serialize `value` as JSON to the output file or stdout.
pub(super) fn write_json<T: Serialize + ?Sized>(value: &T, args: &OutputArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    write_text(&formatted, args)
}

/// Write `text` plus a trailing newline to the output file or stdout.
pub(super) fn write_text(text: &str, args: &OutputArgs) -> Result<()> {
    if let Some(ref output_path) = args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("failed to create {}", output_path.display()))?;
        writeln!(file, "{}", text.trim_end())?;
        log!("output"; "wrote {}", output_path.display());
    } else {
        println!("{}", text.trim_end());
    }
    Ok(())
}

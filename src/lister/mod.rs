use anyhow::{Context, Result};
use log::{debug, info, trace};
use std::ffi::{OsStr, OsString};
use std::io::Write;

use crate::utils::entry_bytes;

const NUMBERED_FLAG: &str = "/n";

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum DisplayMode {
    /// Legacy behavior: the table is walked but nothing is written
    #[default]
    Plain,
    /// Every entry is written as `<index>: <entry>`
    Numbered,
}

impl DisplayMode {
    /// Derive the display mode from the arguments following the program name.
    ///
    /// Only a lone `/n` (any casing) enables numbering. Everything else,
    /// including extra arguments, is silently ignored.
    pub fn from_args<S: AsRef<OsStr>>(args: &[S]) -> Self {
        match args {
            [only] if is_numbered_flag(only.as_ref()) => DisplayMode::Numbered,
            _ => DisplayMode::Plain,
        }
    }
}

fn is_numbered_flag(arg: &OsStr) -> bool {
    arg.to_str()
        .map(|s| s.eq_ignore_ascii_case(NUMBERED_FLAG))
        .unwrap_or(false)
}

/// List the environment table to `out`
///
/// The table is consumed in a single pass. Returns the number of lines written.
pub fn run<S, I, W>(args: &[S], environment: I, out: &mut W) -> Result<usize>
where
    S: AsRef<OsStr>,
    I: IntoIterator<Item = OsString>,
    W: Write,
{
    let mode = DisplayMode::from_args(args);
    debug!("Display mode: {:?} ({} argument(s))", mode, args.len());

    let mut written = 0;
    for (index, entry) in environment.into_iter().enumerate() {
        trace!("Entry {}: {:?}", index, entry);

        if mode == DisplayMode::Numbered {
            write!(out, "{}: ", index).context("Failed to write to stdout")?;
            out.write_all(&entry_bytes(&entry))
                .context("Failed to write to stdout")?;
            out.write_all(b"\n").context("Failed to write to stdout")?;
            written += 1;
        }
    }

    out.flush().context("Failed to flush stdout")?;

    info!("Wrote {} line(s)", written);
    Ok(written)
}

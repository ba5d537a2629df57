mod lister;
mod utils;

use anyhow::{Context, Result};
use log::{debug, error};
use std::env;
use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::process;

/// Environment variable holding the log filter (env_logger syntax)
const LOG_ENV: &str = "ENVLIST_LOG";

fn init_logger() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Error)
        .parse_env(LOG_ENV)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init()
        .context("Failed to initialize logger")
}

/// A closed stdout is a normal way for a listing to end
fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}

fn main() -> Result<()> {
    init_logger()?;

    // Arguments are kept raw: the only recognized token is a lone `/n`
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    debug!("Arguments: {:?}", args);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match lister::run(args.as_slice(), utils::environment_table(), &mut out) {
        Ok(_) => Ok(()),
        Err(err) if is_broken_pipe(&err) => {
            debug!("Stdout closed early: {:#}", err);
            Ok(())
        }
        Err(err) => {
            error!("Failed to list environment: {:#}", err);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_broken_pipe() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            .context("Failed to write to stdout")
            .unwrap_err();
        assert!(is_broken_pipe(&err));
    }

    #[test]
    fn test_other_io_errors_are_not_broken_pipe() {
        let err = Err::<(), _>(io::Error::new(io::ErrorKind::WriteZero, "full"))
            .context("Failed to write to stdout")
            .unwrap_err();
        assert!(!is_broken_pipe(&err));
        assert!(!is_broken_pipe(&anyhow::anyhow!("not io")));
    }
}

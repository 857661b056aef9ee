//! Build script for build stamping and man page generation.
//!
//! The build identity is read at compile time from the `LISA_BUILD_*`
//! environment variables; declaring them here makes Cargo rebuild when a
//! release pipeline restamps them. The man page for the `lisa` binary is
//! generated with `clap_mangen` from the `cli-defs` crate.

use std::{env, fs, io, path::PathBuf};

use clap::CommandFactory;
use clap_mangen::Man;
use cli_defs::{BIN_NAME, Cli};

const STAMP_VARS: [&str; 3] = ["LISA_BUILD_VERSION", "LISA_BUILD_COMMIT", "LISA_BUILD_DATE"];

fn main() -> io::Result<()> {
    println!("cargo::rerun-if-changed=cli-defs");
    for var in STAMP_VARS {
        println!("cargo::rerun-if-env-changed={var}");
    }

    let out_dir = match env::var("OUT_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => {
            // Cargo does not set OUT_DIR for `cargo check` or IDE analysis runs.
            return Ok(());
        }
    };

    let man = Man::new(Cli::command());
    let man_path = out_dir.join(format!("{BIN_NAME}.1"));
    let mut file = fs::File::create(&man_path)?;
    man.render(&mut file)?;

    Ok(())
}

//! Pack shaders into C files for inclusion into a program
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::{debug, info, warn};

use shader_pack::{DEFAULT_INCLUDE, Settings, ShaderPack};

/// Pack shaders into C files for inclusion into a program
///
/// Each shader becomes a `const char` array named after its file name
/// (without the directory, with non-alphanumeric runs turned into `_`, and
/// upper-cased), sized to the exact length of the file.
#[derive(Parser, Debug)]
#[clap(name = "pack_shaders", author, version, about, long_about = None)]
struct Args {
    /// Output C file
    #[clap(long, value_name = "FILE")]
    out_c: PathBuf,

    /// Output H file
    #[clap(long, value_name = "FILE")]
    out_h: PathBuf,

    /// Header name used on the `#include` line of the C file
    #[clap(long, value_name = "NAME", default_value = DEFAULT_INCLUDE)]
    include: String,

    /// Fail on colliding or invalid symbol names instead of warning
    #[clap(long)]
    strict: bool,

    /// Input shader files
    #[clap(required = true)]
    shader: Vec<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let pack = ShaderPack::load(&args.shader)?;
    for s in pack.shaders() {
        debug!("{} <- {:?} ({} bytes)", s.name(), s.path(), s.len());
    }
    info!("Loaded {} shaders in {:?}", pack.len(), start.elapsed());

    let settings = Settings {
        include: args.include,
        strict: args.strict,
    };
    if !settings.strict {
        for d in pack.diagnostics() {
            warn!("{d}");
        }
    }

    pack.write_files(&args.out_c, &args.out_h, &settings)
        .with_context(|| {
            format!("failed to pack shaders into {:?}", args.out_c)
        })?;
    info!(
        "Wrote {:?} and {:?} in {:?}",
        args.out_c,
        args.out_h,
        start.elapsed()
    );

    Ok(())
}

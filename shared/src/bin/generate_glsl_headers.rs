use std::{env, path::PathBuf};

use anyhow::{Context, bail};

use shared::sync_headers;

struct Args {
    output_dir: PathBuf,
    check: bool,
}

impl Args {
    fn parse() -> anyhow::Result<Self> {
        let mut output_dir = None;
        let mut check = false;
        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--check" => check = true,
                flag if flag.starts_with("--") => bail!("Unknown flag {flag}"),
                dir if output_dir.is_none() => output_dir = Some(PathBuf::from(dir)),
                extra => bail!("Unexpected argument {extra}"),
            }
        }

        let output_dir = output_dir
            .context("Usage: generate_glsl_headers <output-dir> [--check]")?;
        if !output_dir.is_dir() {
            bail!("{} is not a directory", output_dir.display());
        }

        Ok(Self { output_dir, check })
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse()?;

    let stale = sync_headers(&args.output_dir, args.check)?;
    if args.check && !stale.is_empty() {
        bail!(
            "{} header(s) need regenerating, rerun without --check",
            stale.len()
        );
    }

    Ok(())
}

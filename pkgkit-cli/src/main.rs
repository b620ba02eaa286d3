use anyhow::Result;
use clap::Parser;
use pkgkit_pm::{ApplyOptions, DEFAULT_MANIFEST_PATH, DEFAULT_OUT_DIR, HELP_MESSAGE};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "apply-package")]
#[command(about = "Resolve a package from the local manifest and write its metadata", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Package identifier (e.g., agent-install or vendor/tool)
    #[arg(value_name = "PACKAGE_ID", allow_hyphen_values = true)]
    package_id: Option<String>,

    /// Extra arguments after the package id are ignored
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    rest: Vec<String>,

    /// Package manifest
    #[arg(long, value_name = "PATH", default_value = DEFAULT_MANIFEST_PATH)]
    manifest: PathBuf,

    /// Artifact output directory
    #[arg(long, value_name = "DIR", default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::try_parse()?;

    let package_id = match cli.package_id {
        Some(id) if !matches!(id.as_str(), "" | "-h" | "--help") => id,
        _ => {
            print!("{}", HELP_MESSAGE);
            return Ok(());
        }
    };

    if !cli.rest.is_empty() {
        log::debug!("Ignoring extra arguments: {:?}", cli.rest);
    }

    let options = ApplyOptions {
        manifest_path: cli.manifest,
        out_dir: cli.out_dir,
    };
    log::debug!("Applying {} with {:?}", package_id, options);

    pkgkit_pm::apply_package(&package_id, &options)?;
    Ok(())
}

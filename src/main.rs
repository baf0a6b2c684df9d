use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use icongen::config::{default_config_path, read_config};
use icongen::manifest::manifest_icons_json;
use icongen::{IconConfig, IconError, IconSize, ResizeFilter, logger};

#[derive(Parser, Debug)]
#[command(name = "icongen", version, about = "Resize one image into a set of square PNG icons")]
struct Cli {
    /// key=value config file (defaults to the per-user icongen.txt if present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Source image (PNG or JPEG)
    #[arg(long)]
    source: Option<PathBuf>,
    /// Directory receiving icon{size}.png, created if missing
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Comma separated edge lengths, e.g. 16,48,128
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<IconSize>>,
    /// nearest | triangle | catmullrom | gaussian | lanczos3
    #[arg(long)]
    filter: Option<ResizeFilter>,
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Print a manifest.json "icons" block with paths under BASE
    #[arg(long, value_name = "BASE")]
    manifest: Option<String>,
}

fn resolve_config(cli: &Cli) -> Result<IconConfig, IconError> {
    let mut cfg = match &cli.config {
        Some(path) => read_config(path)?,
        None => match default_config_path().filter(|p| p.is_file()) {
            Some(path) => read_config(&path)?,
            None => IconConfig::default(),
        },
    };

    if let Some(source) = &cli.source {
        cfg.source = source.clone();
    }
    if let Some(dir) = &cli.output_dir {
        cfg.output_dir = dir.clone();
    }
    if let Some(sizes) = &cli.sizes {
        cfg.sizes = sizes.clone();
    }
    if let Some(filter) = cli.filter {
        cfg.filter = filter;
    }
    if let Some(log) = &cli.log_file {
        cfg.log_file = Some(log.clone());
    }
    cfg.validate()?;
    Ok(cfg)
}

fn execute(cli: &Cli) -> Result<(), IconError> {
    let cfg = resolve_config(cli)?;
    logger::init(cfg.log_file.clone());

    let report = icongen::run(&cfg, |icon| println!("Saved {}", icon.path.display()))?;

    if let Some(base) = &cli.manifest {
        println!("{}", manifest_icons_json(&report, base));
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

//! atelier-studio: renders garment designs from TOML design files.
//!
//! Subcommands:
//!   render   replay a design file, write the PNG export and optionally the SVG preview
//!   listing  print the product-listing JSON for an exported design

mod config;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use atelier_design::prelude::*;
use atelier_engine::logging::{init_logging, LoggingConfig};

use crate::config::DesignFile;

#[derive(Parser)]
#[command(name = "atelier-studio", about = "Garment design preview and export")]
struct Cli {
    /// Log filter (overrides the design file and RUST_LOG).
    #[arg(long, global = true)]
    log: Option<String>,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Replay a design file and write its export
    Render {
        /// TOML design file
        design: PathBuf,
        /// PNG output path (default: design-<unix millis>.png)
        #[arg(long)]
        png: Option<PathBuf>,
        /// Also write the SVG preview here
        #[arg(long)]
        svg: Option<PathBuf>,
        /// Export width in pixels
        #[arg(long)]
        width: Option<u32>,
        /// Export height in pixels
        #[arg(long)]
        height: Option<u32>,
    },
    /// Print the product-listing JSON for a design
    Listing {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        price: f64,
        #[arg(long, default_value = "t-shirts")]
        category: String,
        /// Repeatable: --size S --size M
        #[arg(long = "size", required = true)]
        sizes: Vec<String>,
        /// Repeatable: hosted URLs of the exported images
        #[arg(long = "image-url", required = true)]
        image_urls: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Cmd::Render { design, png, svg, width, height } => {
            let file = DesignFile::load(&design)?;
            let filter = cli.log.or_else(|| file.logging.filter.clone());
            init_logging(LoggingConfig { filter, ..LoggingConfig::default() });
            render(&design, &file, png, svg, width, height)
        }
        Cmd::Listing { name, description, price, category, sizes, image_urls } => {
            init_logging(LoggingConfig { filter: cli.log, ..LoggingConfig::default() });
            let listing = ProductListing {
                name,
                description,
                price,
                category,
                sizes,
                images: image_urls,
                variants: Vec::new(),
            };
            println!("{}", listing.to_json()?);
            Ok(())
        }
    }
}

fn render(
    design: &Path,
    file: &DesignFile,
    png: Option<PathBuf>,
    svg: Option<PathBuf>,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<()> {
    let mut session = Session::new();
    for (i, event) in file.events.iter().enumerate() {
        session
            .apply(event)
            .with_context(|| format!("{}: event #{} ({:?})", design.display(), i + 1, event))?;
    }
    let state = session.state();
    log::info!(
        "design ready: {} events, rotation {}°, {} face, gradient {}",
        file.events.len(),
        state.rotation.angle_degrees(),
        state.rotation.face(),
        if state.color.gradient_enabled() { "on" } else { "off" }
    );

    if let Some(path) = svg {
        std::fs::write(&path, session.preview_svg(&SvgOptions::default()))
            .with_context(|| format!("writing {}", path.display()))?;
        log::info!("wrote preview {}", path.display());
    }

    let config = file.export_config(width, height);
    if config.width == 0 || config.height == 0 {
        bail!("export size must be non-zero, got {}x{}", config.width, config.height);
    }
    let renderer = ExportRenderer::new(config);
    let bytes = session.export(&renderer).context("export failed")?;

    let path = png.unwrap_or_else(|| PathBuf::from(default_export_file_name()));
    std::fs::write(&path, &bytes).with_context(|| format!("writing {}", path.display()))?;
    println!("{}", path.display());
    Ok(())
}

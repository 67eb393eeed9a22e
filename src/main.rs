use clap::{Parser, Subcommand};
use outagemap::config::AppConfig;
use outagemap::data::{HttpGeometrySource, HttpOutageSource};
use outagemap::pipeline;
use outagemap::types::OutputMode;
use outagemap::writer::FileDocumentWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the styled KML outage map (and KMZ if configured)
    Kml {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
    /// Generate the enriched GeoJSON feature collection
    Geojson {
        #[arg(short, long, value_name = "FILE", default_value = "config.toml")]
        config: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let (config_path, mode) = match &cli.command {
        Commands::Kml { config } => (config, OutputMode::Map),
        Commands::Geojson { config } => (config, OutputMode::Collection),
    };

    println!("Generating outage map with config: {:?}", config_path);
    let app_config = AppConfig::load_from_file(config_path)?;

    let geometry_source = HttpGeometrySource::new(&app_config.input);
    let outage_source = HttpOutageSource::new(&app_config.input);

    let mut writer = match mode {
        OutputMode::Map => FileDocumentWriter::new(
            app_config.output.kml.clone(),
            app_config.output.kmz.clone(),
        ),
        OutputMode::Collection => {
            FileDocumentWriter::new(app_config.output.geojson.clone(), None)
        }
    };

    pipeline::run(
        &app_config,
        mode,
        &geometry_source,
        &outage_source,
        &mut writer,
    )?;

    println!("Generation complete!");
    Ok(())
}

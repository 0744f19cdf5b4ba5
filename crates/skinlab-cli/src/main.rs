use std::path::PathBuf;

use clap::{Parser, Subcommand};
use skinlab_core::SkinZone;

mod commands;

use commands::{cmd_analyze, cmd_hydration, cmd_init, cmd_texture};

#[derive(Parser)]
#[command(name = "skinlab")]
#[command(version, about = "Skin image analysis: tone, zones, texture, trouble and hydration", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full analysis on a face image
    Analyze {
        /// Input image (PNG or TIFF)
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// JSON file with forehead, nose, left_cheek, right_cheek, chin and eye_area boxes
        #[arg(short, long, value_name = "FILE")]
        regions: PathBuf,

        /// TEWL reading in g/m2/h
        #[arg(long, value_name = "G")]
        tewl: Option<f32>,

        /// Ambient relative humidity in percent
        #[arg(long, value_name = "PCT")]
        humidity: Option<f32>,

        /// Ambient temperature in degrees C
        #[arg(long, value_name = "C", allow_negative_numbers = true)]
        temperature: Option<f32>,

        /// Zone cropped for texture analysis (overrides config)
        #[arg(long, value_name = "ZONE")]
        texture_zone: Option<SkinZone>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file (default: search $SKINLAB_CONFIG, ./config, ., ~/skinlab)
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Analyze the surface texture of an image or region
    Texture {
        /// Input image (PNG or TIFF)
        #[arg(value_name = "IMAGE")]
        input: PathBuf,

        /// Region to analyze (x,y,width,height)
        #[arg(long, value_name = "X,Y,W,H")]
        roi: Option<String>,

        /// Gray levels (2-256)
        #[arg(long, value_name = "N")]
        levels: Option<usize>,

        /// Neighbor distance in pixels
        #[arg(long, value_name = "D")]
        distance: Option<u32>,

        /// Neighbor direction in degrees
        #[arg(
            long,
            value_name = "DEG",
            allow_negative_numbers = true,
            conflicts_with = "multi_angle"
        )]
        angle: Option<f64>,

        /// Average over 0, 45, 90 and 135 degrees
        #[arg(long)]
        multi_angle: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Estimate hydration from a roughness (Ra) measurement
    Hydration {
        /// Surface roughness Ra
        #[arg(long, value_name = "RA")]
        ra: f32,

        /// TEWL reading in g/m2/h
        #[arg(long, value_name = "G")]
        tewl: Option<f32>,

        /// Ambient relative humidity in percent
        #[arg(long, value_name = "PCT")]
        humidity: Option<f32>,

        /// Ambient temperature in degrees C
        #[arg(long, value_name = "C", allow_negative_numbers = true)]
        temperature: Option<f32>,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Config file
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Write a default skinlab.yml
    Init {
        /// Destination (default: ~/skinlab/skinlab.yml)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let result = match cli.command {
        Commands::Analyze {
            input,
            regions,
            tewl,
            humidity,
            temperature,
            texture_zone,
            json,
            config,
        } => cmd_analyze(
            input,
            regions,
            tewl,
            humidity,
            temperature,
            texture_zone,
            json,
            config,
        ),

        Commands::Texture {
            input,
            roi,
            levels,
            distance,
            angle,
            multi_angle,
            json,
            config,
        } => cmd_texture(input, roi, levels, distance, angle, multi_angle, json, config),

        Commands::Hydration {
            ra,
            tewl,
            humidity,
            temperature,
            json,
            config,
        } => cmd_hydration(ra, tewl, humidity, temperature, json, config),

        Commands::Init { path, force } => cmd_init(path, force),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

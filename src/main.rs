//! Panocube CLI - equirectangular panorama to cubemap skybox.
//!
//! Writes `face0.png` through `face5.png` into the output folder.

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use panocube::render::{convert_file, parse_face_size, ConvertError, ConvertOptions};

/// Convert an equirectangular panorama into six cubemap faces.
#[derive(Parser)]
#[command(name = "panocube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Edge length of each output face in pixels (e.g., 512, 1024).
    #[arg(allow_hyphen_values = true)]
    output_size: Option<String>,

    /// Equirectangular source image (PNG or JPEG).
    input_image: Option<PathBuf>,

    /// Folder for the face images. Created if missing.
    output_folder: Option<PathBuf>,

    /// Anything after the output folder is ignored.
    #[arg(hide = true, num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
    _extra: Vec<String>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => {}
        Err(ConvertError::InvalidArgumentCount(_)) => print_usage(),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Splits out the three required positionals, or reports how many were given.
fn positionals(cli: Cli) -> Result<(String, PathBuf, PathBuf), ConvertError> {
    match (cli.output_size, cli.input_image, cli.output_folder) {
        (Some(size), Some(input), Some(output)) => Ok((size, input, output)),
        (size, input, output) => {
            let given = [size.is_some(), input.is_some(), output.is_some()]
                .iter()
                .filter(|&&present| present)
                .count();
            Err(ConvertError::InvalidArgumentCount(given))
        }
    }
}

fn run(cli: Cli) -> Result<(), ConvertError> {
    let (size_arg, input, output) = positionals(cli)?;

    let face_size = parse_face_size(&size_arg)?;
    let options = ConvertOptions::with_face_size(face_size);

    log::info!("Face size: {}x{}", face_size, face_size);
    log::info!("Output: {}", output.display());

    let start = Instant::now();
    convert_file(&input, &output, &options)?;
    log::info!("Converted 6 faces in {:.2?}", start.elapsed());

    Ok(())
}

fn print_usage() {
    let program = std::env::args().next().unwrap_or_else(|| "panocube".to_string());
    println!("Usage: {} <output_size> <input_image> <output_folder>", program);
    println!("Example: {} 512 skybox.png output", program);
}

use std::{error::Error, path::PathBuf};

use clap::Parser;

use vtk_convert::{logging::init_logging, vti::convert_vti};

/// Convert a VTK XML image data file (.vti) into a legacy ASCII VTK file
#[derive(Parser, Debug)]
struct Args {
    /// Path to the input .vti file
    vti_path: PathBuf,
    /// Path of the .vtk file to write
    dest_path: PathBuf,
}

fn main() -> Result<(), Box<dyn Error + Sync + Send>> {
    let _multi_progress = init_logging()?;

    let args = Args::parse();

    convert_vti(&args.vti_path, &args.dest_path)?;

    Ok(())
}

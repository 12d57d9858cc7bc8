use std::{error::Error, fmt::Display, path::PathBuf, str::FromStr};

use clap::Parser;

use vtk_convert::{
    convert::{RawToVtk, convert},
    field::Field,
    grid::Grid,
    logging::init_logging,
    sample::{Endianess, SampleType},
};

/// Convert a flat binary volume into a legacy ASCII VTK structured points file
#[derive(Parser, Debug)]
struct Args {
    /// Path to the input .raw file, samples ordered x fastest
    raw_path: PathBuf,
    /// Path of the .vtk file to write
    dest_path: PathBuf,
    /// Name of the scalar field, shown when rendering the file
    #[arg(short = 'n', long)]
    field_name: String,
    /// Grid dimensions as NX,NY,NZ
    #[arg(short, long, value_parser = parse_triple::<usize>)]
    dims: [usize; 3],
    /// Grid spacing as SX,SY,SZ
    #[arg(short, long, value_parser = parse_triple::<f64>, default_value = "1.0,1.0,1.0")]
    spacing: [f64; 3],
    /// Grid origin as OX,OY,OZ
    #[arg(
        short,
        long,
        value_parser = parse_triple::<f64>,
        default_value = "0.0,0.0,0.0",
        allow_hyphen_values = true
    )]
    origin: [f64; 3],
    /// Sample type of the input
    #[arg(short = 't', long, value_enum, default_value_t = SampleType::U16)]
    dtype: SampleType,
    /// Byte order of the input
    #[arg(short, long, value_enum, default_value_t = Endianess::Native)]
    endianess: Endianess,
}

fn parse_triple<T>(s: &str) -> Result<[T; 3], String>
where
    T: FromStr,
    T::Err: Display,
{
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(format!("expected three comma-separated values, got \"{s}\""));
    };
    let parse = |v: &str| {
        v.parse::<T>()
            .map_err(|e| format!("invalid value \"{v}\": {e}"))
    };
    Ok([parse(*x)?, parse(*y)?, parse(*z)?])
}

fn main() -> Result<(), Box<dyn Error + Sync + Send>> {
    let multi_progress = init_logging()?;

    let args = Args::parse();

    let job = RawToVtk {
        raw_path: args.raw_path,
        dest_path: args.dest_path,
        field: Field::new(args.field_name)?,
        grid: Grid::new(args.dims, args.spacing, args.origin)?,
        sample_type: args.dtype,
        endianess: args.endianess,
    };
    convert(&job, &multi_progress)?;

    Ok(())
}

use std::{path::PathBuf, time::Instant};

use indicatif::{MultiProgress, ProgressBar};
use log::{debug, info};

use crate::{
    error::Result,
    field::Field,
    grid::Grid,
    read::read_volume,
    sample::{Endianess, Sample, SampleType},
    write::write_vtk_file,
};

/// Everything needed for one raw to legacy VTK conversion
#[derive(Debug, Clone)]
pub struct RawToVtk {
    pub raw_path: PathBuf,  // flat binary, x fastest
    pub dest_path: PathBuf, // created or overwritten
    pub field: Field,
    pub grid: Grid,
    pub sample_type: SampleType,
    pub endianess: Endianess,
}

pub fn convert(job: &RawToVtk, multi_progress: &MultiProgress) -> Result<()> {
    match job.sample_type {
        SampleType::U8 => convert_samples::<u8>(job, multi_progress),
        SampleType::I8 => convert_samples::<i8>(job, multi_progress),
        SampleType::U16 => convert_samples::<u16>(job, multi_progress),
        SampleType::I16 => convert_samples::<i16>(job, multi_progress),
        SampleType::U32 => convert_samples::<u32>(job, multi_progress),
        SampleType::I32 => convert_samples::<i32>(job, multi_progress),
        SampleType::U64 => convert_samples::<u64>(job, multi_progress),
        SampleType::I64 => convert_samples::<i64>(job, multi_progress),
        SampleType::F32 => convert_samples::<f32>(job, multi_progress),
        SampleType::F64 => convert_samples::<f64>(job, multi_progress),
    }
}

fn convert_samples<T: Sample>(job: &RawToVtk, multi_progress: &MultiProgress) -> Result<()> {
    let t0 = Instant::now();

    let [nx, ny, nz] = job.grid.dimensions();
    info!("dimensions: {nx}x{ny}x{nz}");
    info!("field: {}", job.field.name());
    info!(
        "sample type: {} ({} bytes), endianess: {:?}",
        job.sample_type,
        job.sample_type.width(),
        job.endianess
    );

    let volume = read_volume::<T>(&job.raw_path, job.grid.num_points(), job.endianess)?;
    debug!("loaded {} samples in {:?}", volume.len(), t0.elapsed());

    let progress = multi_progress.add(ProgressBar::new(volume.len() as u64));
    let res = write_vtk_file(&job.dest_path, &volume, &job.grid, &job.field, &progress);
    progress.finish();
    multi_progress.remove(&progress);
    res?;

    info!("Wrote VTK file: {}", job.dest_path.display());
    info!("conversion done in {:?}", t0.elapsed());

    Ok(())
}

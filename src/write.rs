use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::Path,
};

use indicatif::ProgressBar;
use log::debug;
use tempfile::NamedTempFile;

use crate::{
    error::{Error, Result},
    field::Field,
    grid::Grid,
    read::Volume,
    sample::Sample,
};

/// Maximum number of values on one payload line
pub const VALUES_PER_LINE: usize = 9;

// progress is reported once per block of lines
const LINES_PER_TICK: usize = 4096;

/// Write `volume` as a legacy ASCII VTK structured points file at `filename`
///
/// A regular file (or a new one) is replaced only once the whole file has been
/// written to a temporary file next to it, so a failure leaves the old
/// contents in place. Anything else (a FIFO, a device, a symlink) is opened
/// and written directly, and left alone on failure.
pub fn write_vtk_file<T: Sample>(
    filename: &Path,
    volume: &Volume<T>,
    grid: &Grid,
    field: &Field,
    progress: &ProgressBar,
) -> Result<()> {
    if volume.len() != grid.num_points() {
        return Err(Error::SizeMismatch {
            expected: grid.num_points(),
            actual: volume.len(),
        });
    }

    let replace = match fs::symlink_metadata(filename) {
        Ok(meta) => meta.is_file(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => true,
        Err(e) => return Err(Error::io(filename)(e)),
    };

    let written = if replace {
        write_replacing(filename, volume.samples(), grid, field, progress)
    } else {
        debug!("{filename:?} is not a regular file, writing in place");
        write_in_place(filename, volume.samples(), grid, field, progress)
    };
    written.map_err(Error::io(filename))?;

    debug!("created {filename:?}");
    Ok(())
}

fn write_replacing<T: Sample>(
    filename: &Path,
    samples: &[T],
    grid: &Grid,
    field: &Field,
    progress: &ProgressBar,
) -> io::Result<()> {
    let dir = match filename.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let permissions = match fs::metadata(filename) {
        Ok(meta) => Some(meta.permissions()),
        Err(_) => default_permissions(),
    };

    // dropped (and deleted) on any early return
    let mut writer = BufWriter::new(NamedTempFile::new_in(dir)?);
    write_legacy_vtk(&mut writer, samples, grid, field, progress)?;
    let tmp_file = writer.into_inner().map_err(|e| e.into_error())?;

    if let Some(permissions) = permissions {
        tmp_file.as_file().set_permissions(permissions)?;
    }
    tmp_file.as_file().sync_all()?;
    tmp_file.persist(filename)?;
    Ok(())
}

fn write_in_place<T: Sample>(
    filename: &Path,
    samples: &[T],
    grid: &Grid,
    field: &Field,
    progress: &ProgressBar,
) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(filename)?);
    write_legacy_vtk(&mut writer, samples, grid, field, progress)?;
    writer.flush()
}

// temporary files are created 0600, new outputs should be readable like any other
#[cfg(unix)]
fn default_permissions() -> Option<fs::Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<fs::Permissions> {
    None
}

/// Encode header and payload to any writer
pub fn write_legacy_vtk<W: Write, T: Sample>(
    out: &mut W,
    samples: &[T],
    grid: &Grid,
    field: &Field,
    progress: &ProgressBar,
) -> io::Result<()> {
    write_header(out, grid, field, samples.len())?;
    write_payload(out, samples, progress)
}

fn write_header<W: Write>(out: &mut W, grid: &Grid, field: &Field, count: usize) -> io::Result<()> {
    let [nx, ny, nz] = grid.dimensions();
    let [sx, sy, sz] = grid.spacing();
    let [ox, oy, oz] = grid.origin();

    writeln!(out, "# vtk DataFile Version 5.1")?;
    writeln!(out, "vtk output")?;
    writeln!(out, "ASCII")?;
    writeln!(out, "DATASET STRUCTURED_POINTS")?;
    writeln!(out, "DIMENSIONS {nx} {ny} {nz}")?;
    writeln!(out, "SPACING {sx:?} {sy:?} {sz:?}")?;
    writeln!(out, "ORIGIN {ox:?} {oy:?} {oz:?}")?;
    writeln!(out, "POINT_DATA {count}")?;
    writeln!(out, "FIELD FieldData 1")?;
    // always double, whatever the sample type
    writeln!(out, "{} 1 {count} double", field.encoded_name())?;
    Ok(())
}

fn write_payload<W: Write, T: Sample>(
    out: &mut W,
    samples: &[T],
    progress: &ProgressBar,
) -> io::Result<()> {
    for block in samples.chunks(VALUES_PER_LINE * LINES_PER_TICK) {
        for line in block.chunks(VALUES_PER_LINE) {
            if let Some((first, rest)) = line.split_first() {
                first.write_text(out)?;
                for value in rest {
                    out.write_all(b" ")?;
                    value.write_text(out)?;
                }
                out.write_all(b"\n")?;
            }
        }
        progress.inc(block.len() as u64);
    }
    Ok(())
}

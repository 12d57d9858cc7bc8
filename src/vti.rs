use std::{path::Path, time::Instant};

use log::{debug, info};
use vtkio::model::{DataSet, Version, Vtk};

use crate::error::{Error, Result};

/// Re-encode a VTK XML image data file (.vti) as legacy ASCII structured points
///
/// Reading and writing are left to `vtkio`; only image data is accepted.
pub fn convert_vti(vti_path: &Path, dest_path: &Path) -> Result<()> {
    let t0 = Instant::now();

    let mut vtk = Vtk::import(vti_path)?;
    match &vtk.data {
        DataSet::ImageData {
            extent,
            origin,
            spacing,
            ..
        } => {
            debug!("extent: {extent:?}, origin: {origin:?}, spacing: {spacing:?}");
        }
        _ => return Err(Error::NotImageData(vti_path.to_owned())),
    }

    // below 2.0 the legacy writer emits ASPECT_RATIO instead of SPACING
    vtk.version = Version::new((5, 1));
    vtk.title = "vtk output".into();
    vtk.export_ascii(dest_path)?;

    info!("Conversion complete: {}", dest_path.display());
    debug!("conversion done in {:?}", t0.elapsed());

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    const IMAGE_DATA: &str = r#"<?xml version="1.0"?>
<VTKFile type="ImageData" version="1.0" byte_order="LittleEndian" header_type="UInt64">
  <ImageData WholeExtent="0 1 0 1 0 0" Origin="0.5 0 0" Spacing="0.04 0.04 0.04">
    <Piece Extent="0 1 0 1 0 0">
      <PointData Scalars="density">
        <DataArray type="Float64" Name="density" format="ascii">
          1 2 3 4
        </DataArray>
      </PointData>
    </Piece>
  </ImageData>
</VTKFile>
"#;

    #[test]
    fn image_data_to_structured_points() {
        let dir = tempfile::tempdir().unwrap();
        let vti_path = dir.path().join("cylinder.vti");
        let dest_path = dir.path().join("cylinder.vtk");
        fs::write(&vti_path, IMAGE_DATA).unwrap();

        convert_vti(&vti_path, &dest_path).unwrap();

        let text = fs::read_to_string(&dest_path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "# vtk DataFile Version 5.1");
        assert_eq!(lines[1], "vtk output");
        assert_eq!(lines[2], "ASCII");
        assert_eq!(lines[3], "DATASET STRUCTURED_POINTS");
        assert!(lines.iter().any(|l| l.starts_with("SPACING 0.04")));
        assert!(!lines.iter().any(|l| l.starts_with("ASPECT_RATIO")));
    }

    const POLY_DATA: &str = r#"<?xml version="1.0"?>
<VTKFile type="PolyData" version="1.0" byte_order="LittleEndian" header_type="UInt64">
  <PolyData>
    <Piece NumberOfPoints="1" NumberOfVerts="1" NumberOfLines="0" NumberOfStrips="0" NumberOfPolys="0">
      <Points>
        <DataArray type="Float32" NumberOfComponents="3" format="ascii">
          0 0 0
        </DataArray>
      </Points>
      <Verts>
        <DataArray type="Int64" Name="connectivity" format="ascii">
          0
        </DataArray>
        <DataArray type="Int64" Name="offsets" format="ascii">
          1
        </DataArray>
      </Verts>
    </Piece>
  </PolyData>
</VTKFile>
"#;

    #[test]
    fn rejects_poly_data() {
        let dir = tempfile::tempdir().unwrap();
        let vtp_path = dir.path().join("point.vtp");
        let dest_path = dir.path().join("point.vtk");
        fs::write(&vtp_path, POLY_DATA).unwrap();

        let res = convert_vti(&vtp_path, &dest_path);

        assert!(matches!(res, Err(Error::NotImageData(p)) if p == vtp_path));
        assert!(!dest_path.exists());
    }

    #[test]
    fn missing_input() {
        let dir = tempfile::tempdir().unwrap();
        let res = convert_vti(&dir.path().join("missing.vti"), &dir.path().join("out.vtk"));
        assert!(matches!(res, Err(Error::Vtkio(_))));
        assert!(!dir.path().join("out.vtk").exists());
    }
}

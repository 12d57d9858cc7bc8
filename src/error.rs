use std::path::PathBuf;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("data size mismatch: expected {expected} elements, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("field name must not be empty")]
    EmptyFieldName,

    #[error("{} does not contain image data", .0.display())]
    NotImageData(PathBuf),

    #[error("vtkio error: {0}")]
    Vtkio(#[from] vtkio::Error),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Error {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}

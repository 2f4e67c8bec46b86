/// Font-file problems: genuine I/O/parsing failures, distinct from the
/// core's own error enum, which only models configuration mistakes at
/// its public boundary.
#[derive(thiserror::Error, Debug)]
pub enum FontLoadError {
    #[error("font file not found: {0}")]
    NotFound(std::path::PathBuf),

    #[error("no usable face in font data")]
    NoFace,

    #[error("failed to read font file: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(thiserror::Error, Debug)]
pub enum RasterizeError {
    #[error("glyph outline could not be scaled")]
    ScaleFailed,
}

pub mod apply;
pub mod diff;
pub mod validate;

use std::path::Path;

use notediff_core::errors::{ExError, ExErrorKind};

/// Read a text file, rejecting content that is not UTF-8.
pub fn read_text(path: &Path) -> Result<String, ExError> {
    let bytes = std::fs::read(path).map_err(|e| {
        ExError::new(ExErrorKind::Io)
            .with_op("read")
            .with_message(format!("{}: {}", path.display(), e))
    })?;
    String::from_utf8(bytes).map_err(|e| {
        ExError::new(ExErrorKind::InvalidInput)
            .with_op("read")
            .with_message(format!("{} is not valid UTF-8: {}", path.display(), e))
    })
}

/// Write `content` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, content: &str) -> Result<(), ExError> {
    match output {
        Some(path) => {
            std::fs::write(path, content).map_err(|e| {
                ExError::new(ExErrorKind::Io)
                    .with_op("write")
                    .with_message(format!("{}: {}", path.display(), e))
            })?;
            println!("✓ Wrote {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

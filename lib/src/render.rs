use std::fs;
use std::path::Path;

use log::info;

use crate::error::EtchError;
use crate::ramp::AsciiGrid;

/// Assemble an ASCII grid into one newline-delimited string.
///
/// Each cell's character is emitted `repeat` times so the rendered text is
/// widened against the tall aspect of terminal cells. Rows are emitted top
/// to bottom, each terminated with `'\n'`.
pub fn to_text(grid: &AsciiGrid, repeat: usize) -> String {
    let mut out = String::with_capacity((grid.width as usize * repeat + 1) * grid.height as usize);
    for y in 0..grid.height {
        for &ch in grid.row(y) {
            for _ in 0..repeat {
                out.push(ch);
            }
        }
        out.push('\n');
    }
    out
}

/// Write rendered text to `path`, creating or truncating the file.
///
/// The file handle is scoped inside `fs::write`, so it is closed even when
/// the write itself fails.
pub fn write_text(text: &str, path: &Path) -> Result<(), EtchError> {
    fs::write(path, text.as_bytes()).map_err(|source| EtchError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}

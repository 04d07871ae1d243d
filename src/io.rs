//! File I/O: the line-oriented, one-puzzle-per-line wire format. Kept
//! separate from [`crate::grid`] since reading files is an external
//! collaborator of the solver core, not part of it.

use std::fs;
use std::path::Path;

use crate::error::SudokuError;
use crate::grid::Grid;

/// Reads every line of `path` as an 81-character Sudoku line. Stops at end
/// of file; the first malformed line short-circuits with a
/// [`SudokuError::FormatError`]; a missing file is a
/// [`SudokuError::NoSuchFile`]; any other I/O failure (permission denied,
/// `path` is a directory, non-UTF-8 contents) is a
/// [`SudokuError::UnknownError`].
pub fn read_from_file(path: impl AsRef<Path>) -> Result<Vec<Grid>, SudokuError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|err| match err.kind() {
        std::io::ErrorKind::NotFound => SudokuError::NoSuchFile(path.to_path_buf()),
        _ => SudokuError::UnknownError(err.to_string()),
    })?;

    contents.lines().map(Grid::parse).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[test]
    fn reads_every_line_of_a_well_formed_file() {
        let path = temp_path("well-formed");
        fs::write(
            &path,
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179\n\
             53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79\n",
        )
        .unwrap();

        let grids = read_from_file(&path).unwrap();
        assert_eq!(grids.len(), 2);
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_no_such_file() {
        let err = read_from_file("/nonexistent/path/to/a/file.txt").unwrap_err();
        assert!(matches!(err, SudokuError::NoSuchFile(_)));
    }

    #[test]
    fn malformed_line_is_a_format_error() {
        let path = temp_path("malformed");
        fs::write(&path, "this line is not 81 characters\n").unwrap();

        let err = read_from_file(&path).unwrap_err();
        assert!(matches!(err, SudokuError::FormatError { .. }));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn directory_path_is_an_unknown_error_not_no_such_file() {
        let path = temp_path("a-directory");
        fs::create_dir(&path).unwrap();

        let err = read_from_file(&path).unwrap_err();
        assert!(matches!(err, SudokuError::UnknownError(_)));
        fs::remove_dir(&path).unwrap();
    }

    fn temp_path(label: &str) -> PathBuf {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let mut path = std::env::temp_dir();
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        path.push(format!("sudoku-dlx-test-{label}-{}-{n}", std::process::id()));
        path
    }
}

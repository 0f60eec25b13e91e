// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Input file layout helpers.

use std::fs;
use std::io;
use std::path::Path;

/// Create one file per name under `dir` (content = the name) and return
/// their full paths as strings, in the order given.
pub fn write_inputs(dir: &Path, names: &[&str]) -> io::Result<Vec<String>> {
    names
        .iter()
        .map(|name| {
            let path = dir.join(name);
            fs::write(&path, name.as_bytes())?;
            Ok(path.to_string_lossy().into_owned())
        })
        .collect()
}

/// Read `path` and split it into lines, dropping the trailing newline.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    Ok(fs::read_to_string(path)?
        .lines()
        .map(str::to_owned)
        .collect())
}

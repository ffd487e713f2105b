//! Env file output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write `lines` to `path`, each terminated by a single `\n`.
///
/// The file is created or truncated. Parent directories are not created.
/// A failure partway through can leave a partial file behind.
pub fn write_env_file(path: &Path, lines: &[String]) -> std::io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    for line in lines {
        writer.write_all(line.as_bytes())?;
        writer.write_all(b"\n")?;
    }

    writer.flush()
}

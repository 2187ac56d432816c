use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

use memmap2::Mmap;
use tempfile::NamedTempFile;

use crate::error::RecastError;
use crate::types::Delimiter;

/// The canonical intermediate form: one comma-joined record per line,
/// written to a temp file in the output directory so the CSV renderer can
/// persist it in place. Dropping the handle removes the file — no partial
/// artifacts survive an error exit.
#[derive(Debug)]
pub struct Canonical {
    pub file: NamedTempFile,
    /// Records written: input line count minus skip count.
    pub records: usize,
}

/// Rewrite `input` as the canonical form: drop the first `skip` lines,
/// then substitute every occurrence of the resolved delimiter with a
/// comma. A comma delimiter degenerates to a plain copy. Fields are
/// assumed unquoted — a comma already embedded in a field becomes
/// indistinguishable from a separator, and nothing downstream corrects
/// that.
pub fn normalize(
    input: &Path,
    delimiter: Delimiter,
    skip: usize,
    dir: &Path,
) -> Result<Canonical, RecastError> {
    let Delimiter::Resolved(delim) = delimiter else {
        return Err(RecastError::UndetectedDelimiter);
    };

    let file = fs::File::open(input).map_err(|e| RecastError::from_io(input, e))?;
    let meta = file
        .metadata()
        .map_err(|e| RecastError::from_io(input, e))?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".recast-")
        .tempfile_in(dir)
        .map_err(|e| RecastError::from_io(dir, e))?;

    // Empty check before mmap — mmap on a 0-byte file may fail on some platforms
    if meta.len() == 0 {
        return Ok(Canonical {
            file: tmp,
            records: 0,
        });
    }

    let mmap = unsafe { Mmap::map(&file) }.map_err(|e| RecastError::from_io(input, e))?;
    let content = String::from_utf8_lossy(&mmap[..]);

    let mut records = 0usize;
    {
        let mut out = BufWriter::new(tmp.as_file_mut());
        for line in content.lines().skip(skip) {
            let written = if delim == ',' {
                writeln!(out, "{line}")
            } else {
                writeln!(out, "{}", line.replace(delim, ","))
            };
            written.map_err(|e| RecastError::from_io(input, e))?;
            records += 1;
        }
        out.flush().map_err(|e| RecastError::from_io(input, e))?;
    }

    Ok(Canonical { file: tmp, records })
}

use crate::differ::Side;
use crate::error::LoadError;
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Reads a whole file as UTF-8 lines. Every line keeps its terminator,
/// normalized to `\n`; the last line has none if the file does not end with
/// one.
pub fn load_lines(path: &Path, side: Side) -> Result<Vec<String>, LoadError> {
    let open_err = |source| LoadError::Open { side, source };

    let file = File::open(path).map_err(open_err)?;
    let file_size = file.metadata().map_err(open_err)?.len();
    if file_size == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file).map_err(open_err)? };
    let text = std::str::from_utf8(&mmap).map_err(|_| LoadError::Decode { side })?;
    let lines = split_lines(text);
    log::debug!(
        "Loaded {} lines ({} bytes) from {}",
        lines.len(),
        file_size,
        path.display()
    );
    Ok(lines)
}

/// Splits on `\n`, `\r\n` and lone `\r`, replacing each terminator with `\n`.
pub fn split_lines(text: &str) -> Vec<String> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    for pos in memchr::memchr2_iter(b'\r', b'\n', bytes) {
        if pos < start {
            // The `\n` of a `\r\n` pair already consumed.
            continue;
        }
        let mut line = String::with_capacity(pos - start + 1);
        line.push_str(&text[start..pos]);
        line.push('\n');
        lines.push(line);

        start = if bytes[pos] == b'\r' && bytes.get(pos + 1) == Some(&b'\n') {
            pos + 2
        } else {
            pos + 1
        };
    }

    if start < bytes.len() {
        lines.push(text[start..].to_string());
    }
    lines
}

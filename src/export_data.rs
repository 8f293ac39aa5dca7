use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    path::Path,
};

/// Writes one JSON document per line. When `echo` is given every line also
/// goes there, before it is written to `writer`. Stops at the first record
/// that fails; lines already written stay written.
pub fn write_jsonl<W: Write, T: Serialize>(
    writer: &mut W,
    records: &[T],
    mut echo: Option<&mut dyn Write>,
) -> Result<usize> {
    let mut lines = 0;
    for record in records {
        let line = serde_json::to_string(record)
            .with_context(|| format!("failed to serialize record {}", lines + 1))?;
        if let Some(echo) = echo.as_mut() {
            writeln!(echo, "{line}")?;
        }
        writeln!(writer, "{line}")?;
        lines += 1;
    }
    Ok(lines)
}

/// Creates (or truncates) `file_path` and writes `records` as JSON lines,
/// echoing each one to stdout when `verbose`. Returns the number of lines.
pub fn output_jsonl<P: AsRef<Path>, T: Serialize>(
    file_path: P,
    records: &[T],
    verbose: bool,
) -> Result<usize> {
    let file_path = file_path.as_ref();
    let file = File::create(file_path)
        .with_context(|| format!("failed to create {}", file_path.display()))?;
    let mut writer = BufWriter::new(file);

    let lines = if verbose {
        let mut stdout = io::stdout().lock();
        write_jsonl(&mut writer, records, Some(&mut stdout as &mut dyn Write))?
    } else {
        write_jsonl(&mut writer, records, None)?
    };
    writer
        .flush()
        .with_context(|| format!("failed to write {}", file_path.display()))?;

    debug!("wrote {} lines to {}", lines, file_path.display());
    Ok(lines)
}

/// Reads JSON lines back, skipping blank lines.
pub fn read_jsonl<R: BufRead, T: DeserializeOwned>(reader: R) -> Result<Vec<T>> {
    let mut records = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let record = serde_json::from_str(&line)
            .with_context(|| format!("invalid record on line {}", index + 1))?;
        records.push(record);
    }
    Ok(records)
}

pub fn load_jsonl<P: AsRef<Path>, T: DeserializeOwned>(file_path: P) -> Result<Vec<T>> {
    let file_path = file_path.as_ref();
    let file = File::open(file_path)
        .with_context(|| format!("failed to open {}", file_path.display()))?;
    read_jsonl(BufReader::new(file))
}

// crates/sigcurve-cli/src/io/table.rs
//
// Plain-text integer tables: one record per line, values split on commas
// and/or whitespace. Blank lines and `#` comments are skipped.

use std::io::{Read, Write};

use anyhow::{Context, Result};

pub fn parse_table(text: &str) -> Result<Vec<Vec<u64>>> {
    let mut out = Vec::new();
    for (ln, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut rec = Vec::new();
        for tok in line.split(|c: char| c == ',' || c.is_whitespace()) {
            if tok.is_empty() {
                continue;
            }
            let v: u64 = tok.parse().with_context(|| {
                format!("line {}: expected a non-negative integer, got {:?}", ln + 1, tok)
            })?;
            rec.push(v);
        }
        out.push(rec);
    }
    Ok(out)
}

/// Read a table from `path`, or from stdin when `path` is `-`.
pub fn load_table(path: &str) -> Result<Vec<Vec<u64>>> {
    let text = if path == "-" {
        let mut s = String::new();
        std::io::stdin()
            .read_to_string(&mut s)
            .context("read table from stdin")?;
        s
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read table {path}"))?
    };
    parse_table(&text).with_context(|| format!("parse table {path}"))
}

/// One decimal value per line, to `path` or stdout.
pub fn write_lines<T: std::fmt::Display>(path: Option<&str>, values: &[T]) -> Result<()> {
    let mut s = String::with_capacity(values.len() * 8);
    for v in values {
        s.push_str(&v.to_string());
        s.push('\n');
    }
    match path {
        Some(p) => std::fs::write(p, s).with_context(|| format!("write indices {p}"))?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(s.as_bytes()).context("write indices to stdout")?;
        }
    }
    Ok(())
}

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, bail};

use crate::models::{CompileRecord, ToolchainLayout};
use crate::parsers::encoding::decode_utf16;
use crate::utils::{split_source_path, validate_file_size};

/// Parse a `CL.command.*.tlog` file into compile records
///
/// The file is read and decoded in full and its handle released before
/// returning. See [`parse_command_log_str`] for the line format.
pub fn parse_command_log(path: &Path, layout: &ToolchainLayout) -> Result<Vec<CompileRecord>> {
    let bytes = {
        let mut file = File::open(path)
            .with_context(|| format!("Failed to open command log: {}", path.display()))?;
        validate_file_size(&file, path)?;

        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes)
            .with_context(|| format!("Failed to read command log: {}", path.display()))?;
        bytes
    };

    let content = decode_utf16(&bytes)
        .with_context(|| format!("Failed to decode command log: {}", path.display()))?;

    parse_command_log_str(&content, &layout.compiler)
}

/// Parse decoded command log text
///
/// Entries are two lines each: a marker character followed by the source path,
/// then the compiler arguments. Each entry becomes one record whose command is
/// `compiler` followed by the arguments.
///
/// Lines end with `\r\n`, `\n` or a lone `\r`.
///
/// Blank lines after the last entry are ignored rather than read as a source
/// path missing its command line, so a log ending in an extra newline still
/// parses. This is deliberately more lenient than a strictly positional
/// reading, which rejects such a log. Anywhere else the two-line cadence
/// must hold: a blank path line, a path line with nothing after the marker, or
/// a path line without a following command line is an error.
pub fn parse_command_log_str(content: &str, compiler: &str) -> Result<Vec<CompileRecord>> {
    let mut records = Vec::new();
    let mut lines = LogLines { rest: content }.enumerate();

    while let Some((line_idx, path_line)) = lines.next() {
        let line_num = line_idx + 1;

        if path_line.trim().is_empty() {
            if lines.clone().all(|(_, rest)| rest.trim().is_empty()) {
                break;
            }
            bail!("empty source path line (line {})", line_num);
        }

        let source = strip_marker(path_line).trim_end();
        if source.is_empty() {
            bail!("missing source path after marker (line {})", line_num);
        }

        let arguments = match lines.next() {
            Some((_, command_line)) if !command_line.trim().is_empty() => command_line.trim_end(),
            _ => bail!("missing command line for \"{}\" (line {})", source, line_num),
        };

        let (directory, file) = split_source_path(source);
        records.push(CompileRecord::new(directory, file, compiler, arguments));
    }

    Ok(records)
}

/// Line iterator splitting on `\r\n`, `\n` and `\r`
///
/// Like [`str::lines`], a final terminator does not yield an empty line.
#[derive(Clone)]
struct LogLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for LogLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\r', '\n']) {
            Some(idx) => {
                let line = &self.rest[..idx];
                let terminator_len = if self.rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                self.rest = &self.rest[idx + terminator_len..];
                Some(line)
            }
            None => {
                let line = self.rest;
                self.rest = "";
                Some(line)
            }
        }
    }
}

/// Drop the single marker character that precedes each source path
fn strip_marker(line: &str) -> &str {
    let mut chars = line.chars();
    chars.next();
    chars.as_str()
}

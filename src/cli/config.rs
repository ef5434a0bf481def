use letterveil::{Hider, HiderBuilder, HiderConfig, TracingSink};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use crate::cli::args::{InputArgs, KeyArgs};
use crate::cli::global::GlobalArgs;

/// Reads the input from the inline argument, `--file`, or stdin, in that order.
pub fn read_input(
    args: &InputArgs,
    global: &GlobalArgs,
) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(input) = &args.input {
        return Ok(input.clone());
    }

    if let Some(file_path) = &args.file {
        // Check file size if max_size is set
        if global.max_size > 0 {
            let file_size = fs::metadata(file_path)?.len() as usize;
            if file_size > global.max_size {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Raise --max-size to process it.",
                    file_size, global.max_size
                )
                .into());
            }
        }
        return fs::read_to_string(file_path)
            .map_err(|e| format!("Cannot read '{}': {}", file_path.display(), e).into());
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;

    if global.max_size > 0 && buffer.len() > global.max_size {
        return Err(format!(
            "Input size ({} bytes) exceeds maximum ({} bytes)",
            buffer.len(),
            global.max_size
        )
        .into());
    }
    Ok(buffer)
}

/// Picks the key: `--key`, then `--key-file`, then the configured key file.
pub fn resolve_key(
    args: &KeyArgs,
    config: &HiderConfig,
) -> Result<Option<String>, Box<dyn std::error::Error>> {
    if let Some(key) = &args.key {
        return Ok(Some(key.clone()));
    }

    let path = match &args.key_file {
        Some(path) => Some(PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())),
        None => config.settings.key_file(),
    };

    match path {
        Some(path) => read_key_file(&path).map(Some),
        None => Ok(None),
    }
}

fn read_key_file(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read key file '{}': {}", path.display(), e))?;
    Ok(content.trim_end_matches(['\n', '\r']).to_string())
}

/// Starts a hider from the loaded settings, wired to tracing when verbose.
pub fn hider_builder(config: &HiderConfig, key: Option<String>, global: &GlobalArgs) -> HiderBuilder {
    let builder = Hider::from_config(config).maybe_key(key);
    if global.verbose {
        builder.diagnostics(TracingSink)
    } else {
        builder
    }
}

/// Writes `content` to the output file, or to stdout.
pub fn write_output(
    output: Option<&PathBuf>,
    content: &str,
    newline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(output_path) = output {
        fs::write(output_path, content.as_bytes())?;
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    if newline {
        stdout.write_all(b"\n")?;
    }
    stdout.flush()?;
    Ok(())
}

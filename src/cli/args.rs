use clap::Args;
use std::path::PathBuf;

/// Where the text or sequence to process comes from
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Input given inline (reads --file or stdin if not provided)
    #[arg(value_name = "INPUT", conflicts_with = "file")]
    pub input: Option<String>,

    /// Read input from this file
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

/// Key selection shared by hide, recover and inspect
#[derive(Args, Debug)]
pub struct KeyArgs {
    /// Key mixed into every ciphered digit
    #[arg(short = 'k', long, conflicts_with = "key_file")]
    pub key: Option<String>,

    /// Read the key from this file (trailing newline ignored)
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,
}

/// Arguments for hiding text
#[derive(Args, Debug)]
pub struct HideArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Do not append a checksum tail
    #[arg(long)]
    pub no_checksum: bool,

    /// Compress the sequence when that makes it shorter
    #[arg(short = 'c', long)]
    pub compress: bool,

    /// gzip level for --compress (0-9)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,

    /// Fixed seed (10-99) instead of a random one
    #[arg(long, value_parser = clap::value_parser!(u8).range(10..=99))]
    pub seed: Option<u8>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for recovering text
#[derive(Args, Debug)]
pub struct RecoverArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for compress and decompress
#[derive(Args, Debug)]
pub struct CompressArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// gzip level (0-9, compress only)
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=9))]
    pub level: Option<u32>,

    /// Output file (writes to stdout if not provided)
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,
}

/// Arguments for inspecting a sequence header
#[derive(Args, Debug)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    #[command(flatten)]
    pub key: KeyArgs,

    /// Length of the key the sequence was hidden with (instead of --key)
    #[arg(long, value_name = "N", conflicts_with_all = ["key", "key_file"])]
    pub key_len: Option<usize>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for showing the effective configuration
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

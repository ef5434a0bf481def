use crate::cli::{
    args::CompressArgs,
    config::{hider_builder, read_input, write_output},
    global::GlobalArgs,
};
use letterveil::HiderConfig;

pub fn compress(
    args: CompressArgs,
    global: &GlobalArgs,
    config: &HiderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = read_input(&args.input, global)?;
    let mut builder = hider_builder(config, None, global);
    if let Some(level) = args.level {
        builder = builder.compression_level(level);
    }

    let compressed = builder
        .build()
        .compress(sequence.trim())
        .map_err(|_| "Sequence could not be compressed")?;
    write_output(args.output.as_ref(), &compressed, true)
}

pub fn decompress(
    args: CompressArgs,
    global: &GlobalArgs,
    config: &HiderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = read_input(&args.input, global)?;
    if args.level.is_some() && !global.quiet {
        eprintln!("Note: --level only applies when compressing");
    }

    let expanded = hider_builder(config, None, global)
        .build()
        .decompress(sequence.trim())
        .map_err(|_| "Sequence could not be decompressed")?;
    write_output(args.output.as_ref(), &expanded, true)
}

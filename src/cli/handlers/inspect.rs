use crate::cli::{
    args::InspectArgs,
    config::{hider_builder, read_input, resolve_key},
    global::GlobalArgs,
};
use letterveil::{COMPRESSED_MARKER, HiderConfig};

pub fn handle(
    args: InspectArgs,
    global: &GlobalArgs,
    config: &HiderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = read_input(&args.input, global)?;
    let mut sequence = input.trim().to_string();

    let compressed = sequence.starts_with(COMPRESSED_MARKER);
    if compressed {
        sequence = hider_builder(config, None, global)
            .build()
            .decompress(&sequence)
            .map_err(|_| "Compressed sequence could not be expanded")?;
    }

    let key_len = match args.key_len {
        Some(len) => len,
        None => resolve_key(&args.key, config)?.map_or(0, |key| key.encode_utf16().count()),
    };

    let header = letterveil::inspect(&sequence, key_len).map_err(|e| {
        tracing::debug!(kind = e.kind(), "inspect rejected sequence");
        "Sequence header could not be read (not a hidden sequence, or wrong key length)"
    })?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&header)?);
        return Ok(());
    }

    println!("compressed:      {}", if compressed { "yes" } else { "no" });
    println!("letters:         {}", header.total_letters);
    println!("length digits:   {}", header.digit_count);
    println!("declared length: {}", header.declared_length);
    println!("text length:     {}", header.text_length);
    println!("seed:            {}", header.seed);
    println!("seed position:   {}", header.seed_position);
    Ok(())
}

use crate::cli::{
    args::HideArgs,
    config::{hider_builder, read_input, resolve_key, write_output},
    global::GlobalArgs,
};
use letterveil::{HiderConfig, Seed};

pub fn handle(
    args: HideArgs,
    global: &GlobalArgs,
    config: &HiderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_input(&args.input, global)?;
    let key = resolve_key(&args.key, config)?;

    let mut builder = hider_builder(config, key, global);
    if args.no_checksum {
        builder = builder.checksum(false);
    }
    if let Some(level) = args.level {
        builder = builder.compression_level(level);
    }
    let hider = builder.build();

    let seed = match args.seed {
        Some(value) => Seed::new(value).ok_or("Seed must be between 10 and 99")?,
        None => Seed::random(),
    };

    let mut hidden = hider.hide_with_seed(&text, seed);
    if args.compress || config.settings.compress() {
        let before = hidden.len();
        hidden = hider.compress(&hidden)?;
        if !global.quiet && hidden.len() == before && before > 0 {
            eprintln!("Note: compression would not shorten this sequence, kept it as is");
        }
    }

    write_output(args.output.as_ref(), &hidden, true)
}

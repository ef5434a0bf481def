use crate::cli::{
    args::RecoverArgs,
    config::{hider_builder, read_input, resolve_key, write_output},
    global::GlobalArgs,
};
use letterveil::HiderConfig;

pub fn handle(
    args: RecoverArgs,
    global: &GlobalArgs,
    config: &HiderConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let sequence = read_input(&args.input, global)?;
    let key = resolve_key(&args.key, config)?;
    let hider = hider_builder(config, key, global).build();

    let text = hider
        .recover_any(sequence.trim())
        .map_err(|_| "Sequence could not be recovered (wrong key, or altered sequence)")?;

    // Recovered text is written verbatim, without a trailing newline
    write_output(args.output.as_ref(), &text, false)
}

use crate::cli::args::ConfigArgs;
use letterveil::HiderConfig;
use serde::Serialize;

/// Settings with defaults filled in.
#[derive(Serialize)]
struct EffectiveSettings {
    checksum: bool,
    compress: bool,
    compression_level: u32,
    key_file: Option<String>,
}

pub fn handle(args: ConfigArgs, config: &HiderConfig) -> Result<(), Box<dyn std::error::Error>> {
    let settings = &config.settings;
    let effective = EffectiveSettings {
        checksum: settings.checksum(),
        compress: settings.compress(),
        compression_level: settings.compression_level(),
        key_file: settings.key_file().map(|path| path.display().to_string()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&effective)?);
        return Ok(());
    }

    println!("checksum:          {}", effective.checksum);
    println!("compress:          {}", effective.compress);
    println!("compression_level: {}", effective.compression_level);
    println!(
        "key_file:          {}",
        effective.key_file.as_deref().unwrap_or("(none)")
    );
    Ok(())
}

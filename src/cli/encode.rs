use anyhow::Result;

use crate::cli::args::EncodeCliArgs;
use crate::config::Config;
use crate::phonetic::{spoken_form, DoubleMetaphone, PhoneticKind};

/// Print `text<TAB>key` per argument; Double Metaphone also prints the
/// alternate code.
pub fn handle_encode_command(args: EncodeCliArgs, config: &Config) -> Result<()> {
    let kind = args.algorithm.unwrap_or(config.correction.algorithm);
    let encoder = kind.build();

    for text in &args.text {
        let spoken = spoken_form(text);
        if kind == PhoneticKind::DoubleMetaphone {
            let codes = DoubleMetaphone::new().codes(&spoken);
            println!("{}\t{}\t{}", text, codes.primary, codes.alternate);
        } else {
            println!("{}\t{}", text, encoder.encode(&spoken));
        }
    }

    Ok(())
}

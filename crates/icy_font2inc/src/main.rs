use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use clap::Parser;
use flexi_logger::Logger;
use icy_inc::{convert_font_sheet, FontConverter};

const FONT_SHEET: &str = "ibm_font.png";

#[derive(Parser, Debug)]
#[command(version, about = "Converts ibm_font.png into .byte directives, one line per glyph row.", long_about = None)]
struct Args {
    /// Log progress to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _logger = Logger::try_with_env_or_str(if args.verbose { "info" } else { "warn" })?
        .log_to_stderr()
        .start()?;

    let converter = FontConverter::default();
    let mut out = BufWriter::new(std::io::stdout().lock());
    convert_font_sheet(Path::new(FONT_SHEET), &converter, &mut out).with_context(|| format!("Failed to convert font sheet '{FONT_SHEET}'"))?;
    out.flush()?;
    log::info!("done.");
    Ok(())
}

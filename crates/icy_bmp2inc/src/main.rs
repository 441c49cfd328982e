use std::io::{BufWriter, Write};

use clap::Parser;
use flexi_logger::Logger;
use icy_inc::{write_icon_program, FramebufferGeometry, PackedBitmap};

#[derive(Parser, Debug)]
#[command(version, about = "Prints ARM store instructions that draw the NO OS sign.", long_about = None)]
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

    let bitmap = PackedBitmap::no_os()?;
    let geometry = FramebufferGeometry::no_os_sign();
    log::info!(
        "drawing {}x{} bitmap at ({}, {}) on {}x{}x{}\n{bitmap}",
        bitmap.width(),
        bitmap.height(),
        geometry.origin_x,
        geometry.origin_y,
        geometry.width,
        geometry.height,
        geometry.bits_per_pixel
    );

    let mut out = BufWriter::new(std::io::stdout().lock());
    write_icon_program(&bitmap, &geometry, &mut out)?;
    out.flush()?;
    Ok(())
}

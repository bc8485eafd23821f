//! mfntgen - bitmap-font atlas generator
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │                 Pipeline                    │
//! ├─────────────────────────────────────────────┤
//! │  Charset + Groups  →  Glyph Expansion       │
//! │                            ↓                │
//! │                  Rectangle Packer           │
//! │                            ↓                │
//! │   MFNT/MUCT tables  +  Atlas texture (PNG)  │
//! └─────────────────────────────────────────────┘
//! ```

mod charset;
mod cli;
mod encode;
mod error;
mod font;
mod pack;
mod texture;

use anyhow::Result;
use clap::Parser;
use log::info;

use crate::font::group::FontGroup;
use crate::font::raster::FontFace;
use crate::font::Font;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = cli::Args::parse();
    info!(
        "Building {}x{} atlas from {}",
        args.width,
        args.height,
        args.charset.display()
    );

    let mut font = Font::new(args.width, args.height, args.icons.clone());

    for descriptor in &args.groups {
        let spec = cli::GroupSpec::parse(descriptor)?;
        let face = FontFace::load(&spec.font, spec.size)?;
        let filter = charset::load_chars(&spec.filter)?;
        let group = FontGroup::new(&spec.name, spec.size, filter, Box::new(face))?;
        info!("Group '{}' registered ({}px)", spec.name, spec.size);
        font.add_group(group);
    }

    font.add_chars(charset::load_chars(&args.charset)?);

    font.remap()?;
    font.save(&args.texture, &args.table)?;

    info!("Done");
    Ok(())
}

//! Command-line surface
//!
//! Options mirror the original generator: texture dimensions, charset
//! file, one or more group descriptors, output table and texture paths.
//! Group descriptors are colon-delimited `key=value` strings, e.g.
//! `name=Main:font=fonts/main.ttf:size=24:filter=filters/main.txt`.

use clap::Parser;
use log::warn;
use std::path::PathBuf;

use crate::error::Error;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Bitmap-font atlas generator: packs glyphs into a texture and emits MFNT/MUCT tables"
)]
pub struct Args {
    /// Font texture width in pixels.
    #[arg(long)]
    pub width: u32,

    /// Font texture height in pixels.
    #[arg(long)]
    pub height: u32,

    /// Charset file path (UTF-16 with BOM, or UTF-8).
    #[arg(short, long)]
    pub charset: PathBuf,

    /// Group descriptor(s): "name=NAME:font=PATH:size=SIZE:filter=PATH".
    #[arg(short, long, required = true, num_args = 1..)]
    pub groups: Vec<String>,

    /// Output path for the global character table.
    #[arg(short, long)]
    pub table: PathBuf,

    /// Output path for the atlas texture (PNG).
    #[arg(short = 'x', long)]
    pub texture: PathBuf,

    /// Directory containing controller-icon bitmaps.
    #[arg(long, default_value = "icons")]
    pub icons: PathBuf,
}

/// Parsed group descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupSpec {
    pub name: String,
    pub font: PathBuf,
    pub size: u32,
    /// Path to the filter-definition file; its contents are the group's
    /// character set.
    pub filter: PathBuf,
}

impl GroupSpec {
    /// Parse a colon-delimited `key=value` descriptor. All four keys are
    /// required; a missing or malformed key is a configuration error.
    pub fn parse(descriptor: &str) -> Result<Self, Error> {
        let mut name = None;
        let mut font = None;
        let mut size = None;
        let mut filter = None;

        for part in descriptor.split(':') {
            let Some((key, value)) = part.split_once('=') else {
                return Err(Error::config(format!(
                    "group descriptor entry '{}' is not key=value (in '{}')",
                    part, descriptor
                )));
            };
            match key {
                "name" => name = Some(value.to_string()),
                "font" => font = Some(PathBuf::from(value)),
                "size" => {
                    size = Some(value.parse::<u32>().map_err(|_| {
                        Error::config(format!("group size '{}' is not an integer", value))
                    })?)
                }
                "filter" => filter = Some(PathBuf::from(value)),
                other => warn!("Ignoring unknown group descriptor key '{}'", other),
            }
        }

        let missing = |key: &str| {
            Error::config(format!(
                "group descriptor '{}' is missing required key '{}'",
                descriptor, key
            ))
        };
        Ok(Self {
            name: name.ok_or_else(|| missing("name"))?,
            font: font.ok_or_else(|| missing("font"))?,
            size: size.ok_or_else(|| missing("size"))?,
            filter: filter.ok_or_else(|| missing("filter"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_descriptor() {
        let spec =
            GroupSpec::parse("name=Main:font=fonts/main.ttf:size=24:filter=filters/main.txt")
                .unwrap();
        assert_eq!(spec.name, "Main");
        assert_eq!(spec.font, PathBuf::from("fonts/main.ttf"));
        assert_eq!(spec.size, 24);
        assert_eq!(spec.filter, PathBuf::from("filters/main.txt"));
    }

    #[test]
    fn test_parse_missing_key_fails() {
        let err = GroupSpec::parse("name=Main:font=a.ttf:size=24").unwrap_err();
        assert!(matches!(err, Error::Config(msg) if msg.contains("filter")));
    }

    #[test]
    fn test_parse_bad_size_fails() {
        let err = GroupSpec::parse("name=Main:font=a.ttf:size=big:filter=f.txt").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_parse_malformed_entry_fails() {
        let err = GroupSpec::parse("name=Main:font").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}

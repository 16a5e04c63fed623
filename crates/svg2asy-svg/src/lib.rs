//! Extract path drawing commands from SVG documents.
//!
//! This is deliberately thin: it walks the XML tree and returns the raw `d`
//! attribute of every `path` element, in document order. Interpreting those
//! commands is the job of `svg2asy-path`.

use std::fs;
use std::path::Path;

use roxmltree::Document;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SvgError {
    #[error("XML parse error: {0}")]
    XmlParse(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SvgError>;

/// Collect the `d` attribute of every `path` element, in document order.
///
/// `path` elements without a `d` attribute are skipped. A document with no
/// `path` elements yields an empty vector, not an error.
pub fn path_commands(xml: &str) -> Result<Vec<String>> {
    let doc = Document::parse(xml)?;

    let commands: Vec<String> = doc
        .descendants()
        .filter(|node| node.is_element() && node.tag_name().name() == "path")
        .filter_map(|node| node.attribute("d").map(str::to_owned))
        .collect();

    log::debug!("extracted {} path command(s)", commands.len());
    Ok(commands)
}

/// Read an SVG file and collect its path commands.
pub fn load_path_commands(path: &Path) -> Result<Vec<String>> {
    let xml = fs::read_to_string(path)?;
    path_commands(&xml)
}

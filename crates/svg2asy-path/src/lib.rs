//! Translate SVG relative cubic-Bezier path commands into Asymptote paths.
//!
//! The supported grammar is the `m <start> c <offset>...` subset of an SVG
//! `path` element's `d` attribute: one relative move, followed by cubic
//! segments given as offset triples (control-1, control-2, end-anchor),
//! optionally closed with a trailing `z`/`Z`. [`translate`] resolves every
//! offset into an absolute point and renders a `path <name> = ...`
//! declaration, plus an optional `dot(...)` overlay marking every anchor and
//! control point.
//!
//! Anything outside that subset (lines, arcs, quadratics, mixed forms) is
//! rejected, never guessed at. The absolute variant `M ... C ...` is
//! recognized but deliberately unimplemented.

pub mod coord;

pub use coord::{CoordPair, MalformedCoordinate};

use thiserror::Error;

/// Offset tokens per cubic segment: control-1, control-2, end-anchor.
const STRIDE: usize = 3;

/// Errors that abort the translation of one path command.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TranslateError {
    /// A token meant as an `x,y` pair did not decode into exactly two numbers.
    #[error("malformed coordinate: {0}")]
    MalformedCoordinate(#[from] MalformedCoordinate),

    /// The command is recognizably cubic but outside the supported subset.
    #[error("unsupported cubic spline command: {0}")]
    UnsupportedCommand(&'static str),

    /// The command does not start with a recognizable move/curve keyword pair.
    #[error("the path is not a cubic spline")]
    NotACubicSpline,
}

pub type Result<T> = std::result::Result<T, TranslateError>;

/// Translate one SVG path command into an Asymptote `path` declaration.
///
/// With `debug` set, one `dot(<point>);` line per resolved point is appended
/// after the declaration, anchors and control points alike, in sequence
/// order.
///
/// # Example
///
/// ```
/// use svg2asy_path::translate;
///
/// let asy = translate("m 0,0 c 1,0 1,1 0,1", false, "path1").unwrap();
/// assert_eq!(asy, "path path1 = (0, -0)..controls (1, -0) and (1, -1)..(0, -1);");
/// ```
pub fn translate(command: &str, debug: bool, path_name: &str) -> Result<String> {
    log::trace!("translating '{path_name}' from {} bytes of input", command.len());

    let mut tokens: Vec<&str> = command.split_whitespace().collect();

    let cyclic = matches!(tokens.last(), Some(&"z") | Some(&"Z"));
    if cyclic {
        tokens.pop();
    }

    let points = match tokens.as_slice() {
        ["M", _start, "C", ..] => {
            return Err(TranslateError::UnsupportedCommand(
                "absolute coordinates ('M'/'C') are not implemented",
            ));
        }
        ["m", start, "c", offsets @ ..] => resolve_control_points(start, offsets)?,
        _ => return Err(TranslateError::NotACubicSpline),
    };

    let mut asy = render_path(&points, path_name, cyclic);
    if debug {
        asy.push('\n');
        asy.push_str(&render_dots(&points));
    }

    Ok(asy)
}

/// Resolve raw offset tokens into the absolute control-point sequence: the
/// start anchor, then three absolute points per segment.
///
/// All three points of a segment are offsets from the segment's starting
/// anchor, and the segment's end-anchor becomes the origin for the next
/// segment. Trailing tokens that do not form a full triple are dropped.
fn resolve_control_points(start: &str, offsets: &[&str]) -> Result<Vec<CoordPair<f64>>> {
    if offsets.len() < STRIDE {
        return Err(TranslateError::UnsupportedCommand(
            "a cubic spline needs at least one offset triple after 'c'",
        ));
    }

    let leftover = offsets.len() % STRIDE;
    if leftover != 0 {
        log::warn!("ignoring {leftover} trailing offset token(s) that do not form a full triple");
    }

    let mut points = Vec::with_capacity(1 + offsets.len() - leftover);
    let mut anchor = parse_pair(start)?;
    points.push(anchor);

    for group in offsets.chunks_exact(STRIDE) {
        let base = anchor;
        for token in group {
            anchor = parse_pair(token)? + base;
            points.push(anchor);
        }
    }

    Ok(points)
}

/// Decode one `x,y` token.
fn parse_pair(token: &str) -> Result<CoordPair<f64>> {
    let coords = token
        .split(',')
        .map(|part| part.parse::<f64>().map_err(|_| MalformedCoordinate))
        .collect::<std::result::Result<Vec<f64>, _>>()?;
    Ok(CoordPair::from_coords(coords)?)
}

/// Render the Asymptote `path` declaration for a resolved point sequence.
fn render_path(points: &[CoordPair<f64>], path_name: &str, cyclic: bool) -> String {
    let mut asy = format!("path {path_name} = ");

    // Each segment renders from the anchor that precedes it; the final
    // anchor is emitted on its own, before the terminator.
    for segment in points[..points.len() - 1].chunks_exact(STRIDE) {
        asy.push_str(&format!(
            "{}..controls {} and {}..",
            segment[0], segment[1], segment[2]
        ));
    }
    asy.push_str(&points[points.len() - 1].to_string());
    asy.push_str(if cyclic { "..cycle;" } else { ";" });

    asy
}

/// One `dot(...)` marker per point, anchors and control points alike.
fn render_dots(points: &[CoordPair<f64>]) -> String {
    points
        .iter()
        .map(|p| format!("dot({p});"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_segment() {
        let asy = translate("m 0,0 c 1,0 1,1 0,1", false, "path1").unwrap();
        assert_eq!(
            asy,
            "path path1 = (0, -0)..controls (1, -0) and (1, -1)..(0, -1);"
        );
    }

    #[test]
    fn test_cyclic_path_terminator() {
        let open = translate("m 0,0 c 1,0 1,1 0,1", false, "path1").unwrap();
        assert!(open.ends_with(';'));
        assert!(!open.ends_with("..cycle;"));

        for close in ["z", "Z"] {
            let cyclic =
                translate(&format!("m 0,0 c 1,0 1,1 0,1 {close}"), false, "path1").unwrap();
            assert!(cyclic.ends_with("..cycle;"));
            // Same curve up to the terminator
            assert_eq!(
                cyclic.trim_end_matches("..cycle;"),
                open.trim_end_matches(';')
            );
        }
    }

    #[test]
    fn test_debug_overlay_marks_every_point() {
        let asy = translate("m 0,0 c 1,0 1,1 0,1", true, "path1").unwrap();
        let lines: Vec<&str> = asy.lines().collect();
        assert_eq!(
            lines,
            vec![
                "path path1 = (0, -0)..controls (1, -0) and (1, -1)..(0, -1);",
                "dot((0, -0));",
                "dot((1, -0));",
                "dot((1, -1));",
                "dot((0, -1));",
            ]
        );
    }

    #[test]
    fn test_multi_segment_anchors_accumulate() {
        // Each segment's offsets are relative to the previous end-anchor.
        let points =
            resolve_control_points("1,1", &["1,0", "1,1", "2,2", "1,0", "1,1", "2,2"]).unwrap();
        assert_eq!(points.len(), 1 + 3 * 2);
        assert_eq!(points[0], CoordPair::new(1.0, 1.0));
        assert_eq!(points[3], CoordPair::new(3.0, 3.0));
        assert_eq!(points[4], CoordPair::new(4.0, 3.0));
        assert_eq!(points[5], CoordPair::new(4.0, 4.0));
        assert_eq!(points[6], CoordPair::new(5.0, 5.0));
    }

    #[test]
    fn test_multi_segment_rendering() {
        let asy = translate("m 0,0 c 1,0 1,1 2,0 1,0 1,1 2,0", false, "wave").unwrap();
        assert_eq!(
            asy,
            "path wave = (0, -0)..controls (1, -0) and (1, -1)..\
             (2, -0)..controls (3, -0) and (3, -1)..(4, -0);"
        );
    }

    #[test]
    fn test_absolute_command_rejected() {
        let err = translate("M 0,0 C 1,0 1,1 0,1", false, "path1").unwrap_err();
        assert!(matches!(err, TranslateError::UnsupportedCommand(_)));
    }

    #[test]
    fn test_not_a_cubic_spline() {
        for command in ["l 1,1", "m 0,0 l 1,1", "", "c 1,0 1,1 0,1"] {
            let err = translate(command, false, "path1").unwrap_err();
            assert_eq!(err, TranslateError::NotACubicSpline, "input: {command:?}");
        }
    }

    #[test]
    fn test_malformed_coordinate_token() {
        for command in [
            "m 0,0 c a,b 1,1 0,1",
            "m 0 c 1,0 1,1 0,1",
            "m 0,0,0 c 1,0 1,1 0,1",
        ] {
            let err = translate(command, false, "path1").unwrap_err();
            assert!(
                matches!(err, TranslateError::MalformedCoordinate(_)),
                "input: {command:?}"
            );
        }
    }

    #[test]
    fn test_too_few_offsets() {
        for command in ["m 0,0 c", "m 0,0 c 1,1", "m 0,0 c 1,1 2,2"] {
            let err = translate(command, false, "path1").unwrap_err();
            assert!(
                matches!(err, TranslateError::UnsupportedCommand(_)),
                "input: {command:?}"
            );
        }
    }

    #[test]
    fn test_incomplete_trailing_group_is_dropped() {
        let full = translate("m 0,0 c 1,0 1,1 0,1", false, "path1").unwrap();
        let dangling = translate("m 0,0 c 1,0 1,1 0,1 5,5", false, "path1").unwrap();
        assert_eq!(dangling, full);
    }

    #[test]
    fn test_fractional_and_negative_coordinates() {
        let asy = translate("m 0.5,-1 c -0.5,2 1,1 0,1.25", false, "p").unwrap();
        assert_eq!(
            asy,
            "path p = (0.5, 1)..controls (0, -1) and (1.5, -0)..(0.5, -0.25);"
        );
    }
}

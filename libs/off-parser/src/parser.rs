//! # OFF Grammar
//!
//! Validates OFF text and assembles a [`Mesh`].
//!
//! ```text
//! line 1      OFF
//! line 2      <vertices> <faces> <edges>
//! next V      <x> <y> <z> [ignored...]
//! next F      <arity> <i_0> ... <i_(arity-1)> [color...]
//! ```
//!
//! Each step is fatal on failure. Lines after the face block are ignored.

use config::constants::{COUNT_FIELDS, OFF_HEADER, VERTEX_COMPONENTS};
use glam::DVec3;

use crate::error::{ParseError, ParseResult};
use crate::mesh::{check_indices, Face, Mesh};
use crate::reader::{Line, LineReader};

/// Counts declared on the second line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Counts {
    vertices: usize,
    faces: usize,
    edges: usize,
}

/// Parse OFF source text into a mesh.
///
/// ## Example
///
/// ```rust
/// use off_parser::parse_str;
///
/// let mesh = parse_str("OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n").unwrap();
/// assert_eq!(mesh.vertex_count(), 3);
/// assert_eq!(mesh.faces()[0].indices(), &[0, 1, 2]);
/// ```
pub fn parse_str(source: &str) -> ParseResult<Mesh> {
    let mut reader = LineReader::new(source);

    parse_header(&mut reader)?;
    let counts = parse_counts(&mut reader)?;
    if counts.vertices == 0 {
        return Err(ParseError::EmptyMesh);
    }

    let vertices = (0..counts.vertices)
        .map(|_| parse_vertex(&mut reader))
        .collect::<ParseResult<Vec<_>>>()?;

    let faces = (0..counts.faces)
        .map(|_| parse_face(&mut reader, counts.vertices))
        .collect::<ParseResult<Vec<_>>>()?;

    log::debug!(
        "parsed OFF mesh: {} vertices, {} faces, {} edges declared",
        counts.vertices,
        counts.faces,
        counts.edges
    );

    Mesh::new(vertices, faces, counts.edges)
}

// =============================================================================
// SECTIONS
// =============================================================================

fn parse_header(reader: &mut LineReader<'_>) -> ParseResult<()> {
    let found = reader.next_line().map(|line| line.text.trim()).unwrap_or("");
    if found == OFF_HEADER {
        Ok(())
    } else {
        Err(ParseError::BadHeader {
            found: found.to_string(),
        })
    }
}

fn parse_counts(reader: &mut LineReader<'_>) -> ParseResult<Counts> {
    let line = reader
        .next_line()
        .ok_or_else(|| ParseError::bad_counts("missing counts line"))?;

    let tokens: Vec<&str> = line.tokens().collect();
    if tokens.len() != COUNT_FIELDS {
        return Err(ParseError::bad_counts(format!(
            "expected {COUNT_FIELDS} values, found {}",
            tokens.len()
        )));
    }

    let mut values = [0usize; COUNT_FIELDS];
    for (value, token) in values.iter_mut().zip(&tokens) {
        *value = parse_unsigned(token).map_err(ParseError::bad_counts)?;
    }

    let [vertices, faces, edges] = values;
    Ok(Counts {
        vertices,
        faces,
        edges,
    })
}

fn parse_vertex(reader: &mut LineReader<'_>) -> ParseResult<DVec3> {
    let line = expect_line(reader, "missing vertex line", |line, reason| {
        ParseError::bad_vertex(line, reason)
    })?;

    let mut coords = [0.0; VERTEX_COMPONENTS];
    let mut found = 0;
    for token in line.tokens() {
        let value =
            parse_real(token).map_err(|reason| ParseError::bad_vertex(line.number, reason))?;
        if let Some(slot) = coords.get_mut(found) {
            *slot = value;
        }
        found += 1;
    }

    if found < VERTEX_COMPONENTS {
        return Err(ParseError::bad_vertex(
            line.number,
            format!("expected {VERTEX_COMPONENTS} coordinates, found {found}"),
        ));
    }

    Ok(DVec3::from_array(coords))
}

fn parse_face(reader: &mut LineReader<'_>, vertex_count: usize) -> ParseResult<Face> {
    let line = expect_line(reader, "missing face line", |line, reason| {
        ParseError::bad_face(line, reason)
    })?;
    let bad_face = |reason: String| ParseError::bad_face(line.number, reason);

    let tokens: Vec<&str> = line.tokens().collect();
    let (arity_token, rest) = tokens
        .split_first()
        .ok_or_else(|| bad_face("empty face line".to_string()))?;

    let arity = parse_integer(arity_token).map_err(|reason| bad_face(format!("arity {reason}")))?;
    // A negative arity declares no vertices; every following token is color.
    let expected = usize::try_from(arity).unwrap_or(0);
    if rest.len() < expected {
        return Err(bad_face(format!(
            "expected {arity} vertex indices, found {}",
            rest.len()
        )));
    }

    let (index_tokens, color_tokens) = rest.split_at(expected);
    let indices = index_tokens
        .iter()
        .map(|token| parse_unsigned(token).map_err(|reason| bad_face(format!("index {reason}"))))
        .collect::<ParseResult<Vec<_>>>()?;
    check_indices(&indices, vertex_count, line.number)?;

    let face = if arity < 0 {
        Face::with_negative_arity(arity)
    } else {
        Face::new(indices)
    };
    if color_tokens.is_empty() {
        return Ok(face);
    }

    let color = color_tokens
        .iter()
        .map(|token| parse_real(token).map_err(|reason| bad_face(format!("color {reason}"))))
        .collect::<ParseResult<Vec<_>>>()?;
    Ok(face.with_color(color))
}

// =============================================================================
// TOKENS
// =============================================================================

fn expect_line<'a>(
    reader: &mut LineReader<'a>,
    missing: &str,
    error: impl FnOnce(usize, String) -> ParseError,
) -> ParseResult<Line<'a>> {
    let number = reader.line_number();
    reader
        .next_line()
        .ok_or_else(|| error(number, missing.to_string()))
}

fn parse_unsigned(token: &str) -> Result<usize, String> {
    token
        .parse::<usize>()
        .map_err(|_| format!("'{token}' is not a non-negative integer"))
}

fn parse_integer(token: &str) -> Result<i64, String> {
    token
        .parse::<i64>()
        .map_err(|_| format!("'{token}' is not an integer"))
}

/// Accepts sign, decimal point, and exponent; rejects `NaN` and infinities.
fn parse_real(token: &str) -> Result<f64, String> {
    match token.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        Ok(_) => Err(format!("'{token}' is not a finite real number")),
        Err(_) => Err(format!("'{token}' is not a real number")),
    }
}

// =============================================================================
// TESTS
// =============================================================================

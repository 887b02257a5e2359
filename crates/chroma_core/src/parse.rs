//! Color literal parsing
//!
//! Accepted shapes:
//! - `rgb(r, g, b)` and `rgba(r, g, b[, a])` with integer channels 0-255 and
//!   a fractional alpha 0.0-1.0
//! - `#RRGGBB` (opaque)
//! - `#RRGGBBAA` (CSS byte order, reordered to ARGB)
//!
//! Everything else, including brace references, is "not a color".

use crate::color::Argb;

/// Whether a raw token value is a brace-delimited reference like `{a.b.c}`
pub fn is_reference(raw: &str) -> bool {
    let raw = raw.trim();
    raw.len() >= 2 && raw.starts_with('{') && raw.ends_with('}')
}

/// Parse a raw token value into a color, `None` if it is not a color literal
pub fn parse_color(raw: &str) -> Option<Argb> {
    let raw = raw.trim();
    if raw.is_empty() || is_reference(raw) {
        return None;
    }

    if let Some(args) = functional_args(raw) {
        return parse_rgb_function(args);
    }

    parse_hex(raw.strip_prefix('#').unwrap_or(raw))
}

/// Returns the argument list of an `rgb(...)`/`rgba(...)` call
fn functional_args(raw: &str) -> Option<&str> {
    let open = raw.find('(')?;
    let name = raw[..open].trim();
    if !name.eq_ignore_ascii_case("rgb") && !name.eq_ignore_ascii_case("rgba") {
        return None;
    }
    raw[open + 1..].strip_suffix(')')
}

fn parse_rgb_function(args: &str) -> Option<Argb> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }

    let r = parse_channel(parts[0])?;
    let g = parse_channel(parts[1])?;
    let b = parse_channel(parts[2])?;
    let a = match parts.get(3) {
        Some(alpha) => parse_alpha(alpha)?,
        None => 0xFF,
    };

    Some(Argb::new(a, r, g, b))
}

fn parse_channel(s: &str) -> Option<u8> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u8>().ok()
}

fn parse_alpha(s: &str) -> Option<u8> {
    let alpha: f64 = s.parse().ok()?;
    if !(0.0..=1.0).contains(&alpha) {
        return None;
    }
    Some((alpha * 255.0).round() as u8)
}

fn parse_hex(digits: &str) -> Option<Argb> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    match digits.len() {
        6 => {
            let rgb = u32::from_str_radix(digits, 16).ok()?;
            Some(Argb::from_argb_u32(0xFF00_0000 | rgb))
        }
        8 => {
            let rgba = u32::from_str_radix(digits, 16).ok()?;
            Some(Argb::from_rgba_u32(rgba))
        }
        _ => None,
    }
}

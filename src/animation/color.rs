use std::fmt;

/// Opaque 8-bit RGB color. Alpha is never part of color interpolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

const PALETTE: [(&str, Rgb8); 9] = [
    ("red", Rgb8::new(255, 0, 0)),
    ("blue", Rgb8::new(0, 0, 255)),
    ("green", Rgb8::new(0, 128, 0)),
    ("black", Rgb8::new(0, 0, 0)),
    ("white", Rgb8::new(255, 255, 255)),
    ("yellow", Rgb8::new(255, 255, 0)),
    ("cyan", Rgb8::new(0, 255, 255)),
    ("magenta", Rgb8::new(255, 0, 255)),
    ("gray", Rgb8::new(128, 128, 128)),
];

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a palette name, `#rgb`, `#rrggbb` or `rgb(r, g, b)`.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(body) = s.strip_prefix("rgb(").and_then(|r| r.strip_suffix(')')) {
            return parse_rgb_fn(body);
        }
        PALETTE
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, c)| *c)
    }

    /// Channel-wise linear interpolation, rounded to the nearest integer.
    pub fn lerp(self, other: Self, t: f64) -> Self {
        fn lerp_u8(a: u8, b: u8, t: f64) -> u8 {
            let a = f64::from(a);
            let b = f64::from(b);
            (a + (b - a) * t).round().clamp(0.0, 255.0) as u8
        }

        Self {
            r: lerp_u8(self.r, other.r, t),
            g: lerp_u8(self.g, other.g, t),
            b: lerp_u8(self.b, other.b, t),
        }
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

fn parse_hex(hex: &str) -> Option<Rgb8> {
    fn nibble(c: u8) -> Option<u8> {
        (c as char).to_digit(16).map(|d| d as u8)
    }

    let bytes = hex.as_bytes();
    match bytes.len() {
        3 => {
            let r = nibble(bytes[0])?;
            let g = nibble(bytes[1])?;
            let b = nibble(bytes[2])?;
            Some(Rgb8::new(r * 17, g * 17, b * 17))
        }
        6 => {
            let byte = |i: usize| Some(nibble(bytes[i])? * 16 + nibble(bytes[i + 1])?);
            Some(Rgb8::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

fn parse_rgb_fn(body: &str) -> Option<Rgb8> {
    let mut channels = [0u8; 3];
    let mut parts = body.split(',');
    for slot in &mut channels {
        let v: f64 = parts.next()?.trim().parse().ok()?;
        if !v.is_finite() {
            return None;
        }
        *slot = v.round().clamp(0.0, 255.0) as u8;
    }
    if parts.next().is_some() {
        return None;
    }
    Some(Rgb8::new(channels[0], channels[1], channels[2]))
}

/// Interpolate two color strings, emitting `rgb(r, g, b)`.
///
/// If either side fails to parse, `from` is returned unchanged.
pub fn lerp_color(from: &str, to: &str, t: f64) -> String {
    match (Rgb8::parse(from), Rgb8::parse(to)) {
        (Some(a), Some(b)) => a.lerp(b, t).to_string(),
        _ => from.to_owned(),
    }
}

/// A color as authored: any string accepted by [`Rgb8::parse`], or something else that
/// is passed through to the renderer untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ColorValue(pub String);

impl ColorValue {
    /// Wrap a color string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Borrow the color string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Parsed RGB value, if the string is understood.
    pub fn rgb(&self) -> Option<Rgb8> {
        Rgb8::parse(&self.0)
    }
}

impl From<&str> for ColorValue {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ColorValue {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/color.rs"]
mod tests;

//! Color-value parsing and canonicalization.
//!
//! Stylesheet values arrive in a handful of encodings: hex (`#fff`,
//! `#f8fafc`, `#f8fafcff`), `hsl()` / `hsla()` functions, and the bare
//! space-separated `h s% l%` triple Tailwind uses inside variables. The
//! extractor canonicalizes all recognized encodings to lowercase hex;
//! anything else passes through unchanged.

/// A parsed color value.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorValue {
    /// Normalized hex string, lowercase, `#rrggbb` or `#rrggbbaa`.
    Hex(String),
    /// Hue in degrees, saturation and lightness in percent, optional alpha
    /// in `0.0..=1.0`.
    Hsl { h: f32, s: f32, l: f32, a: Option<f32> },
    /// Unrecognized encoding, preserved verbatim.
    Raw(String),
}

impl ColorValue {
    /// Parse a raw stylesheet value. Never fails; unrecognized input becomes
    /// [`ColorValue::Raw`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Some(hex) = parse_hex(trimmed) {
            return ColorValue::Hex(hex);
        }
        if let Some((h, s, l, a)) = parse_hsl(trimmed) {
            return ColorValue::Hsl { h, s, l, a };
        }
        ColorValue::Raw(trimmed.to_owned())
    }

    /// Render the canonical form: lowercase hex for recognized encodings,
    /// the original text otherwise.
    pub fn canonical(&self) -> String {
        match self {
            ColorValue::Hex(hex) => hex.clone(),
            ColorValue::Hsl { h, s, l, a } => hsl_to_hex(*h, *s, *l, *a),
            ColorValue::Raw(raw) => raw.clone(),
        }
    }
}

/// Parse-and-canonicalize in one step.
///
/// Canonicalizing an already-canonical hex value is a no-op.
pub fn canonicalize(input: &str) -> String {
    ColorValue::parse(input).canonical()
}

// ---------------------------------------------------------------------------
// Hex
// ---------------------------------------------------------------------------

fn parse_hex(input: &str) -> Option<String> {
    let digits = input.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let expanded: String = match digits.len() {
        // Short forms double each digit: #abc -> #aabbcc.
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return None,
    };
    Some(format!("#{}", expanded.to_ascii_lowercase()))
}

// ---------------------------------------------------------------------------
// HSL
// ---------------------------------------------------------------------------

fn parse_hsl(input: &str) -> Option<(f32, f32, f32, Option<f32>)> {
    let lower = input.to_ascii_lowercase();
    let args = if let Some(rest) = lower.strip_prefix("hsla") {
        rest.trim().strip_prefix('(')?.strip_suffix(')')?
    } else if let Some(rest) = lower.strip_prefix("hsl") {
        rest.trim().strip_prefix('(')?.strip_suffix(')')?
    } else {
        // Bare `h s% l%` triple; the percent marks distinguish it from
        // arbitrary numeric text.
        lower.as_str()
    };
    parse_hsl_args(args)
}

fn parse_hsl_args(args: &str) -> Option<(f32, f32, f32, Option<f32>)> {
    let (body, slash_alpha) = match args.split_once('/') {
        Some((body, alpha)) => (body, Some(alpha.trim())),
        None => (args, None),
    };
    let mut parts = body
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|p| !p.is_empty());

    let h = parts.next()?.trim_end_matches("deg").parse::<f32>().ok()?;
    let s = parts.next()?.strip_suffix('%')?.trim().parse::<f32>().ok()?;
    let l = parts.next()?.strip_suffix('%')?.trim().parse::<f32>().ok()?;

    // Alpha either follows a slash or is a fourth comma-separated argument.
    let alpha_part = slash_alpha.or_else(|| parts.next());
    if parts.next().is_some() {
        return None;
    }
    let a = match alpha_part {
        Some(raw) => Some(parse_alpha(raw)?),
        None => None,
    };
    Some((h, s, l, a))
}

fn parse_alpha(raw: &str) -> Option<f32> {
    if let Some(percent) = raw.strip_suffix('%') {
        Some(percent.trim().parse::<f32>().ok()? / 100.0)
    } else {
        raw.trim().parse::<f32>().ok()
    }
}

fn hsl_to_hex(h: f32, s: f32, l: f32, a: Option<f32>) -> String {
    let h = (h.rem_euclid(360.0)) / 360.0;
    let s = (s / 100.0).clamp(0.0, 1.0);
    let l = (l / 100.0).clamp(0.0, 1.0);

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = c * (1.0 - ((h * 6.0) % 2.0 - 1.0).abs());
    let m = l - c / 2.0;

    let (r, g, b) = if h < 1.0 / 6.0 {
        (c, x, 0.0)
    } else if h < 2.0 / 6.0 {
        (x, c, 0.0)
    } else if h < 3.0 / 6.0 {
        (0.0, c, x)
    } else if h < 4.0 / 6.0 {
        (0.0, x, c)
    } else if h < 5.0 / 6.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let byte = |v: f32| ((v + m).clamp(0.0, 1.0) * 255.0).round() as u8;
    match a {
        Some(alpha) => format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(r),
            byte(g),
            byte(b),
            (alpha.clamp(0.0, 1.0) * 255.0).round() as u8
        ),
        None => format!("#{:02x}{:02x}{:02x}", byte(r), byte(g), byte(b)),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

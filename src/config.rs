//! Visual configuration tokens: the palette and font roles every component
//! references. Values are emitted once as CSS custom properties, so changing
//! a token here propagates to every rule that uses the role.

/// Verde abisso — section backgrounds, dark band.
pub const DARK: &str = "#0A231E";
/// Terracotta — accents, links, the progress bar.
pub const ACCENT: &str = "#BC5D2E";
/// Sabbia — page background, light text on dark.
pub const PAPER: &str = "#F2F0E9";
/// Antracite — body copy on light backgrounds.
pub const TEXT: &str = "#2C2C2C";

pub const SERIF: &str = "\"Playfair Display\", serif";
pub const SANS: &str = "\"Inter\", sans-serif";

/// The `:root` declaration consumed by the global style block.
pub fn css_variables() -> String {
    format!(
        ":root {{ --dark: {dark}; --accent: {accent}; --paper: {paper}; --text: {text}; --serif: {serif}; --sans: {sans}; }}",
        dark = DARK,
        accent = ACCENT,
        paper = PAPER,
        text = TEXT,
        serif = SERIF,
        sans = SANS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_variables_carries_every_token() {
        let css = css_variables();
        for token in [DARK, ACCENT, PAPER, TEXT, SERIF, SANS] {
            assert!(css.contains(token), "missing token {token} in {css}");
        }
    }

    #[test]
    fn css_variables_declares_every_role() {
        let css = css_variables();
        for role in ["--dark", "--accent", "--paper", "--text", "--serif", "--sans"] {
            assert!(css.contains(role), "missing role {role}");
        }
    }
}

const RESERVED_CHARS: [char; 7] = ['&', '%', '$', '#', '_', '{', '}'];

/// Escape LaTeX reserved characters.
///
/// Reserved characters already preceded by a backslash are left alone, so
/// pre-escaped input is not escaped twice. `\` itself is never escaped.
/// `~` and `^` are always replaced by their text macros.
pub fn escape_latex(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut previous = None;

    for c in text.chars() {
        if RESERVED_CHARS.contains(&c) && previous != Some('\\') {
            escaped.push('\\');
        }
        escaped.push(c);
        previous = Some(c);
    }

    // Must run after the reserved characters: the macros contain `$`
    escaped
        .replace('~', "$\\textasciitilde$")
        .replace('^', "$\\textasciicircum$")
}

/// Join the words of a name with LaTeX non-breaking spaces
pub fn name_for_display(name: &str) -> String {
    let mut display = String::with_capacity(name.len());
    let mut in_whitespace = false;

    for c in name.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                display.push('~');
            }
            in_whitespace = true;
        } else {
            display.push(c);
            in_whitespace = false;
        }
    }

    display
}

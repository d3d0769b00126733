mod latex;
pub use latex::{escape_latex, name_for_display};

/// Build initials ("J.P.") from space-separated first names
pub fn to_initials(names: &str) -> String {
    let mut initials = String::new();

    for name in names.split_whitespace() {
        if let Some(first) = name.chars().next().and_then(|c| c.to_uppercase().next()) {
            initials.push(first);
            initials.push('.');
        }
    }

    initials.trim().to_string()
}

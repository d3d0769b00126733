use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexStyle {
    #[default]
    Letters,
    Numbers,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AffiliationIndex {
    Letter(String),
    Number(usize),
}

impl fmt::Display for AffiliationIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AffiliationIndex::Letter(letters) => f.write_str(letters),
            AffiliationIndex::Number(n) => write!(f, "{}", n),
        }
    }
}

impl IndexStyle {
    /// Derive the index for a zero-based position in the registry
    pub fn index_for(self, position: usize) -> AffiliationIndex {
        match self {
            IndexStyle::Letters => AffiliationIndex::Letter(letters_for(position)),
            IndexStyle::Numbers => AffiliationIndex::Number(position + 1),
        }
    }
}

/// Bijective base-26: a..z, aa..az, ba..zz, aaa..
fn letters_for(position: usize) -> String {
    let mut remaining = position + 1;
    let mut letters = Vec::new();

    while remaining > 0 {
        remaining -= 1;
        letters.push(b'a' + (remaining % 26) as u8);
        remaining /= 26;
    }

    letters.iter().rev().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters_roll_over_without_zero_digit() {
        assert_eq!(letters_for(0), "a");
        assert_eq!(letters_for(25), "z");
        assert_eq!(letters_for(26), "aa");
        assert_eq!(letters_for(701), "zz");
        assert_eq!(letters_for(702), "aaa");
    }
}

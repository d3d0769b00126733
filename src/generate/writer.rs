use std::io::{self, Write};

use crate::format::{escape_latex, name_for_display};
use crate::AuthorList;

/// Write `\author` lines, a blank line, then `\affiliation` lines.
///
/// Names and affiliations are written as given unless `escape` is set, so
/// LaTeX already present in the input survives.
pub fn write_latex<W: Write>(writer: &mut W, list: &AuthorList, escape: bool) -> io::Result<()> {
    for author in &list.authors {
        let orcid_link = match &author.orcid {
            Some(orcid) => format!("\\orcidlink{{{}}}", orcid),
            None => String::new(),
        };
        let name = if escape {
            author.escaped_name()
        } else {
            author.name.clone()
        };
        writeln!(
            writer,
            "\\author[{}]{{{}{}}}",
            author.affiliation,
            name_for_display(&name),
            orcid_link
        )?;
    }

    writeln!(writer)?;

    for (index, affiliation) in list.affiliations.indexed_entries() {
        if escape {
            writeln!(writer, "\\affiliation[{}]{{{}}}", index, escape_latex(affiliation))?;
        } else {
            writeln!(writer, "\\affiliation[{}]{{{}}}", index, affiliation)?;
        }
    }

    Ok(())
}

/// Write the single-line arXiv author list
pub fn write_arxiv<W: Write>(writer: &mut W, list: &AuthorList, prefix: &str) -> io::Result<()> {
    writeln!(writer, "{}{}", prefix, list.joined_names())
}

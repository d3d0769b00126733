use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::format::to_initials;
use crate::{AffiliationRegistry, Author, AuthorList, AuthorRecord, IndexStyle};

mod reader;
mod writer;
pub use reader::{load_authors, read_authors};
pub use writer::{write_arxiv, write_latex};

pub const AUTHOR_FILE_DEFAULT: &str = "authors.csv";
pub const LATEX_AUTHOR_FILE_DEFAULT: &str = "hep-eppsu-software-authors.tex";
pub const ARXIV_AUTHOR_FILE_DEFAULT: &str = "hep-eppsu-software-authors.arxiv";
pub const ARXIV_AUTHORS_PREFIX_DEFAULT: &str = "HEP Software Foundation: ";

pub const MORE_AUTHORS_NAME: &str = "And many more to come...";
pub const MORE_AUTHORS_AFFILIATION: &str = "Many more to come...";

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// CSV file containing the author list
    #[arg(long = "authors-csv", default_value = AUTHOR_FILE_DEFAULT)]
    pub authors: PathBuf,

    /// Output LaTeX file
    #[arg(long, default_value = LATEX_AUTHOR_FILE_DEFAULT)]
    pub output: PathBuf,

    /// Output arXiv author file
    #[arg(long, default_value = ARXIV_AUTHOR_FILE_DEFAULT)]
    pub arxiv_output: PathBuf,

    /// Prefix for the arXiv author list
    #[arg(long, default_value = ARXIV_AUTHORS_PREFIX_DEFAULT)]
    pub arxiv_authors_prefix: String,

    /// Add a last entry mentioning more authors are coming
    #[arg(long)]
    pub more_authors: bool,

    /// Use initials for author first names
    #[arg(long)]
    pub use_initials: bool,

    /// Use letters as affiliation index (default)
    #[arg(long, conflicts_with = "affiliation_numbers")]
    pub affiliation_letters: bool,

    /// Use numbers as affiliation index
    #[arg(long)]
    pub affiliation_numbers: bool,

    /// Escape LaTeX reserved characters in names and affiliations
    #[arg(long)]
    pub latex_escape: bool,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub authors: PathBuf,
    pub latex_output: PathBuf,
    pub arxiv_output: PathBuf,
    pub arxiv_prefix: String,
    pub index_style: IndexStyle,
    pub use_initials: bool,
    pub more_authors: bool,
    pub escape_latex: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            authors: PathBuf::from(AUTHOR_FILE_DEFAULT),
            latex_output: PathBuf::from(LATEX_AUTHOR_FILE_DEFAULT),
            arxiv_output: PathBuf::from(ARXIV_AUTHOR_FILE_DEFAULT),
            arxiv_prefix: ARXIV_AUTHORS_PREFIX_DEFAULT.to_string(),
            index_style: IndexStyle::Letters,
            use_initials: false,
            more_authors: false,
            escape_latex: false,
        }
    }
}

impl From<GenerateArgs> for Config {
    fn from(args: GenerateArgs) -> Self {
        let index_style = if args.affiliation_numbers {
            IndexStyle::Numbers
        } else {
            IndexStyle::Letters
        };

        Self {
            authors: args.authors,
            latex_output: args.output,
            arxiv_output: args.arxiv_output,
            arxiv_prefix: args.arxiv_authors_prefix,
            index_style,
            use_initials: args.use_initials,
            more_authors: args.more_authors,
            escape_latex: args.latex_escape,
        }
    }
}

fn display_name(record: &AuthorRecord, use_initials: bool) -> String {
    if use_initials {
        format!("{} {}", to_initials(&record.firstnames), record.lastname)
    } else {
        format!("{} {}", record.firstnames, record.lastname)
    }
}

/// Build the author list from records already sorted by last name.
///
/// Affiliations shared by several authors are registered once and reuse the
/// index of their first appearance.
pub fn build_author_list(records: &[AuthorRecord], config: &Config) -> AuthorList {
    let mut affiliations = AffiliationRegistry::new(config.index_style);
    let mut authors = Vec::with_capacity(records.len() + 1);

    for record in records {
        let index = match affiliations.get_index(&record.affiliation) {
            Some(index) => index,
            None => {
                debug!("New affiliation: {}", record.affiliation);
                affiliations.add(&record.affiliation)
            }
        };

        authors.push(Author::new(
            display_name(record, config.use_initials),
            index,
            record.orcid.clone(),
        ));
    }

    if config.more_authors {
        let index = affiliations.add(MORE_AUTHORS_AFFILIATION);
        authors.push(Author::new(MORE_AUTHORS_NAME.to_string(), index, None));
    }

    AuthorList {
        authors,
        affiliations,
    }
}

pub fn generate(config: &Config) -> Result<AuthorList> {
    let records = load_authors(&config.authors)?;
    info!("Loaded {} authors from {}", records.len(), config.authors.display());

    let list = build_author_list(&records, config);
    info!("Registered {} affiliations", list.affiliations.len());

    let latex_file = File::create(&config.latex_output)
        .with_context(|| format!("Failed to create {}", config.latex_output.display()))?;
    let mut latex_writer = BufWriter::new(latex_file);
    write_latex(&mut latex_writer, &list, config.escape_latex)
        .and_then(|_| latex_writer.flush())
        .with_context(|| format!("Failed to write {}", config.latex_output.display()))?;

    let arxiv_file = File::create(&config.arxiv_output)
        .with_context(|| format!("Failed to create {}", config.arxiv_output.display()))?;
    let mut arxiv_writer = BufWriter::new(arxiv_file);
    write_arxiv(&mut arxiv_writer, &list, &config.arxiv_prefix)
        .and_then(|_| arxiv_writer.flush())
        .with_context(|| format!("Failed to write {}", config.arxiv_output.display()))?;

    info!(
        "Output: {}, {}",
        config.latex_output.display(),
        config.arxiv_output.display()
    );

    Ok(list)
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("a2tex=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();

    generate(&Config::from(args)).map(|_| ())
}

//! Citation formatting for bookmarked papers.
//!
//! Field values are inserted verbatim; braces, quotes and other special
//! characters are not escaped.

use std::fmt;
use std::str::FromStr;

use crate::models::Paper;

/// Substituted for an empty paper URL.
pub const URL_PLACEHOLDER: &str = "URL not available";

/// Supported citation styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum CitationStyle {
    /// APA.
    #[default]
    Apa,
    /// MLA.
    Mla,
    /// BibTeX `@article` entry.
    #[value(alias = "bib")]
    Bibtex,
}

impl CitationStyle {
    /// All styles.
    pub const ALL: [Self; 3] = [Self::Apa, Self::Mla, Self::Bibtex];

    /// Lowercase style name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Apa => "apa",
            Self::Mla => "mla",
            Self::Bibtex => "bibtex",
        }
    }
}

impl fmt::Display for CitationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CitationStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apa" => Ok(Self::Apa),
            "mla" => Ok(Self::Mla),
            "bibtex" | "bib" => Ok(Self::Bibtex),
            other => Err(format!("Unknown citation style: {other}")),
        }
    }
}

/// Format a paper in the given style.
#[must_use]
pub fn format_citation(paper: &Paper, style: CitationStyle) -> String {
    let url = if paper.has_url() { paper.url.as_str() } else { URL_PLACEHOLDER };

    match style {
        CitationStyle::Apa => {
            format!("{} ({}). {}. Retrieved from {url}", paper.authors, paper.year, paper.title)
        }
        CitationStyle::Mla => format!(
            "{}. \"{}.\" {}. Web. Retrieved from {url}",
            paper.authors, paper.title, paper.year
        ),
        CitationStyle::Bibtex => format!(
            "@article{{paper_{year},\n  title={{{title}}},\n  author={{{authors}}},\n  year={{{year}}},\n  url={{{url}}}\n}}",
            year = paper.year,
            title = paper.title,
            authors = paper.authors,
        ),
    }
}

//! Page text assembly.
//!
//! The extractors expect one transcript row per line. PDF readers deliver
//! positioned text fragments, each flagged with whether it ends a visual
//! line. Fragments are joined in reading order: a fragment that ends a line
//! is followed by `\n`, any other by a single space. Pages are concatenated
//! in order so that period headers stay ahead of the rows they govern.

/// A positioned text fragment from one PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFragment {
    /// Fragment text as extracted.
    pub text: String,
    /// Whether the fragment is the last one on its visual line.
    pub ends_line: bool,
}

impl TextFragment {
    /// Creates a fragment that continues the current line.
    #[must_use]
    pub fn inline(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            ends_line: false,
        }
    }

    /// Creates a fragment that ends the current line.
    #[must_use]
    pub fn line_end(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            ends_line: true,
        }
    }
}

/// Joins the fragments of every page into a single line-oriented string.
#[must_use]
pub fn assemble_page_text(pages: &[Vec<TextFragment>]) -> String {
    let mut text = String::new();

    for fragment in pages.iter().flatten() {
        text.push_str(&fragment.text);
        text.push(if fragment.ends_line { '\n' } else { ' ' });
    }

    log::debug!(
        "Assembled {} characters of text from {} page(s)",
        text.len(),
        pages.len()
    );

    text
}

/// Splits already-extracted page text into line-ending fragments.
///
/// Readers that only expose whole-page text (rather than positioned
/// fragments) go through this before [`assemble_page_text`]. Blank lines are
/// dropped since they never carry record data.
#[must_use]
pub fn fragments_from_page_text(page: &str) -> Vec<TextFragment> {
    page.lines()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .map(TextFragment::line_end)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_fragments_with_newline_or_space() {
        let pages = vec![vec![
            TextFragment::line_end("2023.1"),
            TextFragment::inline("CALCULO I"),
            TextFragment::inline("T01"),
            TextFragment::line_end("APROVADO"),
        ]];

        assert_eq!(assemble_page_text(&pages), "2023.1\nCALCULO I T01 APROVADO\n");
    }

    #[test]
    fn concatenates_pages_in_order() {
        let pages = vec![
            vec![TextFragment::line_end("2022.2")],
            vec![TextFragment::line_end("2023.1")],
        ];

        assert_eq!(assemble_page_text(&pages), "2022.2\n2023.1\n");
    }

    #[test]
    fn trailing_inline_fragment_ends_with_space() {
        let pages = vec![vec![TextFragment::inline("Nome:")]];
        assert_eq!(assemble_page_text(&pages), "Nome: ");
    }

    #[test]
    fn page_text_becomes_line_fragments() {
        let fragments = fragments_from_page_text("2023.1  \n\nCALCULO I T01\n");
        assert_eq!(
            fragments,
            vec![
                TextFragment::line_end("2023.1"),
                TextFragment::line_end("CALCULO I T01"),
            ]
        );
    }

    #[test]
    fn no_pages_yield_empty_text() {
        assert!(assemble_page_text(&[]).is_empty());
    }
}

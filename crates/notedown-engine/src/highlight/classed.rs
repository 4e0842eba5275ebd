use std::sync::OnceLock;

use syntect::{
    html::{ClassStyle, ClassedHTMLGenerator},
    parsing::{SyntaxReference, SyntaxSet},
    util::LinesWithEndings,
};

use super::{HighlightBackend, HighlightError};

fn syntax_set() -> &'static SyntaxSet {
    static SET: OnceLock<SyntaxSet> = OnceLock::new();
    SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// `syntect` highlighting with CSS classes instead of inline styles, so the
/// page stylesheet picks the theme.
#[derive(Debug, Default, Clone, Copy)]
pub struct SyntectBackend;

impl SyntectBackend {
    fn syntax(code: &str, lang: Option<&str>) -> Result<&'static SyntaxReference, HighlightError> {
        let set = syntax_set();
        match lang {
            Some(token) => set
                .find_syntax_by_token(token)
                .ok_or_else(|| HighlightError::UnknownLanguage(token.to_string())),
            None => {
                let first = code.lines().next().unwrap_or_default();
                set.find_syntax_by_first_line(first)
                    .ok_or(HighlightError::NoLanguage)
            }
        }
    }
}

impl HighlightBackend for SyntectBackend {
    fn highlight(&self, code: &str, lang: Option<&str>) -> Result<String, HighlightError> {
        let syntax = Self::syntax(code, lang)?;
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, syntax_set(), ClassStyle::Spaced);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}

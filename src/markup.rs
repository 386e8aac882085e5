use serde::Deserialize;
use teloxide::types::ParseMode;
use teloxide::utils::{html, markdown};

/// Text formatting rules for one reply dialect.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Markup {
    #[default]
    Html,
    /// Telegram MarkdownV2
    Markdown,
    Plain,
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Markup::Html => write!(f, "html"),
            Markup::Markdown => write!(f, "markdown"),
            Markup::Plain => write!(f, "plain"),
        }
    }
}

impl Markup {
    pub fn parse_mode(self) -> Option<ParseMode> {
        match self {
            Markup::Html => Some(ParseMode::Html),
            Markup::Markdown => Some(ParseMode::MarkdownV2),
            Markup::Plain => None,
        }
    }

    /// Make arbitrary text safe to embed in a reply of this dialect.
    pub fn escape(self, text: &str) -> String {
        match self {
            Markup::Html => html::escape(text),
            Markup::Markdown => markdown::escape(text),
            Markup::Plain => text.to_string(),
        }
    }

    pub fn bold(self, text: &str) -> String {
        match self {
            Markup::Html => html::bold(&html::escape(text)),
            Markup::Markdown => markdown::bold(&markdown::escape(text)),
            Markup::Plain => text.to_string(),
        }
    }

    pub fn italic(self, text: &str) -> String {
        match self {
            Markup::Html => html::italic(&html::escape(text)),
            Markup::Markdown => markdown::italic(&markdown::escape(text)),
            Markup::Plain => text.to_string(),
        }
    }

    pub fn code(self, text: &str) -> String {
        match self {
            Markup::Html => html::code_inline(text),
            Markup::Markdown => markdown::code_inline(text),
            Markup::Plain => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_wrappers_escape_content() {
        assert_eq!(Markup::Html.bold("a < b"), "<b>a &lt; b</b>");
        assert_eq!(Markup::Html.italic("x & y"), "<i>x &amp; y</i>");
        assert_eq!(Markup::Html.code("<tag>"), "<code>&lt;tag&gt;</code>");
    }

    #[test]
    fn test_markdown_escapes_special_chars() {
        assert_eq!(
            Markup::Markdown.escape("https://a.com/s/x_y.z!"),
            "https://a\\.com/s/x\\_y\\.z\\!"
        );
        assert_eq!(Markup::Markdown.bold("Done."), "*Done\\.*");
        assert_eq!(Markup::Markdown.code("a`b"), "`a\\`b`");
    }

    #[test]
    fn test_markdown_escapes_every_special_char() {
        let specials = r"_*[]()~`>#+-=|{}.!\";
        let escaped = Markup::Markdown.escape(specials);
        assert_eq!(escaped, markdown::escape(specials));
        for c in ['_', '*', '[', '(', '~', '`', '>', '#', '+', '-', '=', '|', '{', '.', '!'] {
            assert!(escaped.contains(&format!("\\{c}")), "{c} not escaped");
        }
    }

    #[test]
    fn test_plain_is_identity() {
        assert_eq!(Markup::Plain.bold("<b>"), "<b>");
        assert_eq!(Markup::Plain.escape("*x*"), "*x*");
        assert_eq!(Markup::Plain.parse_mode(), None);
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!(Markup::Html.parse_mode(), Some(ParseMode::Html));
        assert_eq!(Markup::Markdown.parse_mode(), Some(ParseMode::MarkdownV2));
    }
}

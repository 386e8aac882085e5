//! Canned bot replies.

use crate::markup::Markup;

pub fn welcome(markup: Markup) -> String {
    format!(
        "{}\n{}\n🔹 {}\n{}\n📎 {} {}\n📥 {}",
        markup.bold("Welcome to the Terabox Link Converter! 🚀"),
        markup.italic("Send me a video URL, and I'll generate a stream link for you."),
        markup.bold("Supported Links:"),
        markup.escape("  - Terabox\n  - 1024terabox"),
        markup.escape("Example:"),
        markup.code("https://terabox.com/s/1AbCdEf"),
        markup.bold("Just send me a link, and I'll do the rest!"),
    )
}

pub fn video_not_supported(markup: Markup) -> String {
    markup.escape("🎥 You sent a video! Currently, I only process video links.")
}

pub fn no_links(markup: Markup) -> String {
    markup.escape("❌ No valid Terabox links found. Please send a correct link.")
}

pub fn placeholder(markup: Markup) -> String {
    format!(
        "{}\n{}",
        markup.bold("🔄 Generating stream links..."),
        markup.escape("Please wait a moment ⏳"),
    )
}

pub fn conversion_failed(markup: Markup) -> String {
    format!(
        "{}\n{}",
        markup.bold("❌ Failed to convert links."),
        markup.escape("Please try again later."),
    )
}

/// Final reply around the composed (unescaped) text.
pub fn converted(markup: Markup, composed: &str) -> String {
    format!(
        "{}\n{}",
        markup.bold("✅ Here are your converted links:"),
        markup.escape(composed),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_lists_supported_links() {
        let text = welcome(Markup::Html);
        assert!(text.starts_with("<b>Welcome to the Terabox Link Converter! 🚀</b>"));
        assert!(text.contains("<i>Send me a video URL"));
        assert!(text.contains("  - Terabox\n  - 1024terabox"));
        assert!(text.contains("📎 Example: <code>https://terabox.com/s/1AbCdEf</code>"));
    }

    #[test]
    fn test_welcome_markdown_escapes_list() {
        let text = welcome(Markup::Markdown);
        assert!(text.contains("  \\- Terabox\n  \\- 1024terabox"));
        assert!(text.starts_with("*Welcome to the Terabox Link Converter\\! 🚀*"));
    }

    #[test]
    fn test_converted_escapes_user_text() {
        let text = converted(Markup::Html, "a <b> 🔗 https://x/?a=1&b=2");
        assert_eq!(
            text,
            "<b>✅ Here are your converted links:</b>\na &lt;b&gt; 🔗 https://x/?a=1&amp;b=2"
        );
    }

    #[test]
    fn test_markdown_replies_are_escaped() {
        assert_eq!(
            conversion_failed(Markup::Markdown),
            "*❌ Failed to convert links\\.*\nPlease try again later\\."
        );
        assert!(no_links(Markup::Markdown).ends_with("correct link\\."));
    }

    #[test]
    fn test_plain_replies() {
        assert_eq!(
            placeholder(Markup::Plain),
            "🔄 Generating stream links...\nPlease wait a moment ⏳"
        );
        assert_eq!(
            video_not_supported(Markup::Plain),
            "🎥 You sent a video! Currently, I only process video links."
        );
    }
}

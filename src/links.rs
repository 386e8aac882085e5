use lazy_regex::lazy_regex;

/// Links pointing back into Telegram itself; they often embed share URLs
/// that would otherwise be picked up as convertible links.
static RE_TELEGRAM_LINK: lazy_regex::Lazy<regex::Regex> = lazy_regex!(r"https?://t\.me/\S+");

static RE_TERABOX_LINK: lazy_regex::Lazy<regex::Regex> =
    lazy_regex!(r"(?i)https?://(?:www\.)?(?:terabox|1024terabox)\.com/s/\S+");

/// Remove Telegram-internal message links from `text`.
pub fn strip_internal_links(text: &str) -> String {
    RE_TELEGRAM_LINK.replace_all(text, "").into_owned()
}

/// All convertible links in `text`, in order of appearance.
/// Repeated links are returned once per occurrence.
pub fn extract_links(text: &str) -> Vec<String> {
    let text = strip_internal_links(text);
    RE_TERABOX_LINK
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .collect()
}

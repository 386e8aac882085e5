use crate::converter::LinkMap;

/// Prefix placed in front of every converted link.
pub const LINK_MARKER: &str = "🔗 ";

/// Replace each original link in `text` with its marked converted value.
///
/// Pairs are applied in map order, each over the output of the previous one.
/// Replacement is by literal substring, so an original link that is a prefix
/// of a later one also rewrites the head of that later link.
pub fn compose(text: &str, links: &LinkMap) -> String {
    links
        .iter()
        .fold(text.to_string(), |acc, (original, converted)| {
            acc.replace(original, &format!("{LINK_MARKER}{converted}"))
        })
}

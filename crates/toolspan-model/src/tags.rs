//! Tag normalization for discovery and indexing

const MAX_TAG_LEN: usize = 64;
const MAX_TAG_COUNT: usize = 20;

/// Normalize a list of tags for indexing and search.
///
/// Rules: lowercase, trim, internal whitespace runs become `-`, only
/// `[a-z0-9-_.]` survives, duplicates are dropped while preserving order,
/// tags are capped at 64 characters and the list at 20 entries.
pub fn normalize_tags<S: AsRef<str>>(tags: &[S]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tags.len().min(MAX_TAG_COUNT));

    for raw in tags {
        if out.len() >= MAX_TAG_COUNT {
            break;
        }

        let lowered = raw.as_ref().trim().to_lowercase();
        let joined = lowered.split_whitespace().collect::<Vec<_>>().join("-");

        let mut tag: String = joined
            .chars()
            .filter(|&c| {
                c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')
            })
            .collect();
        tag.truncate(MAX_TAG_LEN);

        if tag.is_empty() || out.contains(&tag) {
            continue;
        }
        out.push(tag);
    }

    out
}

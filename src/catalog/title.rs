//! Display-title derivation for sticker resource ids.
//!
//! A resource id like `sort_az` or `iphone_photo` is turned into the tooltip
//! shown in the picker ("Sort (A->Z)", "iPhone Photo"). Each
//! underscore-separated segment is capitalized, then an ordered list of
//! literal replacements fixes acronym casing, expands sort-direction
//! suffixes, and finally turns the remaining underscores into spaces.

/// Ordered replacement table. The sort-direction suffixes appear in their
/// segment-capitalized form and must run before the generic underscore rule,
/// otherwise `_`→`" "` would split them first. Matching stays case-sensitive
/// so ids like `book` never trip the `Ok` rule.
const REPLACEMENTS: &[(&str, &str)] = &[
    ("_Az", " (A->Z)"),
    ("_Za", " (Z->A)"),
    ("_12", " (1->2)"),
    ("_21", " (2->1)"),
    ("_Asc", " ascending"),
    ("_Desc", " descending"),
    ("Sms", "SMS"),
    ("Mms", "MMS"),
    ("Iphone", "iPhone"),
    ("Ipad", "iPad"),
    ("Faq", "FAQ"),
    ("Ok", "OK"),
    ("Vip", "VIP"),
    ("Slr", "SLR"),
    ("_", " "),
];

fn capitalize_segment(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Derive the human-readable title for a resource id.
///
/// Deterministic and order-sensitive: `sort_az` → "Sort (A->Z)",
/// `sms_icon` → "SMS Icon", `folder` → "Folder".
pub fn display_title(resource: &str) -> String {
    let mut title = resource
        .split('_')
        .map(capitalize_segment)
        .collect::<Vec<_>>()
        .join("_");

    for (pattern, replacement) in REPLACEMENTS {
        title = title.replace(pattern, replacement);
    }

    title
}

// src/core/html.rs

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| {
            if c.is_ascii() {
                c.to_ascii_lowercase()
            } else {
                c
            }
        })
        .collect()
}

/// Walk every open tag in the document, in order. Closers, comments and
/// declarations are skipped; the callback sees `<tag …>` slices.
fn for_each_open_tag(doc: &str, mut f: impl FnMut(&str)) {
    let mut pos = 0usize;
    while let Some(i) = doc[pos..].find('<').map(|i| i + pos) {
        let Some(end) = doc[i..].find('>').map(|j| j + i) else { break };
        let tag = &doc[i..=end];
        if !tag.starts_with("</") && !tag.starts_with("<!") {
            f(tag);
        }
        pos = end + 1;
    }
}

/// Attribute lookup inside one open tag. Case-insensitive on the name;
/// handles double-quoted, single-quoted and unquoted values.
pub fn attr_value_ci(tag: &str, name: &str) -> Option<String> {
    let lc = to_lower(tag);
    let needle = join!(to_lower(name), "=");
    let mut from = 0usize;
    loop {
        let i = lc[from..].find(&needle)? + from;
        let val_s = i + needle.len();
        // Attribute names follow whitespace; anything else is part of a value.
        if i == 0 || !lc.as_bytes()[i - 1].is_ascii_whitespace() {
            from = val_s;
            continue;
        }
        let rest = &tag[val_s..];
        let value = match rest.as_bytes().first() {
            Some(b'"') => rest[1..].split('"').next().unwrap_or(""),
            Some(b'\'') => rest[1..].split('\'').next().unwrap_or(""),
            _ => rest
                .split(|c: char| c.is_ascii_whitespace() || c == '>')
                .next()
                .unwrap_or(""),
        };
        return Some(s!(value));
    }
}

/// Whether a space-separated class list contains `class` (case-insensitive).
pub fn class_list_has(list: &str, class: &str) -> bool {
    let want = to_lower(class);
    list.split_ascii_whitespace().any(|c| to_lower(c) == want)
}

fn is_tag_named(tag: &str, name: &str) -> bool {
    let body = tag.strip_prefix('<').unwrap_or(tag);
    if body.len() < name.len() || !body.is_char_boundary(name.len()) {
        return false;
    }
    if to_lower(&body[..name.len()]) != to_lower(name) {
        return false;
    }
    match body[name.len()..].chars().next() {
        None => true,
        Some(c) => c.is_ascii_whitespace() || c == '>' || c == '/',
    }
}

/// `attr` values of every tag whose class list contains `class`, in
/// document order. A matching tag missing `attr` contributes an empty
/// string so positions are preserved.
pub fn attr_values_by_class(doc: &str, class: &str, attr: &str) -> Vec<String> {
    let mut out = Vec::new();
    for_each_open_tag(doc, |tag| {
        if attr_value_ci(tag, "class").is_some_and(|c| class_list_has(&c, class)) {
            out.push(attr_value_ci(tag, attr).unwrap_or_default());
        }
    });
    out
}

/// Href of the first `<a>` whose class list contains `class`.
pub fn link_href_by_class(doc: &str, class: &str) -> Option<String> {
    let mut href = None;
    for_each_open_tag(doc, |tag| {
        if href.is_some() || !is_tag_named(tag, "a") {
            return;
        }
        if attr_value_ci(tag, "class").is_some_and(|c| class_list_has(&c, class)) {
            href = attr_value_ci(tag, "href");
        }
    });
    href
}

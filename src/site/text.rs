const TECH_STACK_DELIMITERS: [char; 2] = [',', '|'];
const BULLET_DELIMITERS: [char; 3] = ['\n', '•', '-'];

pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

pub fn non_empty_owned(value: Option<&str>) -> Option<String> {
    non_empty(value).map(ToOwned::to_owned)
}

/// Joins the non-empty parts with `separator`. `None` when nothing is left.
pub fn join_present(parts: &[Option<&str>], separator: &str) -> Option<String> {
    let present = parts
        .iter()
        .filter_map(|part| non_empty(*part))
        .collect::<Vec<_>>();

    if present.is_empty() {
        return None;
    }

    Some(present.join(separator))
}

pub fn date_range(start: Option<&str>, end: Option<&str>) -> Option<String> {
    join_present(&[start, end], " - ")
}

pub fn split_tech_stack(raw: &str) -> Vec<String> {
    split_trimmed(raw, &TECH_STACK_DELIMITERS)
}

/// Hyphens split too, so `"Jan - Mar"` style text inside a bullet is cut.
pub fn split_bullets(raw: &str) -> Vec<String> {
    split_trimmed(raw, &BULLET_DELIMITERS)
}

fn split_trimmed(raw: &str, delimiters: &[char]) -> Vec<String> {
    raw.split(delimiters)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

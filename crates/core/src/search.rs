//! Admin list search (`?q=`).

/// Build a case-insensitive substring pattern for `ILIKE`.
///
/// Blank input means "no search" and yields `None`. `%`, `_` and `\` in the
/// term match literally.
pub fn like_pattern(term: Option<&str>) -> Option<String> {
    let term = term.map(str::trim).filter(|t| !t.is_empty())?;

    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    Some(pattern)
}

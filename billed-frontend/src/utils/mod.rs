pub mod format;
pub mod lenient;

/// Last path segment of a picker-reported file name.
///
/// Browsers report `C:\fakepath\name.jpg`; both separators are stripped.
pub fn file_name_of(reported: &str) -> &str {
    reported
        .rsplit(&['\\', '/'][..])
        .next()
        .unwrap_or(reported)
}

/// Lower-cased extension of `file_name`, if any.
pub fn extension_of(file_name: &str) -> Option<String> {
    let (stem, ext) = file_name.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}

/// Integer prefix of `raw`, the way a form reads a number field.
///
/// `"348"` and `"348.90"` both read as 348; text without leading digits is
/// `None`.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

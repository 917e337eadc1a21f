//! Path segments for content types

/// Turn a display name into the lowercase, hyphenated segment stored in the repo
///
/// Apostrophes are dropped, any other non-alphanumeric run separates words,
/// and a lower-to-upper case change starts a new word.
pub fn slugify(name: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut previous: Option<char> = None;

    for c in name.chars().filter(|c| !matches!(c, '\'' | '’')) {
        if c.is_alphanumeric() {
            let camel_boundary =
                previous.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) && c.is_uppercase();
            if camel_boundary && !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            current.extend(c.to_lowercase());
            previous = Some(c);
        } else {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            previous = None;
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    words.join("-")
}

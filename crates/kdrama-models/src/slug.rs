/// Lowercase the title and collapse every whitespace run into one hyphen.
///
/// Leading and trailing whitespace is kept as a hyphen, matching the
/// published detail-page links.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_whitespace = false;
    for c in title.chars() {
        if c.is_whitespace() {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.extend(c.to_lowercase());
            in_whitespace = false;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Crash Landing on You"), "crash-landing-on-you");
        assert_eq!(slugify("Reply  1988"), "reply-1988");
        assert_eq!(slugify("It's Okay\tto Not Be Okay"), "it's-okay-to-not-be-okay");
        assert_eq!(slugify("Move to Heaven: Season 2"), "move-to-heaven:-season-2");
        assert_eq!(slugify(""), "");
    }
}

use kdrama_models::Drama;

/// Find the drama a detail-page slug points at. First match wins.
pub fn find_by_slug<'a>(dramas: &'a [Drama], slug: &str) -> Option<&'a Drama> {
    let wanted = slug.trim().to_lowercase();
    dramas.iter().find(|drama| drama.slug() == wanted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_by_slug() {
        let dramas = vec![
            Drama::new("Crash Landing on You"),
            Drama::new("Reply 1988"),
        ];
        assert_eq!(
            find_by_slug(&dramas, "reply-1988").map(|d| d.title.as_str()),
            Some("Reply 1988")
        );
        assert_eq!(
            find_by_slug(&dramas, " Crash-Landing-On-You ").map(|d| d.title.as_str()),
            Some("Crash Landing on You")
        );
        assert!(find_by_slug(&dramas, "goblin").is_none());
        assert!(find_by_slug(&[], "goblin").is_none());
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first() {
        let mut first = Drama::new("Goblin");
        first.year = Some(2016);
        let mut second = Drama::new("Goblin");
        second.year = Some(2017);
        let dramas = vec![first, second];
        assert_eq!(find_by_slug(&dramas, "goblin").and_then(|d| d.year), Some(2016));
    }
}

use kdrama_models::TagRank;

/// Incremental tag search over the full ranking.
///
/// A blank query shows the head of the ranking. Otherwise every tag that
/// contains the query (case-insensitive) is a candidate, tags starting with
/// the query come first, the rest alphabetical, capped at `limit`.
pub fn search_tags(ranking: &[TagRank], query: &str, limit: usize) -> Vec<TagRank> {
    if query.trim().is_empty() {
        return ranking.iter().take(limit).cloned().collect();
    }

    let needle = query.to_lowercase();
    let mut matches: Vec<(bool, &TagRank)> = ranking
        .iter()
        .filter_map(|rank| {
            let tag = rank.tag.to_lowercase();
            tag.contains(&needle).then(|| (tag.starts_with(&needle), rank))
        })
        .collect();

    matches.sort_by(|(a_prefix, a), (b_prefix, b)| b_prefix.cmp(a_prefix).then_with(|| a.tag.cmp(&b.tag)));
    matches.into_iter().take(limit).map(|(_, rank)| rank.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranking(tags: &[(&str, usize)]) -> Vec<TagRank> {
        tags.iter()
            .map(|(tag, count)| TagRank {
                tag: tag.to_string(),
                count: *count,
            })
            .collect()
    }

    fn names(ranks: &[TagRank]) -> Vec<&str> {
        ranks.iter().map(|r| r.tag.as_str()).collect()
    }

    #[test]
    fn test_blank_query_returns_head_of_ranking() {
        let ranks = ranking(&[("Office", 5), ("Chaebol", 3), ("Revenge", 1)]);
        assert_eq!(names(&search_tags(&ranks, "", 2)), vec!["Office", "Chaebol"]);
        assert_eq!(names(&search_tags(&ranks, "   ", 10)), vec!["Office", "Chaebol", "Revenge"]);
    }

    #[test]
    fn test_prefix_matches_sort_first() {
        let ranks = ranking(&[
            ("Time Travel", 4),
            ("Revenge", 3),
            ("Contract Marriage", 3),
            ("Travel", 1),
            ("Trauma", 1),
        ]);
        let found = search_tags(&ranks, "tra", 10);
        assert_eq!(names(&found), vec!["Trauma", "Travel", "Contract Marriage", "Time Travel"]);
    }

    #[test]
    fn test_search_covers_tags_outside_the_top_n() {
        let mut tags: Vec<(String, usize)> = (0..12).map(|i| (format!("Common{:02}", i), 10)).collect();
        tags.push(("Rare Gem".to_string(), 1));
        let ranks: Vec<TagRank> = tags
            .into_iter()
            .map(|(tag, count)| TagRank { tag, count })
            .collect();

        let found = search_tags(&ranks, "gem", 10);
        assert_eq!(names(&found), vec!["Rare Gem"]);
    }

    #[test]
    fn test_search_is_capped() {
        let ranks: Vec<TagRank> = (0..20)
            .map(|i| TagRank {
                tag: format!("Tag{:02}", i),
                count: 1,
            })
            .collect();
        let found = search_tags(&ranks, "TAG", 10);
        assert_eq!(found.len(), 10);
        assert_eq!(found[0].tag, "Tag00");
    }

    #[test]
    fn test_no_match() {
        let ranks = ranking(&[("Office", 5)]);
        assert!(search_tags(&ranks, "zombie", 10).is_empty());
    }
}

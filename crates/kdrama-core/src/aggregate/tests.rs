use super::*;

fn drama(title: &str, genres: &[&str], tags: &[&str]) -> Drama {
    Drama {
        genres: genres.iter().map(|g| g.to_string()).collect(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..Drama::new(title)
    }
}

fn rated(title: &str, rating: Option<f64>) -> Drama {
    Drama {
        rating,
        ..Drama::new(title)
    }
}

fn timed(title: &str, episodes: Option<u32>, avg_duration: Option<f64>) -> Drama {
    Drama {
        episodes,
        avg_duration,
        ..Drama::new(title)
    }
}

fn watched(title: &str, date: &str) -> WatchEntry {
    WatchEntry::new(title, date)
}

#[test]
fn test_genre_counts_increments_every_listed_genre() {
    let dramas = vec![
        drama("A", &["Romance", "Thriller"], &[]),
        drama("B", &["Romance"], &[]),
        drama("C", &["Fantasy", "Romance"], &[]),
    ];

    let counts = genre_counts(&dramas).unwrap();
    assert_eq!(counts.get("Romance"), Some(3));
    assert_eq!(counts.get("Thriller"), Some(1));
    assert_eq!(counts.get("Fantasy"), Some(1));
    assert_eq!(counts.get("Horror"), None);

    let order: Vec<&str> = counts.iter().map(|c| c.genre.as_str()).collect();
    assert_eq!(order, vec!["Romance", "Thriller", "Fantasy"]);
}

#[test]
fn test_genre_counts_sum_equals_distinct_tokens() {
    let dramas = vec![
        drama("A", &["Romance", "Thriller", "Romance"], &[]),
        drama("B", &[], &[]),
        drama("C", &["Comedy"], &[]),
    ];

    let tokens: usize = dramas
        .iter()
        .map(|d| d.genres.iter().collect::<BTreeSet<_>>().len())
        .sum();
    let counts = genre_counts(&dramas).unwrap();
    assert_eq!(counts.total(), tokens);
    assert_eq!(counts.total(), 3);
}

#[test]
fn test_rating_histogram_excludes_missing_ratings() {
    let dramas = vec![
        rated("A", Some(8.5)),
        rated("B", Some(9.0)),
        rated("C", None),
        rated("D", Some(7.2)),
    ];

    let histogram = rating_histogram(&dramas).unwrap();
    assert_eq!(histogram.get(9), Some(2));
    assert_eq!(histogram.get(7), Some(1));
    assert_eq!(histogram.get(0), None);
    assert_eq!(histogram.total(), 3);

    let buckets: Vec<i64> = histogram.iter().map(|(bucket, _)| bucket).collect();
    assert_eq!(buckets, vec![7, 9]);
}

#[test]
fn test_rating_histogram_without_any_rating_is_empty() {
    let histogram = rating_histogram(&[rated("A", None)]).unwrap();
    assert!(histogram.is_empty());
}

#[test]
fn test_total_minutes_treats_missing_factors_as_zero() {
    let dramas = vec![
        timed("A", Some(16), Some(60.0)),
        timed("B", Some(12), None),
        timed("C", None, Some(45.0)),
        timed("D", Some(10), Some(30.5)),
    ];
    assert_eq!(total_minutes(&dramas).unwrap(), 960.0 + 305.0);
}

#[test]
fn test_total_minutes_is_order_independent() {
    let mut dramas = vec![
        timed("A", Some(16), Some(60.0)),
        timed("B", Some(8), Some(45.0)),
        timed("C", Some(20), Some(70.0)),
    ];
    let forward = total_minutes(&dramas).unwrap();
    dramas.reverse();
    assert_eq!(total_minutes(&dramas).unwrap(), forward);
    dramas.swap(0, 1);
    assert_eq!(total_minutes(&dramas).unwrap(), forward);
}

#[test]
fn test_tag_ranking_is_deterministic() {
    let dramas = vec![
        drama("A", &[], &["Fantasy"]),
        drama("B", &[], &["Fantasy"]),
        drama("C", &[], &["Romance"]),
    ];

    for _ in 0..5 {
        let ranking = tag_ranking(&dramas).unwrap();
        let tags: Vec<&str> = ranking.iter().map(|r| r.tag.as_str()).collect();
        assert_eq!(tags, vec!["Fantasy", "Romance"]);
        assert_eq!(ranking[0].count, 2);
    }
}

#[test]
fn test_tag_ranking_counts_dramas_per_tag() {
    let dramas = vec![
        drama("A", &[], &["Fantasy", "Romance"]),
        drama("B", &[], &["Fantasy"]),
        drama("C", &[], &["Fantasy", "Revenge"]),
    ];
    let ranking = tag_ranking(&dramas).unwrap();
    assert_eq!(ranking[0], TagRank { tag: "Fantasy".to_string(), count: 3 });
    assert_eq!(ranking.iter().map(|r| r.count).sum::<usize>(), 5);
}

#[test]
fn test_tag_ranking_ties_are_alphabetical() {
    let dramas = vec![
        drama("A", &[], &["Revenge", "Amnesia", "Chaebol"]),
        drama("B", &[], &["Chaebol"]),
    ];
    let ranking = tag_ranking(&dramas).unwrap();
    let tags: Vec<&str> = ranking.iter().map(|r| r.tag.as_str()).collect();
    assert_eq!(tags, vec!["Chaebol", "Amnesia", "Revenge"]);
}

#[test]
fn test_top_tags() {
    let dramas: Vec<Drama> = (0..15)
        .map(|i| {
            let tag = format!("tag{:02}", i);
            drama(&format!("D{}", i), &[], &[tag.as_str()])
        })
        .collect();
    let ranking = tag_ranking(&dramas).unwrap();
    let top = top_tags(&ranking, 10);
    assert_eq!(top.len(), 10);
    assert_eq!(top[0].tag, "tag00");
    assert_eq!(top[9].tag, "tag09");
    assert_eq!(top_tags(&ranking[..3], 10).len(), 3);
}

#[test]
fn test_binge_record() {
    let entries = vec![
        watched("A", "2021-01-01"),
        watched("B", "2021-01-01"),
        watched("C", "2021-01-02"),
    ];
    let record = binge_record(&entries).unwrap();
    assert_eq!(record, BingeRecord { date: "2021-01-01".to_string(), count: 2 });
}

#[test]
fn test_binge_record_tie_goes_to_first_seen_date() {
    let entries = vec![
        watched("A", "2021-03-05"),
        watched("B", "2021-01-01"),
        watched("C", "2021-01-01"),
        watched("D", "2021-03-05"),
    ];
    assert_eq!(binge_record(&entries).unwrap().date, "2021-03-05");
}

#[test]
fn test_most_watched_folds_seasons() {
    let entries = vec![
        watched("Show X: S1", "2021-01-01"),
        watched("Show Y", "2021-01-02"),
        watched("Show X: S2", "2021-01-03"),
    ];
    let most = most_watched(&entries).unwrap();
    assert_eq!(most, MostWatched { title: "Show X".to_string(), count: 2 });
}

#[test]
fn test_most_watched_tie_goes_to_first_seen_title() {
    let entries = vec![
        watched("Beta", "2021-01-01"),
        watched("Alpha", "2021-01-02"),
    ];
    assert_eq!(most_watched(&entries).unwrap().title, "Beta");
}

#[test]
fn test_watch_summary() {
    let entries = vec![
        watched("Show X: S1", "2021-01-01"),
        watched("Show X: S2", "2021-01-01"),
        watched("Show Y", "2021-01-02"),
    ];
    let summary = watch_summary(&entries).unwrap();
    assert_eq!(summary.total_shows, 2);
    assert_eq!(summary.binge_record.count, 2);
    assert_eq!(summary.most_watched.title, "Show X");
}

#[test]
fn test_empty_inputs_are_no_data() {
    let dramas: Vec<Drama> = Vec::new();
    let entries: Vec<WatchEntry> = Vec::new();

    assert_eq!(genre_counts(&dramas), Err(EmptyDataset));
    assert_eq!(rating_histogram(&dramas), Err(EmptyDataset));
    assert_eq!(total_minutes(&dramas), Err(EmptyDataset));
    assert_eq!(tag_ranking(&dramas), Err(EmptyDataset));
    assert_eq!(binge_record(&entries), Err(EmptyDataset));
    assert_eq!(most_watched(&entries), Err(EmptyDataset));
    assert_eq!(unique_shows(&entries), Err(EmptyDataset));
    assert_eq!(watch_summary(&entries), Err(EmptyDataset));
    assert!(available_genres(&dramas).is_empty());
    assert!(available_years(&dramas).is_empty());
}

#[test]
fn test_available_filter_choices() {
    let mut dramas = vec![
        drama("A", &["Romance", "Comedy"], &[]),
        drama("B", &["Thriller", "Romance"], &[]),
        drama("C", &[], &[]),
    ];
    dramas[0].year = Some(2021);
    dramas[1].year = Some(2016);
    dramas[2].year = Some(2021);

    assert_eq!(available_genres(&dramas), vec!["Romance", "Comedy", "Thriller"]);
    assert_eq!(available_years(&dramas), vec![2016, 2021]);
}

use super::{format_minutes, AppContext};
use crate::output::{new_table, Output};
use crate::ui::FetchSpinner;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, CellAlignment};
use kdrama_core::{genre_counts, load_catalog, load_watch_log, rating_histogram, total_minutes, watch_summary, DataState};
use kdrama_models::{GenreCounts, RatingHistogram, WatchSummary};
use owo_colors::OwoColorize;
use serde_json::json;

const BAR: &str = "█";

pub async fn run_stats(ctx: &AppContext, output: &Output) -> Result<()> {
    let spinner = FetchSpinner::start(output.is_human(), "Fetching your k-drama year...");
    let (catalog, history) = tokio::join!(load_catalog(ctx.dramas()), load_watch_log(ctx.history()));
    spinner.finish();

    let mut failed = Vec::new();

    let summary = match history {
        DataState::Ready(entries) => Some(watch_summary(&entries)?),
        DataState::Empty => {
            output.warn("No data available: the watch history feed is empty");
            None
        }
        DataState::Unavailable { reason } => {
            output.error(format!("Could not load the watch history feed: {}", reason));
            failed.push("watch history");
            None
        }
    };

    let catalog_stats = match catalog {
        DataState::Ready(dramas) => Some((
            genre_counts(&dramas)?,
            rating_histogram(&dramas)?,
            total_minutes(&dramas)?,
        )),
        DataState::Empty => {
            output.warn("No data available: the drama feed is empty");
            None
        }
        DataState::Unavailable { reason } => {
            output.error(format!("Could not load the drama feed: {}", reason));
            failed.push("drama");
            None
        }
    };

    if output.is_human() {
        if let Some(summary) = &summary {
            print_summary(summary, output);
        }
        if let Some((genres, ratings, minutes)) = &catalog_stats {
            print_genres(genres, output);
            print_ratings(ratings, output);
            output.heading("Total Minutes Watched");
            output.println(format!(
                "{} minutes ({:.1} hours)",
                format_minutes(*minutes).bold(),
                minutes / 60.0
            ));
        }
    } else {
        let (genres, ratings, minutes) = match &catalog_stats {
            Some((genres, ratings, minutes)) => (json!(genres), json!(ratings), json!(minutes)),
            None => (json!(null), json!(null), json!(null)),
        };
        output.json(&json!({
            "type": "stats",
            "watch_summary": summary,
            "genre_counts": genres,
            "rating_histogram": ratings,
            "total_minutes": minutes,
        }));
    }

    if failed.is_empty() {
        Ok(())
    } else {
        Err(eyre!("No data available: could not load the {} feed", failed.join(" and ")))
    }
}

fn print_summary(summary: &WatchSummary, output: &Output) {
    output.heading("My K-Drama Wrapped");
    output.println(format!(
        "Total K-Dramas Watched: {}",
        summary.total_shows.to_string().bold()
    ));
    output.println(format!(
        "Binge-Watch Record: {} episodes on {}",
        summary.binge_record.count.to_string().bold(),
        summary.binge_record.date
    ));
    output.println(format!(
        "Most Watched Show: {} ({} episodes)",
        summary.most_watched.title.bold(),
        summary.most_watched.count
    ));
}

fn print_genres(genres: &GenreCounts, output: &Output) {
    output.heading("Genre Distribution");

    let mut table = new_table();
    table.set_header(vec!["Genre", "Dramas"]);
    for entry in genres.iter() {
        table.add_row(vec![
            Cell::new(&entry.genre),
            Cell::new(entry.count).set_alignment(CellAlignment::Right),
        ]);
    }
    output.table(&table);
}

fn print_ratings(ratings: &RatingHistogram, output: &Output) {
    output.heading("Rating Distribution");

    if ratings.is_empty() {
        output.warn("No valid ratings found.");
        return;
    }

    let mut table = new_table();
    table.set_header(vec!["Rating", "Dramas", ""]);
    for (rating, count) in ratings.iter() {
        table.add_row(vec![
            Cell::new(format!("{}/10", rating)),
            Cell::new(count).set_alignment(CellAlignment::Right),
            Cell::new(BAR.repeat(count)),
        ]);
    }
    output.table(&table);
}

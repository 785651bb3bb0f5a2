use super::{format_minutes, AppContext};
use crate::output::{new_table, Output};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::{Cell, ContentArrangement};
use kdrama_core::find_by_slug;
use kdrama_models::Drama;
use owo_colors::OwoColorize;
use serde_json::json;

const NO_RATING: &str = "N/A";
const NO_REVIEW: &str = "No review available.";
const NO_TRAILER: &str = "no trailer available.";

/// Detail view of one drama, addressed by the slug of its title
pub async fn run_show(ctx: &AppContext, slug: &str, output: &Output) -> Result<()> {
    let Some(dramas) = ctx.catalog(output).await? else {
        return Ok(());
    };

    let drama = find_by_slug(&dramas, slug).ok_or_else(|| eyre!("No drama found for '{}'", slug))?;

    if !output.is_human() {
        output.json(&json!({
            "type": "drama",
            "slug": drama.slug(),
            "drama": drama,
            "trailer_embed_url": drama.trailer_embed_url(),
        }));
        return Ok(());
    }

    output.heading(&drama.title);
    let mut table = new_table();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    for (field, value) in detail_rows(drama) {
        table.add_row(vec![Cell::new(field).fg(comfy_table::Color::Cyan), Cell::new(value)]);
    }
    output.table(&table);

    match drama.trailer_embed_url() {
        Some(url) => output.println(format!("Trailer: {}", url.underline())),
        None => output.println(NO_TRAILER),
    }

    Ok(())
}

fn detail_rows(drama: &Drama) -> Vec<(&'static str, String)> {
    let optional = |value: &Option<String>| value.clone().unwrap_or_default();

    vec![
        ("Year", drama.year.map(|y| y.to_string()).unwrap_or_default()),
        ("Genres", drama.genres.join(", ")),
        ("Tags", drama.tags.join(", ")),
        (
            "Rating",
            drama
                .rating
                .map(|r| format!("{}/10", r))
                .unwrap_or_else(|| NO_RATING.to_string()),
        ),
        ("Episodes", drama.episodes.map(|e| e.to_string()).unwrap_or_default()),
        (
            "Avg. Duration",
            drama
                .avg_duration
                .map(|d| format!("{} min", format_minutes(d)))
                .unwrap_or_default(),
        ),
        ("Seasons", optional(&drama.seasons)),
        ("Director", optional(&drama.director)),
        ("Main Cast", optional(&drama.main_cast)),
        (
            "Review",
            drama.review.clone().unwrap_or_else(|| NO_REVIEW.to_string()),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field<'a>(rows: &'a [(&'static str, String)], name: &str) -> &'a str {
        rows.iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
            .unwrap()
    }

    #[test]
    fn test_detail_rows_placeholders() {
        let rows = detail_rows(&Drama::new("Goblin"));
        assert_eq!(field(&rows, "Rating"), NO_RATING);
        assert_eq!(field(&rows, "Review"), NO_REVIEW);
        assert_eq!(field(&rows, "Year"), "");
    }

    #[test]
    fn test_detail_rows_filled() {
        let mut drama = Drama::new("Goblin");
        drama.rating = Some(9.5);
        drama.avg_duration = Some(70.0);
        drama.tags = vec!["Fantasy".to_string(), "Reincarnation".to_string()];

        let rows = detail_rows(&drama);
        assert_eq!(field(&rows, "Rating"), "9.5/10");
        assert_eq!(field(&rows, "Avg. Duration"), "70 min");
        assert_eq!(field(&rows, "Tags"), "Fantasy, Reincarnation");
    }
}

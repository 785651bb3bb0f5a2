use super::AppContext;
use crate::output::{new_table, Output};
use color_eyre::eyre::eyre;
use color_eyre::Result;
use comfy_table::ContentArrangement;
use kdrama_core::{FilterSpec, YearRange};
use kdrama_models::Drama;
use owo_colors::OwoColorize;
use serde_json::json;

const NO_REVIEW: &str = "No review available yet.";
const NO_MATCHES: &str = "no k-dramas match your filters :(";

/// Year window from the configured bounds, narrowed by the command flags
fn year_range(ctx: &AppContext, from_year: Option<i32>, to_year: Option<i32>) -> Result<YearRange> {
    let min = from_year.unwrap_or(ctx.config.display.year_min);
    let max = to_year.unwrap_or(ctx.config.display.year_max);
    if min > max {
        return Err(eyre!("--from-year ({}) is after --to-year ({})", min, max));
    }
    Ok(YearRange::new(min, max))
}

pub async fn run_reviews(
    ctx: &AppContext,
    genres: Vec<String>,
    tags: Vec<String>,
    from_year: Option<i32>,
    to_year: Option<i32>,
    output: &Output,
) -> Result<()> {
    let filter = FilterSpec::new()
        .with_genres(genres)
        .with_tags(tags)
        .with_years(year_range(ctx, from_year, to_year)?);

    let Some(dramas) = ctx.catalog(output).await? else {
        return Ok(());
    };

    let matched = filter.apply(&dramas);

    if !output.is_human() {
        output.json(&json!({
            "type": "reviews",
            "filters": filter,
            "total": matched.len(),
            "dramas": matched,
        }));
        return Ok(());
    }

    if matched.is_empty() {
        output.println(NO_MATCHES);
        return Ok(());
    }

    output.heading(format!("Reviews ({} of {})", matched.len(), dramas.len()));
    let mut table = new_table();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Title", "Year", "Genres", "Review"]);
    for drama in &matched {
        table.add_row(review_row(drama));
    }
    output.table(&table);
    output.println(format!(
        "{}",
        "Use `wrapped show <slug>` for the full entry.".dimmed()
    ));

    Ok(())
}

fn review_row(drama: &Drama) -> Vec<String> {
    vec![
        format!("{}\n{}", drama.title, drama.slug()),
        drama.year.map(|y| y.to_string()).unwrap_or_default(),
        drama.genres.join(", "),
        drama.review.clone().unwrap_or_else(|| NO_REVIEW.to_string()),
    ]
}

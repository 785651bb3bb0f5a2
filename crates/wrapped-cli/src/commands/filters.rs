use super::AppContext;
use crate::output::{new_table, Output};
use color_eyre::Result;
use comfy_table::{Cell, CellAlignment};
use kdrama_core::{available_genres, available_years, tag_ranking, top_tags};
use serde_json::json;

/// The values the review filters can take, as the catalog currently has them
pub async fn run_filters(ctx: &AppContext, output: &Output) -> Result<()> {
    let Some(dramas) = ctx.catalog(output).await? else {
        return Ok(());
    };

    let genres = available_genres(&dramas);
    let years = available_years(&dramas);
    let tags = top_tags(&tag_ranking(&dramas)?, ctx.config.display.top_tags);

    if !output.is_human() {
        output.json(&json!({
            "type": "filters",
            "genres": genres,
            "years": years,
            "year_range": {
                "min": ctx.config.display.year_min,
                "max": ctx.config.display.year_max,
            },
            "top_tags": tags,
        }));
        return Ok(());
    }

    output.heading("Genres");
    output.println(if genres.is_empty() { "(none)".to_string() } else { genres.join(", ") });

    output.heading("Release Years");
    let years: Vec<String> = years.iter().map(|y| y.to_string()).collect();
    output.println(if years.is_empty() { "(none)".to_string() } else { years.join(", ") });
    output.println(format!(
        "Default range: {}-{}",
        ctx.config.display.year_min, ctx.config.display.year_max
    ));

    output.heading("Top Tags");
    let mut table = new_table();
    table.set_header(vec!["Tag", "Dramas"]);
    for rank in &tags {
        table.add_row(vec![
            Cell::new(&rank.tag),
            Cell::new(rank.count).set_alignment(CellAlignment::Right),
        ]);
    }
    output.table(&table);

    Ok(())
}

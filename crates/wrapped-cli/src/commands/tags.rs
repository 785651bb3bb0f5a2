use super::AppContext;
use crate::output::{new_table, Output};
use color_eyre::Result;
use comfy_table::{Cell, CellAlignment};
use kdrama_core::{search_tags, tag_ranking, top_tags};
use kdrama_models::TagRank;
use serde_json::json;

pub async fn run_tags(
    ctx: &AppContext,
    search: Option<String>,
    limit: Option<usize>,
    output: &Output,
) -> Result<()> {
    let Some(dramas) = ctx.catalog(output).await? else {
        return Ok(());
    };
    let ranking = tag_ranking(&dramas)?;

    let query = search.as_deref().map(str::trim).filter(|q| !q.is_empty());
    let (title, tags) = match query {
        Some(query) => {
            let limit = limit.unwrap_or(ctx.config.display.tag_search_limit);
            (format!("Tags matching \"{}\"", query), search_tags(&ranking, query, limit))
        }
        None => {
            let limit = limit.unwrap_or(ctx.config.display.top_tags);
            (format!("Top {} Tags", limit), top_tags(&ranking, limit))
        }
    };

    if !output.is_human() {
        output.json(&json!({
            "type": "tags",
            "query": query,
            "total_tags": ranking.len(),
            "tags": tags,
        }));
        return Ok(());
    }

    if tags.is_empty() {
        output.println("No tags found.");
        return Ok(());
    }

    output.heading(title);
    output.table(&tag_table(&tags));
    Ok(())
}

fn tag_table(tags: &[TagRank]) -> comfy_table::Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Tag", "Dramas"]);
    for (index, rank) in tags.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&rank.tag),
            Cell::new(rank.count).set_alignment(CellAlignment::Right),
        ]);
    }
    table
}

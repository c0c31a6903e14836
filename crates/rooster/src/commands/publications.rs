//! Publication command handlers.

use std::fmt::Write as _;

use tabled::Tabled;

use rooster_core::{App, Publication};

use crate::cli::{OutputFormat, PublicationsArgs, PublicationsCommand};
use crate::error::CliError;
use crate::output;

use super::Context;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct PublicationRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Tags")]
    tags: String,
    #[tabled(rename = "Author")]
    author: String,
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Read")]
    read_time: String,
}

impl From<&Publication> for PublicationRow {
    fn from(p: &Publication) -> Self {
        Self {
            id: p.id.clone(),
            title: p.title.clone(),
            tags: tag_labels(p),
            author: p.author.name.clone(),
            published: p.published_date.clone(),
            read_time: p.read_time.clone(),
        }
    }
}

fn tag_labels(p: &Publication) -> String {
    p.tags
        .iter()
        .map(|t| t.label.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn detail(p: &Publication, ctx: &Context) -> String {
    let painter = ctx.painter;
    let mut out = String::new();
    let _ = writeln!(out, "{}", painter.heading(&p.title));
    let _ = writeln!(
        out,
        "{}",
        painter.dim(&format!(
            "{} · {} · {}",
            p.author.name, p.published_date, p.read_time
        ))
    );
    if !p.tags.is_empty() {
        let _ = writeln!(out, "{}", painter.accent(&tag_labels(p)));
    }
    let _ = writeln!(out);
    let _ = write!(out, "{}", p.description);
    out
}

fn render_list(publications: &[Publication], ctx: &Context) {
    let out = output::render_list(
        ctx.output,
        publications,
        |p| PublicationRow::from(p),
        |p| p.id.clone(),
    );
    output::print_output(&out, ctx.quiet);
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(app: &App, args: PublicationsArgs, ctx: &Context) -> Result<(), CliError> {
    let store = app.publications();

    match args.command {
        PublicationsCommand::List { search } => {
            store.fetch_publications().await;
            if let Some(query) = &search {
                store.set_search_query(query.as_str());
            }

            let notice = match &search {
                Some(query) => format!("No publications match '{query}'"),
                None => "No publications yet".to_owned(),
            };
            let items = super::settle(store.snapshot().view(), "publications list", &notice, ctx)?;
            if items.is_empty() && ctx.output == OutputFormat::Table {
                return Ok(());
            }
            render_list(&items, ctx);
            Ok(())
        }

        PublicationsCommand::Show { id } => {
            let publication = store.publication(&id).await?;
            let out = output::render_single(
                ctx.output,
                &publication,
                |p| detail(p, ctx),
                |p| p.id.clone(),
            );
            output::print_output(&out, ctx.quiet);
            Ok(())
        }

        PublicationsCommand::Search { query } => {
            let hits = store.search_remote(&query).await?;
            if hits.is_empty() {
                output::print_notice(&format!("No publications match '{query}'"), ctx.quiet);
                if ctx.output == OutputFormat::Table {
                    return Ok(());
                }
            }
            render_list(&hits, ctx);
            Ok(())
        }
    }
}

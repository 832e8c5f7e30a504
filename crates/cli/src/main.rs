use anyhow::Context;
use catalog_app::books::{
    audit::audit,
    data::{self, BOOKS},
    filter::CatalogFilter,
    labels::CatalogLabels,
    models::{BookDetail, BookSummary, CatalogListing, Genre},
};
use catalog_i18n::Locale;
use catalog_kernel::settings::Settings;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "catalog", version, about = "Library catalog server and tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the HTTP server
    Serve,
    /// Print the catalog, optionally filtered by genre and search text
    List {
        #[arg(long)]
        genre: Option<Genre>,
        /// Case-insensitive match against title or author
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        locale: Option<Locale>,
        /// Print the listing as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print one book's details
    Show {
        slug: String,
        #[arg(long)]
        locale: Option<Locale>,
        #[arg(long)]
        json: bool,
    },
    /// Audit the catalog data, failing on any finding
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load().context("failed to load catalog settings")?;
    let default_locale = settings.i18n.default_locale;

    match cli.command {
        Command::Serve => {
            catalog_telemetry::init(&settings.telemetry)?;
            catalog_app::app::run(&settings).await
        }
        command => {
            // keep stdout for command output
            let mut telemetry = settings.telemetry.clone();
            telemetry.level = "warn".to_string();
            catalog_telemetry::init(&telemetry)?;
            run_tool(command, default_locale)
        }
    }
}

fn run_tool(command: Command, default_locale: Locale) -> anyhow::Result<()> {
    match command {
        Command::Serve => anyhow::bail!("serve is not an offline command"),
        Command::List {
            genre,
            query,
            locale,
            json,
        } => {
            let labels = CatalogLabels::new(locale.unwrap_or(default_locale));
            let mut filter = CatalogFilter::new(genre, "");
            if let Some(query) = query {
                filter.set_query(query);
            }
            list(CatalogListing::build(BOOKS, filter, &labels), &labels, json)
        }
        Command::Show { slug, locale, json } => {
            show(&slug, &CatalogLabels::new(locale.unwrap_or(default_locale)), json)
        }
        Command::Check => check(),
    }
}

fn status(book: &BookSummary, labels: &CatalogLabels) -> String {
    if book.available {
        return labels.gt("Available");
    }
    match book.due_date {
        Some(date) => format!(
            "{} ({})",
            labels.gt("Checked Out"),
            labels.gt("Due: {date}").replace("{date}", date)
        ),
        None => labels.gt("Checked Out"),
    }
}

fn list(listing: CatalogListing, labels: &CatalogLabels, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    println!("{}", labels.gt("Library Catalog"));
    if let Some(message) = &listing.message {
        println!("{}", message);
        return Ok(());
    }
    for book in &listing.books {
        println!(
            "{:<26} {} / {} [{}] {}/{} {}",
            book.slug,
            book.title,
            book.author,
            book.genre_label,
            book.copies,
            book.total_copies,
            status(book, labels)
        );
    }
    Ok(())
}

fn show(slug: &str, labels: &CatalogLabels, json: bool) -> anyhow::Result<()> {
    let book = data::find_by_slug(slug)
        .with_context(|| format!("no book with slug '{}'", slug))?;
    let detail = BookDetail::localized(book, &data::similar_titles(book), labels);

    if json {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    let summary = &detail.summary;
    println!("{}", summary.title);
    println!("{} [{}]", summary.author, summary.genre_label);
    println!("{}", status(summary, labels));
    println!();
    println!("{}", detail.description);
    println!();
    println!("{}: {}", labels.gt("Pages"), summary.pages);
    println!("{}: {}", labels.gt("Published"), detail.year_label);
    println!(
        "{}: {} / {}",
        labels.gt("Copies"),
        summary.copies,
        summary.total_copies
    );
    println!("{}: {}", labels.gt("ISBN"), detail.isbn);
    println!("{}: {}", labels.gt("Location"), detail.branch_label);
    println!("{}: {}", labels.gt("Shelf"), detail.shelf_label);

    if !detail.similar.is_empty() {
        println!();
        println!("{}", labels.gt("Similar Titles"));
        for other in &detail.similar {
            println!("  {} / {}", other.title, other.author);
        }
    }
    Ok(())
}

fn check() -> anyhow::Result<()> {
    let findings = audit(BOOKS);
    for finding in &findings {
        println!("{}: {}", finding.slug, finding.issue);
    }
    if !findings.is_empty() {
        anyhow::bail!("{} catalog issue(s) found", findings.len());
    }
    println!("catalog ok: {} books", BOOKS.len());
    Ok(())
}

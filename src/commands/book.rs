use crate::bot::{Handler, open_book};
use crate::paginator::{Book, BookOptions, Page, PageAuthor, PaginatorError};
use chrono::Utc;
use serenity::all::{
    CommandInteraction, CommandOptionType, Context, InteractionContext, ResolvedOption,
    ResolvedValue,
};
use serenity::builder::{CreateCommand, CreateCommandOption};

pub async fn run(
    handler: &Handler,
    context: &Context,
    interaction: &CommandInteraction,
) -> anyhow::Result<()> {
    let mut pages_json = None;
    let mut owner_only = true;

    for option in interaction.data.options() {
        match option {
            ResolvedOption {
                name: "pages",
                value: ResolvedValue::String(json),
                ..
            } => pages_json = Some(json.to_string()),
            ResolvedOption {
                name: "owner_only",
                value: ResolvedValue::Boolean(flag),
                ..
            } => owner_only = flag,
            _ => {}
        }
    }

    let owner = owner_only.then(|| interaction.user.id.get());

    match build_book(pages_json.as_deref(), owner) {
        Ok(book) => open_book(handler, context, interaction, book, false).await,
        Err(e) => {
            tracing::debug!("[BOOK] Rejected /book input: {}", e);
            crate::commands::error::run(context, interaction, &e.to_string()).await
        }
    }
}

/// Build the book for `/book`: pages from JSON when given, otherwise the demo pages.
fn build_book(pages_json: Option<&str>, owner: Option<u64>) -> Result<Book, PaginatorError> {
    let pages = match pages_json {
        Some(json) => Page::many_from_json(json)?,
        None => demo_pages()?,
    };

    let mut options = BookOptions::default();
    if let Some(owner) = owner {
        options = options.owner(owner);
    }

    Book::new(pages, options)
}

/// Two explicitly numbered greetings plus a few pages that have to be auto-indexed.
fn demo_pages() -> Result<Vec<Page>, PaginatorError> {
    let now = Utc::now();

    Ok(vec![
        Page::indexed(0)?
            .title("hey")
            .description("Just a funny hello")
            .timestamp(now),
        Page::indexed(1)?
            .title("hey2222")
            .description("Just a funny hello")
            .timestamp(now),
        Page::new()
            .title("Auto-indexed")
            .description("This page had no index, it got the first free one.")
            .color(0x22C55E),
        Page::indexed(5)?
            .title("Slot 5")
            .description("Slots don't have to be contiguous, the counter shows positions.")
            .author(PageAuthor {
                name: "Leafbook".to_string(),
                url: None,
                icon_url: None,
            }),
        Page::new()
            .title("Fields")
            .field("Buttons", "<< < 🛑 > >>", true)?
            .field("Index", "🔢 opens a dialog, ↩ goes back", true)?
            .footer("Fill the gaps before overflowing"),
    ])
}

pub fn register() -> CreateCommand {
    CreateCommand::new("book")
        .description("Open a paged book of embeds")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "pages",
                "JSON array of pages, e.g. [{\"title\": \"One\"}, {\"index\": 4, \"title\": \"Four\"}]",
            )
            .required(false),
        )
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::Boolean,
                "owner_only",
                "Only you can use the buttons (default: true)",
            )
            .required(false),
        )
        .contexts(vec![
            InteractionContext::Guild,
            InteractionContext::PrivateChannel,
        ])
}

use crate::bot::{Handler, open_book};
use crate::paginator::{Book, BookOptions, Page, PaginatorError};
use serenity::all::{CommandInteraction, Context, InteractionContext};
use serenity::builder::CreateCommand;

const HELP_COLOR: u32 = 0x22C55E;

pub async fn run(
    handler: &Handler,
    context: &Context,
    interaction: &CommandInteraction,
) -> anyhow::Result<()> {
    let book = help_book(interaction.user.id.get())?;
    open_book(handler, context, interaction, book, true).await
}

fn help_book(owner: u64) -> Result<Book, PaginatorError> {
    let pages = vec![
        Page::new()
            .title("Leafbook Commands")
            .description("Here are the main commands:")
            .color(HELP_COLOR)
            .field(
                "/book [pages] [owner_only]",
                "Open a book. Without `pages` a demo book is shown.",
                false,
            )?
            .field("/help", "Show this help book.", false)?,
        Page::new()
            .title("Navigating")
            .description("Every book comes with the same controls:")
            .color(HELP_COLOR)
            .field("<< / >>", "Jump to the first or last page.", true)?
            .field("< / >", "Go one page back or forward.", true)?
            .field("🔢", "Type a page number (starting at 1).", true)?
            .field("↩", "Return to the page you were on before your last move.", true)?
            .field("🛑", "Close the book and remove its buttons.", true)?,
        Page::new()
            .title("Writing pages")
            .description(
                "`pages` takes a JSON array. Each page may set `index`, `title`, `description`, \
                 `color`, `url`, `timestamp`, `author`, `image_url`, `thumbnail_url`, `footer` \
                 and up to 25 `fields`.",
            )
            .color(HELP_COLOR)
            .field(
                "Indexes",
                "Pages without an `index` get the smallest free one, in the order you wrote them. \
                 Two pages can't share an index.",
                false,
            )?,
    ];

    Book::new(pages, BookOptions::default().owner(owner))
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Show all available commands and their usage")
        .contexts(vec![
            InteractionContext::Guild,
            InteractionContext::PrivateChannel,
        ])
}

use serenity::all::{
    Colour, CreateActionRow, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, CreateInputText,
    CreateInteractionResponseMessage, CreateModal, InputTextStyle,
};

use super::components::ButtonBuilder;
use crate::paginator::modal::{INPUT_ID, INPUT_LABEL, MODAL_TITLE};
use crate::paginator::{Action, Book, Controls, EnterIndexModal, Page};

const BUTTON_PREFIX: &str = "book:";
const MODAL_PREFIX: &str = "book_modal:";

/// Build the custom_id of a book control button
///
/// # Returns
/// `book:<session>:<action>`, e.g. `book:12:next`
pub fn book_custom_id(session: u64, action: Action) -> String {
    format!("{BUTTON_PREFIX}{session}:{action}")
}

/// Extract the session and control role from a book button custom_id
///
/// # Returns
/// The session id and action, or None if the id was not built by [`book_custom_id`]
pub fn parse_book_custom_id(custom_id: &str) -> Option<(u64, Action)> {
    let (session, action) = custom_id.strip_prefix(BUTTON_PREFIX)?.split_once(':')?;
    Some((session.parse().ok()?, action.parse().ok()?))
}

pub fn modal_custom_id(session: u64) -> String {
    format!("{MODAL_PREFIX}{session}")
}

pub fn parse_modal_custom_id(custom_id: &str) -> Option<u64> {
    custom_id.strip_prefix(MODAL_PREFIX)?.parse().ok()
}

/// Convert a page into the embed Discord displays
pub fn page_embed(page: &Page) -> CreateEmbed {
    let mut embed = CreateEmbed::new();

    if let Some(title) = &page.title {
        embed = embed.title(title);
    }
    if let Some(description) = &page.description {
        embed = embed.description(description);
    }
    if let Some(color) = page.color {
        embed = embed.color(Colour::new(color));
    }
    if let Some(url) = &page.url {
        embed = embed.url(url);
    }
    if let Some(timestamp) = page.timestamp {
        embed = embed.timestamp(timestamp);
    }
    if let Some(author) = &page.author {
        let mut builder = CreateEmbedAuthor::new(&author.name);
        if let Some(url) = &author.url {
            builder = builder.url(url);
        }
        if let Some(icon_url) = &author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        embed = embed.author(builder);
    }
    if let Some(image_url) = &page.image_url {
        embed = embed.image(image_url);
    }
    if let Some(thumbnail_url) = &page.thumbnail_url {
        embed = embed.thumbnail(thumbnail_url);
    }
    if let Some(footer) = &page.footer {
        embed = embed.footer(CreateEmbedFooter::new(footer));
    }

    embed.fields(
        page.fields()
            .iter()
            .map(|field| (field.name.clone(), field.value.clone(), field.inline)),
    )
}

/// The embed left behind once a book is stopped
pub fn finished_embed(owner: Option<u64>) -> CreateEmbed {
    let started_by = owner.map_or_else(|| "unknown".to_string(), |id| format!("<@{id}>"));

    CreateEmbed::new()
        .title("Finished")
        .description(format!("Started by: {started_by}"))
}

/// Lay the controls out in two rows
///
/// `<< < 🛑 > >>` on top, then the page counter, the index dialog and go back.
pub fn control_rows(session: u64, controls: &Controls) -> Vec<CreateActionRow> {
    let row = |actions: &[Action]| {
        actions
            .iter()
            .fold(ButtonBuilder::new(), |builder, action| {
                builder.control(book_custom_id(session, *action), controls.get(*action))
            })
            .build()
    };

    vec![
        row(&[
            Action::First,
            Action::Previous,
            Action::Stop,
            Action::Next,
            Action::Last,
        ]),
        row(&[Action::Counter, Action::EnterIndex, Action::GoBack]),
    ]
}

/// Render the current state of a book as a message
///
/// A stopped book renders as the finished notice with every control removed.
pub fn book_message(session: u64, book: &Book) -> CreateInteractionResponseMessage {
    match book.controls() {
        Some(controls) => CreateInteractionResponseMessage::new()
            .embed(page_embed(book.current_page()))
            .components(control_rows(session, &controls)),
        None => CreateInteractionResponseMessage::new()
            .embed(finished_embed(book.owner()))
            .components(vec![]),
    }
}

/// Build the "go to by index" dialog
pub fn index_modal(modal: &EnterIndexModal) -> CreateModal {
    let input = CreateInputText::new(InputTextStyle::Short, INPUT_LABEL, INPUT_ID)
        .required(true)
        .placeholder("1");

    CreateModal::new(modal_custom_id(modal.session()), MODAL_TITLE)
        .components(vec![CreateActionRow::InputText(input)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paginator::BookOptions;

    #[test]
    fn test_book_custom_id_parses_back() {
        let id = book_custom_id(1234567890123, Action::EnterIndex);
        assert_eq!(id, "book:1234567890123:enter_index");
        assert_eq!(parse_book_custom_id(&id), Some((1234567890123, Action::EnterIndex)));
    }

    #[test]
    fn test_parse_book_custom_id_rejects_malformed() {
        assert_eq!(parse_book_custom_id("help_page_2"), None);
        assert_eq!(parse_book_custom_id("book:abc:next"), None);
        assert_eq!(parse_book_custom_id("book:12:sideways"), None);
        assert_eq!(parse_book_custom_id("book:12"), None);
    }

    #[test]
    fn test_modal_custom_id() {
        assert_eq!(parse_modal_custom_id(&modal_custom_id(77)), Some(77));
        assert_eq!(parse_modal_custom_id("book:77:next"), None);
    }

    #[test]
    fn test_page_embed_carries_content() {
        let page = Page::new()
            .title("hey")
            .description("Just a funny hello")
            .field("a", "b", true)
            .unwrap();
        let json = serde_json::to_value(page_embed(&page)).unwrap();
        assert_eq!(json["title"], "hey");
        assert_eq!(json["description"], "Just a funny hello");
        assert_eq!(json["fields"][0]["inline"], true);
    }

    #[test]
    fn test_finished_embed_mentions_owner() {
        let json = serde_json::to_value(finished_embed(Some(42))).unwrap();
        assert_eq!(json["description"], "Started by: <@42>");
        let json = serde_json::to_value(finished_embed(None)).unwrap();
        assert_eq!(json["description"], "Started by: unknown");
    }

    #[test]
    fn test_control_rows_layout() {
        let book = Book::new(vec![Page::new(), Page::new()], BookOptions::default()).unwrap();
        let rows = control_rows(5, &book.controls().unwrap());
        assert_eq!(rows.len(), 2);
        let json = serde_json::to_value(&rows).unwrap();
        assert_eq!(json[0]["components"].as_array().unwrap().len(), 5);
        assert_eq!(json[1]["components"][0]["label"], "1/2");
        assert_eq!(json[0]["components"][0]["disabled"], true);
        assert_eq!(json[0]["components"][4]["custom_id"], "book:5:last");
    }
}

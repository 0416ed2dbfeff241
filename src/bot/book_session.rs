use crate::bot::Handler;
use crate::bot::helpers::components::ComponentResponseBuilder;
use crate::bot::helpers::pagination;
use crate::paginator::modal::INPUT_ID;
use crate::paginator::{Action, Book, EnterIndexModal, PaginatorError};
use anyhow::Result;
use serenity::all::{
    ActionRowComponent, CommandInteraction, ComponentInteraction, Context,
    CreateInteractionResponse, ModalInteraction,
};

const INACTIVE_NOTICE: &str = "This paginator is no longer active.";

/// Send a freshly built book as the reply to a command and keep it alive for its buttons
///
/// The session is keyed by the command interaction's id.
pub async fn open(
    handler: &Handler,
    context: &Context,
    interaction: &CommandInteraction,
    book: Book,
    ephemeral: bool,
) -> Result<()> {
    let session = interaction.id.get();
    let message = pagination::book_message(session, &book).ephemeral(ephemeral);

    handler.books.insert(session, book).await;

    if let Err(e) = interaction
        .create_response(&context.http, CreateInteractionResponse::Message(message))
        .await
    {
        handler.books.remove(session).await;
        return Err(e.into());
    }

    tracing::info!(
        "[BOOK] Opened session {} for user {} ({} live)",
        session,
        interaction.user.id,
        handler.books.len().await
    );

    Ok(())
}

/// Handle a click on one of a book's buttons
pub async fn handle_button(
    handler: &Handler,
    context: &Context,
    interaction: &ComponentInteraction,
    session: u64,
    action: Action,
) -> Result<()> {
    let user_id = interaction.user.id.get();

    let outcome = handler
        .books
        .with_book(session, |book| -> Result<_, PaginatorError> {
            book.authorize(user_id)?;
            if action == Action::EnterIndex {
                let modal = EnterIndexModal::new(session);
                return Ok(CreateInteractionResponse::Modal(pagination::index_modal(
                    &modal,
                )));
            }
            book.apply(action)?;
            Ok(ComponentResponseBuilder::update_message(
                pagination::book_message(session, book),
            ))
        })
        .await;

    let response = respond_to(session, user_id, outcome);
    interaction
        .create_response(&context.http, response)
        .await?;

    Ok(())
}

/// Handle a submitted "go to by index" dialog
pub async fn handle_index_modal(
    handler: &Handler,
    context: &Context,
    interaction: &ModalInteraction,
    session: u64,
) -> Result<()> {
    let user_id = interaction.user.id.get();
    let input = submitted_index(interaction).unwrap_or_default();

    let outcome = handler
        .books
        .with_book(session, |book| -> Result<_, PaginatorError> {
            book.authorize(user_id)?;
            EnterIndexModal::new(session).submit(book, &input)?;
            Ok(ComponentResponseBuilder::update_message(
                pagination::book_message(session, book),
            ))
        })
        .await;

    let response = respond_to(session, user_id, outcome);
    interaction
        .create_response(&context.http, response)
        .await?;

    Ok(())
}

fn respond_to(
    session: u64,
    user_id: u64,
    outcome: Option<Result<CreateInteractionResponse, PaginatorError>>,
) -> CreateInteractionResponse {
    match outcome {
        Some(Ok(response)) => response,
        Some(Err(e)) => {
            tracing::debug!("[BOOK] Session {} rejected user {}: {}", session, user_id, e);
            ComponentResponseBuilder::notice(e.to_string())
        }
        None => {
            tracing::debug!("[BOOK] Interaction for unknown session {}", session);
            ComponentResponseBuilder::notice(INACTIVE_NOTICE)
        }
    }
}

fn submitted_index(interaction: &ModalInteraction) -> Option<String> {
    interaction
        .data
        .components
        .iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == INPUT_ID => {
                input.value.clone()
            }
            _ => None,
        })
}

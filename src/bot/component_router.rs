use crate::bot::Handler;
use crate::bot::book_session;
use crate::bot::helpers::pagination::{parse_book_custom_id, parse_modal_custom_id};
use anyhow::Result;
use serenity::all::{ComponentInteraction, Context, ModalInteraction};

/// Route component interactions (button clicks) to their handlers
pub async fn route_component_interaction(
    handler: &Handler,
    context: &Context,
    component: &ComponentInteraction,
) -> Result<()> {
    let custom_id = component.data.custom_id.as_str();

    match parse_book_custom_id(custom_id) {
        Some((session, action)) => {
            book_session::handle_button(handler, context, component, session, action).await
        }

        // Unknown component interaction - ignore silently
        None => {
            tracing::debug!("Unhandled component interaction: {}", custom_id);
            Ok(())
        }
    }
}

/// Route modal submissions to their handlers
pub async fn route_modal_submit(
    handler: &Handler,
    context: &Context,
    modal: &ModalInteraction,
) -> Result<()> {
    let custom_id = modal.data.custom_id.as_str();

    match parse_modal_custom_id(custom_id) {
        Some(session) => book_session::handle_index_modal(handler, context, modal, session).await,
        None => {
            tracing::debug!("Unhandled modal submission: {}", custom_id);
            Ok(())
        }
    }
}

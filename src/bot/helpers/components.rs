use serenity::all::{
    ButtonStyle, CreateActionRow, CreateButton, CreateInteractionResponse,
    CreateInteractionResponseMessage,
};

use crate::paginator::navigation::ControlState;

/// Helper for building rows of buttons more easily
pub struct ButtonBuilder {
    buttons: Vec<CreateButton>,
}

impl ButtonBuilder {
    pub fn new() -> Self {
        Self {
            buttons: Vec::new(),
        }
    }

    /// Add a grey button mirroring a navigation control
    pub fn control(mut self, custom_id: impl Into<String>, state: &ControlState) -> Self {
        self.buttons.push(
            CreateButton::new(custom_id.into())
                .label(state.label.clone())
                .style(ButtonStyle::Secondary)
                .disabled(state.disabled),
        );
        self
    }

    /// Build the action row
    pub fn build(self) -> CreateActionRow {
        CreateActionRow::Buttons(self.buttons)
    }
}

impl Default for ButtonBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Responses shared by every component and modal handler
pub struct ComponentResponseBuilder;

impl ComponentResponseBuilder {
    /// An ephemeral error notice
    pub fn error(message: impl Into<String>) -> CreateInteractionResponse {
        let response = CreateInteractionResponseMessage::new()
            .content(format!("[ERROR] {}", message.into()))
            .ephemeral(true);

        CreateInteractionResponse::Message(response)
    }

    /// An ephemeral notice without the error prefix
    pub fn notice(message: impl Into<String>) -> CreateInteractionResponse {
        let response = CreateInteractionResponseMessage::new()
            .content(message.into())
            .ephemeral(true);

        CreateInteractionResponse::Message(response)
    }

    /// Update the message the component is attached to
    pub fn update_message(response: CreateInteractionResponseMessage) -> CreateInteractionResponse {
        CreateInteractionResponse::UpdateMessage(response)
    }
}

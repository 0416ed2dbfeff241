use crate::bot::helpers::components::ComponentResponseBuilder;
use crate::bot::{Handler, command_registry, component_router, helpers::command_handler};
use crate::commands;
use serenity::all::{Command, GuildId, Interaction, Ready};
use serenity::prelude::*;

const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again later.";

#[serenity::async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, context: Context, interaction: Interaction) {
        let result = match interaction {
            Interaction::Command(ref command) => {
                command_handler::handle_slash_command(self, &context, command).await
            }

            Interaction::Component(ref component) => {
                component_router::route_component_interaction(self, &context, component).await
            }

            Interaction::Modal(ref modal) => {
                component_router::route_modal_submit(self, &context, modal).await
            }

            _ => Ok(()),
        };

        // Handle errors
        if let Err(e) = result {
            tracing::error!("[ERROR] There was an error processing your interaction: {}", e);

            let send_result = match &interaction {
                Interaction::Command(command) => {
                    commands::error::run(&context, command, UNEXPECTED_ERROR).await
                }
                Interaction::Component(component) => component
                    .create_response(&context.http, ComponentResponseBuilder::error(UNEXPECTED_ERROR))
                    .await
                    .map_err(Into::into),
                Interaction::Modal(modal) => modal
                    .create_response(&context.http, ComponentResponseBuilder::error(UNEXPECTED_ERROR))
                    .await
                    .map_err(Into::into),
                _ => {
                    tracing::warn!("Unhandled interaction type in error handler");
                    Ok(())
                }
            };

            if let Err(send_err) = send_result {
                tracing::error!("[ERROR] Failed to send error response to user: {}", send_err);
            }
        }
    }

    async fn ready(&self, context: Context, ready: Ready) {
        tracing::info!("[BOT] {} is ready and connected!", ready.user.name);

        let commands_vec = command_registry::get_all_commands();
        let command_count = commands_vec.len();

        let registered = match self.config.dev_guild_id {
            Some(guild_id) => GuildId::new(guild_id)
                .set_commands(&context, commands_vec)
                .await
                .map(|_| format!("guild {guild_id}")),
            None => Command::set_global_commands(&context, commands_vec)
                .await
                .map(|_| "global".to_string()),
        };

        match registered {
            Ok(scope) => tracing::info!(
                "[CMD] Successfully registered {} {} commands",
                command_count,
                scope
            ),
            Err(e) => tracing::error!("[CMD] Failed to register commands: {}", e),
        }
    }
}

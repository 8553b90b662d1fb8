//! Gateway event handler.

use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use serenity::all::{Context, EventHandler, Interaction, Message, Ready};
use tracing::{info, warn};

use crate::domain::standing::PublishOutcome;
use crate::domain::{ChatDispatcher, StatusBoardRefresher, TraceId};
use crate::inbound::http::health::HealthState;
use crate::outbound::discord::ephemeral_response;

use super::convert::{inbound_interaction, inbound_message};

/// Routes gateway events to the [`ChatDispatcher`].
///
/// The first `ready` event publishes the standing messages and starts the
/// status board refresher; later `ready` events after a reconnect only log.
pub struct DiscordEventHandler {
    dispatcher: Arc<ChatDispatcher>,
    health: Arc<HealthState>,
    refresher: Mutex<Option<StatusBoardRefresher>>,
}

impl DiscordEventHandler {
    pub fn new(
        dispatcher: Arc<ChatDispatcher>,
        health: Arc<HealthState>,
        refresher: StatusBoardRefresher,
    ) -> Self {
        Self {
            dispatcher,
            health,
            refresher: Mutex::new(Some(refresher)),
        }
    }

    fn take_refresher(&self) -> Option<StatusBoardRefresher> {
        self.refresher
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    async fn start_once(&self) {
        let Some(refresher) = self.take_refresher() else {
            info!("gateway session resumed; standing messages already handled");
            return;
        };
        let outcomes = self.dispatcher.publish_standing_messages().await;
        let failed = outcomes
            .iter()
            .filter(|outcome| matches!(outcome, PublishOutcome::Failed))
            .count();
        info!(?outcomes, failed, "standing messages checked");
        refresher.spawn();
    }
}

#[async_trait]
impl EventHandler for DiscordEventHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        TraceId::in_fresh_scope(async {
            info!(user = %ready.user.name, guilds = ready.guilds.len(), "chat gateway ready");
            self.health.mark_chat_connected();
            self.start_once().await;
        })
        .await;
    }

    async fn message(&self, _ctx: Context, message: Message) {
        let Some(inbound) = inbound_message(&message) else {
            return;
        };
        TraceId::in_fresh_scope(self.dispatcher.handle_message(&inbound)).await;
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Component(component) = interaction else {
            return;
        };
        TraceId::in_fresh_scope(async {
            let inbound = inbound_interaction(&component);
            let Some(reply) = self.dispatcher.handle_interaction(&inbound) else {
                return;
            };
            if let Err(error) = component
                .create_response(&ctx.http, ephemeral_response(&reply))
                .await
            {
                warn!(%error, custom_id = %inbound.custom_id, "interaction reply failed");
            }
        })
        .await;
    }
}

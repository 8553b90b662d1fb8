//! Storefront entry-point: wires the catalogue API, the Discord bot and the
//! status board refresher around one shared catalogue.

mod server;

use std::io;
use std::sync::Arc;

use actix_web::web;
use camino::Utf8Path;
use mockable::DefaultClock;
use ortho_config::OrthoConfig;
use serenity::all::Http;
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use storefront::domain::ports::{
    ChatChannel, ProductCatalogue, Sleeper, StandingMessageStore, TokioSleeper,
};
use storefront::domain::standing::StandingMessagePublisher;
use storefront::domain::{ChatDispatcher, ChatDispatcherPorts, StatusBoardRefresher};
use storefront::inbound::discord::{DiscordEventHandler, connect};
use storefront::inbound::http::health::HealthState;
use storefront::outbound::discord::SerenityChatChannel;
use storefront::outbound::file_store::JsonFileStandingMessageStore;
use storefront::outbound::memory::{InMemoryProductCatalogue, InMemoryStandingMessageStore};
use storefront::settings::StorefrontSettings;

fn init_tracing() {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }
}

/// Durable store when the state directory is usable, volatile otherwise.
fn open_standing_store(state_dir: &Utf8Path) -> Arc<dyn StandingMessageStore> {
    match JsonFileStandingMessageStore::open(state_dir) {
        Ok(store) => Arc::new(store),
        Err(error) => {
            warn!(%error, path = %state_dir, "standing message state not persisted");
            Arc::new(InMemoryStandingMessageStore::new())
        }
    }
}

/// Build the chat side and start the gateway client in the background.
///
/// A client that cannot be built is logged and skipped so the HTTP API
/// keeps serving.
async fn start_chat(
    token: &str,
    settings: &StorefrontSettings,
    catalogue: Arc<dyn ProductCatalogue>,
    health: Arc<HealthState>,
) -> io::Result<()> {
    let destinations = settings.destinations().map_err(io::Error::other)?;
    let refresh_period = settings.status_refresh_period().map_err(io::Error::other)?;

    let chat: Arc<dyn ChatChannel> = Arc::new(SerenityChatChannel::new(Arc::new(Http::new(token))));
    let store = open_standing_store(&settings.state_dir());
    let sleeper: Arc<dyn Sleeper> = Arc::new(TokioSleeper);
    let dispatcher = Arc::new(ChatDispatcher::new(
        ChatDispatcherPorts {
            catalogue,
            chat: Arc::clone(&chat),
            publisher: StandingMessagePublisher::new(chat, store),
            sleeper: Arc::clone(&sleeper),
            clock: Arc::new(DefaultClock),
        },
        destinations,
    ));
    let refresher = StatusBoardRefresher::new(Arc::clone(&dispatcher), sleeper, refresh_period);
    let handler = DiscordEventHandler::new(dispatcher, health, refresher);

    let mut client = match connect(token, handler).await {
        Ok(client) => client,
        Err(error) => {
            error!(%error, "chat client could not be built; continuing without chat");
            return Ok(());
        }
    };
    tokio::spawn(async move {
        if let Err(error) = client.start().await {
            error!(%error, "chat client stopped; HTTP API still serving");
        }
    });
    Ok(())
}

/// Application bootstrap.
#[tokio::main]
async fn main() -> io::Result<()> {
    init_tracing();

    let settings = StorefrontSettings::load().map_err(|e| io::Error::other(e.to_string()))?;
    let bind_addr = settings.bind_addr().map_err(io::Error::other)?;
    let catalogue: Arc<dyn ProductCatalogue> =
        Arc::new(InMemoryProductCatalogue::seeded().map_err(io::Error::other)?);
    info!(products = catalogue.all().len(), "catalogue seeded");

    let health = Arc::new(HealthState::new());
    match settings.discord_token() {
        Some(token) => {
            start_chat(token, &settings, Arc::clone(&catalogue), Arc::clone(&health)).await?;
        }
        None => warn!("STOREFRONT_DISCORD_TOKEN unset; chat bot disabled"),
    }

    let server = create_server(
        web::Data::from(health),
        ServerConfig::new(bind_addr, catalogue),
    )?;
    info!(%bind_addr, "http server listening");
    server.await
}

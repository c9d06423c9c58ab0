//! Mesa demo runner
//!
//! Wires the client core against the in-memory backends and walks through a
//! guest browse plus an owner session, logging what each screen would show.

use std::sync::Arc;

use serde_json::json;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mesa_client::alerts::TracingAlerts;
use mesa_client::auth::{AuthProjection, MemoryAuthBackend};
use mesa_client::external::ReverseGeocoder;
use mesa_client::favorites::{FavoritesStore, FileStorage, KeyValueStorage, MemoryStorage};
use mesa_client::location::{FixedPosition, LocationService};
use mesa_client::restaurants::RestaurantProjection;
use mesa_client::store::{DocumentStore, MemoryStore};
use mesa_client::views;
use mesa_client::Config;
use shared::models::{EventDraft, LoginPayload, RegisterPayload, UserRole};
use shared::types::Coordinates;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesa_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Mesa demo");
    tracing::info!("Environment: {}", config.environment);

    let store = Arc::new(MemoryStore::new());
    seed_listing(store.as_ref()).await?;

    let storage: Box<dyn KeyValueStorage> = match &config.favorites.path {
        Some(path) => Box::new(FileStorage::new(path)),
        None => Box::new(MemoryStorage::new()),
    };
    let favorites = Arc::new(FavoritesStore::new(storage, config.favorites.key.clone()));
    favorites.load().await?;

    let alerts = Arc::new(TracingAlerts);
    let backend = Arc::new(MemoryAuthBackend::new());
    backend
        .seed_account("dueno@mesa.mx", "secreta1")
        .map_err(|err| anyhow::anyhow!(err.to_string()))?;

    let auth = Arc::new(AuthProjection::new(
        backend.clone(),
        store.clone(),
        alerts.clone(),
    ));
    {
        let auth = auth.clone();
        tokio::spawn(async move { auth.run().await });
    }

    let projection =
        RestaurantProjection::new(store.clone(), favorites.clone(), auth.subscribe());

    // Guest browse: shared position, nearby cards, today's rail
    let location = LocationService::new(&config.location);
    let geocoder = ReverseGeocoder::offline();
    let position = FixedPosition(Coordinates::new(20.076186, -102.271682));
    location.acquire(&position, &geocoder, alerts.as_ref()).await;

    auth.continue_as_guest();
    let cards = views::nearby_sorted(views::home_cards(
        projection.restaurants(),
        location.state().coords,
        &projection.favorite_ids(),
    ));
    tracing::info!(header = %location.state().label, "home screen");
    for card in &cards {
        tracing::info!(
            name = %card.restaurant.name,
            distance = card.distance_label.as_deref().unwrap_or("sin distancia"),
            "card"
        );
    }
    for item in views::today_rail(&projection.restaurants()) {
        tracing::info!(event = %item.event.title, at = %item.restaurant_name, "hoy");
    }

    projection.toggle_favorite(&cards[0].restaurant.id).await?;
    tracing::info!(favorites = ?projection.favorite_ids(), "after toggle");

    // Owner session: register, login, then a mutation pass. The session
    // listener applies every transition, so each step waits on the state
    // stream before moving on.
    let mut auth_states = auth.subscribe();
    let registered = auth
        .register_owner(&RegisterPayload {
            email: "nueva@mesa.mx".into(),
            password: "secreta1".into(),
            restaurant_name: Some("La Terraza".into()),
        })
        .await;
    tracing::info!(registered, "registration");
    auth_states.wait_for(|s| s.role == UserRole::Owner).await?;

    auth.logout().await;
    auth_states.wait_for(|s| !s.is_authenticated).await?;
    let logged_in = auth
        .login_as_owner(&LoginPayload {
            email: "dueno@mesa.mx".into(),
            password: "secreta1".into(),
        })
        .await;
    tracing::info!(logged_in, "login");
    auth_states.wait_for(|s| s.role == UserRole::Owner).await?;

    auth.logout().await;
    auth_states.wait_for(|s| !s.is_authenticated).await?;
    auth.login_as_owner(&LoginPayload {
        email: "nueva@mesa.mx".into(),
        password: "secreta1".into(),
    })
    .await;
    auth_states.wait_for(|s| s.role == UserRole::Owner).await?;

    let projection =
        RestaurantProjection::new(store.clone(), favorites.clone(), auth.subscribe());
    projection
        .add_owner_event(&EventDraft {
            title: "Noche de trivia".into(),
            date_label: "Hoy 9pm".into(),
            description: None,
        })
        .await?;

    if let Some(mine) = projection.owner_restaurant() {
        let stats = views::owner_stats(&mine, projection.favorite_ids().len());
        tracing::info!(
            restaurant = %mine.name,
            completeness = stats.completeness_percent,
            reach = stats.reach,
            "owner panel"
        );
    }

    Ok(())
}

/// A couple of guest-visible listings so the demo has something to show
async fn seed_listing(store: &dyn DocumentStore) -> anyhow::Result<()> {
    let docs = [
        (
            "demo-tacos",
            json!({
                "name": "Tacos Doña Mary",
                "category": "Mexicana",
                "latitude": 20.0795,
                "longitude": -102.2688,
                "rating": 4.7,
                "status": "Abierto ahora",
                "events": [
                    { "id": "1", "title": "2x1 en pastor", "dateLabel": "Hoy 7pm" }
                ],
            }),
        ),
        (
            "demo-mariscos",
            json!({
                "name": "Mariscos El Puerto",
                "category": "Mariscos",
                "latitude": 20.0710,
                "longitude": -102.2759,
                "rating": 4.4,
                "status": "Cerrado",
            }),
        ),
    ];
    for (id, doc) in docs {
        let map = doc
            .as_object()
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("seed document must be an object"))?;
        store.create(id, map).await?;
    }
    Ok(())
}

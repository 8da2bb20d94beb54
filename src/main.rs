mod client;
mod model;

#[cfg(feature = "server")]
mod server;

use client::App;

fn main() {
    #[cfg(not(feature = "server"))]
    dioxus::launch(App);

    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        use dioxus_logger::tracing;

        use crate::server::{
            config::Config, scheduler, service::file::storage::Storage,
            service::setup::code::SetupCodeService, startup, state::AppState,
        };

        dotenvy::dotenv().ok();
        let config = Config::from_env()?;

        let db = startup::connect_to_database(&config).await?;
        let session = startup::connect_to_session(&db, &config).await?;
        let http_client = startup::setup_reqwest_client();
        let storage = Storage::from_config(&config).await;

        let setup_codes = SetupCodeService::new();

        tracing::info!("Starting server");

        // Print a setup link while no admin exists
        startup::check_for_admin(&db, &config, &setup_codes).await?;

        let state = AppState::new(db, http_client, setup_codes, storage, config);

        let scheduler_state = state.clone();
        tokio::spawn(async move {
            if let Err(e) = scheduler::workflow::start_scheduler(scheduler_state).await {
                tracing::error!("Workflow scheduler error: {}", e);
            }
        });

        let mut router = dioxus::server::router(App);
        let server_routes = server::router::router(state).layer(session);
        router = router.merge(server_routes);

        Ok(router)
    })
}

mod app;
mod auth_guard;
mod logging;
mod routes;
mod views;

use app::{App, AppProps};
use internport_frontend_common::session::{default_storage, SessionStore};
use internport_frontend_common::{ApiConfig, SessionClient};

fn main() {
    logging::init_logging();

    let config = ApiConfig::from_env();
    let session = SessionStore::new(default_storage());

    match SessionClient::new(&config, session) {
        Ok(client) => {
            tracing::info!(base_url = %config.base_url, "Starting InternPort UI");
            yew::Renderer::<App>::with_props(AppProps { client }).render();
        }
        Err(err) => tracing::error!(error = %err, "Failed to create API client"),
    }
}

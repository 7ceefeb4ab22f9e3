#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::identity::{IdentityProvider, IdentityToolkitClient};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; real deployments set the environment.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env()?;

    // Auth is optional: without identity settings the dashboard still serves
    // and the auth endpoints answer 503.
    let identity: Option<Arc<dyn IdentityProvider>> = match config.identity.clone() {
        Some(identity_config) => {
            let project = identity_config.project_id.clone();
            let auth_domain = identity_config.auth_domain.clone();
            match IdentityToolkitClient::new(identity_config) {
                Ok(client) => {
                    tracing::info!(%project, %auth_domain, "identity provider configured");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "identity client init failed, auth endpoints disabled");
                    None
                }
            }
        }
        None => {
            tracing::warn!("IDENTITY_* not set, auth endpoints disabled");
            None
        }
    };
    if config.google.is_none() {
        tracing::warn!("GOOGLE_* not set, Google sign-in disabled");
    }

    let state = state::AppState::new(identity, config.google.clone(), config.cookie_secure);
    let app = routes::app(state)?;

    let port = config.port;
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    tracing::info!(%port, "bereans dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}

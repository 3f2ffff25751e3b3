use std::sync::Arc;

use taxmate::app::build_app;
use taxmate::core::config::Config;
use taxmate::core::db::{DbConfig, SignupRepository, create_pool_with_migrations, health_check};
use taxmate::core::email::EmailService;
use taxmate::core::waitlist::WaitlistService;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file (if exists)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = Config::from_env();

    // Log config status (without revealing secrets)
    tracing::info!(
        "Config loaded: database={}, email={}, site_root={}",
        config.has_database(),
        config.has_email(),
        config.site_root
    );

    let pool = create_pool_with_migrations(&DbConfig::from_config(&config)?).await?;
    health_check(&pool).await?;

    let mut service = WaitlistService::new(Arc::new(SignupRepository::new(pool)));
    if config.has_email() {
        let email = EmailService::new(config.resend_api_key.clone(), config.from_email.clone());
        service = service.with_notifier(Arc::new(email));
    } else {
        tracing::warn!("RESEND_API_KEY not set; welcome emails are disabled");
    }

    let app = build_app(service, &config.site_root);

    tracing::info!("listening on http://{}", config.site_addr);
    tracing::info!("Waitlist API: http://{}/api/waitlist", config.site_addr);

    let listener = tokio::net::TcpListener::bind(&config.site_addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

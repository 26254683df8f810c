use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use clap::Parser;

mod api;
mod cli;
mod error;
mod metrics;
mod models;
mod state;
mod telemetry;

use cli::CommandArgs;
use state::new_state;
use telemetry::Telemetry;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let args = CommandArgs::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.default_log_level()),
    )
    .init();

    let telemetry = Telemetry::from_connection_string(args.telemetry_connection_string.as_deref());

    let state = new_state(args.agent_config())?;
    state.initialize();

    print_banner(&args, &telemetry);
    log::info!(
        "Starting {} on port {} (started at {})",
        state.config.name,
        args.port,
        state.started_at.to_rfc3339()
    );

    let tracing_enabled = telemetry.enabled;
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(api::error_handlers())
            .wrap(Condition::new(
                tracing_enabled,
                Logger::new("%a \"%r\" %s %b %Dms").log_target("base_agent::telemetry"),
            ))
            .wrap(Logger::new("%r - Status: %s").log_level(log::Level::Debug))
            .configure(api::configure)
    })
    .bind(args.bind_address())?
    .run()
    .await?;

    Ok(())
}

fn print_banner(args: &CommandArgs, telemetry: &Telemetry) {
    println!("╔═══════════════════════════════════════════════════════════╗");
    println!("║      Base Agent v{:<41}║", models::AGENT_VERSION);
    println!("╚═══════════════════════════════════════════════════════════╝");
    println!();
    println!("🚀 {} starting on http://{}", args.agent_name, args.bind_address());
    println!("   Environment: {}", args.environment);
    match &telemetry.ingestion_endpoint {
        Some(endpoint) => println!("   Request tracing: enabled ({})", endpoint),
        None if telemetry.enabled => println!("   Request tracing: enabled"),
        None => println!("   Request tracing: disabled"),
    }
    println!();
    println!("📋 Available endpoints:");
    println!("  GET    /                       - Agent information");
    println!("  GET    /health                 - Liveness probe");
    println!("  GET    /ready                  - Readiness probe");
    println!("  GET    /metrics                - Agent metrics (JSON)");
    println!("  GET    /metrics/prometheus     - Prometheus metrics");
    println!("  POST   /process                - Process a request");
    println!("═══════════════════════════════════════════════════════════");
}

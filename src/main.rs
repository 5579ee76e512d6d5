use std::sync::Arc;

use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use log::info;
use player_aggregate::args;
use player_aggregate::controller::handler;
use player_aggregate::{Aggregator, HttpUpstreamClient};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = match args::args_checks() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(2);
        }
    };

    let client = HttpUpstreamClient::new(args.endpoints.clone(), args.config.upstream_timeout)?;
    let aggregator = Aggregator::new(Arc::new(client), args.config.clone());

    info!("listening on {}:{}", args.host, args.port);
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(Data::new(aggregator.clone()))
            .configure(handler::configure)
    })
    .bind((args.host.as_str(), args.port))?
    .run()
    .await?;
    Ok(())
}

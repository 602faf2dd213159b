mod config;
mod services;

use crate::config::HostConfig;
use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use env_logger::Env;
use log::{error, info};
use std::io;
use std::thread;
use std::time::Duration;

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let config = HostConfig::from_env().map_err(|e| {
        error!("Invalid configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e)
    })?;
    let url = config.url();

    if config.open_browser {
        let url = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            if let Err(e) = webbrowser::open(&url) {
                error!("Could not open a browser on {}: {}", url, e);
            }
        });
    }

    info!("Profile directory running at {}", url);

    HttpServer::new(|| {
        App::new()
            .wrap(Logger::default())
            .default_service(web::route().to(services::assets::serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}

use actix_cors::Cors;
use actix_web::{App, HttpServer};

use ampere::config::get_http_config;
use ampere::logger;
use ampere::routes::{dcavg_regular, get_drawing_link, link_drawing, unlink_drawing};

#[actix_web::main]
async fn main() -> Result<(), anyhow::Error> {
    logger::init();

    let config = get_http_config()?;
    log::info!("Listening on {}:{}", config.host, config.port);

    HttpServer::new(|| {
        let cors = Cors::permissive();
        App::new()
            .wrap(cors)
            .service(dcavg_regular)
            .service(link_drawing)
            .service(get_drawing_link)
            .service(unlink_drawing)
    })
    .bind(config.get_addr())?
    .run()
    .await?;

    Ok(())
}

use actix_cors::Cors;
use actix_files::Files;
use actix_web::cookie::Key;
use actix_web::{App, HttpServer, middleware, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
use tera::Tera;

use crate::db::establish_connection_pool;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::main::show_index;
use crate::routes::owner::{
    create_owner, edit_owner_form, find_owners, find_owners_form, new_owner_form, show_owner,
    update_owner,
};
use crate::routes::pet::{create_pet, edit_pet_form, new_pet_form, update_pet};
use crate::routes::vet::{show_vets, vets_api};
use crate::routes::visit::{create_visit, new_visit_form};

pub mod db;
pub mod domain;
pub mod dto;
pub mod forms;
pub mod models;
pub mod pagination;
pub mod repository;
pub mod routes;
pub mod schema;
pub mod services;

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    // Establish Diesel connection pool for the SQLite database.
    let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
        std::io::Error::other(format!("Failed to establish database connection: {e}"))
    })?;

    let repo = DieselRepository::new(pool);

    // Key and store for flash messages shown after redirects.
    let secret_key = Key::from(server_config.secret.as_bytes());
    let message_store = CookieMessageStore::builder(secret_key).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

    let bind_address = (server_config.address.clone(), server_config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(Files::new("/assets", "./assets"))
            .service(show_index)
            .service(show_vets)
            .service(vets_api)
            // literal owner routes go before the `{owner_id}` matchers
            .service(find_owners_form)
            .service(new_owner_form)
            .service(create_owner)
            .service(find_owners)
            .service(show_owner)
            .service(edit_owner_form)
            .service(update_owner)
            .service(new_pet_form)
            .service(create_pet)
            .service(edit_pet_form)
            .service(update_pet)
            .service(new_visit_form)
            .service(create_visit)
            .default_service(web::route().to(routes::main::not_found))
            .app_data(web::Data::new(tera.clone()))
            .app_data(web::Data::new(repo.clone()))
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}

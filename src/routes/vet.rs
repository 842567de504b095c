use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, web};
use actix_web_flash_messages::IncomingFlashMessages;
use serde::Deserialize;
use tera::Tera;

use crate::dto::vet::VetListPayload;
use crate::repository::DieselRepository;
use crate::routes::{base_context, render_template};
use crate::services::vet as vet_service;

#[derive(Deserialize)]
struct VetListParams {
    page: Option<usize>,
}

#[get("/vets.html")]
pub async fn show_vets(
    params: web::Query<VetListParams>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match vet_service::list_vets_page(repo.get_ref(), params.page) {
        Ok(page) => {
            let mut context = base_context(&flash_messages, "vets");
            context.insert("list_vets", &page.items);
            context.insert("current_page", &page.page);
            context.insert("total_pages", &page.total_pages);
            context.insert("total_items", &page.total_items);
            context.insert("pages", &page.pages);
            render_template(&tera, "vets/list.html", &context)
        }
        Err(err) => {
            log::error!("Failed to list vets: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Full vet list, serialized to JSON or (when requested) XML.
#[get("/vets")]
pub async fn vets_api(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    let vets = match vet_service::list_all_vets(repo.get_ref()) {
        Ok(vets) => vets,
        Err(err) => {
            log::error!("Failed to list vets: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    let payload = VetListPayload::from(vets);

    // browsers advertise application/xhtml+xml, so match the XML types exactly
    let wants_xml = req
        .headers()
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|accept| {
            accept.contains("application/xml") || accept.contains("text/xml")
        });

    if wants_xml {
        match quick_xml::se::to_string_with_root("vets", &payload) {
            Ok(body) => HttpResponse::Ok()
                .content_type("application/xml")
                .body(body),
            Err(err) => {
                log::error!("Failed to serialize vets to XML: {err}");
                HttpResponse::InternalServerError().finish()
            }
        }
    } else {
        HttpResponse::Ok().json(payload)
    }
}

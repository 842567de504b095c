use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::dto::visit::VisitPageData;
use crate::forms::FieldErrors;
use crate::forms::visit::VisitForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_not_found, render_template};
use crate::services::{ServiceError, visit as visit_service};

fn render_visit_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    owner_id: i32,
    page: &VisitPageData,
    visit: &VisitForm,
    errors: &FieldErrors,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "owners");
    context.insert("owner_id", &owner_id);
    context.insert("pet", &page.pet);
    context.insert("previous_visits", &page.visits);
    context.insert("visit", visit);
    context.insert("errors", errors);
    render_template(tera, "visits/form.html", &context)
}

#[get("/owners/{owner_id}/pets/{pet_id}/visits/new")]
pub async fn new_visit_form(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match visit_service::load_visit_page(repo.get_ref(), owner_id, pet_id) {
        Ok(page) => render_visit_form(
            &tera,
            &flash_messages,
            owner_id,
            &page,
            &VisitForm::default(),
            &FieldErrors::new(),
        ),
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load visit form: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/owners/{owner_id}/pets/{pet_id}/visits/new")]
pub async fn create_visit(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<VisitForm>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    match visit_service::create_visit(repo.get_ref(), owner_id, pet_id, &form) {
        Ok(_) => {
            FlashMessage::success("Visit recorded.").send();
            redirect(&format!("/owners/{owner_id}"))
        }
        Err(ServiceError::Validation(errors)) => {
            match visit_service::load_visit_page(repo.get_ref(), owner_id, pet_id) {
                Ok(page) => {
                    render_visit_form(&tera, &flash_messages, owner_id, &page, &form, &errors)
                }
                Err(err) => {
                    log::error!("Failed to load visit form: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to record visit: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use chrono::Utc;
use tera::Tera;

use crate::domain::pet::PetType;
use crate::forms::FieldErrors;
use crate::forms::pet::PetForm;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_not_found, render_template};
use crate::services::{ServiceError, owner as owner_service, pet as pet_service};

fn render_pet_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    owner_id: i32,
    pet_id: Option<i32>,
    pet: &PetForm,
    types: &[PetType],
    errors: &FieldErrors,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "owners");
    context.insert("owner_id", &owner_id);
    context.insert("pet_id", &pet_id);
    context.insert("pet", pet);
    context.insert("types", types);
    context.insert("errors", errors);
    render_template(tera, "pets/form.html", &context)
}

#[get("/owners/{owner_id}/pets/new")]
pub async fn new_pet_form(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let owner_id = owner_id.into_inner();

    if let Err(err) = owner_service::get_owner(repo.get_ref(), owner_id) {
        return match err {
            ServiceError::NotFound => render_not_found(&tera),
            err => {
                log::error!("Failed to load owner: {err}");
                HttpResponse::InternalServerError().finish()
            }
        };
    }

    match pet_service::list_pet_types(repo.get_ref()) {
        Ok(types) => render_pet_form(
            &tera,
            &flash_messages,
            owner_id,
            None,
            &PetForm::default(),
            &types,
            &FieldErrors::new(),
        ),
        Err(err) => {
            log::error!("Failed to load pet types: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/owners/{owner_id}/pets/new")]
pub async fn create_pet(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<PetForm>,
) -> impl Responder {
    let owner_id = owner_id.into_inner();
    let today = Utc::now().date_naive();

    match pet_service::create_pet(repo.get_ref(), owner_id, &form, today) {
        Ok(_) => {
            FlashMessage::success("Pet added.").send();
            redirect(&format!("/owners/{owner_id}"))
        }
        Err(ServiceError::Validation(errors)) => {
            match pet_service::list_pet_types(repo.get_ref()) {
                Ok(types) => render_pet_form(
                    &tera,
                    &flash_messages,
                    owner_id,
                    None,
                    &form,
                    &types,
                    &errors,
                ),
                Err(err) => {
                    log::error!("Failed to load pet types: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to create pet: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/{owner_id}/pets/{pet_id}/edit")]
pub async fn edit_pet_form(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();

    let pet = match pet_service::get_pet(repo.get_ref(), owner_id, pet_id) {
        Ok(pet) => pet,
        Err(ServiceError::NotFound) => return render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load pet: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match pet_service::list_pet_types(repo.get_ref()) {
        Ok(types) => render_pet_form(
            &tera,
            &flash_messages,
            owner_id,
            Some(pet_id),
            &PetForm::from(&pet),
            &types,
            &FieldErrors::new(),
        ),
        Err(err) => {
            log::error!("Failed to load pet types: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/owners/{owner_id}/pets/{pet_id}/edit")]
pub async fn update_pet(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<PetForm>,
) -> impl Responder {
    let (owner_id, pet_id) = path.into_inner();
    let today = Utc::now().date_naive();

    match pet_service::update_pet(repo.get_ref(), owner_id, pet_id, &form, today) {
        Ok(_) => {
            FlashMessage::success("Pet updated.").send();
            redirect(&format!("/owners/{owner_id}"))
        }
        Err(ServiceError::Validation(errors)) => {
            match pet_service::list_pet_types(repo.get_ref()) {
                Ok(types) => render_pet_form(
                    &tera,
                    &flash_messages,
                    owner_id,
                    Some(pet_id),
                    &form,
                    &types,
                    &errors,
                ),
                Err(err) => {
                    log::error!("Failed to load pet types: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to update pet: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use serde::Deserialize;
use tera::Tera;

use crate::dto::owner::{FindOwnersQuery, OwnerSearchOutcome, TrimPolicy};
use crate::forms::FieldErrors;
use crate::forms::owner::OwnerForm;
use crate::models::config::ServerConfig;
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_not_found, render_template};
use crate::services::{ServiceError, owner as owner_service};

#[derive(Deserialize)]
struct FindOwnersParams {
    #[serde(rename = "lastName")]
    last_name: Option<String>,
    page: Option<usize>,
}

fn render_find_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    owner: &OwnerForm,
    errors: &FieldErrors,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "owners");
    context.insert("owner", owner);
    context.insert("errors", errors);
    render_template(tera, "owners/find.html", &context)
}

fn render_owner_form(
    tera: &Tera,
    flash_messages: &IncomingFlashMessages,
    owner: &OwnerForm,
    owner_id: Option<i32>,
    errors: &FieldErrors,
) -> HttpResponse {
    let mut context = base_context(flash_messages, "owners");
    context.insert("owner", owner);
    context.insert("owner_id", &owner_id);
    context.insert("errors", errors);
    render_template(tera, "owners/form.html", &context)
}

#[get("/owners/find")]
pub async fn find_owners_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_find_form(
        &tera,
        &flash_messages,
        &OwnerForm::default(),
        &FieldErrors::new(),
    )
}

#[get("/owners")]
pub async fn find_owners(
    params: web::Query<FindOwnersParams>,
    repo: web::Data<DieselRepository>,
    server_config: web::Data<ServerConfig>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let params = params.into_inner();
    let trim = if server_config.trim_owner_search {
        TrimPolicy::Trim
    } else {
        TrimPolicy::Preserve
    };
    let filter = params.last_name.clone().unwrap_or_default();
    let query = FindOwnersQuery {
        last_name: params.last_name,
        page: params.page,
        trim,
    };

    match owner_service::find_owners(repo.get_ref(), query) {
        Ok(OwnerSearchOutcome::SingleMatch { owner_id }) => {
            redirect(&format!("/owners/{owner_id}"))
        }
        Ok(OwnerSearchOutcome::NoMatch { last_name }) => {
            let mut errors = FieldErrors::new();
            errors.add("last_name", "has not been found");
            let owner = OwnerForm {
                last_name,
                ..OwnerForm::default()
            };
            render_find_form(&tera, &flash_messages, &owner, &errors)
        }
        Ok(OwnerSearchOutcome::Matches(page)) => {
            let mut context = base_context(&flash_messages, "owners");
            context.insert("last_name", &filter);
            context.insert("list_owners", &page.items);
            context.insert("current_page", &page.page);
            context.insert("total_pages", &page.total_pages);
            context.insert("total_items", &page.total_items);
            context.insert("pages", &page.pages);
            render_template(&tera, "owners/list.html", &context)
        }
        Err(err) => {
            log::error!("Failed to search owners: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/new")]
pub async fn new_owner_form(
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    render_owner_form(
        &tera,
        &flash_messages,
        &OwnerForm::default(),
        None,
        &FieldErrors::new(),
    )
}

#[post("/owners/new")]
pub async fn create_owner(
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<OwnerForm>,
) -> impl Responder {
    match owner_service::create_owner(repo.get_ref(), &form) {
        Ok(owner) => {
            FlashMessage::success("Owner created.").send();
            redirect(&format!("/owners/{}", owner.id))
        }
        Err(ServiceError::Validation(errors)) => {
            render_owner_form(&tera, &flash_messages, &form, None, &errors)
        }
        Err(err) => {
            log::error!("Failed to create owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/{owner_id}")]
pub async fn show_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    match owner_service::get_owner_detail(repo.get_ref(), owner_id.into_inner()) {
        Ok(data) => {
            let mut context = base_context(&flash_messages, "owners");
            context.insert("owner", &data.owner);
            context.insert("pets", &data.pets);
            render_template(&tera, "owners/detail.html", &context)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[get("/owners/{owner_id}/edit")]
pub async fn edit_owner_form(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
) -> impl Responder {
    let owner_id = owner_id.into_inner();

    match owner_service::get_owner(repo.get_ref(), owner_id) {
        Ok(owner) => render_owner_form(
            &tera,
            &flash_messages,
            &OwnerForm::from(&owner),
            Some(owner_id),
            &FieldErrors::new(),
        ),
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to load owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/owners/{owner_id}/edit")]
pub async fn update_owner(
    owner_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    flash_messages: IncomingFlashMessages,
    tera: web::Data<Tera>,
    web::Form(form): web::Form<OwnerForm>,
) -> impl Responder {
    let owner_id = owner_id.into_inner();

    match owner_service::update_owner(repo.get_ref(), owner_id, &form) {
        Ok(owner) => {
            FlashMessage::success("Owner updated.").send();
            redirect(&format!("/owners/{}", owner.id))
        }
        Err(ServiceError::Validation(errors)) => {
            render_owner_form(&tera, &flash_messages, &form, Some(owner_id), &errors)
        }
        Err(ServiceError::NotFound) => render_not_found(&tera),
        Err(err) => {
            log::error!("Failed to update owner: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

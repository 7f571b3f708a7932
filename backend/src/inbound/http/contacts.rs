//! Contact page handlers.
//!
//! ```text
//! GET  /
//! GET  /contact/
//! GET  /contact/{id}/
//! GET  /contact/ajouter/            POST /contact/ajouter/
//! GET  /contact/{id}/modifier/      POST /contact/{id}/modifier/
//! GET  /contact/{id}/supprimer/     POST /contact/{id}/supprimer/
//! ```
//!
//! Successful mutations answer `303 See Other` pointing at the list page.
//! Rejected submissions are redisplayed with their raw values and per-field
//! messages under `400 Bad Request`.

use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::{HttpResponse, get, post, web};
use tracing::debug;

use crate::domain::{ContactForm, ContactFormErrors, ContactId, Error};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::views::{FormState, View};

/// Location of the contact list page.
pub const CONTACT_LIST_PATH: &str = "/contact/";

/// Register every contact page on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(home)
        .service(list_contacts)
        .service(create_contact_form)
        .service(create_contact)
        .service(contact_detail)
        .service(edit_contact_form)
        .service(edit_contact)
        .service(delete_contact_confirm)
        .service(delete_contact);
}

fn contact_id(raw: i32) -> Result<ContactId, Error> {
    ContactId::new(raw).map_err(|_| Error::not_found(format!("contact {raw} not found")))
}

fn redirect_to_list() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, CONTACT_LIST_PATH))
        .finish()
}

fn log_rejection(errors: &ContactFormErrors) {
    let error = Error::from(errors);
    debug!(
        code = %error.code(),
        details = ?error.details(),
        "contact form rejected"
    );
}

/// Welcome page.
#[get("/")]
pub async fn home() -> HttpResponse {
    View::Home.respond(StatusCode::OK)
}

/// List every contact.
#[get("/contact/")]
pub async fn list_contacts(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let contacts = state.contacts_query.list_contacts().await?;
    Ok(View::ContactList(&contacts).respond(StatusCode::OK))
}

/// Show one contact.
#[get("/contact/{id:\\d+}/")]
pub async fn contact_detail(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = contact_id(path.into_inner())?;
    let contact = state.contacts_query.get_contact(id).await?;
    Ok(View::ContactDetail(&contact).respond(StatusCode::OK))
}

/// Empty creation form.
#[get("/contact/ajouter/")]
pub async fn create_contact_form() -> HttpResponse {
    let form = ContactForm::default();
    View::ContactCreate(FormState::fresh(&form)).respond(StatusCode::OK)
}

/// Validate and store a new contact.
#[post("/contact/ajouter/")]
pub async fn create_contact(
    state: web::Data<HttpState>,
    form: web::Form<ContactForm>,
) -> ApiResult<HttpResponse> {
    let form = form.into_inner();
    match form.validate() {
        Ok(details) => {
            state.contacts.create_contact(details).await?;
            Ok(redirect_to_list())
        }
        Err(errors) => {
            log_rejection(&errors);
            Ok(View::ContactCreate(FormState::rejected(&form, &errors))
                .respond(StatusCode::BAD_REQUEST))
        }
    }
}

/// Edit form pre-filled with the stored values.
#[get("/contact/{id:\\d+}/modifier/")]
pub async fn edit_contact_form(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = contact_id(path.into_inner())?;
    let contact = state.contacts_query.get_contact(id).await?;
    let form = ContactForm::from_details(contact.details());
    Ok(View::ContactEdit(id, FormState::fresh(&form)).respond(StatusCode::OK))
}

/// Replace an existing contact once it is found and the form validates.
#[post("/contact/{id:\\d+}/modifier/")]
pub async fn edit_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
    form: web::Form<ContactForm>,
) -> ApiResult<HttpResponse> {
    let id = contact_id(path.into_inner())?;
    state.contacts_query.get_contact(id).await?;
    let form = form.into_inner();
    match form.validate() {
        Ok(details) => {
            state.contacts.update_contact(id, details).await?;
            Ok(redirect_to_list())
        }
        Err(errors) => {
            log_rejection(&errors);
            Ok(View::ContactEdit(id, FormState::rejected(&form, &errors))
                .respond(StatusCode::BAD_REQUEST))
        }
    }
}

/// Deletion confirmation page.
#[get("/contact/{id:\\d+}/supprimer/")]
pub async fn delete_contact_confirm(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = contact_id(path.into_inner())?;
    let contact = state.contacts_query.get_contact(id).await?;
    Ok(View::ContactDelete(&contact).respond(StatusCode::OK))
}

/// Delete a contact.
#[post("/contact/{id:\\d+}/supprimer/")]
pub async fn delete_contact(
    state: web::Data<HttpState>,
    path: web::Path<i32>,
) -> ApiResult<HttpResponse> {
    let id = contact_id(path.into_inner())?;
    state.contacts.delete_contact(id).await?;
    Ok(redirect_to_list())
}

use actix_web::web;
use actix_web::HttpResponse;
use serde::Deserialize;
use tera::Tera;

use crate::form::WaitlistForm;
use crate::routes::render_landing;
use crate::waitlist_client::WaitlistClient;

#[derive(Deserialize)]
pub struct WaitlistFormData {
    email: String,
}

/// `POST /waitlist`
///
/// Drives one submission attempt against the waitlist backend and re-renders
/// the page with the outcome. Every backend verdict, including rejection and
/// unreachability, comes back as a page; nothing here is a server error.
///
/// # Request example
///
/// ```sh
///     curl --data 'email=john@foo.com' http://127.0.0.1:8000/waitlist
/// ```
#[tracing::instrument(
    name = "Handling waitlist signup",
    skip(form, client, templates),
    fields(email = %form.email)
)]
pub async fn join_waitlist(
    form: web::Form<WaitlistFormData>,
    // inherited via App.app_data
    client: web::Data<WaitlistClient>,
    templates: web::Data<Tera>,
) -> Result<HttpResponse, actix_web::Error> {
    let mut state = WaitlistForm::with_email(form.0.email);
    state.submit(&client).await;
    render_landing(&templates, &state)
}

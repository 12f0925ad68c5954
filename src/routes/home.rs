use actix_web::http::header::ContentType;
use actix_web::web;
use actix_web::HttpResponse;
use chrono::Datelike;
use chrono::Utc;
use tera::Tera;

use crate::form::SubmissionStatus;
use crate::form::WaitlistForm;
use crate::utils::error_500;

/// `GET /`
pub async fn home(templates: web::Data<Tera>) -> Result<HttpResponse, actix_web::Error> {
    render_landing(&templates, &WaitlistForm::default())
}

/// Render the landing page around the current form state. `GET /` passes the
/// idle state; `POST /waitlist` passes whatever terminal state the submission
/// reached. Error styling is keyed off the status, everything else off the
/// message text.
pub fn render_landing(
    templates: &Tera,
    form: &WaitlistForm,
) -> Result<HttpResponse, actix_web::Error> {
    let mut ctx = tera::Context::new();
    ctx.insert("email", form.email());
    ctx.insert("message", form.message());
    ctx.insert("is_error", &(form.status() == SubmissionStatus::Error));
    ctx.insert("year", &Utc::now().year());

    let body = templates.render("landing.html", &ctx).map_err(error_500)?;

    Ok(HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(body))
}

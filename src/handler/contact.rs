//! Contact form handlers

use crate::config::AppState;
use crate::contact::{validate, ContactForm, ContactSubmission};
use crate::error::AppError;
use crate::handler::RequestContext;
use crate::http::{body, build_html_response, build_redirect_response, HttpResponse};
use crate::views;
use chrono::{SecondsFormat, Utc};
use hyper::StatusCode;
use serde_json::{json, Value};

const SUCCESS_PATH: &str = "/contact/success";

pub fn form() -> Result<HttpResponse, AppError> {
    build_html_response(
        StatusCode::OK,
        views::contact_page(&ContactForm::default(), &[])?,
    )
}

/// Validate a posted form and either store it or show the form again
///
/// Validation failures are not errors: the form is re-rendered with status
/// 200, the posted values and every failed rule.
pub fn submit(state: &AppState, ctx: &RequestContext<'_>) -> Result<HttpResponse, AppError> {
    let form: ContactForm = body::decode(ctx.content_type(), ctx.body)?;
    let result = validate(&form);

    if !result.is_valid {
        state.logger.warn(
            "Contact form validation failed",
            &[("errors", json!(result.errors))],
        );
        return build_html_response(StatusCode::OK, views::contact_page(&form, &result.errors)?);
    }

    let submission = ContactSubmission {
        name: form.name.unwrap_or_default(),
        email: form.email.unwrap_or_default(),
        whatsapp_number: form.whatsapp.unwrap_or_default(),
        message: form.message.unwrap_or_default(),
        submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        source_ip: ctx.client_ip.to_string(),
    };
    state.logger.info(
        "Contact form submitted",
        &[
            ("name", Value::from(submission.name.as_str())),
            ("email", Value::from(submission.email.as_str())),
            ("whatsapp", Value::from(submission.whatsapp_number.as_str())),
            ("messageLength", Value::from(submission.message.chars().count())),
        ],
    );
    let total = state.submissions.append(submission);
    state
        .logger
        .debug("Submission stored", &[("total", Value::from(total))]);

    build_redirect_response(SUCCESS_PATH)
}

pub fn success() -> Result<HttpResponse, AppError> {
    build_html_response(StatusCode::OK, views::contact_success_page()?)
}

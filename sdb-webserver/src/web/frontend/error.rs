use maud::Markup;
use rocket::{
    http::Status,
    response::{self, Responder},
};
use sdb_application::error::AppError;
use sdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};

use super::view;

// Error responder for the HTML frontend: a missing record renders the 404
// page, everything else renders the 500 page, optionally together with a
// user-facing failure notification. Validation errors never end up here,
// they re-render their input form instead.
#[derive(Debug)]
pub struct FrontendError {
    error: AppError,
    notification: Option<String>,
}

impl FrontendError {
    pub fn with_notification(error: AppError, notification: impl Into<String>) -> Self {
        Self {
            error,
            notification: Some(notification.into()),
        }
    }
}

impl From<AppError> for FrontendError {
    fn from(error: AppError) -> Self {
        Self {
            error,
            notification: None,
        }
    }
}

impl From<anyhow::Error> for FrontendError {
    fn from(error: anyhow::Error) -> Self {
        AppError::from(error).into()
    }
}

impl From<RepoError> for FrontendError {
    fn from(error: RepoError) -> Self {
        AppError::from(error).into()
    }
}

impl From<ParameterError> for FrontendError {
    fn from(error: ParameterError) -> Self {
        AppError::from(error).into()
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for FrontendError {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        if self.error.is_not_found() {
            return respond_with_status(Status::NotFound, view::not_found(), req);
        }
        error!("Error: {}", self.error);
        respond_with_status(
            Status::InternalServerError,
            view::internal_error(self.notification.as_deref()),
            req,
        )
    }
}

// Failed form submission: a validation failure re-renders the submitted
// form, everything else is delegated to the regular error responder.
pub enum FormError {
    Invalid(Markup),
    Failed(FrontendError),
}

impl<'r, 'o: 'r> Responder<'r, 'o> for FormError {
    fn respond_to(self, req: &rocket::Request) -> response::Result<'o> {
        match self {
            FormError::Invalid(markup) => markup.respond_to(req),
            FormError::Failed(err) => err.respond_to(req),
        }
    }
}

fn respond_with_status<'r, 'o: 'r>(
    status: Status,
    markup: Markup,
    req: &rocket::Request,
) -> response::Result<'o> {
    let mut response = markup.respond_to(req)?;
    response.set_status(status);
    Ok(response)
}

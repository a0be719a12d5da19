use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum ServerError {
  BadGateway { message: String },
  NotFound { path: String },
}

impl IntoResponse for ServerError {
  fn into_response(self) -> Response {
    match self {
      Self::BadGateway { message } => (StatusCode::BAD_GATEWAY, message).into_response(),
      Self::NotFound { path } => {
        (StatusCode::NOT_FOUND, format!("{path} not found")).into_response()
      }
    }
  }
}

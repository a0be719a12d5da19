use super::*;

/// The server's answer to a signup or removal.
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
  Accepted { message: String },
  Rejected { detail: String },
}

impl Reply {
  pub const UNKNOWN_DETAIL: &'static str = "An error occurred";

  /// Successful statuses carry `{"message": …}`, failures `{"detail": …}`.
  /// Failure details that are not strings, such as validation error lists,
  /// are replaced with a generic detail.
  pub fn parse(status: StatusCode, body: &[u8]) -> serde_json::Result<Self> {
    #[derive(Deserialize)]
    struct Accepted {
      message: String,
    }

    #[derive(Deserialize)]
    struct Rejected {
      #[serde(default)]
      detail: Option<serde_json::Value>,
    }

    if status.is_success() {
      let Accepted { message } = serde_json::from_slice(body)?;
      Ok(Self::Accepted { message })
    } else {
      let Rejected { detail } = serde_json::from_slice(body)?;
      Ok(Self::Rejected {
        detail: match detail {
          Some(serde_json::Value::String(detail)) => detail,
          _ => Self::UNKNOWN_DETAIL.into(),
        },
      })
    }
  }
}

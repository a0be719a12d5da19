use super::*;

type UrlError = <Url as std::str::FromStr>::Err;

#[derive(Snafu, Debug)]
#[snafu(visibility(pub(crate)), context(suffix(false)))]
pub enum Error {
  #[snafu(display("{operation} failed: {message}"))]
  Browser {
    operation: &'static str,
    message: String,
  },
  #[snafu(display("value is not a `{ty}`"))]
  Cast { ty: &'static str },
  #[snafu(display("deserializing response from {url} failed"))]
  Deserialize {
    url: Url,
    source: serde_json::Error,
  },
  #[snafu(display("no element matches `{selector}`"))]
  ElementMissing { selector: String },
  #[snafu(display("API root {url} cannot hold path segments"))]
  Endpoint { url: Url },
  #[snafu(display("page location `{href}` is not a valid URL"))]
  Location { href: String, source: UrlError },
  #[snafu(display("request to {url} failed"))]
  Request {
    url: Url,
    source: reqwest::Error,
  },
  #[snafu(display("failed to install console logger"))]
  SetLogger {
    #[snafu(source(false))]
    source: log::SetLoggerError,
  },
  #[snafu(display("response from {url} failed with {status}"))]
  Status { url: Url, status: StatusCode },
  #[snafu(display("browser window or document is unavailable"))]
  WindowMissing,
}

impl From<Error> for JsValue {
  fn from(err: Error) -> Self {
    JsError::new(&err.to_string()).into()
  }
}

pub(crate) trait JsResultExt<T> {
  fn browser(self, operation: &'static str) -> Result<T, Error>;
}

impl<T> JsResultExt<T> for Result<T, JsValue> {
  fn browser(self, operation: &'static str) -> Result<T, Error> {
    self.map_err(|value| {
      Browser {
        operation,
        message: format!("{value:?}"),
      }
      .build()
    })
  }
}

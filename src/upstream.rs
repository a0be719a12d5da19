use {
  super::*,
  axum::response::{IntoResponse, Response},
  crate::subcommand::server::ServerError,
};

/// The sign-up backend that API requests are forwarded to.
pub(crate) struct Upstream {
  client: reqwest::Client,
  root: Url,
}

impl Upstream {
  pub(crate) fn new(root: Url) -> Result<Self> {
    let client = reqwest::Client::builder()
      .build()
      .context(error::Client {
        backend: root.clone(),
      })?;

    Ok(Self { client, root })
  }

  /// `uri`'s path and query, already percent-encoded, on the backend's
  /// origin.
  pub(crate) fn url(&self, uri: &Uri) -> Url {
    let mut url = self.root.clone();
    url.set_path(uri.path());
    url.set_query(uri.query());
    url.set_fragment(None);
    url
  }

  pub(crate) async fn forward(&self, method: Method, uri: &Uri) -> Result<Response, ServerError> {
    let url = self.url(uri);

    let bad_gateway = |err: reqwest::Error| {
      log::warn!("{method} {url} failed: {err}");
      ServerError::BadGateway {
        message: format!("backend request {method} {url} failed"),
      }
    };

    let response = self
      .client
      .request(method.clone(), url.clone())
      .send()
      .await
      .map_err(bad_gateway)?;

    let status = response.status();

    let content_type = response.headers().get(header::CONTENT_TYPE).cloned();

    let body = response.bytes().await.map_err(bad_gateway)?;

    log::info!("{method} {url} {status}");

    let mut response = (status, body).into_response();

    if let Some(content_type) = content_type {
      response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    }

    Ok(response)
  }
}

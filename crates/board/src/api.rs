use super::*;

pub struct Api {
  client: reqwest::Client,
  root: Url,
}

impl Api {
  pub fn new(root: Url) -> Self {
    Self {
      client: reqwest::Client::new(),
      root,
    }
  }

  /// Resolve endpoints against the origin of the current page.
  pub fn from_location() -> Result<Self, Error> {
    let window = web_sys::window().context(error::WindowMissing)?;
    let href = window.location().href().browser("location.href")?;
    let mut root = Url::parse(&href).context(error::Location { href })?;
    root.set_fragment(None);
    root.set_query(None);
    root.set_path("/");
    Ok(Self::new(root))
  }

  fn endpoint(&self, segments: &[&str], email: Option<&str>) -> Result<Url, Error> {
    let mut url = self.root.clone();
    url.set_fragment(None);
    url.set_query(None);

    url
      .path_segments_mut()
      .map_err(|()| {
        error::Endpoint {
          url: self.root.clone(),
        }
        .build()
      })?
      .pop_if_empty()
      .extend(segments);

    if let Some(email) = email {
      url.query_pairs_mut().append_pair("email", email);
    }

    Ok(url)
  }

  async fn send(&self, method: Method, url: &Url) -> Result<(StatusCode, Vec<u8>), Error> {
    log::debug!("{method} {url}");

    let response = self
      .client
      .request(method, url.clone())
      .send()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    let status = response.status();

    let body = response
      .bytes()
      .await
      .with_context(|_| error::Request { url: url.clone() })?;

    Ok((status, body.to_vec()))
  }

  async fn mutate(&self, method: Method, segments: &[&str], email: &str) -> Result<Reply, Error> {
    let url = self.endpoint(segments, Some(email))?;

    let (status, body) = self.send(method, &url).await?;

    Reply::parse(status, &body).context(error::Deserialize { url })
  }
}

impl Backend for Api {
  async fn activities(&self) -> Result<Activities, Error> {
    let url = self.endpoint(&["activities"], None)?;

    let (status, body) = self.send(Method::GET, &url).await?;

    ensure!(
      status.is_success(),
      error::Status {
        status,
        url: url.clone()
      }
    );

    serde_json::from_slice(&body).context(error::Deserialize { url })
  }

  async fn signup(&self, activity: &str, email: &str) -> Result<Reply, Error> {
    self
      .mutate(Method::POST, &["activities", activity, "signup"], email)
      .await
  }

  async fn remove(&self, activity: &str, email: &str) -> Result<Reply, Error> {
    self
      .mutate(Method::DELETE, &["activities", activity, "participants"], email)
      .await
  }
}

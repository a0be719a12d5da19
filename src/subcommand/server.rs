use {
  super::*,
  axum::{
    extract::{Extension, Path},
    response::{IntoResponse, Redirect, Response},
    routing::{delete, get, post},
    Router,
  },
  tokio::runtime::Runtime,
  tower_http::set_header::SetResponseHeaderLayer,
};

pub(crate) use server_error::ServerError;

mod server_error;

#[derive(Debug, Parser)]
pub struct Server {
  #[arg(long, help = "Listen on <ADDRESS> for incoming requests.")]
  pub(crate) address: SocketAddr,
  #[arg(
    long,
    default_value = "http://127.0.0.1:8000/",
    help = "Forward activity API requests to <BACKEND>."
  )]
  pub(crate) backend: Url,
  #[arg(long, help = "Open server in browser.")]
  pub(crate) open: bool,
}

#[derive(Debug)]
struct Resource {
  content_type: Mime,
  content: Vec<u8>,
}

impl Resource {
  fn new(content_type: Mime, content: Vec<u8>) -> Self {
    Self {
      content_type,
      content,
    }
  }
}

impl IntoResponse for Resource {
  fn into_response(self) -> Response {
    (
      [(header::CONTENT_TYPE, self.content_type.to_string())],
      self.content,
    )
      .into_response()
  }
}

type ServerResult<T = Resource> = std::result::Result<T, ServerError>;

impl Server {
  const CONTENT_SECURITY_POLICY: &'static str =
    "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'";

  const INDEX: &'static str = "/static/index.html";

  pub fn run(self) -> Result {
    let upstream = Arc::new(Upstream::new(self.backend.clone())?);

    if self.open {
      let url = format!("http://{}/", self.address);
      open::that(&url).context(error::Open { url: &url })?;
    }

    Runtime::new().context(error::Runtime)?.block_on(async {
      log::info!(
        "serving on http://{}/, forwarding activity API requests to {}",
        self.address,
        self.backend,
      );

      axum_server::Server::bind(self.address)
        .serve(Self::router(upstream).into_make_service())
        .await
        .context(error::Serve {
          address: self.address,
        })
    })?;

    Ok(())
  }

  fn router(upstream: Arc<Upstream>) -> Router {
    Router::new()
      .route("/", get(Self::root))
      .route("/static/*path", get(Self::asset))
      .route("/activities", get(Self::forward))
      .route("/activities/:name/signup", post(Self::forward))
      .route("/activities/:name/participants", delete(Self::forward))
      .layer(SetResponseHeaderLayer::overriding(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(Self::CONTENT_SECURITY_POLICY),
      ))
      .layer(Extension(upstream))
  }

  async fn root() -> Redirect {
    Redirect::temporary(Self::INDEX)
  }

  async fn asset(Path(path): Path<String>) -> ServerResult {
    let (content_type, content) = Assets::file(&path).ok_or_else(|| ServerError::NotFound {
      path: format!("/static/{path}"),
    })?;

    Ok(Resource::new(content_type, content))
  }

  async fn forward(
    upstream: Extension<Arc<Upstream>>,
    method: Method,
    uri: Uri,
  ) -> ServerResult<Response> {
    upstream.forward(method, &uri).await
  }
}

use super::*;

#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub))]
pub(crate) enum Error {
  #[snafu(display("failed to build client for backend `{backend}`"))]
  Client {
    backend: Url,
    backtrace: Option<Backtrace>,
    source: reqwest::Error,
  },
  #[snafu(display("failed to open `{url}`"))]
  Open {
    backtrace: Option<Backtrace>,
    source: io::Error,
    url: String,
  },
  #[snafu(display("I/O error initializing async runtime"))]
  Runtime {
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
  #[snafu(display("I/O error serving on {address}"))]
  Serve {
    address: SocketAddr,
    backtrace: Option<Backtrace>,
    source: io::Error,
  },
}

impl Error {
  pub(crate) fn report(&self) {
    eprintln!("error: {self}");

    for (i, err) in self.iter_chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();
        eprintln!("because:");
      }

      eprintln!("- {err}");
    }

    if let Some(backtrace) = self.backtrace() {
      if backtrace.status() == BacktraceStatus::Captured {
        eprintln!();
        eprintln!("backtrace:");
        eprintln!("{backtrace}");
      }
    }
  }
}

#![allow(clippy::result_large_err)]

use {
  self::{assets::Assets, error::Error, subcommand::Subcommand, upstream::Upstream},
  axum::http::{header, HeaderValue, Method, StatusCode, Uri},
  clap::Parser,
  libc::EXIT_FAILURE,
  mime_guess::Mime,
  reqwest::Url,
  snafu::{ErrorCompat, ResultExt, Snafu},
  std::{
    backtrace::{Backtrace, BacktraceStatus},
    io,
    net::SocketAddr,
    process,
    sync::Arc,
  },
};


#[cfg(test)]
use test::*;

mod assets;
mod error;
mod subcommand;
mod upstream;

type Result<T = (), E = Error> = std::result::Result<T, E>;

fn main() {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  if let Err(err) = Subcommand::parse().run() {
    err.report();
    process::exit(EXIT_FAILURE)
  }
}

#![allow(async_fn_in_trait)]

use {
  self::{
    banner::Banner,
    error::JsResultExt,
    generation::Generation,
    notice::NoticeRegion,
    templates::{ActivitiesHtml, OptionsHtml},
  },
  boilerplate::Boilerplate,
  gloo_timers::callback::Timeout,
  reqwest::{Method, StatusCode, Url},
  serde::{
    de::{MapAccess, Visitor},
    Deserialize, Deserializer,
  },
  snafu::{ensure, OptionExt, ResultExt, Snafu},
  std::{
    cell::{Cell, RefCell},
    fmt::{self, Formatter},
    ops::Deref,
    time::Duration,
  },
  wasm_bindgen::{closure::Closure, JsCast, JsError, JsValue},
  web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement,
    HtmlSelectElement, Window,
  },
};

pub use {
  self::{
    activities::{Activities, Activity},
    api::Api,
    backend::Backend,
    board::{Board, LOAD_FAILED, REMOVE_FAILED, SIGNUP_FAILED},
    cast::Cast,
    dom::Dom,
    error::Error,
    event_target_ext::EventTargetExt,
    notice::{Notice, NoticeKind, NOTICE_DURATION},
    reply::Reply,
    select::Select,
    surface::Surface,
  },
  log, wasm_bindgen, wasm_bindgen_futures, web_sys,
};

#[cfg(test)]
#[macro_use]
mod test;

#[cfg(test)]
use test::*;

mod activities;
mod api;
mod backend;
mod banner;
mod board;
mod cast;
mod dom;
mod error;
mod event_target_ext;
mod generation;
mod notice;
mod reply;
mod select;
mod surface;
mod templates;

pub fn initialize_console(level: log::Level) -> Result<(), Error> {
  console_error_panic_hook::set_once();
  console_log::init_with_level(level).map_err(|source| error::SetLogger { source }.build())?;
  Ok(())
}

use {
  board::{
    log,
    wasm_bindgen::{self, prelude::wasm_bindgen, JsValue},
    wasm_bindgen_futures,
    web_sys::Event,
    Api, Board, Dom, Error, EventTargetExt, NOTICE_DURATION,
  },
  std::rc::Rc,
};

mod listeners;

type Viewer = Board<Api, Dom>;

#[wasm_bindgen(main)]
async fn main() -> Result<(), JsValue> {
  board::initialize_console(log::Level::Debug)?;
  let board = Rc::new(Board::new(Api::from_location()?, Dom::bind(NOTICE_DURATION)?));
  listeners::attach(&board)?;
  board.load().await;
  Ok(())
}

use super::*;

pub(crate) fn attach(board: &Rc<Viewer>) -> Result<(), Error> {
  let dom = board.surface();

  let signup = board.clone();
  dom.form().add_event_listener("submit", move |event: Event| {
    event.prevent_default();
    let (email, activity) = signup.surface().entry();
    let board = signup.clone();
    wasm_bindgen_futures::spawn_local(async move { board.signup(&email, &activity).await });
  })?;

  let removal = board.clone();
  dom.list().add_event_listener("click", move |event: Event| {
    match Dom::removal(&event) {
      Ok(Some((activity, email))) => {
        let board = removal.clone();
        wasm_bindgen_futures::spawn_local(async move { board.remove(&activity, &email).await });
      }
      Ok(None) => {}
      Err(err) => log::error!("failed to resolve remove button: {err}"),
    }
  })?;

  Ok(())
}

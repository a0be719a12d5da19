use super::*;

pub trait EventTargetExt {
  fn add_event_listener<F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    F: FnMut(Event) + 'static;
}

impl<T: Deref<Target = EventTarget>> EventTargetExt for T {
  fn add_event_listener<F>(&self, event_type: &str, callback: F) -> Result<(), Error>
  where
    F: FnMut(Event) + 'static,
  {
    let closure = Closure::<dyn FnMut(Event)>::new(callback);
    self
      .add_event_listener_with_callback(event_type, closure.as_ref().unchecked_ref())
      .browser("addEventListener")?;
    closure.forget();
    Ok(())
  }
}

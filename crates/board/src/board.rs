use super::*;

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";
pub const REMOVE_FAILED: &str = "Failed to remove participant. Please try again.";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Loads activities, signs people up, and removes them. Every mutation the
/// server accepts is followed by a fresh load.
pub struct Board<B, S> {
  backend: B,
  generation: Generation,
  surface: S,
}

impl<B: Backend, S: Surface> Board<B, S> {
  pub fn new(backend: B, surface: S) -> Self {
    Self {
      backend,
      generation: Generation::default(),
      surface,
    }
  }

  pub fn backend(&self) -> &B {
    &self.backend
  }

  pub fn surface(&self) -> &S {
    &self.surface
  }

  pub async fn load(&self) {
    let generation = self.generation.advance();

    let result = self.backend.activities().await;

    if !self.generation.is_current(generation) {
      log::debug!("discarding result of superseded load {generation}");
      return;
    }

    match result {
      Ok(activities) => {
        log::info!("loaded {} activities", activities.len());
        Self::report("render activities", self.surface.render(activities));
      }
      Err(err) => {
        log::error!("failed to load activities: {err}");
        Self::report("show load failure", self.surface.fail(LOAD_FAILED));
      }
    }
  }

  pub async fn signup(&self, email: &str, activity: &str) {
    match self.backend.signup(activity, email).await {
      Ok(Reply::Accepted { message }) => {
        self.notify(Notice::success(message));
        Self::report("reset signup form", self.surface.reset_form());
        self.load().await;
      }
      Ok(Reply::Rejected { detail }) => {
        log::warn!("signup of {email} for {activity} rejected: {detail}");
        self.notify(Notice::error(detail));
      }
      Err(err) => {
        log::error!("failed to sign up {email} for {activity}: {err}");
        self.notify(Notice::error(SIGNUP_FAILED));
      }
    }
  }

  pub async fn remove(&self, activity: &str, email: &str) {
    match self
      .surface
      .confirm(&format!("Remove {email} from {activity}?"))
    {
      Ok(true) => {}
      Ok(false) => return,
      Err(err) => {
        log::error!("failed to confirm removal: {err}");
        return;
      }
    }

    match self.backend.remove(activity, email).await {
      Ok(Reply::Accepted { message }) => {
        self.notify(Notice::success(message));
        self.load().await;
      }
      Ok(Reply::Rejected { detail }) => {
        log::warn!("removal of {email} from {activity} rejected: {detail}");
        self.notify(Notice::error(detail));
      }
      Err(err) => {
        log::error!("failed to remove {email} from {activity}: {err}");
        self.notify(Notice::error(REMOVE_FAILED));
      }
    }
  }

  fn notify(&self, notice: Notice) {
    Self::report("show notice", self.surface.notify(notice));
  }

  fn report(action: &str, result: Result<(), Error>) {
    if let Err(err) = result {
      log::error!("failed to {action}: {err}");
    }
  }
}

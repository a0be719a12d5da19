use super::*;

pub const NOTICE_DURATION: Duration = Duration::from_millis(5000);

#[derive(Clone, Copy, Debug, PartialEq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum NoticeKind {
  Error,
  Success,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
  pub kind: NoticeKind,
  pub text: String,
}

impl Notice {
  pub fn error(text: impl Into<String>) -> Self {
    Self {
      kind: NoticeKind::Error,
      text: text.into(),
    }
  }

  pub fn success(text: impl Into<String>) -> Self {
    Self {
      kind: NoticeKind::Success,
      text: text.into(),
    }
  }

  pub fn class_name(&self) -> String {
    format!("message {}", self.kind)
  }
}

/// The `#message` element. Holds at most one pending hide timer; showing a
/// notice drops the previous timer, which cancels it.
pub(crate) struct NoticeRegion<B: Banner> {
  banner: B,
  duration: Duration,
  timer: RefCell<Option<B::Timer>>,
}

impl<B: Banner> NoticeRegion<B> {
  pub(crate) fn new(banner: B, duration: Duration) -> Self {
    Self {
      banner,
      duration,
      timer: RefCell::new(None),
    }
  }

  pub(crate) fn show(&self, notice: &Notice) -> Result<(), Error> {
    self.banner.display(notice)?;

    let banner = self.banner.clone();

    let timer = self.banner.schedule(self.duration, move || {
      if let Err(err) = banner.hide() {
        log::error!("failed to hide notice: {err}");
      }
    });

    self.timer.replace(Some(timer));

    Ok(())
  }
}

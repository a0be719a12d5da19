use {
  super::*,
  std::{collections::VecDeque, rc::Rc},
};

macro_rules! assert_matches {
  ($expression:expr, $( $pattern:pat_param )|+ $( if $guard:expr )? $(,)?) => {
    match $expression {
      $( $pattern )|+ $( if $guard )? => {}
      left => panic!(
        "assertion failed: (left ~= right)\n  left: `{:?}`\n right: `{}`",
        left,
        stringify!($($pattern)|+ $(if $guard)?)
      ),
    }
  }
}

pub(crate) fn activity(max_participants: u32, participants: &[&str]) -> Activity {
  Activity {
    description: String::new(),
    schedule: String::new(),
    max_participants,
    participants: participants.iter().map(|email| email.to_string()).collect(),
  }
}

pub(crate) fn activities(entries: &[(&str, Activity)]) -> Activities {
  entries
    .iter()
    .map(|(name, activity)| (name.to_string(), activity.clone()))
    .collect()
}

/// Keeps activities in memory and answers the way the sign-up server does.
pub(crate) struct FakeBackend {
  activities: RefCell<Activities>,
  offline: Cell<bool>,
  requests: RefCell<Vec<String>>,
  scripted: RefCell<VecDeque<(usize, Activities)>>,
}

impl FakeBackend {
  pub(crate) fn new(activities: Activities) -> Self {
    Self {
      activities: RefCell::new(activities),
      offline: Cell::new(false),
      requests: RefCell::default(),
      scripted: RefCell::default(),
    }
  }

  pub(crate) fn go_offline(&self) {
    self.offline.set(true);
  }

  pub(crate) fn requests(&self) -> Vec<String> {
    self.requests.borrow().clone()
  }

  /// Answer the next list request with `activities`, after yielding to the
  /// executor `delay` times.
  pub(crate) fn script(&self, delay: usize, activities: Activities) {
    self.scripted.borrow_mut().push_back((delay, activities));
  }

  fn record(&self, request: String) -> Result<(), Error> {
    self.requests.borrow_mut().push(request);

    if self.offline.get() {
      return Err(Error::Status {
        url: "http://localhost:8000/activities".parse().unwrap(),
        status: StatusCode::SERVICE_UNAVAILABLE,
      });
    }

    Ok(())
  }

  fn rejected(detail: &str) -> Reply {
    Reply::Rejected {
      detail: detail.into(),
    }
  }
}

impl Backend for FakeBackend {
  async fn activities(&self) -> Result<Activities, Error> {
    self.record("GET /activities".into())?;

    let scripted = self.scripted.borrow_mut().pop_front();

    if let Some((delay, activities)) = scripted {
      for _ in 0..delay {
        tokio::task::yield_now().await;
      }
      return Ok(activities);
    }

    Ok(self.activities.borrow().clone())
  }

  async fn signup(&self, activity: &str, email: &str) -> Result<Reply, Error> {
    self.record(format!("POST /activities/{activity}/signup?email={email}"))?;

    let mut activities = self.activities.borrow_mut();

    let Some(record) = activities.get_mut(activity) else {
      return Ok(Self::rejected("Activity not found"));
    };

    if record.participants.iter().any(|participant| participant == email) {
      return Ok(Self::rejected("Student is already signed up"));
    }

    if record.spots_left() <= 0 {
      return Ok(Self::rejected("Activity full"));
    }

    record.participants.push(email.into());

    Ok(Reply::Accepted {
      message: format!("Signed up {email} for {activity}"),
    })
  }

  async fn remove(&self, activity: &str, email: &str) -> Result<Reply, Error> {
    self.record(format!(
      "DELETE /activities/{activity}/participants?email={email}"
    ))?;

    let mut activities = self.activities.borrow_mut();

    let Some(record) = activities.get_mut(activity) else {
      return Ok(Self::rejected("Activity not found"));
    };

    let Some(position) = record
      .participants
      .iter()
      .position(|participant| participant == email)
    else {
      return Ok(Self::rejected("Participant not found"));
    };

    record.participants.remove(position);

    Ok(Reply::Accepted {
      message: format!("Removed {email} from {activity}"),
    })
  }
}

/// Records everything the board asks of the view.
#[derive(Default)]
pub(crate) struct FakeSurface {
  answer: Cell<bool>,
  email: RefCell<String>,
  failure: RefCell<Option<String>>,
  notices: RefCell<Vec<Notice>>,
  prompts: RefCell<Vec<String>>,
  rendered: RefCell<Option<Activities>>,
  renders: Cell<usize>,
}

impl FakeSurface {
  pub(crate) fn answer(&self, answer: bool) {
    self.answer.set(answer);
  }

  pub(crate) fn email(&self) -> String {
    self.email.borrow().clone()
  }

  pub(crate) fn failure(&self) -> Option<String> {
    self.failure.borrow().clone()
  }

  pub(crate) fn notice(&self) -> Option<Notice> {
    self.notices.borrow().last().cloned()
  }

  pub(crate) fn notices(&self) -> Vec<Notice> {
    self.notices.borrow().clone()
  }

  pub(crate) fn prompts(&self) -> Vec<String> {
    self.prompts.borrow().clone()
  }

  pub(crate) fn rendered(&self) -> Option<Activities> {
    self.rendered.borrow().clone()
  }

  pub(crate) fn renders(&self) -> usize {
    self.renders.get()
  }

  pub(crate) fn type_email(&self, email: &str) {
    *self.email.borrow_mut() = email.into();
  }
}

impl Surface for FakeSurface {
  fn render(&self, activities: Activities) -> Result<(), Error> {
    *self.rendered.borrow_mut() = Some(activities);
    *self.failure.borrow_mut() = None;
    self.renders.set(self.renders.get() + 1);
    Ok(())
  }

  fn fail(&self, message: &str) -> Result<(), Error> {
    *self.failure.borrow_mut() = Some(message.into());
    Ok(())
  }

  fn notify(&self, notice: Notice) -> Result<(), Error> {
    self.notices.borrow_mut().push(notice);
    Ok(())
  }

  fn reset_form(&self) -> Result<(), Error> {
    self.email.borrow_mut().clear();
    Ok(())
  }

  fn confirm(&self, prompt: &str) -> Result<bool, Error> {
    self.prompts.borrow_mut().push(prompt.into());
    Ok(self.answer.get())
  }
}

struct Scheduled {
  at: Duration,
  callback: Box<dyn FnOnce()>,
  cancelled: Rc<Cell<bool>>,
}

pub(crate) struct FakeTimer {
  cancelled: Rc<Cell<bool>>,
}

impl Drop for FakeTimer {
  fn drop(&mut self) {
    self.cancelled.set(true);
  }
}

#[derive(Default)]
struct BannerState {
  class_name: RefCell<String>,
  fired: Cell<usize>,
  hidden: Cell<bool>,
  now: Cell<Duration>,
  scheduled: RefCell<Vec<Scheduled>>,
  text: RefCell<String>,
}

/// Shows notices in memory. Hide timers fire when the test advances the
/// clock.
#[derive(Clone, Default)]
pub(crate) struct FakeBanner(Rc<BannerState>);

impl FakeBanner {
  pub(crate) fn advance(&self, by: Duration) {
    let now = self.0.now.get() + by;
    self.0.now.set(now);

    let due = {
      let mut scheduled = self.0.scheduled.borrow_mut();
      let (due, waiting) = scheduled
        .drain(..)
        .partition::<Vec<Scheduled>, _>(|timer| timer.at <= now);
      *scheduled = waiting;
      due
    };

    for timer in due {
      if !timer.cancelled.get() {
        (timer.callback)();
        self.0.fired.set(self.0.fired.get() + 1);
      }
    }
  }

  pub(crate) fn class_name(&self) -> String {
    self.0.class_name.borrow().clone()
  }

  pub(crate) fn fired(&self) -> usize {
    self.0.fired.get()
  }

  pub(crate) fn hidden(&self) -> bool {
    self.0.hidden.get()
  }

  pub(crate) fn pending(&self) -> usize {
    self
      .0
      .scheduled
      .borrow()
      .iter()
      .filter(|timer| !timer.cancelled.get())
      .count()
  }

  pub(crate) fn text(&self) -> String {
    self.0.text.borrow().clone()
  }
}

impl Banner for FakeBanner {
  type Timer = FakeTimer;

  fn display(&self, notice: &Notice) -> Result<(), Error> {
    *self.0.text.borrow_mut() = notice.text.clone();
    *self.0.class_name.borrow_mut() = notice.class_name();
    self.0.hidden.set(false);
    Ok(())
  }

  fn hide(&self) -> Result<(), Error> {
    self.0.hidden.set(true);
    Ok(())
  }

  fn schedule(&self, delay: Duration, callback: impl FnOnce() + 'static) -> FakeTimer {
    let cancelled = Rc::new(Cell::new(false));

    self.0.scheduled.borrow_mut().push(Scheduled {
      at: self.0.now.get() + delay,
      callback: Box::new(callback),
      cancelled: cancelled.clone(),
    });

    FakeTimer { cancelled }
  }
}

use super::*;

/// The page elements the board binds to.
pub struct Dom {
  email: HtmlInputElement,
  form: HtmlFormElement,
  list: HtmlElement,
  notice: NoticeRegion<HtmlElement>,
  select: HtmlSelectElement,
  window: Window,
}

impl Dom {
  const REMOVE_BUTTON: &'static str = "button.participant-remove";

  pub fn bind(notice_duration: Duration) -> Result<Self, Error> {
    let window = web_sys::window().context(error::WindowMissing)?;
    let document = window.document().context(error::WindowMissing)?;

    Ok(Self {
      email: document.select("#signup-form #email")?,
      form: document.select("#signup-form")?,
      list: document.select("#activities-list")?,
      notice: NoticeRegion::new(document.select("#message")?, notice_duration),
      select: document.select("#signup-form #activity")?,
      window,
    })
  }

  pub fn form(&self) -> &HtmlFormElement {
    &self.form
  }

  pub fn list(&self) -> &HtmlElement {
    &self.list
  }

  /// The email and activity currently entered in the signup form.
  pub fn entry(&self) -> (String, String) {
    (self.email.value(), self.select.value())
  }

  /// The activity and email bound to the remove button an event came from,
  /// if it came from one.
  pub fn removal(event: &Event) -> Result<Option<(String, String)>, Error> {
    let Some(target) = event.target() else {
      return Ok(None);
    };

    let Ok(element) = target.dyn_into::<Element>() else {
      return Ok(None);
    };

    let Some(button) = element.closest(Self::REMOVE_BUTTON).browser("closest")? else {
      return Ok(None);
    };

    let dataset = button.cast::<HtmlElement>()?.dataset();

    Ok(dataset.get("activity").zip(dataset.get("email")))
  }
}

impl Surface for Dom {
  fn render(&self, activities: Activities) -> Result<(), Error> {
    let options = OptionsHtml {
      names: activities.names(),
    }
    .to_string();

    self
      .list
      .set_inner_html(&ActivitiesHtml { activities }.to_string());

    self.select.set_inner_html(&options);

    Ok(())
  }

  fn fail(&self, message: &str) -> Result<(), Error> {
    self.list.set_text_content(Some(message));
    Ok(())
  }

  fn notify(&self, notice: Notice) -> Result<(), Error> {
    self.notice.show(&notice)
  }

  fn reset_form(&self) -> Result<(), Error> {
    self.form.reset();
    Ok(())
  }

  fn confirm(&self, prompt: &str) -> Result<bool, Error> {
    self.window.confirm_with_message(prompt).browser("confirm")
  }
}

use super::*;

/// Where the board draws itself.
pub trait Surface {
  /// Replace the activity list and the activity options.
  fn render(&self, activities: Activities) -> Result<(), Error>;

  /// Replace the activity list with a plain text message. The activity
  /// options are left alone.
  fn fail(&self, message: &str) -> Result<(), Error>;

  fn notify(&self, notice: Notice) -> Result<(), Error>;

  fn reset_form(&self) -> Result<(), Error>;

  fn confirm(&self, prompt: &str) -> Result<bool, Error>;
}

use super::*;

/// One card per activity, with a roster row and remove control per
/// participant. All interpolated values are HTML-escaped.
#[derive(Boilerplate)]
#[boilerplate(filename = "activities.html")]
pub(crate) struct ActivitiesHtml {
  pub(crate) activities: Activities,
}

/// The placeholder followed by one option per activity.
#[derive(Boilerplate)]
#[boilerplate(filename = "options.html")]
pub(crate) struct OptionsHtml {
  pub(crate) names: Vec<String>,
}

use super::*;

#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Activity {
  pub description: String,
  pub schedule: String,
  pub max_participants: u32,
  pub participants: Vec<String>,
}

impl Activity {
  /// Negative when the roster is over capacity.
  pub fn spots_left(&self) -> i64 {
    i64::from(self.max_participants) - self.participants.len() as i64
  }
}

/// Activities keyed by name, in the order the server listed them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Activities(Vec<(String, Activity)>);

impl Activities {
  pub fn get(&self, name: &str) -> Option<&Activity> {
    self
      .0
      .iter()
      .find(|(key, _)| key == name)
      .map(|(_, activity)| activity)
  }

  #[cfg(test)]
  pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut Activity> {
    self
      .0
      .iter_mut()
      .find(|(key, _)| key == name)
      .map(|(_, activity)| activity)
  }

  pub fn insert(&mut self, name: String, activity: Activity) {
    match self.0.iter_mut().find(|(key, _)| *key == name) {
      Some((_, existing)) => *existing = activity,
      None => self.0.push((name, activity)),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
    self
      .0
      .iter()
      .map(|(name, activity)| (name.as_str(), activity))
  }

  pub fn len(&self) -> usize {
    self.0.len()
  }

  pub fn names(&self) -> Vec<String> {
    self.0.iter().map(|(name, _)| name.clone()).collect()
  }
}

impl FromIterator<(String, Activity)> for Activities {
  fn from_iter<I: IntoIterator<Item = (String, Activity)>>(iter: I) -> Self {
    let mut activities = Self::default();
    for (name, activity) in iter {
      activities.insert(name, activity);
    }
    activities
  }
}

impl<'de> Deserialize<'de> for Activities {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    struct ActivitiesVisitor;

    impl<'de> Visitor<'de> for ActivitiesVisitor {
      type Value = Activities;

      fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a map from activity name to activity")
      }

      fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Activities, A::Error> {
        let mut activities = Activities::default();
        while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
          activities.insert(name, activity);
        }
        Ok(activities)
      }
    }

    deserializer.deserialize_map(ActivitiesVisitor)
  }
}

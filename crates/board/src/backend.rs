use super::*;

pub trait Backend {
  async fn activities(&self) -> Result<Activities, Error>;

  async fn signup(&self, activity: &str, email: &str) -> Result<Reply, Error>;

  async fn remove(&self, activity: &str, email: &str) -> Result<Reply, Error>;
}

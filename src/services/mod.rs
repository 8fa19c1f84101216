pub mod feed;
pub mod handlers;
pub mod response;

use std::ops::Deref;
use std::sync::Arc;

use crate::adapters::repositories::{LikeIndex, TweetRepository, UserDirectory};

// No lock around the state: the service owns no cross-request mutable
// data, the backing store arbitrates concurrent access.
pub struct ServiceState {
	pub tweets: Arc<dyn TweetRepository>,
	pub likes: Arc<dyn LikeIndex>,
	pub users: Arc<dyn UserDirectory>,
}

#[derive(Clone)]
pub struct ServiceStateWrapper(pub Arc<ServiceState>);
impl From<Arc<ServiceState>> for ServiceStateWrapper {
	fn from(value: Arc<ServiceState>) -> Self {
		Self(value)
	}
}
impl From<ServiceState> for ServiceStateWrapper {
	fn from(value: ServiceState) -> Self {
		Arc::new(value).into()
	}
}
impl Deref for ServiceStateWrapper {
	type Target = ServiceState;
	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

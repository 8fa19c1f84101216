use uuid::Uuid;

use crate::adapters::repositories::{LikeIndex, UserDirectory};
use crate::domain::tweet::canonical_id;
use crate::domain::tweet::entity::{Like, Tweet, UserSummary};
use crate::domain::tweet::schemas::FeedEntry;

use super::response::ServiceError;

pub struct FeedAssembler;
impl FeedAssembler {
	/// Turns an owner's raw tweets into display-ready feed entries:
	/// join one author summary, join likes, derive per-viewer fields,
	/// sort newest first, project.
	///
	/// Reads only. Entries reflect the like index and user directory at
	/// query time; nothing is cached.
	pub async fn assemble(
		tweets: Vec<Tweet>,
		viewer_id: Option<&str>,
		users: &dyn UserDirectory,
		likes: &dyn LikeIndex,
	) -> Result<Vec<FeedEntry>, ServiceError> {
		// An anonymous or malformed viewer identity simply never matches.
		let viewer = viewer_id.and_then(canonical_id);

		let mut entries = Vec::with_capacity(tweets.len());
		for tweet in tweets {
			let owner_details = Self::join_author(&tweet, users).await?;
			let like_details = likes.find_by_tweet(tweet.id).await?;
			entries.push(Self::derive_entry(tweet, owner_details, &like_details, viewer.as_ref()));
		}

		Self::sort_newest_first(&mut entries);
		Ok(entries)
	}

	/// First directory match only; an owner missing from the directory is
	/// not an error, the entry just carries no author summary.
	async fn join_author(
		tweet: &Tweet,
		users: &dyn UserDirectory,
	) -> Result<Option<UserSummary>, ServiceError> {
		let mut matches = users.find_by_id(&tweet.owner_id).await?;
		if matches.is_empty() {
			Ok(None)
		} else {
			Ok(Some(matches.remove(0)))
		}
	}

	fn derive_entry(
		tweet: Tweet,
		owner_details: Option<UserSummary>,
		like_details: &[Like],
		viewer: Option<&Uuid>,
	) -> FeedEntry {
		let is_liked = match viewer {
			Some(viewer) => like_details
				.iter()
				.any(|like| canonical_id(&like.liked_by).as_ref() == Some(viewer)),
			None => false,
		};

		FeedEntry {
			content: tweet.content,
			owner_details,
			likes_count: like_details.len() as i64,
			created_at: tweet.create_dt,
			is_liked,
		}
	}

	// sort_by is stable, so entries with equal timestamps keep the order
	// the store returned them in.
	fn sort_newest_first(entries: &mut [FeedEntry]) {
		entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
	}
}

use crate::adapters::repositories::{LikeIndex, TweetRepository, UserDirectory};
use crate::domain::tweet::entity::Tweet;
use crate::domain::tweet::schemas::{CreateTweet, FeedEntry, UpdateTweet};
use crate::domain::tweet::{canonical_id, same_identity};

use super::feed::FeedAssembler;
use super::response::ServiceError;

pub struct TweetHandler;
impl TweetHandler {
	pub async fn create_tweet(
		actor_id: &str,
		cmd: CreateTweet,
		tweets: &dyn TweetRepository,
	) -> Result<Tweet, ServiceError> {
		let content = Self::_required_content(cmd.content)?;
		let owner = canonical_id(actor_id)
			.ok_or_else(|| ServiceError::ValidationError("invalid user id".to_string()))?;

		let tweet = Tweet::new(owner, content);
		tweets.add(&tweet).await?;
		Ok(tweet)
	}

	pub async fn update_tweet(
		actor_id: &str,
		tweet_id: &str,
		cmd: UpdateTweet,
		tweets: &dyn TweetRepository,
	) -> Result<Tweet, ServiceError> {
		let content = Self::_required_content(cmd.content)?;
		let target = Self::_owned_tweet(actor_id, tweet_id, tweets).await?;

		// Only content changes; id, owner and creation time stay as stored.
		tweets
			.update_content(target.id, &content)
			.await?
			.ok_or(ServiceError::EntityNotFound)
	}

	pub async fn delete_tweet(
		actor_id: &str,
		tweet_id: &str,
		tweets: &dyn TweetRepository,
	) -> Result<(), ServiceError> {
		let target = Self::_owned_tweet(actor_id, tweet_id, tweets).await?;

		// Deletion is terminal; a repeated delete reports the tweet as gone.
		if !tweets.delete(target.id).await? {
			return Err(ServiceError::EntityNotFound);
		}
		Ok(())
	}

	pub async fn get_user_tweets(
		owner_id: &str,
		viewer_id: Option<&str>,
		tweets: &dyn TweetRepository,
		users: &dyn UserDirectory,
		likes: &dyn LikeIndex,
	) -> Result<Vec<FeedEntry>, ServiceError> {
		let owner = canonical_id(owner_id)
			.ok_or_else(|| ServiceError::ValidationError("invalid user id".to_string()))?;

		let owned = tweets.list_by_owner(owner).await?;
		FeedAssembler::assemble(owned, viewer_id, users, likes).await
	}

	fn _required_content(content: Option<String>) -> Result<String, ServiceError> {
		match content {
			Some(content) if !content.is_empty() => Ok(content),
			_ => Err(ServiceError::ValidationError("content is required".to_string())),
		}
	}

	/// Existence is checked before ownership, and ownership on the
	/// canonical form of both identifiers. The stored owner reference is a
	/// string, the actor id comes from the auth layer; comparing them raw
	/// wrongly rejects legitimate owners.
	async fn _owned_tweet(
		actor_id: &str,
		tweet_id: &str,
		tweets: &dyn TweetRepository,
	) -> Result<Tweet, ServiceError> {
		let id = canonical_id(tweet_id)
			.ok_or_else(|| ServiceError::ValidationError("invalid tweet id".to_string()))?;

		let tweet = tweets.get(id).await?.ok_or(ServiceError::EntityNotFound)?;

		if !same_identity(&tweet.owner_id, actor_id) {
			return Err(ServiceError::OwnershipViolation);
		}
		Ok(tweet)
	}
}

#[cfg(test)]
mod test {
	use std::sync::Mutex;

	use async_trait::async_trait;
	use chrono::{Duration, TimeZone, Utc};
	use rand::Rng;
	use uuid::Uuid;

	use crate::adapters::repositories::{LikeIndex, TweetRepository, UserDirectory};
	use crate::domain::tweet::entity::{Like, Tweet, UserSummary};
	use crate::domain::tweet::schemas::{CreateTweet, UpdateTweet};
	use crate::services::handlers::TweetHandler;
	use crate::services::response::ServiceError;

	#[derive(Default)]
	struct FakeTweetRepository {
		rows: Mutex<Vec<Tweet>>,
	}

	impl FakeTweetRepository {
		fn seeded(rows: Vec<Tweet>) -> Self {
			Self { rows: Mutex::new(rows) }
		}

		fn snapshot(&self) -> Vec<Tweet> {
			self.rows.lock().unwrap().clone()
		}
	}

	#[async_trait]
	impl TweetRepository for FakeTweetRepository {
		async fn add(
			&self,
			tweet: &Tweet,
		) -> Result<(), ServiceError> {
			self.rows.lock().unwrap().push(tweet.clone());
			Ok(())
		}

		async fn get(
			&self,
			id: Uuid,
		) -> Result<Option<Tweet>, ServiceError> {
			Ok(self.rows.lock().unwrap().iter().find(|t| t.id == id).cloned())
		}

		async fn list_by_owner(
			&self,
			owner: Uuid,
		) -> Result<Vec<Tweet>, ServiceError> {
			let owner = owner.to_string();
			Ok(self
				.rows
				.lock()
				.unwrap()
				.iter()
				.filter(|t| t.owner_id == owner)
				.cloned()
				.collect())
		}

		async fn update_content(
			&self,
			id: Uuid,
			content: &str,
		) -> Result<Option<Tweet>, ServiceError> {
			let mut rows = self.rows.lock().unwrap();
			match rows.iter_mut().find(|t| t.id == id) {
				Some(row) => {
					row.content = content.to_string();
					Ok(Some(row.clone()))
				}
				None => Ok(None),
			}
		}

		async fn delete(
			&self,
			id: Uuid,
		) -> Result<bool, ServiceError> {
			let mut rows = self.rows.lock().unwrap();
			let count_before = rows.len();
			rows.retain(|t| t.id != id);
			Ok(rows.len() != count_before)
		}
	}

	#[derive(Default)]
	struct FakeLikeIndex {
		rows: Vec<Like>,
	}

	#[async_trait]
	impl LikeIndex for FakeLikeIndex {
		async fn find_by_tweet(
			&self,
			tweet_id: Uuid,
		) -> Result<Vec<Like>, ServiceError> {
			Ok(self.rows.iter().filter(|l| l.tweet_id == tweet_id).cloned().collect())
		}
	}

	#[derive(Default)]
	struct FakeUserDirectory {
		rows: Vec<(String, UserSummary)>,
	}

	#[async_trait]
	impl UserDirectory for FakeUserDirectory {
		async fn find_by_id(
			&self,
			user_id: &str,
		) -> Result<Vec<UserSummary>, ServiceError> {
			Ok(self
				.rows
				.iter()
				.filter(|(id, _)| id == user_id)
				.map(|(_, summary)| summary.clone())
				.collect())
		}
	}

	fn actor() -> String {
		Uuid::new_v4().to_string()
	}

	fn stored_tweet(
		owner_id: &str,
		content: &str,
		second: i64,
	) -> Tweet {
		Tweet {
			id: Uuid::new_v4(),
			owner_id: owner_id.to_string(),
			content: content.to_string(),
			create_dt: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap() + Duration::seconds(second),
		}
	}

	#[tokio::test]
	async fn test_create_tweet_then_listed_for_owner() {
		'_given: {
			let repo = FakeTweetRepository::default();
			let owner = actor();
			let content = format!("hello number {}", rand::thread_rng().gen::<u32>());

			'_when: {
				let created = TweetHandler::create_tweet(
					&owner,
					CreateTweet {
						content: Some(content.clone()),
					},
					&repo,
				)
				.await
				.unwrap();

				'_then: {
					assert_eq!(created.content, content);
					assert_eq!(created.owner_id, owner);

					let feed = TweetHandler::get_user_tweets(
						&owner,
						None,
						&repo,
						&FakeUserDirectory::default(),
						&FakeLikeIndex::default(),
					)
					.await
					.unwrap();
					assert_eq!(feed.len(), 1);
					assert_eq!(feed[0].content, content);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_create_tweet_requires_content() {
		'_given: {
			let repo = FakeTweetRepository::default();

			'_when: {
				let missing = TweetHandler::create_tweet(&actor(), CreateTweet { content: None }, &repo).await;
				let empty = TweetHandler::create_tweet(
					&actor(),
					CreateTweet {
						content: Some(String::new()),
					},
					&repo,
				)
				.await;

				'_then: {
					assert!(matches!(missing, Err(ServiceError::ValidationError(_))));
					assert!(matches!(empty, Err(ServiceError::ValidationError(_))));
					// nothing was persisted on either failure
					assert!(repo.snapshot().is_empty());
				}
			}
		}
	}

	#[tokio::test]
	async fn test_update_tweet_by_owner() {
		'_given: {
			let owner = actor();
			let stored = stored_tweet(&owner, "before", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);

			'_when: {
				let updated = TweetHandler::update_tweet(
					&owner,
					&stored.id.to_string(),
					UpdateTweet {
						content: Some("after".to_string()),
					},
					&repo,
				)
				.await
				.unwrap();

				'_then: {
					assert_eq!(updated.content, "after");
					assert_eq!(updated.id, stored.id);
					assert_eq!(updated.owner_id, stored.owner_id);
					assert_eq!(updated.create_dt, stored.create_dt);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_update_tweet_accepts_mixed_identifier_representations() {
		'_given: {
			let owner = Uuid::new_v4();
			let stored = stored_tweet(&owner.to_string(), "before", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);

			// same actor, reported by the auth layer in simple uppercase form
			let actor_id = owner.simple().to_string().to_uppercase();

			'_when: {
				let updated = TweetHandler::update_tweet(
					&actor_id,
					&stored.id.to_string(),
					UpdateTweet {
						content: Some("after".to_string()),
					},
					&repo,
				)
				.await;

				'_then: {
					assert_eq!(updated.unwrap().content, "after");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_update_tweet_by_non_owner_rejected() {
		'_given: {
			let stored = stored_tweet(&actor(), "untouched", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);

			'_when: {
				let result = TweetHandler::update_tweet(
					&actor(),
					&stored.id.to_string(),
					UpdateTweet {
						content: Some("hijacked".to_string()),
					},
					&repo,
				)
				.await;

				'_then: {
					assert!(matches!(result, Err(ServiceError::OwnershipViolation)));
					assert_eq!(repo.snapshot()[0].content, "untouched");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_update_tweet_unknown_or_malformed_id() {
		'_given: {
			let repo = FakeTweetRepository::default();
			let cmd = || UpdateTweet {
				content: Some("x".to_string()),
			};

			'_when: {
				let unknown = TweetHandler::update_tweet(&actor(), &Uuid::new_v4().to_string(), cmd(), &repo).await;
				let malformed = TweetHandler::update_tweet(&actor(), "not-a-tweet-id", cmd(), &repo).await;

				'_then: {
					assert!(matches!(unknown, Err(ServiceError::EntityNotFound)));
					assert!(matches!(malformed, Err(ServiceError::ValidationError(_))));
				}
			}
		}
	}

	#[tokio::test]
	async fn test_delete_tweet_twice_reports_not_found() {
		'_given: {
			let owner = actor();
			let stored = stored_tweet(&owner, "to be removed", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);
			let tweet_id = stored.id.to_string();

			'_when: {
				TweetHandler::delete_tweet(&owner, &tweet_id, &repo).await.unwrap();
				let second = TweetHandler::delete_tweet(&owner, &tweet_id, &repo).await;

				'_then: {
					assert!(repo.snapshot().is_empty());
					assert!(matches!(second, Err(ServiceError::EntityNotFound)));
				}
			}
		}
	}

	#[tokio::test]
	async fn test_delete_tweet_by_non_owner_rejected() {
		'_given: {
			let stored = stored_tweet(&actor(), "keep me", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);

			'_when: {
				let result = TweetHandler::delete_tweet(&actor(), &stored.id.to_string(), &repo).await;

				'_then: {
					assert!(matches!(result, Err(ServiceError::OwnershipViolation)));
					assert_eq!(repo.snapshot().len(), 1);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_orders_and_derives_like_fields() {
		'_given: {
			// owner posts "a" then "b"; the viewer liked "b" only
			let owner = actor();
			let viewer = actor();
			let tweet_a = stored_tweet(&owner, "a", 1);
			let tweet_b = stored_tweet(&owner, "b", 2);

			let repo = FakeTweetRepository::seeded(vec![tweet_a.clone(), tweet_b.clone()]);
			let likes = FakeLikeIndex {
				rows: vec![Like {
					tweet_id: tweet_b.id,
					liked_by: viewer.clone(),
				}],
			};
			let users = FakeUserDirectory {
				rows: vec![(
					owner.clone(),
					UserSummary {
						username: "migo".to_string(),
						avatar_url: Some("https://cdn.example.com/migo.png".to_string()),
					},
				)],
			};

			'_when: {
				let feed = TweetHandler::get_user_tweets(&owner, Some(&viewer), &repo, &users, &likes)
					.await
					.unwrap();

				'_then: {
					assert_eq!(feed.len(), 2);

					assert_eq!(feed[0].content, "b");
					assert_eq!(feed[0].likes_count, 1);
					assert!(feed[0].is_liked);

					assert_eq!(feed[1].content, "a");
					assert_eq!(feed[1].likes_count, 0);
					assert!(!feed[1].is_liked);

					assert_eq!(feed[0].owner_details.as_ref().unwrap().username, "migo");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_anonymous_viewer_never_liked() {
		'_given: {
			let owner = actor();
			let tweet = stored_tweet(&owner, "a", 0);
			let repo = FakeTweetRepository::seeded(vec![tweet.clone()]);
			let likes = FakeLikeIndex {
				rows: vec![Like {
					tweet_id: tweet.id,
					liked_by: actor(),
				}],
			};

			'_when: {
				let feed = TweetHandler::get_user_tweets(&owner, None, &repo, &FakeUserDirectory::default(), &likes)
					.await
					.unwrap();

				'_then: {
					assert_eq!(feed[0].likes_count, 1);
					assert!(!feed[0].is_liked);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_tie_keeps_insertion_order() {
		'_given: {
			let owner = actor();
			// identical timestamps; storage order is first, second, third
			let rows = vec![
				stored_tweet(&owner, "first", 0),
				stored_tweet(&owner, "second", 0),
				stored_tweet(&owner, "third", 0),
			];
			let repo = FakeTweetRepository::seeded(rows);

			'_when: {
				let feed = TweetHandler::get_user_tweets(
					&owner,
					None,
					&repo,
					&FakeUserDirectory::default(),
					&FakeLikeIndex::default(),
				)
				.await
				.unwrap();

				'_then: {
					let contents: Vec<&str> = feed.iter().map(|e| e.content.as_str()).collect();
					assert_eq!(contents, vec!["first", "second", "third"]);
				}
			}
		}
	}

	#[tokio::test]
	async fn test_update_tweet_requires_content() {
		'_given: {
			let owner = actor();
			let stored = stored_tweet(&owner, "untouched", 0);
			let repo = FakeTweetRepository::seeded(vec![stored.clone()]);

			'_when: {
				let missing =
					TweetHandler::update_tweet(&owner, &stored.id.to_string(), UpdateTweet { content: None }, &repo).await;
				let empty = TweetHandler::update_tweet(
					&owner,
					&stored.id.to_string(),
					UpdateTweet {
						content: Some(String::new()),
					},
					&repo,
				)
				.await;

				'_then: {
					assert!(matches!(missing, Err(ServiceError::ValidationError(_))));
					assert!(matches!(empty, Err(ServiceError::ValidationError(_))));
					assert_eq!(repo.snapshot()[0].content, "untouched");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_takes_first_directory_match() {
		'_given: {
			let owner = actor();
			let repo = FakeTweetRepository::seeded(vec![stored_tweet(&owner, "a", 0)]);
			// a directory anomaly: two records under the same identifier
			let users = FakeUserDirectory {
				rows: vec![
					(
						owner.clone(),
						UserSummary {
							username: "first-record".to_string(),
							avatar_url: None,
						},
					),
					(
						owner.clone(),
						UserSummary {
							username: "second-record".to_string(),
							avatar_url: None,
						},
					),
				],
			};

			'_when: {
				let feed = TweetHandler::get_user_tweets(&owner, None, &repo, &users, &FakeLikeIndex::default())
					.await
					.unwrap();

				'_then: {
					assert_eq!(feed[0].owner_details.as_ref().unwrap().username, "first-record");
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_owner_missing_from_directory() {
		'_given: {
			let owner = actor();
			let repo = FakeTweetRepository::seeded(vec![stored_tweet(&owner, "a", 0)]);

			'_when: {
				let feed = TweetHandler::get_user_tweets(
					&owner,
					None,
					&repo,
					&FakeUserDirectory::default(),
					&FakeLikeIndex::default(),
				)
				.await
				.unwrap();

				'_then: {
					assert_eq!(feed.len(), 1);
					assert!(feed[0].owner_details.is_none());
				}
			}
		}
	}

	#[tokio::test]
	async fn test_get_user_tweets_empty_and_invalid_owner() {
		'_given: {
			let repo = FakeTweetRepository::default();

			'_when: {
				let empty = TweetHandler::get_user_tweets(
					&actor(),
					None,
					&repo,
					&FakeUserDirectory::default(),
					&FakeLikeIndex::default(),
				)
				.await;
				let invalid = TweetHandler::get_user_tweets(
					"not-a-user-id",
					None,
					&repo,
					&FakeUserDirectory::default(),
					&FakeLikeIndex::default(),
				)
				.await;

				'_then: {
					assert!(empty.unwrap().is_empty());
					assert!(matches!(invalid, Err(ServiceError::ValidationError(_))));
				}
			}
		}
	}
}

//! Community board and museum of failure

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::domain::community::{seed_failures, seed_posts, MY_PEN_NAME};
use crate::domain::result::{Error, Result};
use crate::domain::{Comment, CommunityPost, FailurePost};

/// Tag given to posts the user writes
pub const DEFAULT_TAG: &str = "일상";

/// First id handed out to user content; seeds stay below it
const FIRST_USER_ID: u64 = 1_000;

#[derive(Debug, Clone)]
pub struct CommunityBoard {
    posts: Vec<CommunityPost>,
    expanded: Option<u64>,
    drafts: HashMap<u64, String>,
    next_id: u64,
}

impl CommunityBoard {
    /// Board with the seeded posts, timed relative to `now`
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            posts: seed_posts(now),
            expanded: None,
            drafts: HashMap::new(),
            next_id: FIRST_USER_ID,
        }
    }

    /// Newest first
    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn expanded(&self) -> Option<u64> {
        self.expanded
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn post_mut(&mut self, post_id: u64) -> Result<&mut CommunityPost> {
        self.posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| Error::not_found(format!("post {}", post_id)))
    }

    /// Publish a post under the user's pen name. Blank content is ignored.
    pub fn publish(&mut self, content: &str, now: DateTime<Utc>) -> Option<u64> {
        if content.trim().is_empty() {
            return None;
        }
        let id = self.next_id();
        self.posts.insert(
            0,
            CommunityPost {
                id,
                author: MY_PEN_NAME.to_string(),
                content: content.to_string(),
                likes: 0,
                comments: 0,
                tag: DEFAULT_TAG.to_string(),
                posted_at: now,
                is_liked: false,
                comments_list: Vec::new(),
            },
        );
        Some(id)
    }

    /// Like or unlike. Returns the new like state.
    pub fn toggle_like(&mut self, post_id: u64) -> Result<bool> {
        let post = self.post_mut(post_id)?;
        if post.is_liked {
            post.likes = post.likes.saturating_sub(1);
        } else {
            post.likes += 1;
        }
        post.is_liked = !post.is_liked;
        Ok(post.is_liked)
    }

    /// Expand a post's comments, collapsing any other. Expanding the
    /// already-open post collapses it.
    pub fn toggle_comments(&mut self, post_id: u64) {
        self.expanded = if self.expanded == Some(post_id) {
            None
        } else {
            Some(post_id)
        };
    }

    pub fn set_comment_draft(&mut self, post_id: u64, text: impl Into<String>) {
        self.drafts.insert(post_id, text.into());
    }

    pub fn comment_draft(&self, post_id: u64) -> &str {
        self.drafts.get(&post_id).map(String::as_str).unwrap_or("")
    }

    /// Submit the draft comment for a post.
    ///
    /// Blank drafts are ignored (`Ok(None)`). On success the draft is
    /// cleared and the comment count goes up by one.
    pub fn submit_comment(&mut self, post_id: u64, now: DateTime<Utc>) -> Result<Option<u64>> {
        let text = self.comment_draft(post_id).to_string();
        if text.trim().is_empty() {
            return Ok(None);
        }

        self.post_mut(post_id)?;
        let id = self.next_id();
        let post = self.post_mut(post_id)?;
        post.comments += 1;
        post.comments_list.push(Comment {
            id,
            author: MY_PEN_NAME.to_string(),
            text,
            posted_at: now,
        });
        self.drafts.insert(post_id, String::new());
        Ok(Some(id))
    }
}

#[derive(Debug, Clone)]
pub struct FailureMuseum {
    posts: Vec<FailurePost>,
    next_id: u64,
}

impl Default for FailureMuseum {
    fn default() -> Self {
        Self::new()
    }
}

impl FailureMuseum {
    pub fn new() -> Self {
        Self {
            posts: seed_failures(),
            next_id: FIRST_USER_ID,
        }
    }

    pub fn posts(&self) -> &[FailurePost] {
        &self.posts
    }

    /// Exhibit a failure. Blank content is ignored.
    pub fn exhibit(&mut self, content: &str) -> Option<u64> {
        if content.trim().is_empty() {
            return None;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.posts.insert(
            0,
            FailurePost {
                id,
                content: content.to_string(),
                cheers: 0,
                is_mine: true,
            },
        );
        Some(id)
    }

    pub fn cheer(&mut self, post_id: u64) -> Result<u32> {
        let post = self
            .posts
            .iter_mut()
            .find(|p| p.id == post_id)
            .ok_or_else(|| Error::not_found(format!("exhibit {}", post_id)))?;
        post.cheers += 1;
        Ok(post.cheers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_prepends() {
        let now = Utc::now();
        let mut board = CommunityBoard::new(now);
        assert_eq!(board.publish("   ", now), None);

        let id = board.publish("오늘 산책했어요", now).unwrap();
        let first = &board.posts()[0];
        assert_eq!(first.id, id);
        assert_eq!(first.author, MY_PEN_NAME);
        assert_eq!(first.tag, DEFAULT_TAG);
        assert_eq!(board.posts().len(), 4);
    }

    #[test]
    fn test_like_toggles() {
        let mut board = CommunityBoard::new(Utc::now());
        assert!(board.toggle_like(1).unwrap());
        assert_eq!(board.posts()[0].likes, 46);
        assert!(!board.toggle_like(1).unwrap());
        assert_eq!(board.posts()[0].likes, 45);
        assert!(board.toggle_like(99).is_err());
    }

    #[test]
    fn test_one_expanded_at_a_time() {
        let mut board = CommunityBoard::new(Utc::now());
        board.toggle_comments(1);
        board.toggle_comments(2);
        assert_eq!(board.expanded(), Some(2));
        board.toggle_comments(2);
        assert_eq!(board.expanded(), None);
    }

    #[test]
    fn test_submit_comment() {
        let now = Utc::now();
        let mut board = CommunityBoard::new(now);

        assert_eq!(board.submit_comment(3, now).unwrap(), None);

        board.set_comment_draft(3, "힘내요!");
        let id = board.submit_comment(3, now).unwrap().unwrap();
        let post = board.posts().iter().find(|p| p.id == 3).unwrap();
        assert_eq!(post.comments, 1);
        assert_eq!(post.comments_list[0].id, id);
        assert_eq!(board.comment_draft(3), "");
    }

    #[test]
    fn test_museum() {
        let mut museum = FailureMuseum::new();
        assert_eq!(museum.exhibit(""), None);

        let id = museum.exhibit("늦잠 잤어요").unwrap();
        assert!(museum.posts()[0].is_mine);
        assert_eq!(museum.cheer(id).unwrap(), 1);
        assert_eq!(museum.cheer(2).unwrap(), 25);
    }
}

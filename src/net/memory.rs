//! In-memory [`DataClient`] for exercising interaction flows in tests.
//!
//! Mirrors the backend's observable behavior: server-assigned ids and
//! timestamps, scope ordering, and like-pair uniqueness. Every call is
//! recorded so tests can assert that a flow made no network call at all.

use std::cell::{Cell, RefCell};

use async_trait::async_trait;

use super::client::DataClient;
use super::error::BackendError;
use super::types::{Comment, CommentScope, Like, NewComment, NewLike, NewPost, Post, Profile};

#[derive(Default)]
pub struct MemoryStore {
    pub posts: RefCell<Vec<Post>>,
    pub comments: RefCell<Vec<Comment>>,
    pub likes: RefCell<Vec<Like>>,
    pub profiles: RefCell<Vec<Profile>>,
    /// Every operation name in call order.
    pub calls: RefCell<Vec<String>>,
    /// When set, every mutation fails with a 500.
    pub fail_writes: Cell<bool>,
    next_id: Cell<u64>,
    clock: Cell<u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// Insert a comment row directly with an explicit timestamp.
    pub fn seed_comment(&self, id: &str, content: &str, created_at: &str, post_id: Option<&str>) {
        self.comments.borrow_mut().push(Comment {
            id: id.to_owned(),
            content: content.to_owned(),
            created_at: created_at.to_owned(),
            user_id: "seed".to_owned(),
            post_id: post_id.map(str::to_owned),
        });
    }

    fn record(&self, op: &str) {
        self.calls.borrow_mut().push(op.to_owned());
    }

    fn check_write(&self) -> Result<(), BackendError> {
        if self.fail_writes.get() {
            return Err(BackendError::Status { status: 500, message: "write failed".to_owned() });
        }
        Ok(())
    }

    fn next_id(&self, prefix: &str) -> String {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        format!("{prefix}{id}")
    }

    /// Monotonic timestamps one second apart, starting 2024-01-01.
    fn now(&self) -> String {
        let tick = self.clock.get() + 1;
        self.clock.set(tick);
        format!("2024-01-01T00:{:02}:{:02}Z", tick / 60, tick % 60)
    }
}

#[async_trait(?Send)]
impl DataClient for MemoryStore {
    async fn list_posts(&self) -> Result<Vec<Post>, BackendError> {
        self.record("list_posts");
        let mut posts = self.posts.borrow().clone();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn fetch_post(&self, post_id: &str) -> Result<Option<Post>, BackendError> {
        self.record("fetch_post");
        Ok(self.posts.borrow().iter().find(|p| p.id == post_id).cloned())
    }

    async fn insert_post(&self, post: &NewPost) -> Result<Post, BackendError> {
        self.record("insert_post");
        self.check_write()?;
        let row = Post {
            id: self.next_id("post-"),
            title: post.title.clone(),
            content: post.content.clone(),
            image_url: post.image_url.clone(),
            created_at: self.now(),
            user_id: post.user_id.clone(),
        };
        self.posts.borrow_mut().push(row.clone());
        Ok(row)
    }

    async fn list_comments(&self, scope: &CommentScope) -> Result<Vec<Comment>, BackendError> {
        self.record("list_comments");
        let mut rows: Vec<Comment> = self
            .comments
            .borrow()
            .iter()
            .filter(|c| match scope {
                CommentScope::Global => true,
                CommentScope::Post(id) => c.post_id.as_deref() == Some(id.as_str()),
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        if !scope.ascending() {
            rows.reverse();
        }
        Ok(rows)
    }

    async fn count_comments(&self, post_id: &str) -> Result<u64, BackendError> {
        self.record("count_comments");
        let count = self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.post_id.as_deref() == Some(post_id))
            .count();
        Ok(count as u64)
    }

    async fn insert_comment(&self, comment: &NewComment) -> Result<(), BackendError> {
        self.record("insert_comment");
        self.check_write()?;
        let row = Comment {
            id: self.next_id("comment-"),
            content: comment.content.clone(),
            created_at: self.now(),
            user_id: comment.user_id.clone(),
            post_id: comment.post_id.clone(),
        };
        self.comments.borrow_mut().push(row);
        Ok(())
    }

    async fn list_likes(&self, post_id: &str) -> Result<Vec<Like>, BackendError> {
        self.record("list_likes");
        Ok(self.likes.borrow().iter().filter(|l| l.post_id == post_id).cloned().collect())
    }

    async fn insert_like(&self, like: &NewLike) -> Result<(), BackendError> {
        self.record("insert_like");
        self.check_write()?;
        let duplicate = self
            .likes
            .borrow()
            .iter()
            .any(|l| l.post_id == like.post_id && l.user_id == like.user_id);
        if duplicate {
            return Err(BackendError::Status { status: 409, message: "duplicate key value".to_owned() });
        }
        let row = Like { id: self.next_id("like-"), post_id: like.post_id.clone(), user_id: like.user_id.clone() };
        self.likes.borrow_mut().push(row);
        Ok(())
    }

    async fn delete_like(&self, post_id: &str, user_id: &str) -> Result<(), BackendError> {
        self.record("delete_like");
        self.check_write()?;
        self.likes
            .borrow_mut()
            .retain(|l| !(l.post_id == post_id && l.user_id == user_id));
        Ok(())
    }

    async fn fetch_profile(&self, user_id: &str) -> Result<Option<Profile>, BackendError> {
        self.record("fetch_profile");
        Ok(self.profiles.borrow().iter().find(|p| p.id == user_id).cloned())
    }
}

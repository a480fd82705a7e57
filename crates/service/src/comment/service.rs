use std::sync::Arc;

use models::Comment;
use tracing::{debug, info, instrument};

use super::repository::CommentRepository;
use crate::errors::ServiceError;
use crate::validation::{require_arg, require_valid, require_valid_with_id};

/// Logic layer for comments.
///
/// Reads by parent or author hand back an empty list when nothing matches.
pub struct CommentService<R: CommentRepository> {
    repo: Arc<R>,
}

impl<R: CommentRepository> CommentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create a comment once author, parent and text are present.
    ///
    /// # Examples
    /// ```
    /// use service::comment::{CommentService, repository::memory::InMemoryCommentRepository};
    /// use models::Comment;
    /// use std::sync::Arc;
    /// let svc = CommentService::new(Arc::new(InMemoryCommentRepository::default()));
    /// let reply = Comment { author_id: "a1".into(), parent_id: "item-9".into(), value: "+1".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create_new_comment(reply)).unwrap().unwrap();
    /// let thread = tokio_test::block_on(svc.get_comments_by_parent("item-9")).unwrap();
    /// assert_eq!(thread, vec![created]);
    /// ```
    #[instrument(skip(self, comment), fields(parent_id = %comment.parent_id, author_id = %comment.author_id))]
    pub async fn create_new_comment(&self, comment: Comment) -> Result<Option<Comment>, ServiceError> {
        require_valid(&comment)?;
        let id = self.repo.create_comment(&comment).await?;
        info!(comment_id = %id, "comment_created");
        self.repo.get_by_id(&id).await
    }

    #[instrument(skip(self))]
    pub async fn get_comment_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError> {
        require_arg("id", id, "The identity value must contain a value")?;
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_comments_by_parent(&self, parent_id: &str) -> Result<Vec<Comment>, ServiceError> {
        require_arg("parentId", parent_id, "The parent identity value must be supplied")?;
        self.repo.get_by_parent(parent_id).await
    }

    #[instrument(skip(self))]
    pub async fn get_comments_by_author(&self, author_id: &str) -> Result<Vec<Comment>, ServiceError> {
        require_arg("authorId", author_id, "The author identity must be provided")?;
        self.repo.get_by_author(author_id).await
    }

    /// Comments whose votes are at least `min_votes`; any threshold is accepted.
    #[instrument(skip(self))]
    pub async fn get_comments_by_votes(&self, min_votes: i32) -> Result<Vec<Comment>, ServiceError> {
        self.repo.get_by_min_votes(min_votes).await
    }

    #[instrument(skip(self, comment), fields(comment_id = %comment.id))]
    pub async fn update_comment(&self, comment: Comment) -> Result<Option<Comment>, ServiceError> {
        require_valid_with_id(&comment, &comment.id, "The comment identity must be provided")?;
        let id = self.repo.update(&comment).await?;
        info!(comment_id = %id, "comment_updated");
        self.repo.get_by_id(&id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: &str) -> Result<(), ServiceError> {
        require_arg("id", id, "The identity value must contain a value")?;
        self.repo.delete(id).await?;
        debug!(comment_id = %id, "comment_deleted");
        Ok(())
    }
}

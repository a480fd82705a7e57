use async_trait::async_trait;
use models::Comment;

use crate::errors::ServiceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn create_comment(&self, comment: &Comment) -> Result<String, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError>;
    async fn get_by_parent(&self, parent_id: &str) -> Result<Vec<Comment>, ServiceError>;
    async fn get_by_author(&self, author_id: &str) -> Result<Vec<Comment>, ServiceError>;
    /// Comments with at least `min_votes` votes.
    async fn get_by_min_votes(&self, min_votes: i32) -> Result<Vec<Comment>, ServiceError>;
    async fn update(&self, comment: &Comment) -> Result<String, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

pub mod memory {
    use super::*;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    #[derive(Default)]
    pub struct InMemoryCommentRepository {
        comments: RwLock<Vec<Comment>>,
    }

    impl InMemoryCommentRepository {
        async fn select(&self, keep: impl Fn(&Comment) -> bool) -> Vec<Comment> {
            self.comments.read().await.iter().filter(|c| keep(*c)).cloned().collect()
        }
    }

    #[async_trait]
    impl CommentRepository for InMemoryCommentRepository {
        async fn create_comment(&self, comment: &Comment) -> Result<String, ServiceError> {
            let id = Uuid::new_v4().to_string();
            self.comments.write().await.push(Comment { id: id.clone(), ..comment.clone() });
            Ok(id)
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Comment>, ServiceError> {
            Ok(self.comments.read().await.iter().find(|c| c.id == id).cloned())
        }

        async fn get_by_parent(&self, parent_id: &str) -> Result<Vec<Comment>, ServiceError> {
            Ok(self.select(|c| c.parent_id == parent_id).await)
        }

        async fn get_by_author(&self, author_id: &str) -> Result<Vec<Comment>, ServiceError> {
            Ok(self.select(|c| c.author_id == author_id).await)
        }

        async fn get_by_min_votes(&self, min_votes: i32) -> Result<Vec<Comment>, ServiceError> {
            Ok(self.select(|c| c.votes >= min_votes).await)
        }

        async fn update(&self, comment: &Comment) -> Result<String, ServiceError> {
            let mut comments = self.comments.write().await;
            let slot = comments
                .iter_mut()
                .find(|c| c.id == comment.id)
                .ok_or_else(|| ServiceError::Db(format!("no comment with id {}", comment.id)))?;
            *slot = comment.clone();
            Ok(comment.id.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), ServiceError> {
            self.comments.write().await.retain(|c| c.id != id);
            Ok(())
        }
    }
}

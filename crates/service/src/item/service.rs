use std::sync::Arc;

use models::Item;
use tracing::{debug, info, instrument};

use super::repository::ItemRepository;
use crate::errors::ServiceError;
use crate::validation::{require_arg, require_valid, require_valid_with_id};

/// Application service for items.
pub struct ItemService<R: ItemRepository> {
    repo: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Create an item once author, title and description are present.
    ///
    /// The first missing field (in that order) is the one reported.
    #[instrument(skip(self, item), fields(author = %item.author))]
    pub async fn create_item(&self, item: Item) -> Result<Option<Item>, ServiceError> {
        require_valid(&item)?;
        let id = self.repo.create_item(&item).await?;
        info!(item_id = %id, "item_created");
        self.repo.get_by_id(&id).await
    }

    pub async fn get_all_items(&self) -> Result<Vec<Item>, ServiceError> {
        self.repo.get_all().await
    }

    /// Items posted by `author_id`, or `None` when the author has posted nothing.
    ///
    /// # Examples
    /// ```
    /// use service::item::{ItemService, repository::memory::InMemoryItemRepository};
    /// use std::sync::Arc;
    /// let svc = ItemService::new(Arc::new(InMemoryItemRepository::default()));
    /// let found = tokio_test::block_on(svc.get_items_by_author("nobody")).unwrap();
    /// assert!(found.is_none());
    /// ```
    #[instrument(skip(self))]
    pub async fn get_items_by_author(&self, author_id: &str) -> Result<Option<Vec<Item>>, ServiceError> {
        require_arg("authorId", author_id, "The author identity must be provided")?;
        let items = self.repo.get_by_author(author_id).await?;
        if items.is_empty() {
            debug!("no items for author");
            return Ok(None);
        }
        Ok(Some(items))
    }

    #[instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError> {
        require_arg("id", id, "The identity value must be provided")?;
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn update_item(&self, item: Item) -> Result<Option<Item>, ServiceError> {
        require_valid_with_id(&item, &item.id, "The item identity must be provided")?;
        let id = self.repo.update(&item).await?;
        info!(item_id = %id, "item_updated");
        self.repo.get_by_id(&id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: &str) -> Result<(), ServiceError> {
        require_arg("id", id, "The identity must be a value")?;
        self.repo.delete(id).await?;
        debug!(item_id = %id, "item_deleted");
        Ok(())
    }
}

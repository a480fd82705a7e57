use async_trait::async_trait;
use models::Item;

use crate::errors::ServiceError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn create_item(&self, item: &Item) -> Result<String, ServiceError>;
    async fn get_all(&self) -> Result<Vec<Item>, ServiceError>;
    async fn get_by_author(&self, author: &str) -> Result<Vec<Item>, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError>;
    async fn update(&self, item: &Item) -> Result<String, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

pub mod memory {
    use super::*;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Keeps insertion order so listings are stable.
    #[derive(Default)]
    pub struct InMemoryItemRepository {
        items: RwLock<Vec<Item>>,
    }

    #[async_trait]
    impl ItemRepository for InMemoryItemRepository {
        async fn create_item(&self, item: &Item) -> Result<String, ServiceError> {
            let id = Uuid::new_v4().to_string();
            self.items.write().await.push(Item { id: id.clone(), ..item.clone() });
            Ok(id)
        }

        async fn get_all(&self) -> Result<Vec<Item>, ServiceError> {
            Ok(self.items.read().await.clone())
        }

        async fn get_by_author(&self, author: &str) -> Result<Vec<Item>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.iter().filter(|i| i.author == author).cloned().collect())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Item>, ServiceError> {
            let items = self.items.read().await;
            Ok(items.iter().find(|i| i.id == id).cloned())
        }

        async fn update(&self, item: &Item) -> Result<String, ServiceError> {
            let mut items = self.items.write().await;
            let slot = items
                .iter_mut()
                .find(|i| i.id == item.id)
                .ok_or_else(|| ServiceError::Db(format!("no item with id {}", item.id)))?;
            *slot = item.clone();
            Ok(item.id.clone())
        }

        async fn delete(&self, id: &str) -> Result<(), ServiceError> {
            self.items.write().await.retain(|i| i.id != id);
            Ok(())
        }
    }
}

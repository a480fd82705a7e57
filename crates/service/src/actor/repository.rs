use async_trait::async_trait;
use models::Actor;

use crate::errors::ServiceError;

/// Persistence contract for actors. Ids are assigned by the store.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ActorRepository: Send + Sync {
    /// Store a new actor and return its id.
    async fn create_user(&self, actor: &Actor) -> Result<String, ServiceError>;
    async fn get_by_id(&self, id: &str) -> Result<Option<Actor>, ServiceError>;
    async fn get_by_email(&self, email: &str) -> Result<Option<Actor>, ServiceError>;
    /// Overwrite the actor stored under `actor.id` and return that id.
    async fn update(&self, actor: &Actor) -> Result<String, ServiceError>;
    async fn delete(&self, id: &str) -> Result<(), ServiceError>;
}

/// Simple in-memory repository for tests and doc examples
pub mod memory {
    use super::*;
    use std::collections::HashMap;
    use tokio::sync::RwLock;
    use uuid::Uuid;

    /// Emails are stored trimmed and lower-cased, so reads may differ from what was written.
    #[derive(Default)]
    pub struct InMemoryActorRepository {
        actors: RwLock<HashMap<String, Actor>>, // key: id
    }

    fn normalize(actor: &Actor, id: String) -> Actor {
        Actor { id, email: actor.email.trim().to_lowercase(), ..actor.clone() }
    }

    #[async_trait]
    impl ActorRepository for InMemoryActorRepository {
        async fn create_user(&self, actor: &Actor) -> Result<String, ServiceError> {
            let id = Uuid::new_v4().to_string();
            let mut actors = self.actors.write().await;
            if actors.values().any(|a| a.email == actor.email.trim().to_lowercase()) {
                return Err(ServiceError::Db(format!("email {} already registered", actor.email)));
            }
            actors.insert(id.clone(), normalize(actor, id.clone()));
            Ok(id)
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Actor>, ServiceError> {
            Ok(self.actors.read().await.get(id).cloned())
        }

        async fn get_by_email(&self, email: &str) -> Result<Option<Actor>, ServiceError> {
            let wanted = email.trim().to_lowercase();
            Ok(self.actors.read().await.values().find(|a| a.email == wanted).cloned())
        }

        async fn update(&self, actor: &Actor) -> Result<String, ServiceError> {
            let mut actors = self.actors.write().await;
            match actors.get_mut(&actor.id) {
                Some(slot) => {
                    *slot = normalize(actor, actor.id.clone());
                    Ok(actor.id.clone())
                }
                None => Err(ServiceError::Db(format!("no actor with id {}", actor.id))),
            }
        }

        async fn delete(&self, id: &str) -> Result<(), ServiceError> {
            self.actors.write().await.remove(id);
            Ok(())
        }
    }
}

use std::sync::Arc;

use models::Actor;
use tracing::{debug, info, instrument};

use super::repository::ActorRepository;
use crate::errors::ServiceError;
use crate::validation::{require_arg, require_valid, require_valid_with_id};

/// Logic layer for actor endpoints.
pub struct ActorService<R: ActorRepository> {
    repo: Arc<R>,
}

impl<R: ActorRepository> ActorService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Register a new actor and return it as the repository now holds it.
    ///
    /// # Examples
    /// ```
    /// use service::actor::{ActorService, repository::memory::InMemoryActorRepository};
    /// use models::Actor;
    /// use std::sync::Arc;
    /// let svc = ActorService::new(Arc::new(InMemoryActorRepository::default()));
    /// let actor = Actor { email: "Neo@Example.com".into(), alias: "Neo".into(), ..Default::default() };
    /// let created = tokio_test::block_on(svc.create_new_user(actor)).unwrap().unwrap();
    /// assert_eq!(created.email, "neo@example.com");
    /// assert!(!created.id.is_empty());
    /// ```
    #[instrument(skip(self, actor), fields(email = %actor.email))]
    pub async fn create_new_user(&self, actor: Actor) -> Result<Option<Actor>, ServiceError> {
        require_valid(&actor)?;
        let id = self.repo.create_user(&actor).await?;
        info!(actor_id = %id, "actor_created");
        self.repo.get_by_id(&id).await
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_id(&self, id: &str) -> Result<Option<Actor>, ServiceError> {
        require_arg("id", id, "The identity must be provided")?;
        self.repo.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<Actor>, ServiceError> {
        require_arg("email", email, "Email must be specified")?;
        self.repo.get_by_email(email).await
    }

    /// Replace an existing actor's values; `actor.id` selects the record.
    #[instrument(skip(self, actor), fields(actor_id = %actor.id))]
    pub async fn update_user(&self, actor: Actor) -> Result<Option<Actor>, ServiceError> {
        require_valid_with_id(&actor, &actor.id, "The identity was missing from the actor and is required for updates")?;
        let id = self.repo.update(&actor).await?;
        info!(actor_id = %id, "actor_updated");
        self.repo.get_by_id(&id).await
    }

    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: &str) -> Result<(), ServiceError> {
        require_arg("id", id, "The identity value must be provided")?;
        self.repo.delete(id).await?;
        debug!(actor_id = %id, "actor_deleted");
        Ok(())
    }
}

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    NewTopicData, TopicRecord, TopicRepository, TopicRepositoryError,
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as TopicActiveModel, Entity as TopicEntity, Model as TopicModel};

#[derive(Debug, Clone)]
pub struct TopicRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_update_err(e: DbErr) -> TopicRepositoryError {
    match e {
        DbErr::RecordNotUpdated => TopicRepositoryError::TopicNotFound,
        other => TopicRepositoryError::DatabaseError(other.to_string()),
    }
}

#[async_trait]
impl TopicRepository for TopicRepositoryPostgres {
    async fn insert_topic(&self, data: NewTopicData) -> Result<TopicRecord, TopicRepositoryError> {
        // `id` and `created_at` stay unset so the database fills them in.
        let active = TopicActiveModel {
            title: Set(data.title),
            description: Set(data.description),
            category: Set(data.category),
            ..Default::default()
        };

        let inserted: TopicModel = active
            .insert(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn update_topic(
        &self,
        topic_id: i32,
        data: NewTopicData,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(topic_id),
            title: Set(data.title),
            description: Set(data.description),
            category: Set(data.category),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_update_err)?;

        Ok(updated.to_record())
    }

    async fn delete_topic(&self, topic_id: i32) -> Result<bool, TopicRepositoryError> {
        let result = TopicEntity::delete_by_id(topic_id)
            .exec(&*self.db)
            .await
            .map_err(|e| TopicRepositoryError::DatabaseError(e.to_string()))?;

        Ok(result.rows_affected > 0)
    }

    async fn save_suggestions(
        &self,
        topic_id: i32,
        suggestions: String,
    ) -> Result<TopicRecord, TopicRepositoryError> {
        let active = TopicActiveModel {
            id: Set(topic_id),
            ai_suggestions: Set(Some(suggestions)),
            ..Default::default()
        };

        let updated = active.update(&*self.db).await.map_err(map_update_err)?;

        Ok(updated.to_record())
    }
}

// src/modules/topic/adapter/outgoing/topic_query_postgres.rs

use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect,
};
use std::sync::Arc;

use crate::modules::topic::application::ports::outgoing::{
    PageRequest, PageResult, TopicListFilter, TopicQuery, TopicQueryError, TopicRecord,
};

// SeaORM entity
use super::sea_orm_entity::{Column as TopicColumn, Entity as TopicEntity, Model as TopicModel};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Debug, Clone)]
pub struct TopicQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl TopicQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TopicQuery for TopicQueryPostgres {
    async fn list(
        &self,
        filter: TopicListFilter,
        page: PageRequest,
    ) -> Result<PageResult<TopicRecord>, TopicQueryError> {
        let mut query = TopicEntity::find();

        if let Some(ref category) = filter.category {
            query = query.filter(TopicColumn::Category.eq(category));
        }

        // Newest first; id breaks ties between equal timestamps
        query = query
            .order_by_desc(TopicColumn::CreatedAt)
            .order_by_desc(TopicColumn::Id);

        let total = query.clone().count(&*self.db).await.map_err(map_db_err)?;

        let offset = (page.page.saturating_sub(1)) as u64 * page.page_size as u64;
        let models = query
            .offset(offset)
            .limit(page.page_size as u64)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        let items = models.iter().map(TopicModel::to_record).collect();

        Ok(PageResult::new(items, total, &page))
    }

    async fn get_by_id(&self, topic_id: i32) -> Result<Option<TopicRecord>, TopicQueryError> {
        let model = TopicEntity::find_by_id(topic_id)
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(|m| m.to_record()))
    }

    async fn newest(&self, limit: u64) -> Result<Vec<TopicRecord>, TopicQueryError> {
        let models = TopicEntity::find()
            .order_by_desc(TopicColumn::CreatedAt)
            .order_by_desc(TopicColumn::Id)
            .limit(limit)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.iter().map(TopicModel::to_record).collect())
    }

    async fn categories(&self) -> Result<Vec<String>, TopicQueryError> {
        let categories = TopicEntity::find()
            .select_only()
            .column(TopicColumn::Category)
            .distinct()
            .order_by_asc(TopicColumn::Category)
            .into_tuple::<String>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(categories)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn map_db_err(e: DbErr) -> TopicQueryError {
    TopicQueryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

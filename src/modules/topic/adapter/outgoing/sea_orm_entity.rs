use crate::modules::topic::application::ports::outgoing::TopicRecord;
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "blog_topics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub title: String,

    pub description: String,

    pub category: String,

    pub ai_suggestions: Option<String>,

    pub created_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> TopicRecord {
        TopicRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            ai_suggestions: self.ai_suggestions.clone(),
            created_at: self.created_at.into(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

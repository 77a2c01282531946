pub use sea_orm_migration::prelude::*;

mod m20260825_101500_create_table_blog_topics;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260825_101500_create_table_blog_topics::Migration)]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create blog_topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(BlogTopics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BlogTopics::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(BlogTopics::Title).string_len(100).not_null())
                    .col(ColumnDef::new(BlogTopics::Description).text().not_null())
                    .col(
                        ColumnDef::new(BlogTopics::Category)
                            .string_len(50)
                            .not_null(),
                    )
                    .col(ColumnDef::new(BlogTopics::AiSuggestions).text())
                    .col(
                        ColumnDef::new(BlogTopics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Newest-first listing
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_blog_topics_created_at
                ON blog_topics (created_at DESC, id DESC);
                "#,
            )
            .await?;

        // Category filter and distinct category scans
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_blog_topics_category
                ON blog_topics (category);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop indexes explicitly
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_blog_topics_created_at;
                DROP INDEX IF EXISTS idx_blog_topics_category;
                "#,
            )
            .await?;

        // Drop table
        manager
            .drop_table(Table::drop().table(BlogTopics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum BlogTopics {
    Table,
    Id,
    Title,
    Description,
    Category,
    AiSuggestions,
    CreatedAt,
}

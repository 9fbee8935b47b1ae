use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageEditHistory::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageEditHistory::Id))
                    .col(string_uniq(MessageEditHistory::MessageId))
                    .col(
                        timestamp(MessageEditHistory::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(MessageEditHistory::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MessageEditHistory::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageEditHistory {
    Table,
    Id,
    MessageId,
    CreatedAt,
    UpdatedAt,
}

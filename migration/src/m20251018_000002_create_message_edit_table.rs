use sea_orm_migration::{prelude::*, schema::*};

use super::m20251018_000001_create_message_edit_history_table::MessageEditHistory;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MessageEdit::Table)
                    .if_not_exists()
                    .col(pk_auto(MessageEdit::Id))
                    .col(integer(MessageEdit::HistoryId))
                    .col(text(MessageEdit::Content))
                    .col(timestamp(MessageEdit::EditedAt).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_message_edit_history_id")
                            .from(MessageEdit::Table, MessageEdit::HistoryId)
                            .to(MessageEditHistory::Table, MessageEditHistory::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Edits are always read back per history in id order
        manager
            .create_index(
                Index::create()
                    .name("idx_message_edit_history_id")
                    .table(MessageEdit::Table)
                    .col(MessageEdit::HistoryId)
                    .col(MessageEdit::Id)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_message_edit_history_id")
                    .table(MessageEdit::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MessageEdit::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MessageEdit {
    Table,
    Id,
    HistoryId,
    Content,
    EditedAt,
}

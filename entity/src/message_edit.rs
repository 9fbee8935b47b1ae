use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message_edit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub history_id: i32,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub edited_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::message_edit_history::Entity",
        from = "Column::HistoryId",
        to = "super::message_edit_history::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    MessageEditHistory,
}

impl Related<super::message_edit_history::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MessageEditHistory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

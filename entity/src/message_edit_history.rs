use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "message_edit_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub message_id: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::message_edit::Entity")]
    MessageEdit,
}

impl Related<super::message_edit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MessageEdit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

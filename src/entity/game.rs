//! Game entity. Every row belongs to exactly one user via `id_usuario`.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "videojuegos")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub id_usuario: i32,
    pub titulo: String,
    pub plataforma: String,
    pub genero: Option<String>,
    pub estado: String,
    /// Image reference, unused by core logic.
    pub imagen: Option<String>,
    pub fecha_creacion: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::IdUsuario",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

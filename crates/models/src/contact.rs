use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::prelude::*, DatabaseConnection, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "contacts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub is_read: bool,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert payload; id and creation timestamp are generated by the store.
#[derive(Clone, Debug)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().chars().count() < 3 {
        return Err(errors::ModelError::Validation("name must be at least 3 characters".into()));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<(), errors::ModelError> {
    let ok = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !ok {
        return Err(errors::ModelError::Validation("invalid email address".into()));
    }
    Ok(())
}

pub fn validate_message(message: &str) -> Result<(), errors::ModelError> {
    if message.trim().chars().count() < 10 {
        return Err(errors::ModelError::Validation("message must be at least 10 characters".into()));
    }
    Ok(())
}

pub async fn create(db: &DatabaseConnection, input: NewContact) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(input.name),
        email: Set(input.email),
        phone: Set(input.phone),
        message: Set(input.message),
        ip_address: Set(input.ip_address),
        user_agent: Set(input.user_agent),
        is_read: Set(false),
        created_at: Set(Utc::now().into()),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// All contacts, newest first.
pub async fn list(db: &DatabaseConnection) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find()
        .order_by_desc(Column::CreatedAt)
        .all(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Single-statement flag update; a missing id is a silent no-op.
pub async fn set_read(db: &DatabaseConnection, id: Uuid, is_read: bool) -> Result<(), errors::ModelError> {
    Entity::update_many()
        .col_expr(Column::IsRead, Expr::value(is_read))
        .filter(Column::Id.eq(id))
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

/// Hard delete; deleting an absent id is not an error.
pub async fn delete(db: &DatabaseConnection, id: Uuid) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}

pub async fn count(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find()
        .count(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn count_unread(db: &DatabaseConnection) -> Result<u64, errors::ModelError> {
    Entity::find()
        .filter(Column::IsRead.eq(false))
        .count(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))
}

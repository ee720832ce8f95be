use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::Set;
use sea_orm::entity::prelude::*;
use sea_orm::{QueryFilter, QueryOrder};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "feedbacks")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    pub user_id: i64,
    pub submission_id: Option<i64>,

    pub score: Option<i32>,
    #[sea_orm(column_type = "Text")]
    pub content: String,

    pub status: FeedbackStatus,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Review stage of a feedback record.
///
/// Binding from strings is case-insensitive and fails closed: anything other
/// than the four names below is rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum, Display, EnumString, Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "feedback_status")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FeedbackStatus {
    #[sea_orm(string_value = "pending")]
    Pending,

    #[sea_orm(string_value = "generated")]
    Generated,

    #[sea_orm(string_value = "reviewed")]
    Reviewed,

    #[sea_orm(string_value = "published")]
    Published,
}

impl FeedbackStatus {
    /// Whether a record in this status may be moved to `next`.
    ///
    /// `Published` is terminal. Staying in the same status is always allowed.
    pub fn can_transition_to(self, next: FeedbackStatus) -> bool {
        self == next || self != FeedbackStatus::Published
    }
}

impl TryFrom<String> for FeedbackStatus {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse::<FeedbackStatus>().map_err(|_| {
            format!(
                "unknown feedback status '{value}', expected one of: pending, generated, reviewed, published"
            )
        })
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub async fn create(
        db: &DbConn,
        user_id: i64,
        submission_id: Option<i64>,
        score: Option<i32>,
        content: &str,
        status: FeedbackStatus,
    ) -> Result<Model, DbErr> {
        let now = Utc::now();
        let active_model = ActiveModel {
            user_id: Set(user_id),
            submission_id: Set(submission_id),
            score: Set(score),
            content: Set(content.to_owned()),
            status: Set(status),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        active_model.insert(db).await
    }

    pub async fn find_by_id(db: &DbConn, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    pub async fn find_all(db: &DbConn) -> Result<Vec<Model>, DbErr> {
        Entity::find().order_by_asc(Column::Id).all(db).await
    }

    pub async fn find_by_user(db: &DbConn, user_id: i64) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn find_by_status(db: &DbConn, status: FeedbackStatus) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .filter(Column::Status.eq(status))
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    pub async fn set_status(db: &DbConn, id: i64, status: FeedbackStatus) -> Result<Model, DbErr> {
        let model = match Entity::find_by_id(id).one(db).await? {
            Some(m) => m,
            None => return Err(DbErr::RecordNotFound(format!("Feedback {id} not found"))),
        };

        let mut active_model: ActiveModel = model.into();
        active_model.status = Set(status);
        active_model.updated_at = Set(Utc::now());
        active_model.update(db).await
    }

    /// Deletes by id, returning whether a row was removed.
    pub async fn delete(db: &DbConn, id: i64) -> Result<bool, DbErr> {
        let res = Entity::delete_by_id(id).exec(db).await?;
        Ok(res.rows_affected > 0)
    }
}

use anyhow::Context as _;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, IntoActiveModel, QueryFilter, QueryOrder, Set, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use mentorlink_schema::{mentorship_requests, notifications, profiles, users};

use crate::domain::repository::{
    NotificationRepository, ProfileRepository, RequestRepository, UserRepository,
};
use crate::domain::types::{
    Decision, MentorshipRequest, Notification, NotificationKind, Profile, RequestStatus, Role,
    User, join_tags, split_tags,
};
use crate::error::ServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        Ok(model.map(user_from_model))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        Ok(model.map(user_from_model))
    }

    async fn create(&self, user: &User) -> Result<(), ServiceError> {
        let result = users::ActiveModel {
            id: Set(user.id),
            email: Set(user.email.clone()),
            password_hash: Set(user.password_hash.clone()),
            created_at: Set(user.created_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            // A register racing past the pre-read lands on the unique email
            // constraint; that is still a duplicate, not a storage fault.
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(ServiceError::EmailTaken)
            }
            Err(e) => Err(e).context("insert user").map_err(Into::into),
        }
    }
}

fn user_from_model(model: users::Model) -> User {
    User {
        id: model.id,
        email: model.email,
        password_hash: model.password_hash,
        created_at: model.created_at,
    }
}

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ServiceError> {
        let model = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .context("find profile by user")?;
        model.map(profile_from_model).transpose()
    }

    async fn upsert(&self, profile: &Profile) -> Result<(bool, Profile), ServiceError> {
        let existing = profiles::Entity::find()
            .filter(profiles::Column::UserId.eq(profile.user_id))
            .one(&self.db)
            .await
            .context("find profile for upsert")?;

        match existing {
            Some(row) => {
                let stored_id = row.id;
                let mut active = row.into_active_model();
                active.role = Set(profile.role.as_str().to_owned());
                active.name = Set(profile.name.clone());
                active.bio = Set(profile.bio.clone());
                active.skills = Set(join_tags(&profile.skills));
                active.interests = Set(join_tags(&profile.interests));
                active.update(&self.db).await.context("update profile")?;

                let mut stored = profile.clone();
                stored.id = stored_id;
                Ok((false, stored))
            }
            None => {
                profiles::ActiveModel {
                    id: Set(profile.id),
                    user_id: Set(profile.user_id),
                    role: Set(profile.role.as_str().to_owned()),
                    name: Set(profile.name.clone()),
                    bio: Set(profile.bio.clone()),
                    skills: Set(join_tags(&profile.skills)),
                    interests: Set(join_tags(&profile.interests)),
                }
                .insert(&self.db)
                .await
                .context("insert profile")?;
                Ok((true, profile.clone()))
            }
        }
    }

    async fn list_by_role_excluding(
        &self,
        role: Role,
        user_id: Uuid,
    ) -> Result<Vec<Profile>, ServiceError> {
        let models = profiles::Entity::find()
            .filter(profiles::Column::Role.eq(role.as_str()))
            .filter(profiles::Column::UserId.ne(user_id))
            .all(&self.db)
            .await
            .context("list profiles by role")?;
        models.into_iter().map(profile_from_model).collect()
    }
}

fn profile_from_model(model: profiles::Model) -> Result<Profile, ServiceError> {
    let role = Role::parse(&model.role)
        .with_context(|| format!("unknown role in profiles row: {}", model.role))?;
    Ok(Profile {
        id: model.id,
        user_id: model.user_id,
        role,
        name: model.name,
        bio: model.bio,
        skills: split_tags(&model.skills),
        interests: split_tags(&model.interests),
    })
}

// ── Request lifecycle repository ─────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRequestRepository {
    pub db: DatabaseConnection,
}

impl RequestRepository for DbRequestRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MentorshipRequest>, ServiceError> {
        let model = mentorship_requests::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find mentorship request")?;
        model.map(request_from_model).transpose()
    }

    async fn list_accepted_for(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MentorshipRequest>, ServiceError> {
        let models = mentorship_requests::Entity::find()
            .filter(mentorship_requests::Column::Status.eq(RequestStatus::Accepted.as_str()))
            .filter(
                Condition::any()
                    .add(mentorship_requests::Column::MentorId.eq(user_id))
                    .add(mentorship_requests::Column::MenteeId.eq(user_id)),
            )
            .all(&self.db)
            .await
            .context("list accepted requests")?;
        models.into_iter().map(request_from_model).collect()
    }

    async fn create(
        &self,
        request: &MentorshipRequest,
        notification: &Notification,
    ) -> Result<(), ServiceError> {
        self.db
            .transaction::<_, (), DbErr>(|txn| {
                let request = request.clone();
                let notification = notification.clone();
                Box::pin(async move {
                    mentorship_requests::ActiveModel {
                        id: Set(request.id),
                        mentor_id: Set(request.mentor_id),
                        mentee_id: Set(request.mentee_id),
                        status: Set(request.status.as_str().to_owned()),
                        created_at: Set(request.created_at),
                    }
                    .insert(txn)
                    .await?;

                    insert_notification(txn, &notification).await
                })
            })
            .await
            .context("create mentorship request")?;
        Ok(())
    }

    async fn decide(
        &self,
        request_id: Uuid,
        mentor_id: Uuid,
        decision: Decision,
        notification: &Notification,
    ) -> Result<bool, ServiceError> {
        let applied = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                let notification = notification.clone();
                Box::pin(async move {
                    // Conditional-update-as-authorization: the mentor identity
                    // and the pending state are part of the WHERE clause, so a
                    // concurrent decision makes this match zero rows.
                    let result = mentorship_requests::Entity::update_many()
                        .filter(mentorship_requests::Column::Id.eq(request_id))
                        .filter(mentorship_requests::Column::MentorId.eq(mentor_id))
                        .filter(
                            mentorship_requests::Column::Status
                                .eq(RequestStatus::Pending.as_str()),
                        )
                        .col_expr(
                            mentorship_requests::Column::Status,
                            Expr::value(decision.target_status().as_str()),
                        )
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }

                    insert_notification(txn, &notification).await?;

                    // Retract the originating request notification; deleted,
                    // not marked read, so no stale "pending" entry survives.
                    notifications::Entity::delete_many()
                        .filter(notifications::Column::RequestId.eq(request_id))
                        .filter(notifications::Column::UserId.eq(mentor_id))
                        .filter(
                            notifications::Column::Kind.eq(NotificationKind::Request.as_str()),
                        )
                        .exec(txn)
                        .await?;

                    Ok(true)
                })
            })
            .await
            .context("decide mentorship request")?;
        Ok(applied)
    }

    async fn end(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        notification: &Notification,
    ) -> Result<bool, ServiceError> {
        let applied = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                let notification = notification.clone();
                Box::pin(async move {
                    let result = mentorship_requests::Entity::update_many()
                        .filter(mentorship_requests::Column::Id.eq(request_id))
                        .filter(
                            Condition::any()
                                .add(mentorship_requests::Column::MentorId.eq(actor_id))
                                .add(mentorship_requests::Column::MenteeId.eq(actor_id)),
                        )
                        .filter(
                            mentorship_requests::Column::Status
                                .eq(RequestStatus::Accepted.as_str()),
                        )
                        .col_expr(
                            mentorship_requests::Column::Status,
                            Expr::value(RequestStatus::Ended.as_str()),
                        )
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }

                    insert_notification(txn, &notification).await?;
                    Ok(true)
                })
            })
            .await
            .context("end mentorship request")?;
        Ok(applied)
    }
}

async fn insert_notification(
    txn: &DatabaseTransaction,
    notification: &Notification,
) -> Result<(), DbErr> {
    notifications::ActiveModel {
        id: Set(notification.id),
        user_id: Set(notification.user_id),
        request_id: Set(notification.request_id),
        message: Set(notification.message.clone()),
        kind: Set(notification.kind.as_str().to_owned()),
        read: Set(notification.read),
        created_at: Set(notification.created_at),
    }
    .insert(txn)
    .await?;
    Ok(())
}

fn request_from_model(model: mentorship_requests::Model) -> Result<MentorshipRequest, ServiceError> {
    let status = RequestStatus::parse(&model.status)
        .with_context(|| format!("unknown status in mentorship_requests row: {}", model.status))?;
    Ok(MentorshipRequest {
        id: model.id,
        mentor_id: model.mentor_id,
        mentee_id: model.mentee_id,
        status,
        created_at: model.created_at,
    })
}

// ── Notification repository ──────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbNotificationRepository {
    pub db: DatabaseConnection,
}

impl NotificationRepository for DbNotificationRepository {
    async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>, ServiceError> {
        let models = notifications::Entity::find()
            .filter(notifications::Column::UserId.eq(user_id))
            .filter(notifications::Column::Read.eq(false))
            .order_by_desc(notifications::Column::CreatedAt)
            .all(&self.db)
            .await
            .context("list unread notifications")?;
        models.into_iter().map(notification_from_model).collect()
    }

    async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
        // The owner guard lives in the WHERE clause; zero affected rows is
        // the documented silent no-op.
        notifications::Entity::update_many()
            .filter(notifications::Column::Id.eq(notification_id))
            .filter(notifications::Column::UserId.eq(user_id))
            .col_expr(notifications::Column::Read, Expr::value(true))
            .exec(&self.db)
            .await
            .context("mark notification read")?;
        Ok(())
    }
}

fn notification_from_model(model: notifications::Model) -> Result<Notification, ServiceError> {
    let kind = NotificationKind::parse(&model.kind)
        .with_context(|| format!("unknown kind in notifications row: {}", model.kind))?;
    Ok(Notification {
        id: model.id,
        user_id: model.user_id,
        request_id: model.request_id,
        message: model.message,
        kind,
        read: model.read,
        created_at: model.created_at,
    })
}

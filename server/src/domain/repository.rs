#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::{Decision, MentorshipRequest, Notification, Profile, Role, User};
use crate::error::ServiceError;

/// Repository for accounts.
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError>;
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError>;

    /// Insert the account. Email is unique at the storage level; a duplicate
    /// surfaces as [`ServiceError::EmailTaken`] even when it slipped past a
    /// prior `find_by_email`.
    async fn create(&self, user: &User) -> Result<(), ServiceError>;
}

/// Repository for mentor/mentee profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ServiceError>;

    /// Upsert: create if absent, else overwrite every field while keeping the
    /// existing row id. Returns `true` plus the stored profile when a new row
    /// was created.
    async fn upsert(&self, profile: &Profile) -> Result<(bool, Profile), ServiceError>;

    /// All profiles with `role`, excluding `user_id`.
    async fn list_by_role_excluding(
        &self,
        role: Role,
        user_id: Uuid,
    ) -> Result<Vec<Profile>, ServiceError>;
}

/// Repository owning the mentorship-request lifecycle. Each mutating method
/// runs its status update and notification side effects as one transaction.
pub trait RequestRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MentorshipRequest>, ServiceError>;

    /// Accepted requests where `user_id` is mentor or mentee.
    async fn list_accepted_for(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MentorshipRequest>, ServiceError>;

    /// Insert the pending request and the originating notification for the
    /// mentor atomically.
    async fn create(
        &self,
        request: &MentorshipRequest,
        notification: &Notification,
    ) -> Result<(), ServiceError>;

    /// Accept or decline. The update is guarded on
    /// `id AND mentor_id AND status = 'pending'`; on match the mentee
    /// notification is inserted and the originating `request`-kind
    /// notification addressed to the mentor is deleted, all in one
    /// transaction. Returns `false` when the guard matched no row.
    async fn decide(
        &self,
        request_id: Uuid,
        mentor_id: Uuid,
        decision: Decision,
        notification: &Notification,
    ) -> Result<bool, ServiceError>;

    /// End an accepted pair. Guarded on
    /// `id AND (mentor_id OR mentee_id) AND status = 'accepted'`; on match the
    /// counterpart notification is inserted in the same transaction. Returns
    /// `false` when the guard matched no row.
    async fn end(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        notification: &Notification,
    ) -> Result<bool, ServiceError>;
}

/// Repository for the pull-based notification feed.
pub trait NotificationRepository: Send + Sync {
    /// Unread notifications for `user_id`, newest first.
    async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>, ServiceError>;

    /// Mark a notification read where it belongs to `user_id`; silent no-op
    /// otherwise.
    async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> Result<(), ServiceError>;
}

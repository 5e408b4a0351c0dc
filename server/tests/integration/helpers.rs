use std::sync::{Arc, Mutex};

use chrono::Utc;
use uuid::Uuid;

use mentorlink_server::domain::repository::{
    NotificationRepository, ProfileRepository, RequestRepository, UserRepository,
};
use mentorlink_server::domain::types::{
    Decision, MentorshipRequest, Notification, NotificationKind, Profile, RequestStatus, Role,
    User,
};
use mentorlink_server::error::ServiceError;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Shared in-memory tables. Every mock repo clones handles to these, so a
/// test can drive several usecases against one consistent store the way the
/// real repos share one database.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    pub users: Arc<Mutex<Vec<User>>>,
    pub profiles: Arc<Mutex<Vec<Profile>>>,
    pub requests: Arc<Mutex<Vec<MentorshipRequest>>>,
    pub notifications: Arc<Mutex<Vec<Notification>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user_repo(&self) -> MockUserRepo {
        MockUserRepo {
            store: self.clone(),
        }
    }

    pub fn profile_repo(&self) -> MockProfileRepo {
        MockProfileRepo {
            store: self.clone(),
        }
    }

    pub fn request_repo(&self) -> MockRequestRepo {
        MockRequestRepo {
            store: self.clone(),
        }
    }

    pub fn notification_repo(&self) -> MockNotificationRepo {
        MockNotificationRepo {
            store: self.clone(),
        }
    }

    /// Seed a user row, returning its id.
    pub fn seed_user(&self, email: &str) -> Uuid {
        let user = User {
            id: Uuid::now_v7(),
            email: email.to_owned(),
            password_hash: "unused".to_owned(),
            created_at: Utc::now(),
        };
        let id = user.id;
        self.users.lock().unwrap().push(user);
        id
    }

    /// Seed a profile for `user_id`, returning it.
    pub fn seed_profile(&self, user_id: Uuid, role: Role, name: &str) -> Profile {
        let profile = Profile {
            id: Uuid::now_v7(),
            user_id,
            role,
            name: name.to_owned(),
            bio: format!("{name} bio"),
            skills: vec!["rust".to_owned()],
            interests: vec!["mentoring".to_owned()],
        };
        self.profiles.lock().unwrap().push(profile.clone());
        profile
    }

    pub fn request_status(&self, request_id: Uuid) -> Option<RequestStatus> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == request_id)
            .map(|r| r.status)
    }
}

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    store: InMemoryStore,
}

impl UserRepository for MockUserRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, ServiceError> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ServiceError> {
        Ok(self
            .store
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<(), ServiceError> {
        let mut users = self.store.users.lock().unwrap();
        // Unique email, enforced at insert like the storage layer.
        if users.iter().any(|u| u.email == user.email) {
            return Err(ServiceError::EmailTaken);
        }
        users.push(user.clone());
        Ok(())
    }
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

pub struct MockProfileRepo {
    store: InMemoryStore,
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<Profile>, ServiceError> {
        Ok(self
            .store
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id == user_id)
            .cloned())
    }

    async fn upsert(&self, profile: &Profile) -> Result<(bool, Profile), ServiceError> {
        let mut profiles = self.store.profiles.lock().unwrap();
        match profiles.iter_mut().find(|p| p.user_id == profile.user_id) {
            Some(existing) => {
                let stored_id = existing.id;
                *existing = Profile {
                    id: stored_id,
                    ..profile.clone()
                };
                Ok((false, existing.clone()))
            }
            None => {
                profiles.push(profile.clone());
                Ok((true, profile.clone()))
            }
        }
    }

    async fn list_by_role_excluding(
        &self,
        role: Role,
        user_id: Uuid,
    ) -> Result<Vec<Profile>, ServiceError> {
        Ok(self
            .store
            .profiles
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.role == role && p.user_id != user_id)
            .cloned()
            .collect())
    }
}

// ── MockRequestRepo ──────────────────────────────────────────────────────────

/// Mirrors the transactional contract of the database repository: the guard
/// and the notification side effects apply together or not at all.
pub struct MockRequestRepo {
    store: InMemoryStore,
}

impl RequestRepository for MockRequestRepo {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<MentorshipRequest>, ServiceError> {
        Ok(self
            .store
            .requests
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn list_accepted_for(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<MentorshipRequest>, ServiceError> {
        Ok(self
            .store
            .requests
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.status == RequestStatus::Accepted && r.is_party(user_id))
            .cloned()
            .collect())
    }

    async fn create(
        &self,
        request: &MentorshipRequest,
        notification: &Notification,
    ) -> Result<(), ServiceError> {
        self.store.requests.lock().unwrap().push(request.clone());
        self.store
            .notifications
            .lock()
            .unwrap()
            .push(notification.clone());
        Ok(())
    }

    async fn decide(
        &self,
        request_id: Uuid,
        mentor_id: Uuid,
        decision: Decision,
        notification: &Notification,
    ) -> Result<bool, ServiceError> {
        let mut requests = self.store.requests.lock().unwrap();
        let Some(request) = requests.iter_mut().find(|r| {
            r.id == request_id && r.mentor_id == mentor_id && r.status == RequestStatus::Pending
        }) else {
            return Ok(false);
        };
        request.status = decision.target_status();
        drop(requests);

        let mut notifications = self.store.notifications.lock().unwrap();
        notifications.push(notification.clone());
        notifications.retain(|n| {
            !(n.request_id == Some(request_id)
                && n.user_id == mentor_id
                && n.kind == NotificationKind::Request)
        });
        Ok(true)
    }

    async fn end(
        &self,
        request_id: Uuid,
        actor_id: Uuid,
        notification: &Notification,
    ) -> Result<bool, ServiceError> {
        let mut requests = self.store.requests.lock().unwrap();
        let Some(request) = requests.iter_mut().find(|r| {
            r.id == request_id && r.is_party(actor_id) && r.status == RequestStatus::Accepted
        }) else {
            return Ok(false);
        };
        request.status = RequestStatus::Ended;
        drop(requests);

        self.store
            .notifications
            .lock()
            .unwrap()
            .push(notification.clone());
        Ok(true)
    }
}

// ── MockNotificationRepo ─────────────────────────────────────────────────────

pub struct MockNotificationRepo {
    store: InMemoryStore,
}

impl NotificationRepository for MockNotificationRepo {
    async fn list_unread(&self, user_id: Uuid) -> Result<Vec<Notification>, ServiceError> {
        let mut unread: Vec<Notification> = self
            .store
            .notifications
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id && !n.read)
            .cloned()
            .collect();
        unread.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(unread)
    }

    async fn mark_read(&self, notification_id: Uuid, user_id: Uuid) -> Result<(), ServiceError> {
        let mut notifications = self.store.notifications.lock().unwrap();
        if let Some(n) = notifications
            .iter_mut()
            .find(|n| n.id == notification_id && n.user_id == user_id)
        {
            n.read = true;
        }
        Ok(())
    }
}

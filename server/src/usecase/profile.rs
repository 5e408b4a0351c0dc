use uuid::Uuid;

use crate::domain::repository::{ProfileRepository, UserRepository};
use crate::domain::types::{Profile, Role};
use crate::error::ServiceError;

// ── UpsertProfile ────────────────────────────────────────────────────────────

pub struct UpsertProfileInput {
    pub role: String,
    pub name: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub interests: Vec<String>,
}

pub struct UpsertProfileOutput {
    /// `true` when a new profile row was created (HTTP 201), `false` on
    /// overwrite (HTTP 200).
    pub created: bool,
    pub profile: Profile,
}

pub struct UpsertProfileUseCase<P: ProfileRepository> {
    pub repo: P,
}

impl<P: ProfileRepository> UpsertProfileUseCase<P> {
    pub async fn execute(
        &self,
        user_id: Uuid,
        input: UpsertProfileInput,
    ) -> Result<UpsertProfileOutput, ServiceError> {
        let role = Role::parse(&input.role).ok_or(ServiceError::InvalidRole)?;
        let profile = Profile {
            id: Uuid::now_v7(),
            user_id,
            role,
            name: input.name,
            bio: input.bio,
            skills: input.skills,
            interests: input.interests,
        };
        let (created, profile) = self.repo.upsert(&profile).await?;
        Ok(UpsertProfileOutput { created, profile })
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct ProfileWithEmail {
    pub profile: Profile,
    pub email: String,
}

pub struct GetProfileUseCase<P: ProfileRepository, U: UserRepository> {
    pub profiles: P,
    pub users: U,
}

impl<P: ProfileRepository, U: UserRepository> GetProfileUseCase<P, U> {
    pub async fn execute(&self, user_id: Uuid) -> Result<ProfileWithEmail, ServiceError> {
        let profile = self
            .profiles
            .find_by_user(user_id)
            .await?
            .ok_or(ServiceError::ProfileNotFound)?;
        let email = self
            .users
            .find_by_id(user_id)
            .await?
            .map(|u| u.email)
            .unwrap_or_default();
        Ok(ProfileWithEmail { profile, email })
    }
}

// ── ListCounterparts ─────────────────────────────────────────────────────────

pub struct ListCounterpartsUseCase<P: ProfileRepository, U: UserRepository> {
    pub profiles: P,
    pub users: U,
}

impl<P: ProfileRepository, U: UserRepository> ListCounterpartsUseCase<P, U> {
    /// Profiles of the opposite role, excluding the caller. A caller without
    /// a profile gets an empty list.
    pub async fn execute(&self, user_id: Uuid) -> Result<Vec<ProfileWithEmail>, ServiceError> {
        let Some(own) = self.profiles.find_by_user(user_id).await? else {
            return Ok(Vec::new());
        };

        let counterparts = self
            .profiles
            .list_by_role_excluding(own.role.counterpart(), user_id)
            .await?;

        let mut results = Vec::with_capacity(counterparts.len());
        for profile in counterparts {
            let email = self
                .users
                .find_by_id(profile.user_id)
                .await?
                .map(|u| u.email)
                .unwrap_or_default();
            results.push(ProfileWithEmail { profile, email });
        }
        Ok(results)
    }
}

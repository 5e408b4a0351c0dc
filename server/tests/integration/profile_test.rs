use mentorlink_server::domain::types::Role;
use mentorlink_server::error::ServiceError;
use mentorlink_server::usecase::profile::{
    GetProfileUseCase, ListCounterpartsUseCase, UpsertProfileInput, UpsertProfileUseCase,
};

use crate::helpers::InMemoryStore;

fn upsert_input(role: &str, name: &str) -> UpsertProfileInput {
    UpsertProfileInput {
        role: role.to_owned(),
        name: name.to_owned(),
        bio: format!("{name} bio"),
        skills: vec!["rust".to_owned(), "sql".to_owned()],
        interests: vec!["mentoring".to_owned()],
    }
}

#[tokio::test]
async fn first_upsert_creates_then_second_overwrites_in_place() {
    let store = InMemoryStore::new();
    let user_id = store.seed_user("mentor@example.com");
    let upsert = UpsertProfileUseCase {
        repo: store.profile_repo(),
    };

    let first = upsert
        .execute(user_id, upsert_input("mentor", "Morgan"))
        .await
        .unwrap();
    assert!(first.created);

    let second = upsert
        .execute(user_id, upsert_input("mentee", "Morgan II"))
        .await
        .unwrap();
    assert!(!second.created);
    // The stored row keeps its original id across overwrites.
    assert_eq!(second.profile.id, first.profile.id);
    assert_eq!(second.profile.role, Role::Mentee);
    assert_eq!(second.profile.name, "Morgan II");

    assert_eq!(store.profiles.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn upsert_rejects_an_unknown_role() {
    let store = InMemoryStore::new();
    let user_id = store.seed_user("mentor@example.com");
    let upsert = UpsertProfileUseCase {
        repo: store.profile_repo(),
    };

    let result = upsert.execute(user_id, upsert_input("admin", "Morgan")).await;
    assert!(matches!(result, Err(ServiceError::InvalidRole)));
}

#[tokio::test]
async fn get_profile_includes_the_account_email() {
    let store = InMemoryStore::new();
    let user_id = store.seed_user("mentor@example.com");
    store.seed_profile(user_id, Role::Mentor, "Morgan");

    let get = GetProfileUseCase {
        profiles: store.profile_repo(),
        users: store.user_repo(),
    };
    let found = get.execute(user_id).await.unwrap();
    assert_eq!(found.profile.name, "Morgan");
    assert_eq!(found.email, "mentor@example.com");
}

#[tokio::test]
async fn get_profile_without_one_is_not_found() {
    let store = InMemoryStore::new();
    let user_id = store.seed_user("mentor@example.com");

    let get = GetProfileUseCase {
        profiles: store.profile_repo(),
        users: store.user_repo(),
    };
    let result = get.execute(user_id).await;
    assert!(matches!(result, Err(ServiceError::ProfileNotFound)));
}

#[tokio::test]
async fn discovery_lists_only_the_opposite_role_excluding_self() {
    let store = InMemoryStore::new();
    let mentee = store.seed_user("mentee@example.com");
    store.seed_profile(mentee, Role::Mentee, "Emery");

    let mentor_a = store.seed_user("a@example.com");
    store.seed_profile(mentor_a, Role::Mentor, "Avery");
    let mentor_b = store.seed_user("b@example.com");
    store.seed_profile(mentor_b, Role::Mentor, "Blake");

    let other_mentee = store.seed_user("c@example.com");
    store.seed_profile(other_mentee, Role::Mentee, "Casey");

    let list = ListCounterpartsUseCase {
        profiles: store.profile_repo(),
        users: store.user_repo(),
    };

    let seen = list.execute(mentee).await.unwrap();
    let mut names: Vec<&str> = seen.iter().map(|p| p.profile.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Avery", "Blake"]);
    assert!(seen.iter().all(|p| p.profile.role == Role::Mentor));
    assert!(seen.iter().any(|p| p.email == "a@example.com"));

    // From the mentor side, only mentees come back, and never the caller.
    let seen = list.execute(mentor_a).await.unwrap();
    let mut names: Vec<&str> = seen.iter().map(|p| p.profile.name.as_str()).collect();
    names.sort();
    assert_eq!(names, ["Casey", "Emery"]);
}

#[tokio::test]
async fn discovery_without_a_profile_is_empty() {
    let store = InMemoryStore::new();
    let user_id = store.seed_user("noprofile@example.com");
    store.seed_profile(store.seed_user("m@example.com"), Role::Mentor, "Morgan");

    let list = ListCounterpartsUseCase {
        profiles: store.profile_repo(),
        users: store.user_repo(),
    };
    assert!(list.execute(user_id).await.unwrap().is_empty());
}

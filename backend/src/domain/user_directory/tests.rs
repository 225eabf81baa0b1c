//! Tests for the data-access service against a mocked store.

use super::*;
use crate::domain::ports::MockUserRepository;
use crate::domain::{UserPatch, UserValidationError};
use rstest::{fixture, rstest};

const KNOWN_ID: &str = "6132b9d4-7cef-40cc-9916-b6a9d2c3e4f5";

#[fixture]
fn harry() -> User {
    User::try_from_strings(KNOWN_ID, "Harry Potter", "Young wizard").expect("valid user")
}

fn service(repo: MockUserRepository) -> UserDirectoryService {
    UserDirectoryService::new(Arc::new(repo))
}

#[rstest]
#[tokio::test]
async fn listing_queries_build_the_expected_filters(harry: User) {
    let mut repo = MockUserRepository::new();
    let expected = [
        UserFilter::all(),
        UserFilter::by_name("Harry Potter"),
        UserFilter::by_job("Young wizard"),
        UserFilter::by_name_and_job("Harry Potter", "Young wizard"),
    ];
    for filter in expected {
        let user = harry.clone();
        repo.expect_find()
            .withf(move |candidate| *candidate == filter)
            .times(1)
            .return_once(move |_| Ok(vec![user]));
    }
    let service = service(repo);

    assert_eq!(service.find_all().await.expect("all"), vec![harry.clone()]);
    assert_eq!(
        service.find_by_name("Harry Potter").await.expect("by name"),
        vec![harry.clone()]
    );
    assert_eq!(
        service.find_by_job("Young wizard").await.expect("by job"),
        vec![harry.clone()]
    );
    assert_eq!(
        service
            .find_by_name_and_job("Harry Potter", "Young wizard")
            .await
            .expect("by both"),
        vec![harry]
    );
}

#[rstest]
#[tokio::test]
async fn listing_surfaces_store_failures() {
    let mut repo = MockUserRepository::new();
    repo.expect_find()
        .return_once(|_| Err(UserPersistenceError::connection("pool unavailable")));

    let error = service(repo).find_all().await.expect_err("store failure");
    assert!(matches!(
        error,
        UserDirectoryError::Store(UserPersistenceError::Connection { .. })
    ));
}

#[rstest]
#[tokio::test]
async fn find_by_id_skips_the_store_for_malformed_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id().times(0);

    assert!(service(repo).find_by_id("123").await.is_none());
}

#[rstest]
#[tokio::test]
async fn find_by_id_collapses_store_failures_to_none() {
    let mut repo = MockUserRepository::new();
    repo.expect_find_by_id()
        .times(1)
        .return_once(|_| Err(UserPersistenceError::query("boom")));

    assert!(service(repo).find_by_id(KNOWN_ID).await.is_none());
}

#[rstest]
#[tokio::test]
async fn find_by_id_returns_the_stored_record(harry: User) {
    let mut repo = MockUserRepository::new();
    let stored = harry.clone();
    repo.expect_find_by_id()
        .withf(|id| id.to_string() == KNOWN_ID)
        .return_once(move |_| Ok(Some(stored)));

    assert_eq!(service(repo).find_by_id(KNOWN_ID).await, Some(harry));
}

#[rstest]
#[case(UserDraft::new("Harry Potter", "Y"), UserValidationError::JobTooShort { min: 2 })]
#[case(UserDraft { job: Some("Young wizard".to_owned()), ..UserDraft::default() }, UserValidationError::MissingName)]
#[case(UserDraft { name: Some("Harry Potter".to_owned()), ..UserDraft::default() }, UserValidationError::MissingJob)]
#[case(UserDraft::new("Harry Potter", "Young wizard").with_id("123"), UserValidationError::MalformedId)]
#[tokio::test]
async fn insert_rejects_invalid_candidates_without_touching_the_store(
    #[case] draft: UserDraft,
    #[case] expected: UserValidationError,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_insert().times(0);

    let error = service(repo).insert(draft).await.expect_err("invalid");
    assert_eq!(error, InsertError::Validation(expected));
}

#[rstest]
#[tokio::test]
async fn insert_reports_duplicate_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_insert()
        .return_once(|_| Err(UserPersistenceError::duplicate_id(KNOWN_ID)));

    let draft = UserDraft::new("Ron", "Young wizard").with_id(KNOWN_ID);
    let error = service(repo).insert(draft).await.expect_err("duplicate");
    assert_eq!(
        error,
        InsertError::DuplicateId {
            id: KNOWN_ID.to_owned()
        }
    );
}

#[rstest]
#[tokio::test]
async fn insert_passes_trimmed_values_to_the_store(harry: User) {
    let mut repo = MockUserRepository::new();
    let stored = harry.clone();
    repo.expect_insert()
        .withf(|user| user.name().as_ref() == "Harry Potter" && user.job().as_ref() == "Young wizard")
        .return_once(move |_| Ok(stored));

    let draft = UserDraft::new("  Harry Potter ", " Young wizard");
    assert_eq!(service(repo).insert(draft).await, Ok(harry));
}

fn updated_answer() -> Result<Option<User>, UserPersistenceError> {
    Ok(Some(harry()))
}

#[rstest]
#[case(updated_answer(), UpdateOutcome::Updated(harry()))]
#[case(Ok(None), UpdateOutcome::NotFound)]
#[case(
    Err(UserPersistenceError::query("boom")),
    UpdateOutcome::Failed(UpdateFailure::Store(UserPersistenceError::query("boom")))
)]
#[tokio::test]
async fn update_maps_store_answers_to_outcomes(
    #[case] answer: Result<Option<User>, UserPersistenceError>,
    #[case] expected: UpdateOutcome,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .times(1)
        .return_once(move |_, _| answer);

    let patch = UserPatchDraft {
        name: Some("Harry P.".to_owned()),
        job: None,
    };
    assert_eq!(service(repo).update_by_id(KNOWN_ID, patch).await, expected);
}

#[rstest]
#[case("123", UserPatchDraft { name: Some("Harry P.".to_owned()), job: None })]
#[case(KNOWN_ID, UserPatchDraft { name: Some(String::new()), job: None })]
#[case(KNOWN_ID, UserPatchDraft { name: None, job: Some("Y".to_owned()) })]
#[tokio::test]
async fn update_fails_before_the_store_on_bad_input(
    #[case] id: &str,
    #[case] patch: UserPatchDraft,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_update().times(0);

    let outcome = service(repo).update_by_id(id, patch).await;
    assert!(matches!(outcome, UpdateOutcome::Failed(_)));
}

#[rstest]
#[tokio::test]
async fn update_forwards_only_supplied_fields() {
    let mut repo = MockUserRepository::new();
    repo.expect_update()
        .withf(|_, patch: &UserPatch| patch.name().is_none() && patch.job().is_some())
        .return_once(|_, _| Ok(None));

    let patch = UserPatchDraft {
        name: None,
        job: Some("Auror".to_owned()),
    };
    assert_eq!(
        service(repo).update_by_id(KNOWN_ID, patch).await,
        UpdateOutcome::NotFound
    );
}

#[rstest]
#[case(Ok(true), true)]
#[case(Ok(false), false)]
#[case(Err(UserPersistenceError::connection("down")), false)]
#[tokio::test]
async fn delete_reports_whether_a_record_was_removed(
    #[case] answer: Result<bool, UserPersistenceError>,
    #[case] expected: bool,
) {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().times(1).return_once(move |_| answer);

    assert_eq!(service(repo).delete_by_id(KNOWN_ID).await, expected);
}

#[rstest]
#[tokio::test]
async fn delete_ignores_malformed_ids() {
    let mut repo = MockUserRepository::new();
    repo.expect_delete().times(0);

    assert!(!service(repo).delete_by_id("123").await);
}

//! Tests for the user model and its validation rules.

use super::*;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "6132b9d4-7cef-40cc-9916-b6a9d2c3e4f5";

#[fixture]
fn harry() -> User {
    User::try_from_strings(VALID_ID, "Harry Potter", "Young wizard").expect("valid user")
}

#[rstest]
#[case("123")]
#[case("")]
#[case(" 6132b9d4-7cef-40cc-9916-b6a9d2c3e4f5")]
#[case("6132b9d47cefd0cc1916b6a9")]
fn user_id_rejects_malformed_input(#[case] raw: &str) {
    assert_eq!(UserId::new(raw), Err(UserValidationError::MalformedId));
}

#[rstest]
fn user_id_round_trips_through_display() {
    let id = UserId::new(VALID_ID).expect("valid id");
    assert_eq!(id.to_string(), VALID_ID);
}

#[rstest]
fn random_ids_are_distinct() {
    assert_ne!(UserId::random(), UserId::random());
}

#[rstest]
#[case("", UserValidationError::EmptyName)]
#[case("   ", UserValidationError::EmptyName)]
fn name_rejects_blank_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserName::new(raw), Err(expected));
}

#[rstest]
fn name_is_trimmed() {
    let name = UserName::new("  Chuck Norris ").expect("valid name");
    assert_eq!(name.as_ref(), "Chuck Norris");
}

#[rstest]
#[case("")]
#[case("Y")]
#[case("  Y  ")]
fn job_rejects_short_values(#[case] raw: &str) {
    assert_eq!(
        JobTitle::new(raw),
        Err(UserValidationError::JobTooShort { min: JOB_MIN_LEN })
    );
}

#[rstest]
#[case("Yo")]
#[case(" Highlander ")]
fn job_accepts_values_at_or_above_minimum(#[case] raw: &str) {
    let job = JobTitle::new(raw).expect("valid job");
    assert_eq!(job.as_ref(), raw.trim());
}

#[rstest]
fn draft_without_name_fails() {
    let draft = UserDraft {
        job: Some("Young wizard".to_owned()),
        ..UserDraft::default()
    };
    assert_eq!(draft.validate(), Err(UserValidationError::MissingName));
}

#[rstest]
fn draft_without_job_fails() {
    let draft = UserDraft {
        name: Some("Harry Potter".to_owned()),
        ..UserDraft::default()
    };
    assert_eq!(draft.validate(), Err(UserValidationError::MissingJob));
}

#[rstest]
fn draft_with_malformed_id_fails() {
    let draft = UserDraft::new("Harry Potter", "Young wizard").with_id("123");
    assert_eq!(draft.validate(), Err(UserValidationError::MalformedId));
}

#[rstest]
fn draft_with_explicit_id_keeps_it() {
    let draft = UserDraft::new("Harry Potter", "Young wizard").with_id(VALID_ID);
    let new_user = draft.validate().expect("valid draft");
    assert_eq!(new_user.id().map(ToString::to_string).as_deref(), Some(VALID_ID));
}

#[rstest]
fn draft_accepts_underscore_id_alias() {
    let draft: UserDraft = serde_json::from_value(json!({
        "_id": VALID_ID,
        "name": "Ron",
        "job": "Young wizard",
        "house": "Gryffindor"
    }))
    .expect("draft payload");
    assert_eq!(draft.id.as_deref(), Some(VALID_ID));
}

#[rstest]
fn patch_validates_only_present_fields() {
    let patch = UserPatchDraft {
        name: Some("Harry P.".to_owned()),
        job: None,
    }
    .validate()
    .expect("valid patch");
    assert_eq!(patch.name().map(|name| name.as_ref()), Some("Harry P."));
    assert!(patch.job().is_none());
}

#[rstest]
#[case(Some(""), None)]
#[case(None, Some("Y"))]
#[case(None, Some(""))]
fn patch_rejects_invalid_present_fields(#[case] name: Option<&str>, #[case] job: Option<&str>) {
    let draft = UserPatchDraft {
        name: name.map(str::to_owned),
        job: job.map(str::to_owned),
    };
    assert!(draft.validate().is_err());
}

#[rstest]
fn patch_apply_keeps_identity_and_untouched_fields(harry: User) {
    let patch = UserPatchDraft {
        name: None,
        job: Some("Auror".to_owned()),
    }
    .validate()
    .expect("valid patch");

    let updated = patch.apply_to(&harry);
    assert_eq!(updated.id(), harry.id());
    assert_eq!(updated.name(), harry.name());
    assert_eq!(updated.job().as_ref(), "Auror");
}

#[rstest]
fn user_serialises_to_flat_json(harry: User) {
    let value = serde_json::to_value(&harry).expect("serialise user");
    assert_eq!(
        value,
        json!({ "id": VALID_ID, "name": "Harry Potter", "job": "Young wizard" })
    );
}

#[rstest]
fn user_deserialisation_enforces_invariants() {
    let result: Result<User, _> =
        serde_json::from_value(json!({ "id": VALID_ID, "name": "Harry", "job": "Y" }));
    assert!(result.is_err());
}

#[rstest]
#[case(UserFilter::all(), true)]
#[case(UserFilter::by_name("Harry Potter"), true)]
#[case(UserFilter::by_name("harry potter"), false)]
#[case(UserFilter::by_job("Young wizard"), true)]
#[case(UserFilter::by_name_and_job("Harry Potter", "Young wizard"), true)]
#[case(UserFilter::by_name_and_job("Harry Potter", "Highlander"), false)]
fn filter_matches_exactly(harry: User, #[case] filter: UserFilter, #[case] expected: bool) {
    assert_eq!(filter.matches(&harry), expected);
}

//! User data model and validation rules.
//!
//! Payloads arrive as drafts ([`UserDraft`], [`UserPatchDraft`]) holding raw,
//! optional strings. Validation turns them into [`NewUser`] and [`UserPatch`],
//! whose fields are already trimmed and checked, so adapters never see a value
//! that breaks the record invariants.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Uuid;

/// Minimum number of characters in a job title once trimmed.
pub const JOB_MIN_LEN: usize = 2;

/// Validation errors raised while building users, patches, or identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The `name` field was not supplied.
    #[error("name is required")]
    MissingName,
    /// The `name` field is empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// The `job` field was not supplied.
    #[error("job is required")]
    MissingJob,
    /// The `job` field is shorter than [`JOB_MIN_LEN`] once trimmed.
    #[error("job must be at least {min} characters")]
    JobTooShort { min: usize },
    /// An identifier could not be parsed.
    #[error("user id is malformed")]
    MalformedId,
}

/// Opaque user identifier assigned by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserId(Uuid);

impl UserId {
    /// Parse an identifier from its textual form.
    ///
    /// # Examples
    /// ```
    /// use users_service::domain::UserId;
    ///
    /// assert!(UserId::new("6132b9d4-7cef-40cc-9916-b6a9d2c3e4f5").is_ok());
    /// assert!(UserId::new("123").is_err());
    /// ```
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::MalformedId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::MalformedId)
    }

    /// Generate a fresh identifier.
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an identifier read back from the store.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// User name, trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserName(String);

impl UserName {
    /// Trim and validate a name.
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Job title, trimmed and at least [`JOB_MIN_LEN`] characters long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobTitle(String);

impl JobTitle {
    /// Trim and validate a job title.
    pub fn new(job: impl Into<String>) -> Result<Self, UserValidationError> {
        let job = job.into();
        let trimmed = job.trim();
        if trimmed.chars().count() < JOB_MIN_LEN {
            return Err(UserValidationError::JobTooShort { min: JOB_MIN_LEN });
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for JobTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `job` has at least [`JOB_MIN_LEN`] characters once trimmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "6132b9d4-7cef-40cc-9916-b6a9d2c3e4f5")]
    id: UserId,
    #[schema(value_type = String, example = "Harry Potter")]
    name: UserName,
    #[schema(value_type = String, example = "Young wizard")]
    job: JobTitle,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, name: UserName, job: JobTitle) -> Self {
        Self { id, name, job }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: impl AsRef<str>,
        name: impl Into<String>,
        job: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            UserName::new(name)?,
            JobTitle::new(job)?,
        ))
    }

    /// Store-assigned identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// User name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Job title.
    pub fn job(&self) -> &JobTitle {
        &self.job
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct UserDto {
    id: String,
    name: String,
    job: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let User { id, name, job } = value;
        Self {
            id: id.to_string(),
            name: name.0,
            job: job.0,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        User::try_from_strings(value.id, value.name, value.job)
    }
}

/// Unvalidated candidate for insertion, as received from clients.
///
/// An explicit identifier may be supplied as `id` or `_id`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserDraft {
    #[serde(default, alias = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
}

impl UserDraft {
    /// Draft carrying only a name and a job.
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            job: Some(job.into()),
        }
    }

    /// Attach an explicit identifier.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Apply the insertion rules.
    pub fn validate(self) -> Result<NewUser, UserValidationError> {
        let name = UserName::new(self.name.ok_or(UserValidationError::MissingName)?)?;
        let job = JobTitle::new(self.job.ok_or(UserValidationError::MissingJob)?)?;
        let id = self.id.map(UserId::new).transpose()?;
        Ok(NewUser { id, name, job })
    }
}

/// Validated insertion candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    id: Option<UserId>,
    name: UserName,
    job: JobTitle,
}

impl NewUser {
    /// Identifier requested by the client, if any.
    pub fn id(&self) -> Option<&UserId> {
        self.id.as_ref()
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn job(&self) -> &JobTitle {
        &self.job
    }

    /// Materialise the record under the given identifier.
    pub fn into_user(self, id: UserId) -> User {
        User::new(id, self.name, self.job)
    }
}

/// Unvalidated partial update, as received from clients.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
pub struct UserPatchDraft {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
}

impl UserPatchDraft {
    /// Validate only the fields that were supplied.
    pub fn validate(self) -> Result<UserPatch, UserValidationError> {
        Ok(UserPatch {
            name: self.name.map(UserName::new).transpose()?,
            job: self.job.map(JobTitle::new).transpose()?,
        })
    }
}

/// Validated partial update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    name: Option<UserName>,
    job: Option<JobTitle>,
}

impl UserPatch {
    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }

    pub fn job(&self) -> Option<&JobTitle> {
        self.job.as_ref()
    }

    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.job.is_none()
    }

    /// Return a copy of `user` with the supplied fields replaced.
    pub fn apply_to(&self, user: &User) -> User {
        User {
            id: user.id,
            name: self.name.clone().unwrap_or_else(|| user.name.clone()),
            job: self.job.clone().unwrap_or_else(|| user.job.clone()),
        }
    }
}

/// Exact-match, case-sensitive filter over user fields.
///
/// Absent fields match every record; present fields must all match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub name: Option<String>,
    pub job: Option<String>,
}

impl UserFilter {
    /// Filter matching every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Filter on name only.
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            job: None,
        }
    }

    /// Filter on job only.
    pub fn by_job(job: impl Into<String>) -> Self {
        Self {
            name: None,
            job: Some(job.into()),
        }
    }

    /// Filter on both fields.
    pub fn by_name_and_job(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            job: Some(job.into()),
        }
    }

    /// Whether `user` satisfies every present field.
    pub fn matches(&self, user: &User) -> bool {
        let name_ok = self
            .name
            .as_deref()
            .is_none_or(|name| user.name.as_ref() == name);
        let job_ok = self
            .job
            .as_deref()
            .is_none_or(|job| user.job.as_ref() == job);
        name_ok && job_ok
    }
}

#[cfg(test)]
mod tests;

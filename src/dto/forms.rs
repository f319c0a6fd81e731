//! Raw form submissions and their validation into typed inputs.
//!
//! Every field arrives as an optional string, mirroring an HTML form post. `validate` either
//! rejects the submission with [`ServiceError::Validation`] or produces the typed value the
//! services accept. Ratings are only type-checked; values outside their intended scales pass.

use serde::Deserialize;

use crate::error::ServiceError;

#[derive(Debug, Default, Deserialize)]
pub struct RegisterForm {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub full_name: Option<String>,
}

/// Accepted registration input. Values are kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns a validation error naming the first missing field.
    pub fn validate(self) -> Result<NewUser, ServiceError> {
        Ok(NewUser {
            username: required_text(self.username, "Username")?,
            email: required_text(self.email, "Email")?,
            password: required_raw(self.password, "Password")?,
            full_name: required_text(self.full_name, "Full name")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns a validation error when either field is missing.
    pub fn validate(self) -> Result<Credentials, ServiceError> {
        Ok(Credentials {
            username: required_text(self.username, "Username")?,
            password: required_raw(self.password, "Password")?,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProfileForm {
    pub postpartum_months: Option<String>,
    pub full_name: Option<String>,
}

/// Partial profile update. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileUpdate {
    pub postpartum_months: Option<i32>,
    pub full_name: Option<String>,
}

impl ProfileForm {
    /// A blank month field counts as not submitted.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a non-integer or negative month count, or a blank name.
    pub fn validate(self) -> Result<ProfileUpdate, ServiceError> {
        let postpartum_months = optional_int(self.postpartum_months, "Postpartum months")?;
        if let Some(months) = postpartum_months {
            validate_postpartum_months(months)?;
        }

        let full_name = match self.full_name {
            Some(name) if name.trim().is_empty() => {
                return Err(ServiceError::Validation(
                    "Full name cannot be empty.".to_string(),
                ));
            }
            other => other,
        };

        Ok(ProfileUpdate {
            postpartum_months,
            full_name,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ExerciseForm {
    pub exercise_type: Option<String>,
    pub duration: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewExercise {
    pub exercise_type: String,
    pub duration: i32,
    pub notes: String,
}

impl ExerciseForm {
    /// # Errors
    ///
    /// Returns a validation error for a missing type or a missing, non-integer or
    /// non-positive duration.
    pub fn validate(self) -> Result<NewExercise, ServiceError> {
        let exercise_type = required_text(self.exercise_type, "Exercise type")?;
        let duration = required_int(self.duration, "Duration")?;
        if duration <= 0 {
            return Err(ServiceError::Validation(
                "Duration must be a positive number of minutes.".to_string(),
            ));
        }
        Ok(NewExercise {
            exercise_type,
            duration,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct ProgressForm {
    pub exercise_id: Option<String>,
    pub performance_rating: Option<String>,
    pub energy_level: Option<String>,
    pub difficulty_felt: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProgress {
    pub exercise_id: i32,
    pub performance_rating: i32,
    pub energy_level: i32,
    pub difficulty_felt: i32,
    pub notes: String,
}

impl ProgressForm {
    /// # Errors
    ///
    /// Returns a validation error for any missing or non-integer field.
    pub fn validate(self) -> Result<NewProgress, ServiceError> {
        Ok(NewProgress {
            exercise_id: required_int(self.exercise_id, "Exercise")?,
            performance_rating: required_int(self.performance_rating, "Performance rating")?,
            energy_level: required_int(self.energy_level, "Energy level")?,
            difficulty_felt: required_int(self.difficulty_felt, "Difficulty felt")?,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WellnessForm {
    pub mood_rating: Option<String>,
    pub stress_level: Option<String>,
    pub sleep_hours: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewWellness {
    pub mood_rating: i32,
    pub stress_level: i32,
    pub sleep_hours: Option<f64>,
    pub notes: String,
}

impl WellnessForm {
    /// Missing or blank sleep hours become `None`, never zero.
    ///
    /// # Errors
    ///
    /// Returns a validation error for missing or non-integer ratings, or unparseable sleep hours.
    pub fn validate(self) -> Result<NewWellness, ServiceError> {
        Ok(NewWellness {
            mood_rating: required_int(self.mood_rating, "Mood rating")?,
            stress_level: required_int(self.stress_level, "Stress level")?,
            sleep_hours: optional_float(self.sleep_hours, "Sleep hours")?,
            notes: self.notes.unwrap_or_default(),
        })
    }
}

/// # Errors
///
/// Returns a validation error for a negative month count.
pub fn validate_postpartum_months(months: i32) -> Result<(), ServiceError> {
    if months < 0 {
        return Err(ServiceError::Validation(
            "Postpartum months cannot be negative.".to_string(),
        ));
    }
    Ok(())
}

fn missing(field: &str) -> ServiceError {
    ServiceError::Validation(format!("{field} is required."))
}

/// Present and not blank. The value is returned untrimmed.
fn required_text(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

/// Present and non-empty, whitespace included. Used for passwords.
fn required_raw(value: Option<String>, field: &str) -> Result<String, ServiceError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn parse_int(raw: &str, field: &str) -> Result<i32, ServiceError> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| ServiceError::Validation(format!("{field} must be a whole number.")))
}

fn required_int(value: Option<String>, field: &str) -> Result<i32, ServiceError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => parse_int(v, field),
        _ => Err(missing(field)),
    }
}

fn optional_int(value: Option<String>, field: &str) -> Result<Option<i32>, ServiceError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => parse_int(v, field).map(Some),
        _ => Ok(None),
    }
}

fn optional_float(value: Option<String>, field: &str) -> Result<Option<f64>, ServiceError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => {
            let parsed = v
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .ok_or_else(|| ServiceError::Validation(format!("{field} must be a number.")))?;
            Ok(Some(parsed))
        }
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    fn validation_message<T: std::fmt::Debug>(result: Result<T, ServiceError>) -> String {
        match result {
            Err(ServiceError::Validation(msg)) => msg,
            other => format!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn register_requires_every_field() {
        let form = RegisterForm {
            username: s("jane"),
            email: s("jane@example.com"),
            password: None,
            full_name: s("Jane Doe"),
        };
        assert_eq!(validation_message(form.validate()), "Password is required.");

        let blank_name = RegisterForm {
            username: s("jane"),
            email: s("jane@example.com"),
            password: s("pw"),
            full_name: s("   "),
        };
        assert_eq!(
            validation_message(blank_name.validate()),
            "Full name is required."
        );
    }

    #[test]
    fn register_keeps_values_as_submitted() {
        let form = RegisterForm {
            username: s("Jane"),
            email: s("Jane@Example.com"),
            password: s(" spaced "),
            full_name: s("Jane Doe"),
        };
        let user = form.validate();
        assert!(matches!(
            user,
            Ok(NewUser { ref username, ref email, ref password, .. })
                if username == "Jane" && email == "Jane@Example.com" && password == " spaced "
        ));
    }

    #[test]
    fn exercise_parses_duration() {
        let form = ExerciseForm {
            exercise_type: s("Walking"),
            duration: s(" 20 "),
            notes: None,
        };
        assert_eq!(
            form.validate().ok(),
            Some(NewExercise {
                exercise_type: "Walking".to_string(),
                duration: 20,
                notes: String::new(),
            })
        );
    }

    #[test]
    fn exercise_rejects_bad_duration() {
        let not_a_number = ExerciseForm {
            exercise_type: s("Walking"),
            duration: s("twenty"),
            notes: None,
        };
        assert_eq!(
            validation_message(not_a_number.validate()),
            "Duration must be a whole number."
        );

        let zero = ExerciseForm {
            exercise_type: s("Walking"),
            duration: s("0"),
            notes: None,
        };
        assert!(zero.validate().is_err());

        let missing_type = ExerciseForm {
            exercise_type: None,
            duration: s("10"),
            notes: None,
        };
        assert_eq!(
            validation_message(missing_type.validate()),
            "Exercise type is required."
        );
    }

    #[test]
    fn progress_accepts_out_of_range_ratings() {
        let form = ProgressForm {
            exercise_id: s("3"),
            performance_rating: s("9"),
            energy_level: s("-1"),
            difficulty_felt: s("42"),
            notes: s("felt odd"),
        };
        let progress = form.validate();
        assert!(matches!(
            progress,
            Ok(NewProgress { performance_rating: 9, energy_level: -1, difficulty_felt: 42, .. })
        ));
    }

    #[test]
    fn progress_requires_integers() {
        let form = ProgressForm {
            exercise_id: s("3"),
            performance_rating: s("4.5"),
            energy_level: s("5"),
            difficulty_felt: s("5"),
            notes: None,
        };
        assert_eq!(
            validation_message(form.validate()),
            "Performance rating must be a whole number."
        );
    }

    #[test]
    fn wellness_blank_sleep_is_absent() {
        for sleep in [None, s(""), s("  ")] {
            let form = WellnessForm {
                mood_rating: s("7"),
                stress_level: s("4"),
                sleep_hours: sleep,
                notes: None,
            };
            assert!(matches!(form.validate(), Ok(NewWellness { sleep_hours: None, .. })));
        }
    }

    #[test]
    fn wellness_parses_sleep_hours() {
        let form = WellnessForm {
            mood_rating: s("7"),
            stress_level: s("4"),
            sleep_hours: s("6.5"),
            notes: None,
        };
        assert!(matches!(
            form.validate(),
            Ok(NewWellness { sleep_hours: Some(h), .. }) if (h - 6.5).abs() < f64::EPSILON
        ));

        let bad = WellnessForm {
            mood_rating: s("7"),
            stress_level: s("4"),
            sleep_hours: s("lots"),
            notes: None,
        };
        assert_eq!(validation_message(bad.validate()), "Sleep hours must be a number.");
    }

    #[test]
    fn profile_is_partial() {
        let empty = ProfileForm::default().validate();
        assert_eq!(empty.ok(), Some(ProfileUpdate::default()));

        let months_only = ProfileForm {
            postpartum_months: s("5"),
            full_name: None,
        };
        assert_eq!(
            months_only.validate().ok(),
            Some(ProfileUpdate {
                postpartum_months: Some(5),
                full_name: None,
            })
        );

        let blank_months = ProfileForm {
            postpartum_months: s(""),
            full_name: s("New Name"),
        };
        assert_eq!(
            blank_months.validate().ok(),
            Some(ProfileUpdate {
                postpartum_months: None,
                full_name: Some("New Name".to_string()),
            })
        );
    }

    #[test]
    fn profile_rejects_negative_months() {
        let form = ProfileForm {
            postpartum_months: s("-2"),
            full_name: None,
        };
        assert_eq!(
            validation_message(form.validate()),
            "Postpartum months cannot be negative."
        );
    }
}

//! Form-field validators.
//!
//! Both checks are deliberately permissive: `validate_email` accepts anything
//! shaped like `local@domain.tld` with no whitespace and a single `@`, and
//! does not reject consecutive dots or other RFC violations.

use crate::error::ValidationError;
use crate::types::{NewStudent, UpdateStudent};

pub const GPA_MIN: f64 = 0.0;
pub const GPA_MAX: f64 = 10.0;

/// True iff `email` matches `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(is_regex_space) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    // Some dot must have a non-empty run on both sides.
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// The `\s` class of ECMAScript regular expressions: the JS WhiteSpace and
/// LineTerminator sets. Differs from `char::is_whitespace` on U+FEFF (space
/// here) and U+0085 (not a space here).
fn is_regex_space(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'..='\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// True iff `GPA_MIN <= gpa <= GPA_MAX`. NaN is never valid.
pub fn validate_gpa(gpa: f64) -> bool {
    (GPA_MIN..=GPA_MAX).contains(&gpa)
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_email(&self.email)?;
        check_gpa(self.gpa)
    }
}

impl UpdateStudent {
    /// Only fields present in the update are checked.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(email) = &self.email {
            check_email(email)?;
        }
        if let Some(gpa) = self.gpa {
            check_gpa(gpa)?;
        }
        Ok(())
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if validate_email(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

fn check_gpa(gpa: f64) -> Result<(), ValidationError> {
    if validate_gpa(gpa) {
        Ok(())
    } else {
        Err(ValidationError::GpaOutOfRange(gpa))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_addresses() {
        assert!(validate_email("a@b.com"));
        assert!(validate_email("jane.doe@uni.example.edu"));
        assert!(validate_email("x@y.z"));
    }

    #[test]
    fn rejects_missing_parts() {
        assert!(!validate_email("a@b"));
        assert!(!validate_email("a.b.com"));
        assert!(!validate_email("@b.com"));
        assert!(!validate_email("a@.com"));
        assert!(!validate_email("a@b."));
        assert!(!validate_email(""));
    }

    #[test]
    fn rejects_whitespace_and_extra_at() {
        assert!(!validate_email("a b@c.com"));
        assert!(!validate_email("a@b.com "));
        assert!(!validate_email("a@b@c.com"));
    }

    #[test]
    fn whitespace_follows_regex_space_class() {
        assert!(!validate_email("a\u{FEFF}@b.com"));
        assert!(!validate_email("a@b\u{00A0}.com"));
        assert!(!validate_email("a@b.com\u{2028}"));
        assert!(validate_email("a\u{0085}@b.com"));
    }

    #[test]
    fn permissive_about_dots() {
        assert!(validate_email("a@b..com"));
        assert!(validate_email("a@.b.com"));
    }

    #[test]
    fn gpa_bounds_are_inclusive() {
        assert!(validate_gpa(0.0));
        assert!(validate_gpa(10.0));
        assert!(validate_gpa(7.25));
        assert!(!validate_gpa(-0.01));
        assert!(!validate_gpa(10.01));
        assert!(!validate_gpa(f64::NAN));
    }

    fn new_student(email: &str, gpa: f64) -> NewStudent {
        NewStudent {
            id: None,
            name: "Asha".to_string(),
            age: 20,
            course: "Physics".to_string(),
            email: email.to_string(),
            gpa,
            marks: 0,
        }
    }

    #[test]
    fn new_student_validation() {
        assert!(new_student("asha@uni.edu", 9.1).validate().is_ok());
        assert_eq!(
            new_student("asha", 9.1).validate(),
            Err(ValidationError::InvalidEmail("asha".to_string()))
        );
        assert_eq!(
            new_student("asha@uni.edu", 11.0).validate(),
            Err(ValidationError::GpaOutOfRange(11.0))
        );
    }

    #[test]
    fn update_validation_skips_absent_fields() {
        assert!(UpdateStudent::default().validate().is_ok());
        let update = UpdateStudent {
            gpa: Some(-1.0),
            ..UpdateStudent::default()
        };
        assert_eq!(update.validate(), Err(ValidationError::GpaOutOfRange(-1.0)));
    }
}

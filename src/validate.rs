//! Form Validation
//!
//! Pure validation mirroring the backend's expectations: Russian phone
//! numbers, email shape, password rules and exam score ranges. Components
//! surface the returned messages next to the offending field.

use crate::models::Exam;

/// Strip decoration from a phone input and validate the result.
///
/// Accepts `+7 (999) 123-45-67` style input; a valid number has 11 digits
/// and starts with 7. Returns the wire form `+7XXXXXXXXXX`.
pub fn clean_phone(raw: &str) -> Result<String, &'static str> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() != 11 || !digits.starts_with('7') {
        return Err("Введите корректный номер телефона");
    }
    Ok(format!("+{digits}"))
}

/// Lightweight email shape check: something@something.something, no spaces.
pub fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Password rule used by registration and recovery.
pub fn check_password(password: &str, repeat: &str) -> Result<(), &'static str> {
    if password.chars().count() < 8 {
        return Err("Пароль должен содержать минимум 8 символов");
    }
    if password != repeat {
        return Err("Пароли не совпадают");
    }
    Ok(())
}

/// Validate a review score against the exam's grading scale.
pub fn check_score(exam: Exam, score: Option<i32>) -> Result<i32, String> {
    let (min, max) = exam.score_range();
    match score {
        Some(score) if (min..=max).contains(&score) => Ok(score),
        _ => match exam {
            Exam::Ege => Err(format!("Баллы ЕГЭ должны быть от {min} до {max}")),
            Exam::Oge => Err(format!("Оценка ОГЭ должна быть от {min} до {max}")),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_phone_input_is_cleaned() {
        assert_eq!(clean_phone("+7 (999) 123-45-67").unwrap(), "+79991234567");
        assert_eq!(clean_phone("79991234567").unwrap(), "+79991234567");
    }

    #[test]
    fn wrong_length_or_prefix_is_rejected() {
        assert!(clean_phone("").is_err());
        assert!(clean_phone("+7 999 123-45-6").is_err());
        assert!(clean_phone("+8 (999) 123-45-67").is_err());
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("u.ser@mail.example.ru"));
        assert!(!is_valid_email("userexample.com"));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("us er@example.com"));
        assert!(!is_valid_email("@example.com"));
    }

    #[test]
    fn password_rules() {
        assert!(check_password("12345678", "12345678").is_ok());
        assert!(check_password("1234567", "1234567").is_err());
        assert!(check_password("12345678", "87654321").is_err());
    }

    #[test]
    fn ege_scores_are_percent_scale() {
        assert_eq!(check_score(Exam::Ege, Some(0)).unwrap(), 0);
        assert_eq!(check_score(Exam::Ege, Some(100)).unwrap(), 100);
        assert!(check_score(Exam::Ege, Some(101)).is_err());
        assert!(check_score(Exam::Ege, None).is_err());
    }

    #[test]
    fn oge_scores_are_school_grades() {
        assert_eq!(check_score(Exam::Oge, Some(5)).unwrap(), 5);
        assert!(check_score(Exam::Oge, Some(1)).is_err());
    }
}

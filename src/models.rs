//! Frontend Models
//!
//! Data structures matching backend payloads. Optional fields default so a
//! sparse record never fails to deserialize; display fallbacks live on the
//! accessors, keeping "undefined"-style artifacts out of the DOM.

use serde::{Deserialize, Serialize};

/// Exam kind the shop sells materials for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Exam {
    Ege,
    Oge,
}

impl Exam {
    pub fn title(self) -> &'static str {
        match self {
            Exam::Ege => "ЕГЭ",
            Exam::Oge => "ОГЭ",
        }
    }

    /// Path segment in the reviews endpoint.
    pub fn endpoint(self) -> &'static str {
        match self {
            Exam::Ege => "ege",
            Exam::Oge => "oge",
        }
    }

    /// Valid score range: 0 to 100 for ЕГЭ, 2 to 5 for ОГЭ.
    pub fn score_range(self) -> (i32, i32) {
        match self {
            Exam::Ege => (0, 100),
            Exam::Oge => (2, 5),
        }
    }

    pub fn score_hint(self) -> &'static str {
        match self {
            Exam::Ege => "Баллы ЕГЭ: от 0 до 100",
            Exam::Oge => "Оценка ОГЭ: от 2 до 5",
        }
    }

    /// Recognize the exam from the label stored on a review.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.to_lowercase();
        if label.contains("егэ") {
            Some(Exam::Ege)
        } else if label.contains("огэ") {
            Some(Exam::Oge)
        } else {
            None
        }
    }
}

/// One review record. Endpoints differ in which fields they fill in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    #[serde(default)]
    pub id: u32,
    pub name: Option<String>,
    pub exam: Option<String>,
    pub result: Option<i32>,
    #[serde(default)]
    pub review: String,
    #[serde(default)]
    pub created_at: String,
    pub avatar_url: Option<String>,
}

impl Review {
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => "Аноним",
        }
    }

    pub fn display_result(&self) -> String {
        match self.result {
            Some(result) => result.to_string(),
            None => "—".to_string(),
        }
    }

    pub fn avatar(&self) -> &str {
        match self.avatar_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => "/assets/img/avatar.jpg",
        }
    }
}

/// Product as the admin panel sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub id: u32,
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub price: i64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub download_link: String,
}

/// A paid product from the user's purchase history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Purchase {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub download_link: String,
    #[serde(default)]
    pub paid_at: String,
}

/// The authenticated user's profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default)]
    pub id: u32,
    pub name: Option<String>,
    pub surname: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub is_super_user: bool,
}

impl UserInfo {
    /// Phone for display, without any `tel:` scheme prefix.
    pub fn display_phone(&self) -> String {
        self.phone
            .as_deref()
            .unwrap_or("")
            .trim_start_matches("tel:")
            .to_string()
    }
}

/// Response to a payment initiation.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentLink {
    pub payment_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_deserializes_with_only_required_fields() {
        let review: Review =
            serde_json::from_str(r#"{"review": "Отличный курс", "created_at": "2024-05-12 10:00:00+03:00"}"#)
                .expect("sparse review should deserialize");
        assert_eq!(review.display_name(), "Аноним");
        assert_eq!(review.display_result(), "—");
        assert_eq!(review.avatar(), "/assets/img/avatar.jpg");
    }

    #[test]
    fn review_display_never_leaks_null_markers() {
        let review: Review = serde_json::from_str(r#"{"name": null, "review": "x"}"#).unwrap();
        assert!(!review.display_name().contains("null"));
        assert!(!review.display_result().contains("null"));
    }

    #[test]
    fn empty_name_falls_back_to_anonymous() {
        let review: Review = serde_json::from_str(r#"{"name": "", "review": "x"}"#).unwrap();
        assert_eq!(review.display_name(), "Аноним");
    }

    #[test]
    fn exam_recognized_from_review_label() {
        assert_eq!(Exam::from_label("ЕГЭ: математика"), Some(Exam::Ege));
        assert_eq!(Exam::from_label("огэ"), Some(Exam::Oge));
        assert_eq!(Exam::from_label("опрос"), None);
    }

    #[test]
    fn score_ranges_match_grading_scales() {
        assert_eq!(Exam::Ege.score_range(), (0, 100));
        assert_eq!(Exam::Oge.score_range(), (2, 5));
    }

    #[test]
    fn phone_display_strips_tel_scheme() {
        let user: UserInfo =
            serde_json::from_str(r#"{"phone": "tel:+79990001122"}"#).unwrap();
        assert_eq!(user.display_phone(), "+79990001122");
    }
}

//! Exam entity with its wall-clock time limit.

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ExamDuration;

/// Exam that can be assigned to employees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exam {
    pub id: i32,

    pub title: Option<String>,
    pub description: Option<String>,

    /// Maximum wall-clock time allowed, `"HH:MM:SS"` on the wire
    pub time_limit: ExamDuration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exam_defaults() {
        let exam = Exam::default();

        assert!(exam.title.is_none());
        assert!(exam.description.is_none());
        assert_eq!(exam.time_limit, ExamDuration::ZERO);
    }

    #[test]
    fn test_exam_serializes_time_limit_as_text() {
        let exam = Exam {
            id: 1,
            title: Some("Examen de Programación".to_string()),
            description: Some("Evaluación de conocimientos en programación".to_string()),
            time_limit: ExamDuration::new(1, 30, 0),
        };

        let json = serde_json::to_value(&exam).unwrap();
        assert_eq!(json["time_limit"], "01:30:00");
    }

    #[test]
    fn test_exam_round_trips_through_json() {
        let exam = Exam {
            id: 7,
            title: Some("Examen de Seguridad".to_string()),
            description: None,
            time_limit: ExamDuration::new(2, 15, 30),
        };

        let json = serde_json::to_string(&exam).unwrap();
        let deserialized: Exam = serde_json::from_str(&json).unwrap();

        assert_eq!(exam, deserialized);
    }

    #[test]
    fn test_exam_rejects_malformed_time_limit() {
        let payload = r#"{"id":1,"title":null,"description":null,"time_limit":"1:2:3"}"#;
        assert!(serde_json::from_str::<Exam>(payload).is_err());
    }
}

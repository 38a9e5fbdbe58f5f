//! Assignment entity linking an employee to an exam.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ExamDuration;

/// Exam assignment as listed for an employee
///
/// Carries the exam title, description and time limit alongside the link so
/// a listing needs no extra lookups; those fields are absent when the exam
/// has not been filled in yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i32,
    pub exam_id: i32,
    pub employee_code: i32,

    /// Timestamp when the exam was assigned
    pub assigned_at: DateTime<Utc>,

    pub exam_title: Option<String>,
    pub description: Option<String>,
    pub time_limit: Option<ExamDuration>,
}

impl Assignment {
    /// Creates a new assignment linking an employee to an exam
    pub fn new(id: i32, exam_id: i32, employee_code: i32) -> Self {
        Self {
            id,
            exam_id,
            employee_code,
            assigned_at: Utc::now(),
            exam_title: None,
            description: None,
            time_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assignment_has_no_exam_details() {
        let assignment = Assignment::new(1, 1, 100);

        assert_eq!(assignment.id, 1);
        assert_eq!(assignment.exam_id, 1);
        assert_eq!(assignment.employee_code, 100);
        assert!(assignment.exam_title.is_none());
        assert!(assignment.description.is_none());
        assert!(assignment.time_limit.is_none());
        assert!(assignment.assigned_at <= Utc::now());
    }

    #[test]
    fn test_assignment_round_trips_with_time_limit() {
        let assignment = Assignment {
            exam_title: Some("Examen de Programación".to_string()),
            description: Some("Evaluación de conocimientos en programación".to_string()),
            time_limit: Some(ExamDuration::new(1, 30, 0)),
            ..Assignment::new(1, 1, 100)
        };

        let json = serde_json::to_value(&assignment).unwrap();
        assert_eq!(json["time_limit"], "01:30:00");

        let deserialized: Assignment = serde_json::from_value(json).unwrap();
        assert_eq!(assignment, deserialized);
    }

    #[test]
    fn test_assignment_accepts_null_time_limit() {
        let payload = r#"{
            "id": 2,
            "exam_id": 3,
            "employee_code": 100,
            "assigned_at": "2024-05-01T10:00:00Z",
            "exam_title": null,
            "description": null,
            "time_limit": null
        }"#;

        let assignment: Assignment = serde_json::from_str(payload).unwrap();
        assert!(assignment.time_limit.is_none());
    }
}

#[cfg(test)]
mod tests {
    use zadachnik::libs::task::{is_valid_due_date, NewTask, Priority, Status, Task, TaskUpdate, ValidationError};

    #[test]
    fn test_due_date_pattern() {
        assert!(is_valid_due_date("2024-12-01"));
        assert!(is_valid_due_date("2024-01-31"));
        // Only the literal shape is checked, not the calendar
        assert!(is_valid_due_date("2024-02-31"));

        assert!(!is_valid_due_date("2024-13-01"));
        assert!(!is_valid_due_date("2024-00-10"));
        assert!(!is_valid_due_date("2024-12-32"));
        assert!(!is_valid_due_date("2024-12-00"));
        assert!(!is_valid_due_date("24-12-01"));
        assert!(!is_valid_due_date("2024-1-01"));
        assert!(!is_valid_due_date("2024-12-1"));
        assert!(!is_valid_due_date("2024-12-01x"));
        assert!(!is_valid_due_date("01-12-2024"));
        assert!(!is_valid_due_date(""));
    }

    #[test]
    fn test_new_task_accepts_padded_input() {
        // Constructors trim before checking, so padded values are fine
        assert!(NewTask::new("  Отчет  ", " Квартальный отчет ", "  Работа ", " 2024-12-01 ", Priority::High).is_ok());
    }

    #[test]
    fn test_new_task_rejects_empty_fields() {
        let err = NewTask::new("   ", "desc", "cat", "2024-12-01", Priority::Low).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "title" });

        let err = NewTask::new("title", "", "cat", "2024-12-01", Priority::Low).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "description" });

        let err = NewTask::new("title", "desc", " \t ", "2024-12-01", Priority::Low).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "category" });
    }

    #[test]
    fn test_new_task_rejects_bad_due_date() {
        let err = NewTask::new("title", "desc", "cat", "2024-13-01", Priority::Low).unwrap_err();
        assert_eq!(err, ValidationError::BadDueDate("2024-13-01".to_string()));

        assert!(NewTask::new("title", "desc", "cat", "2024-12-01", Priority::Low).is_ok());
    }

    #[test]
    fn test_task_update_validates_like_new_task() {
        let err = TaskUpdate::new("", "desc", "cat", "2024-12-01", Priority::Low, Status::Done).unwrap_err();
        assert_eq!(err, ValidationError::EmptyField { field: "title" });

        let err = TaskUpdate::new("title", "desc", "cat", "tomorrow", Priority::Low, Status::Done).unwrap_err();
        assert_eq!(err, ValidationError::BadDueDate("tomorrow".to_string()));

        assert!(TaskUpdate::new("title", "desc", "cat", "2024-12-01", Priority::Low, Status::Done).is_ok());
    }

    #[test]
    fn test_priority_labels() {
        assert_eq!(Priority::Low.label(), "Низкий");
        assert_eq!(Priority::Medium.label(), "Средний");
        assert_eq!(Priority::High.label(), "Высокий");
        assert_eq!(Priority::default(), Priority::Low);

        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"Средний\"");
        assert_eq!(serde_json::from_str::<Priority>("\"Высокий\"").unwrap(), Priority::High);
        assert!(serde_json::from_str::<Priority>("\"Urgent\"").is_err());
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(Status::Done.label(), "Выполнена");
        assert_eq!(Status::NotDone.label(), "Не выполнена");
        assert_eq!(Status::default(), Status::NotDone);

        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"Выполнена\"");
        assert_eq!(serde_json::from_str::<Status>("\"Не выполнена\"").unwrap(), Status::NotDone);
    }

    #[test]
    fn test_status_from_label_ignores_case() {
        assert_eq!(Status::from_label("Выполнена").unwrap(), Status::Done);
        assert_eq!(Status::from_label("выполнена").unwrap(), Status::Done);
        assert_eq!(Status::from_label("ВЫПОЛНЕНА").unwrap(), Status::Done);
        assert_eq!(Status::from_label("не выполнена").unwrap(), Status::NotDone);
        assert_eq!(Status::from_label("Не Выполнена").unwrap(), Status::NotDone);

        let err = Status::from_label("готово").unwrap_err();
        assert_eq!(err, ValidationError::UnknownStatus("готово".to_string()));
    }

    #[test]
    fn test_task_deserializes_with_defaults() {
        // priority and status may be absent in hand-written files
        let task: Task = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Отчет",
                "description": "Квартальный отчет",
                "category": "Работа",
                "due_date": "2024-12-01"
            }"#,
        )
        .unwrap();
        assert_eq!(task.priority, Priority::Low);
        assert_eq!(task.status, Status::NotDone);
    }

    #[test]
    fn test_task_serializes_russian_labels() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": 7,
                "title": "Отчет",
                "description": "Квартальный отчет",
                "category": "Работа",
                "due_date": "2024-12-01",
                "priority": "Высокий",
                "status": "Выполнена"
            }"#,
        )
        .unwrap();
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.status, Status::Done);

        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"Высокий\""));
        assert!(json.contains("\"Выполнена\""));
    }
}

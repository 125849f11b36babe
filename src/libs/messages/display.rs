//! Display implementation for zadachnik application messages.
//!
//! Provides the `Display` trait implementation for the [`Message`] enum,
//! converting structured message variants into the Russian text shown in the
//! terminal. Keeping every user-facing string in one place gives the rest of
//! the code a typed vocabulary and keeps wording consistent across commands.
//!
//! Formatting conventions:
//! - messages are complete sentences ending with a period
//! - prompts are short noun phrases without trailing punctuation, the
//!   dialoguer theme adds its own separator
//! - parameters (ids, file paths) are interpolated with `format!`

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MainMenu => "\
Добро пожаловать в Задачник — удобный инструмент
для управления вашими задачами. Вы можете добавлять,
просматривать, изменять, отмечать выполненные задачи и удалять их.

Выберите действие:

1. Просмотр всех задач
2. Просмотр задач по категории
3. Поиск задач
4. Добавить задачу
5. Изменить задачу
6. Отметить задачу как выполненную
7. Удалить задачу
8. Меню
9. Выход (или q)"
                .to_string(),
            Message::PromptMenuChoice => "Введите номер действия".to_string(),
            Message::UnknownCommand => "Такой команды нет.".to_string(),

            // === TASK LIST MESSAGES ===
            Message::NoTasks => "Нет задач.".to_string(),
            Message::PromptCategoryBrowse => "Введите категорию".to_string(),
            Message::NoTasksInCategory(category) => format!("Задачи по категории '{}' не найдены.", category),

            // === SEARCH MESSAGES ===
            Message::PromptKeyword => "Ключевое слово".to_string(),
            Message::PromptCategoryOptional => "Категория (по желанию)".to_string(),
            Message::PromptStatusOptional => "Статус (по желанию)".to_string(),
            Message::StatusNotSpecified => "Не указывать".to_string(),
            Message::SearchNoResults => "По вашему запросу задачи не найдены.".to_string(),

            // === TASK FIELD PROMPTS ===
            Message::PromptTitle => "Название".to_string(),
            Message::PromptDescription => "Описание".to_string(),
            Message::PromptCategory => "Категория".to_string(),
            Message::PromptDueDate => "Срок выполнения (в формате YYYY-MM-DD)".to_string(),
            Message::PromptPriority => "Приоритет".to_string(),
            Message::PromptTaskId => "ID задачи".to_string(),

            // === TASK OPERATION MESSAGES ===
            Message::TaskAdded => "Задача успешно добавлена.".to_string(),
            Message::TaskUpdated => "Задача успешно обновлена.".to_string(),
            Message::TaskCompleted => "Задача отмечена как выполненная.".to_string(),
            Message::TaskDeleted => "Задача успешно удалена.".to_string(),
            Message::TaskNotFound => "Задача не найдена.".to_string(),
            Message::TaskNotFoundWithId(id) => format!("Задача с ID {} не найдена.", id),
            Message::EditTaskHeader => "Изменение задачи".to_string(),
            Message::EditKeepCurrentHint => "Чтобы оставить текущее значение, нажмите Enter.".to_string(),

            // === VALIDATION MESSAGES ===
            Message::FieldRequired => "Поле не может быть пустым".to_string(),
            Message::InvalidDate => "Некорректная дата. Пример: 2024-01-30".to_string(),
            Message::ValidationFailed(details) => format!("Ошибка валидации: {}", details),

            // === STORAGE MESSAGES ===
            Message::DataFileMissing(path) => format!("Файл {} не найден. Создан пустой список задач.", path),
            Message::DataFileInvalid(path) => format!("Ошибка чтения данных из файла {}. Проверьте формат JSON.", path),
        };
        write!(f, "{}", text)
    }
}

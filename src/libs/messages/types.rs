#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MainMenu,
    PromptMenuChoice,
    UnknownCommand,

    // === TASK LIST MESSAGES ===
    NoTasks,
    PromptCategoryBrowse,
    NoTasksInCategory(String),

    // === SEARCH MESSAGES ===
    PromptKeyword,
    PromptCategoryOptional,
    PromptStatusOptional,
    StatusNotSpecified,
    SearchNoResults,

    // === TASK FIELD PROMPTS ===
    PromptTitle,
    PromptDescription,
    PromptCategory,
    PromptDueDate,
    PromptPriority,
    PromptTaskId,

    // === TASK OPERATION MESSAGES ===
    TaskAdded,
    TaskUpdated,
    TaskCompleted,
    TaskDeleted,
    TaskNotFound,
    TaskNotFoundWithId(u32),
    EditTaskHeader,
    EditKeepCurrentHint,

    // === VALIDATION MESSAGES ===
    FieldRequired,
    InvalidDate,
    ValidationFailed(String),

    // === STORAGE MESSAGES ===
    DataFileMissing(String),
    DataFileInvalid(String),
}

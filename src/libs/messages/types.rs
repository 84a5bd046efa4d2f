#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskStarted(String),
    TaskPaused(String, String),
    TaskResumed(String, String),
    TaskRenamed(String, String),
    TaskDeleted(String),
    TaskReset(String),
    TimeAdjusted { task: String, applied: i64, time: String },
    AdjustmentClamped { requested: i64, applied: i64 },
    AdjustmentOutOfRange(i64),
    NoTasks,
    ConfirmDeleteTask(String),
    ConfirmResetTask(String),
    OperationCancelled,

    // === DISPLAY MESSAGES ===
    DisplayExitHint,
    DisplayStopped,
    TableHeaderName,
    TableHeaderStatus,
    TableHeaderTime,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleHeader,
    PromptTasksFile,
    PromptRefreshInterval,
    PromptConfirmDestructive,
    RefreshIntervalTooShort(u64),
    TasksFileLocation(String),
}

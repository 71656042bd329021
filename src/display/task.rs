//! Task display formatting

use super::report::truncate;
use super::DisplayContext;
use crate::analytics::temporal;
use crate::models::Task;

/// Urgency marker for a task relative to `ctx.today`
pub fn task_marker(task: &Task, ctx: &DisplayContext) -> &'static str {
    if task.completed {
        "done"
    } else if temporal::is_overdue_on(task.due_date, ctx.today) {
        "OVERDUE"
    } else if temporal::is_due_soon_on(task.due_date, ctx.due_soon_days, ctx.today) {
        "due soon"
    } else {
        ""
    }
}

/// Format a list of tasks as a table
pub fn format_task_list(tasks: &[Task], ctx: &DisplayContext) -> String {
    if tasks.is_empty() {
        return "No tasks found.".to_string();
    }

    let title_width = tasks
        .iter()
        .map(|t| t.title.chars().count())
        .max()
        .unwrap_or(5)
        .clamp(5, 40);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<9}  {:<title_width$}  {:<8}  {:<24}  {}\n",
        "ID",
        "Title",
        "Priority",
        "Due",
        "Status",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:-<9}  {:-<title_width$}  {:-<8}  {:-<24}  {:-<8}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for task in tasks {
        let due = match task.due_date {
            Some(date) => format!(
                "{} ({})",
                ctx.date(date),
                temporal::relative_label_on(date, ctx.today)
            ),
            None => "-".to_string(),
        };
        output.push_str(&format!(
            "{:<9}  {:<title_width$}  {:<8}  {:<24}  {}\n",
            task.id.to_string(),
            truncate(&task.title, title_width),
            task.priority.to_string(),
            due,
            task_marker(task, ctx),
            title_width = title_width,
        ));
    }

    output
}

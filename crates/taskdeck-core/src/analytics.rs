//! Pure derivations over the task collection.
//!
//! Everything here is a deterministic function of `(&[Task], today)`; the
//! caller supplies "today" so the same collection yields the same numbers
//! in tests and across re-renders.
//!
//! Weekly and monthly "completed" figures are keyed off the task's creation
//! date, not a completion date: the data model carries no completion
//! timestamp, and this mirrors the behavior the dashboard always had. The
//! reference implementation's randomized "average completion time" metric is
//! dropped entirely rather than simulated.

use crate::models::{Task, TaskPriority, TaskStatus, TASK_CATEGORIES};
use chrono::{Datelike, Duration, NaiveDate};

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryStat {
    pub id: &'static str,
    pub label: &'static str,
    pub total: usize,
    pub completed: usize,
    pub completion_rate: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriorityStat {
    pub priority: TaskPriority,
    pub count: usize,
}

/// One day of the trailing-7-day completion trend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayTrend {
    pub date: NaiveDate,
    pub completed: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Analytics {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub in_progress_tasks: usize,
    pub todo_tasks: usize,
    pub overdue_tasks: usize,
    pub due_today_tasks: usize,
    pub due_this_week_tasks: usize,
    /// round(100 * completed / total); 0 when the collection is empty.
    pub completion_rate: u32,
    pub weekly_completed: usize,
    pub monthly_completed: usize,
    /// Per-category totals in fixed category order; empty categories omitted.
    pub category_stats: Vec<CategoryStat>,
    /// Priority distribution; empty priorities omitted.
    pub priority_stats: Vec<PriorityStat>,
    /// Last 7 calendar days, oldest first.
    pub daily_trend: Vec<DayTrend>,
    /// Category with the largest total; ties break to fixed category order.
    pub most_active_category: Option<CategoryStat>,
}

fn rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    }
}

fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    matches!(task.due_date, Some(due) if due < today) && !task.is_completed()
}

fn is_due_today(task: &Task, today: NaiveDate) -> bool {
    task.due_date == Some(today) && !task.is_completed()
}

pub fn analyze(tasks: &[Task], today: NaiveDate) -> Analytics {
    let week_start = today - Duration::days(7);
    let month_start = today.with_day0(0).unwrap_or(today);
    let week_end = today + Duration::days(7);

    let total_tasks = tasks.len();
    let completed_tasks = tasks.iter().filter(|t| t.is_completed()).count();
    let in_progress_tasks = tasks
        .iter()
        .filter(|t| t.status == TaskStatus::InProgress)
        .count();
    let todo_tasks = tasks.iter().filter(|t| t.status == TaskStatus::Todo).count();

    let overdue_tasks = tasks.iter().filter(|t| is_overdue(t, today)).count();
    let due_today_tasks = tasks.iter().filter(|t| is_due_today(t, today)).count();
    let due_this_week_tasks = tasks
        .iter()
        .filter(|t| {
            matches!(t.due_date, Some(due) if due >= today && due <= week_end)
                && !t.is_completed()
        })
        .count();

    let weekly_completed = tasks
        .iter()
        .filter(|t| t.is_completed() && t.created_at.date_naive() >= week_start)
        .count();
    let monthly_completed = tasks
        .iter()
        .filter(|t| t.is_completed() && t.created_at.date_naive() >= month_start)
        .count();

    let category_stats: Vec<CategoryStat> = TASK_CATEGORIES
        .iter()
        .map(|category| {
            let total = tasks.iter().filter(|t| t.category == category.id).count();
            let completed = tasks
                .iter()
                .filter(|t| t.category == category.id && t.is_completed())
                .count();
            CategoryStat {
                id: category.id,
                label: category.label,
                total,
                completed,
                completion_rate: rate(completed, total),
            }
        })
        .filter(|stat| stat.total > 0)
        .collect();

    let priority_stats: Vec<PriorityStat> =
        [TaskPriority::High, TaskPriority::Medium, TaskPriority::Low]
            .into_iter()
            .map(|priority| PriorityStat {
                priority,
                count: tasks.iter().filter(|t| t.priority == priority).count(),
            })
            .filter(|stat| stat.count > 0)
            .collect();

    let daily_trend: Vec<DayTrend> = (0..7)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            let completed = tasks
                .iter()
                .filter(|t| t.is_completed() && t.created_at.date_naive() == date)
                .count();
            DayTrend { date, completed }
        })
        .collect();

    // Strict comparison keeps the earliest category on ties, matching the
    // fixed category order category_stats is built in.
    let most_active_category = category_stats
        .iter()
        .fold(None::<&CategoryStat>, |best, stat| match best {
            Some(b) if b.total >= stat.total => Some(b),
            _ => Some(stat),
        })
        .cloned();

    Analytics {
        total_tasks,
        completed_tasks,
        in_progress_tasks,
        todo_tasks,
        overdue_tasks,
        due_today_tasks,
        due_this_week_tasks,
        completion_rate: rate(completed_tasks, total_tasks),
        weekly_completed,
        monthly_completed,
        category_stats,
        priority_stats,
        daily_trend,
        most_active_category,
    }
}

/// One day of the per-day completion ratio strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayProgress {
    pub date: NaiveDate,
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgressOverview {
    /// Completion percentage among tasks created in the trailing 7 days.
    pub weekly_progress: u32,
    /// Week-over-week change in completed count, in percent.
    pub weekly_change: i32,
    /// Last 7 calendar days, oldest first.
    pub daily_progress: Vec<DayProgress>,
}

pub fn progress_overview(tasks: &[Task], today: NaiveDate) -> ProgressOverview {
    let week_start = today - Duration::days(7);
    let prev_week_start = today - Duration::days(14);

    let this_week_completed = tasks
        .iter()
        .filter(|t| t.is_completed() && t.created_at.date_naive() >= week_start)
        .count();
    let last_week_completed = tasks
        .iter()
        .filter(|t| {
            let created = t.created_at.date_naive();
            t.is_completed() && created >= prev_week_start && created < week_start
        })
        .count();
    let this_week_total = tasks
        .iter()
        .filter(|t| t.created_at.date_naive() >= week_start)
        .count();

    let weekly_change = if last_week_completed > 0 {
        let delta = this_week_completed as f64 - last_week_completed as f64;
        ((delta / last_week_completed as f64) * 100.0).round() as i32
    } else if this_week_completed > 0 {
        100
    } else {
        0
    };

    let daily_progress: Vec<DayProgress> = (0..7)
        .map(|i| {
            let date = today - Duration::days(6 - i);
            let total = tasks
                .iter()
                .filter(|t| t.created_at.date_naive() == date)
                .count();
            let completed = tasks
                .iter()
                .filter(|t| t.is_completed() && t.created_at.date_naive() == date)
                .count();
            DayProgress {
                date,
                completed,
                total,
                percent: rate(completed, total),
            }
        })
        .collect();

    ProgressOverview {
        weekly_progress: rate(this_week_completed, this_week_total),
        weekly_change,
        daily_progress,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductivityLevel {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ProductivityLevel {
    pub fn label(self) -> &'static str {
        match self {
            ProductivityLevel::Excellent => "Excellent",
            ProductivityLevel::Good => "Good",
            ProductivityLevel::Fair => "Fair",
            ProductivityLevel::NeedsWork => "Needs Work",
        }
    }

    fn for_score(score: u32) -> Self {
        match score {
            80.. => ProductivityLevel::Excellent,
            60..=79 => ProductivityLevel::Good,
            40..=59 => ProductivityLevel::Fair,
            _ => ProductivityLevel::NeedsWork,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductivityStats {
    /// completion rate minus overdue rate, clamped to [0, 100].
    pub score: u32,
    pub level: ProductivityLevel,
    /// Tasks in today's focus: due today or created today.
    pub focus_total: usize,
    pub focus_completed: usize,
    pub focus_in_progress: usize,
    /// Rough estimate: half an hour saved per task completed this week.
    pub hours_saved: f64,
}

pub fn productivity(tasks: &[Task], today: NaiveDate) -> ProductivityStats {
    let week_start = today - Duration::days(7);

    let total = tasks.len();
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    let overdue = tasks.iter().filter(|t| is_overdue(t, today)).count();

    let score = if total > 0 {
        let completion_rate = (completed as f64 / total as f64) * 100.0;
        let overdue_rate = (overdue as f64 / total as f64) * 100.0;
        (completion_rate - overdue_rate).clamp(0.0, 100.0).round() as u32
    } else {
        0
    };

    fn created_on(task: &Task, date: NaiveDate) -> bool {
        task.created_at.date_naive() == date
    }
    let due_today_count = tasks.iter().filter(|t| is_due_today(t, today)).count();
    let created_today_count = tasks.iter().filter(|t| created_on(t, today)).count();
    let focus_completed = tasks
        .iter()
        .filter(|t| t.is_completed() && created_on(t, today))
        .count();
    let focus_in_progress = tasks
        .iter()
        .filter(|t| {
            t.status == TaskStatus::InProgress && (is_due_today(t, today) || created_on(t, today))
        })
        .count();

    let weekly_completed = tasks
        .iter()
        .filter(|t| t.is_completed() && t.created_at.date_naive() >= week_start)
        .count();

    ProductivityStats {
        score,
        level: ProductivityLevel::for_score(score),
        focus_total: due_today_count.max(created_today_count),
        focus_completed,
        focus_in_progress,
        hours_saved: weekly_completed as f64 * 0.5,
    }
}

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use proptest::prelude::*;
use rstest::rstest;
use taskdeck_core::analytics::{analyze, productivity, progress_overview, ProductivityLevel};
use taskdeck_core::models::*;
use taskdeck_core::notifications::generate;
use taskdeck_core::suggestions::evaluate;

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 25).expect("valid date")
}

/// Builds a task created `days_ago` days before the fixed test date.
fn task(title: &str, days_ago: i64) -> Task {
    let created = fixed_today() - Duration::days(days_ago);
    Task {
        title: title.to_string(),
        created_at: Utc
            .from_utc_datetime(&created.and_hms_opt(12, 0, 0).expect("valid time")),
        ..Default::default()
    }
}

fn completed(mut t: Task) -> Task {
    t.status = TaskStatus::Completed;
    t.progress = 100;
    t
}

fn due_in(mut t: Task, days: i64) -> Task {
    t.due_date = Some(fixed_today() + Duration::days(days));
    t
}

fn high(mut t: Task) -> Task {
    t.priority = TaskPriority::High;
    t
}

fn in_category(mut t: Task, category: &str) -> Task {
    t.category = category.to_string();
    t
}

// ===== Analytics =====

#[test]
fn test_analyze_counts_and_rates() {
    let today = fixed_today();
    let tasks = vec![
        completed(task("done today", 0)),
        completed(task("done last month", 40)),
        due_in(task("overdue", 5), -2),
        due_in(task("due today", 3), 0),
        due_in(task("due this week", 3), 6),
        due_in(task("due later", 3), 20),
    ];

    let analytics = analyze(&tasks, today);
    assert_eq!(analytics.total_tasks, 6);
    assert_eq!(analytics.completed_tasks, 2);
    assert_eq!(analytics.todo_tasks, 4);
    assert_eq!(analytics.completion_rate, 33);
    assert_eq!(analytics.overdue_tasks, 1);
    assert_eq!(analytics.due_today_tasks, 1);
    // Due-this-week includes today and the 6-day mark but not day 20.
    assert_eq!(analytics.due_this_week_tasks, 2);
    // Weekly completed keys off creation date, so the 40-day-old
    // completion does not count.
    assert_eq!(analytics.weekly_completed, 1);
}

#[test]
fn test_due_today_becomes_overdue_as_time_advances() {
    let tasks = vec![high(due_in(in_category(task("Write report", 0), "work"), 0))];

    let analytics = analyze(&tasks, fixed_today());
    assert_eq!(analytics.due_today_tasks, 1);
    assert_eq!(analytics.overdue_tasks, 0);

    let analytics = analyze(&tasks, fixed_today() + Duration::days(2));
    assert_eq!(analytics.due_today_tasks, 0);
    assert_eq!(analytics.overdue_tasks, 1);
}

#[test]
fn test_weekly_completed_uses_trailing_window() {
    let tasks = vec![
        completed(task("old", 10)),
        completed(task("recent", 3)),
    ];
    let analytics = analyze(&tasks, fixed_today());
    assert_eq!(analytics.weekly_completed, 1);
    assert_eq!(analytics.monthly_completed, 2);
}

#[test]
fn test_analyze_empty_collection() {
    let analytics = analyze(&[], fixed_today());
    assert_eq!(analytics.completion_rate, 0);
    assert!(analytics.category_stats.is_empty());
    assert!(analytics.priority_stats.is_empty());
    assert!(analytics.most_active_category.is_none());
    assert_eq!(analytics.daily_trend.len(), 7);
}

#[test]
fn test_completed_tasks_are_never_overdue() {
    let tasks = vec![completed(due_in(task("late but done", 10), -5))];
    let analytics = analyze(&tasks, fixed_today());
    assert_eq!(analytics.overdue_tasks, 0);
    assert_eq!(analytics.due_today_tasks, 0);
}

#[test]
fn test_most_active_category_tie_breaks_to_fixed_order() {
    // personal comes before hobby in the fixed category order.
    let tasks = vec![
        in_category(task("h1", 0), "hobby"),
        in_category(task("h2", 0), "hobby"),
        in_category(task("p1", 0), "personal"),
        in_category(task("p2", 0), "personal"),
    ];
    let analytics = analyze(&tasks, fixed_today());
    let most_active = analytics.most_active_category.expect("some category");
    assert_eq!(most_active.id, "personal");
}

#[test]
fn test_daily_trend_window() {
    let tasks = vec![
        completed(task("today", 0)),
        completed(task("three days ago", 3)),
        completed(task("eight days ago", 8)),
    ];
    let analytics = analyze(&tasks, fixed_today());
    let trend = &analytics.daily_trend;
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].date, fixed_today() - Duration::days(6));
    assert_eq!(trend[6].date, fixed_today());
    assert_eq!(trend[6].completed, 1);
    assert_eq!(trend[3].completed, 1);
    // The 8-day-old completion falls outside the window entirely.
    assert_eq!(trend.iter().map(|d| d.completed).sum::<usize>(), 2);
}

#[test]
fn test_progress_overview_weekly_change() {
    // Two completed last week, three this week: +50%.
    let tasks = vec![
        completed(task("this 1", 1)),
        completed(task("this 2", 2)),
        completed(task("this 3", 3)),
        completed(task("last 1", 9)),
        completed(task("last 2", 10)),
    ];
    let overview = progress_overview(&tasks, fixed_today());
    assert_eq!(overview.weekly_change, 50);
    assert_eq!(overview.daily_progress.len(), 7);

    // No completions last week but some this week reads as +100%.
    let tasks = vec![completed(task("only this week", 1))];
    let overview = progress_overview(&tasks, fixed_today());
    assert_eq!(overview.weekly_change, 100);

    // Nothing either week is flat.
    let overview = progress_overview(&[], fixed_today());
    assert_eq!(overview.weekly_change, 0);
}

#[rstest]
#[case(100, ProductivityLevel::Excellent)]
#[case(80, ProductivityLevel::Excellent)]
#[case(79, ProductivityLevel::Good)]
#[case(60, ProductivityLevel::Good)]
#[case(59, ProductivityLevel::Fair)]
#[case(40, ProductivityLevel::Fair)]
#[case(39, ProductivityLevel::NeedsWork)]
#[case(0, ProductivityLevel::NeedsWork)]
fn test_productivity_banding(#[case] score: u32, #[case] expected: ProductivityLevel) {
    // Drive the score through a synthetic collection: `score`% completed,
    // no overdue tasks.
    let total = 100usize;
    let mut tasks: Vec<Task> = (0..score as usize)
        .map(|i| completed(task(&format!("done {i}"), 0)))
        .collect();
    tasks.extend((score as usize..total).map(|i| task(&format!("open {i}"), 0)));

    let stats = productivity(&tasks, fixed_today());
    assert_eq!(stats.score, score);
    assert_eq!(stats.level, expected);
}

#[test]
fn test_productivity_overdue_penalty_and_hours_saved() {
    let tasks = vec![
        completed(task("done", 1)),
        due_in(task("late", 5), -3),
        task("open", 0),
        task("open 2", 0),
    ];
    // 25% completed minus 25% overdue clamps at 0.
    let stats = productivity(&tasks, fixed_today());
    assert_eq!(stats.score, 0);
    assert_eq!(stats.level, ProductivityLevel::NeedsWork);
    assert_eq!(stats.hours_saved, 0.5);
}

proptest! {
    #[test]
    fn prop_completion_rate_is_bounded(completed_count in 0usize..50, open_count in 0usize..50) {
        let mut tasks: Vec<Task> = (0..completed_count)
            .map(|i| completed(task(&format!("c{i}"), 0)))
            .collect();
        tasks.extend((0..open_count).map(|i| task(&format!("o{i}"), 0)));

        let analytics = analyze(&tasks, fixed_today());
        prop_assert!(analytics.completion_rate <= 100);

        let stats = productivity(&tasks, fixed_today());
        prop_assert!(stats.score <= 100);
    }
}

// ===== Notifications =====

fn now_at_fixed_today() -> chrono::DateTime<Utc> {
    Utc.from_utc_datetime(&fixed_today().and_hms_opt(9, 0, 0).expect("valid time"))
}

#[test]
fn test_generate_due_today_severity_follows_priority() {
    let tasks = vec![
        due_in(task("normal", 0), 0),
        high(due_in(task("important", 0), 0)),
    ];
    let fresh = generate(&tasks, &[], &NotificationSettings::default(), now_at_fixed_today());

    assert_eq!(fresh.len(), 2);
    let normal = fresh.iter().find(|n| n.message.contains("normal")).expect("present");
    let important = fresh.iter().find(|n| n.message.contains("important")).expect("present");
    assert_eq!(normal.kind, NotificationKind::DueToday);
    assert_eq!(normal.severity, Severity::Medium);
    assert_eq!(important.severity, Severity::High);
}

#[test]
fn test_generate_overdue_message_pluralization() {
    let tasks = vec![
        due_in(task("one day late", 5), -1),
        due_in(task("three days late", 5), -3),
    ];
    let fresh = generate(&tasks, &[], &NotificationSettings::default(), now_at_fixed_today());

    let one = fresh.iter().find(|n| n.message.contains("one day late")).expect("present");
    let three = fresh.iter().find(|n| n.message.contains("three days late")).expect("present");
    assert!(one.message.contains("1 day overdue"));
    assert!(three.message.contains("3 days overdue"));
    assert!(fresh.iter().all(|n| n.severity == Severity::High));
}

#[test]
fn test_generate_reminder_only_at_three_days() {
    let tasks = vec![
        due_in(task("in two", 0), 2),
        due_in(task("in three", 0), 3),
        due_in(task("in four", 0), 4),
    ];
    let fresh = generate(&tasks, &[], &NotificationSettings::default(), now_at_fixed_today());

    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].kind, NotificationKind::Reminder);
    assert!(fresh[0].message.contains("in three"));
}

#[test]
fn test_generate_dedups_per_task_type_and_day() {
    let tasks = vec![due_in(task("repeat", 0), 0)];
    let settings = NotificationSettings::default();

    let first = generate(&tasks, &[], &settings, now_at_fixed_today());
    assert_eq!(first.len(), 1);

    // Re-running the scan with the log carried over produces nothing new.
    let second = generate(&tasks, &first, &settings, now_at_fixed_today());
    assert!(second.is_empty());

    // A later calendar day fires again.
    let tomorrow = now_at_fixed_today() + Duration::days(1);
    let third = generate(&tasks, &first, &settings, tomorrow);
    assert_eq!(third.len(), 1);
    assert_eq!(third[0].kind, NotificationKind::Overdue);
}

#[test]
fn test_generate_respects_settings_switches() {
    let tasks = vec![
        due_in(task("due", 0), 0),
        due_in(task("late", 5), -1),
        due_in(task("soon", 0), 3),
    ];

    let disabled = NotificationSettings {
        enabled: false,
        ..Default::default()
    };
    assert!(generate(&tasks, &[], &disabled, now_at_fixed_today()).is_empty());

    let overdue_only = NotificationSettings {
        due_today: false,
        reminders: false,
        ..Default::default()
    };
    let fresh = generate(&tasks, &[], &overdue_only, now_at_fixed_today());
    assert_eq!(fresh.len(), 1);
    assert_eq!(fresh[0].kind, NotificationKind::Overdue);
}

#[test]
fn test_notification_id_embeds_kind_and_task() {
    let tasks = vec![due_in(task("identified", 0), 0)];
    let fresh = generate(&tasks, &[], &NotificationSettings::default(), now_at_fixed_today());
    let id = &fresh[0].id;
    assert!(id.starts_with("due-today-"));
    assert!(id.contains(&tasks[0].id.to_string()));
}

// ===== Suggestions =====

#[test]
fn test_no_suggestions_for_quiet_collection() {
    let tasks = vec![task("plain", 0)];
    // A lone open work task matches no rule on its own.
    let suggestions = evaluate(&tasks, fixed_today());
    assert!(suggestions.is_empty());
}

#[test]
fn test_high_priority_overdue_rule_and_ordering() {
    let tasks = vec![
        high(due_in(task("late and hot", 5), -1)),
        high(task("hot but unscheduled", 0)),
        due_in(task("due now", 0), 0),
        in_category(task("errand", 0), "personal"),
        in_category(task("job", 0), "work"),
    ];
    let suggestions = evaluate(&tasks, fixed_today());

    let keys: Vec<&str> = suggestions.iter().map(|s| s.key).collect();
    assert_eq!(
        keys,
        vec![
            "high-priority-overdue",
            "due-today",
            "schedule-high-priority",
            "time-slot-recommendation",
        ]
    );
    assert_eq!(suggestions[0].severity, Severity::High);
    assert_eq!(suggestions[3].severity, Severity::Low);
}

#[test]
fn test_breakdown_rule_thresholds() {
    let mut big = task("huge", 0);
    big.estimated_hours = Some(9.0);
    big.progress = 40;

    let suggestions = evaluate(&[big.clone()], fixed_today());
    assert!(suggestions.iter().any(|s| s.key == "break-down-large-tasks"));

    // Enough progress silences the rule.
    big.progress = 50;
    let suggestions = evaluate(&[big.clone()], fixed_today());
    assert!(suggestions.iter().all(|s| s.key != "break-down-large-tasks"));

    // As does a smaller estimate.
    big.progress = 0;
    big.estimated_hours = Some(8.0);
    let suggestions = evaluate(&[big], fixed_today());
    assert!(suggestions.iter().all(|s| s.key != "break-down-large-tasks"));
}

#[test]
fn test_wip_limit_rule() {
    let make_wip = |i: usize| {
        let mut t = task(&format!("wip {i}"), 0);
        t.status = TaskStatus::InProgress;
        t.progress = 10;
        t
    };

    let five: Vec<Task> = (0..5).map(make_wip).collect();
    let suggestions = evaluate(&five, fixed_today());
    assert!(suggestions.iter().all(|s| s.key != "too-many-in-progress"));

    let six: Vec<Task> = (0..6).map(make_wip).collect();
    let suggestions = evaluate(&six, fixed_today());
    assert!(suggestions.iter().any(|s| s.key == "too-many-in-progress"));
}

#[test]
fn test_completion_streak_rule() {
    let four: Vec<Task> = (0..4)
        .map(|i| completed(task(&format!("done {i}"), 1)))
        .collect();
    let suggestions = evaluate(&four, fixed_today());
    assert!(suggestions.iter().all(|s| s.key != "completion-streak"));

    let five: Vec<Task> = (0..5)
        .map(|i| completed(task(&format!("done {i}"), 1)))
        .collect();
    let suggestions = evaluate(&five, fixed_today());
    let streak = suggestions
        .iter()
        .find(|s| s.key == "completion-streak")
        .expect("streak suggestion");
    assert_eq!(streak.severity, Severity::Low);
    assert!(streak.description.contains("5 tasks"));
}

// ===== Parsing helpers =====

#[rstest]
#[case("low", TaskPriority::Low)]
#[case("MEDIUM", TaskPriority::Medium)]
#[case("High", TaskPriority::High)]
fn test_priority_parsing(#[case] input: &str, #[case] expected: TaskPriority) {
    assert_eq!(input.parse::<TaskPriority>().expect("parse"), expected);
}

#[rstest]
#[case("todo", TaskStatus::Todo)]
#[case("in-progress", TaskStatus::InProgress)]
#[case("in_progress", TaskStatus::InProgress)]
#[case("done", TaskStatus::Completed)]
#[case("completed", TaskStatus::Completed)]
fn test_status_parsing(#[case] input: &str, #[case] expected: TaskStatus) {
    assert_eq!(input.parse::<TaskStatus>().expect("parse"), expected);
}

#[test]
fn test_parsing_rejects_unknown_values() {
    assert!("urgent".parse::<TaskPriority>().is_err());
    assert!("paused".parse::<TaskStatus>().is_err());
}

#[rstest]
#[case("a, b, c", vec!["a", "b", "c"])]
#[case("a,,a ,  b", vec!["a", "b"])]
#[case("", vec![])]
#[case("  ,  ,", vec![])]
#[case("A, a", vec!["A", "a"])]
fn test_tag_parsing(#[case] input: &str, #[case] expected: Vec<&str>) {
    assert_eq!(parse_tags(input), expected);
}

use crate::cli::StatsCommand;
use anyhow::Result;
use chrono::Local;
use comfy_table::{Cell, Row, Table};
use owo_colors::{OwoColorize, Style};
use taskdeck_core::analytics::{analyze, productivity, progress_overview};
use taskdeck_core::repository::Repository;

pub async fn show_stats(repo: &impl Repository, command: StatsCommand) -> Result<()> {
    let tasks = repo.all_tasks().await?;
    let today = Local::now().date_naive();

    let analytics = analyze(&tasks, today);
    let overview = progress_overview(&tasks, today);
    let prod = productivity(&tasks, today);

    let heading = Style::new().bold().underline();

    println!("{}", "Overview".style(heading));
    let mut table = Table::new();
    table.set_header(vec!["Total", "Completed", "In Progress", "Todo", "Rate"]);
    table.add_row(vec![
        analytics.total_tasks.to_string(),
        analytics.completed_tasks.to_string(),
        analytics.in_progress_tasks.to_string(),
        analytics.todo_tasks.to_string(),
        format!("{}%", analytics.completion_rate),
    ]);
    println!("{table}");

    println!("\n{}", "Deadlines".style(heading));
    let mut table = Table::new();
    table.set_header(vec!["Overdue", "Due Today", "Due This Week"]);
    table.add_row(vec![
        analytics.overdue_tasks.to_string(),
        analytics.due_today_tasks.to_string(),
        analytics.due_this_week_tasks.to_string(),
    ]);
    println!("{table}");

    println!("\n{}", "Productivity".style(heading));
    println!(
        "  Score: {} ({})",
        prod.score.to_string().bright_white().bold(),
        prod.level.label()
    );
    println!(
        "  This week: {} completed ({}% of tasks created, {:+}% vs last week)",
        analytics.weekly_completed, overview.weekly_progress, overview.weekly_change
    );
    println!("  Estimated hours saved this week: {:.1}", prod.hours_saved);
    println!(
        "  Today's focus: {} of {} done, {} in progress",
        prod.focus_completed, prod.focus_total, prod.focus_in_progress
    );
    if let Some(most_active) = &analytics.most_active_category {
        println!(
            "  Most active category: {} ({} tasks)",
            most_active.label, most_active.total
        );
    }

    if command.detailed {
        if !analytics.category_stats.is_empty() {
            println!("\n{}", "Categories".style(heading));
            let mut table = Table::new();
            table.set_header(vec!["Category", "Total", "Completed", "Rate"]);
            for stat in &analytics.category_stats {
                table.add_row(vec![
                    stat.label.to_string(),
                    stat.total.to_string(),
                    stat.completed.to_string(),
                    format!("{}%", stat.completion_rate),
                ]);
            }
            println!("{table}");
        }

        if !analytics.priority_stats.is_empty() {
            println!("\n{}", "Priorities".style(heading));
            let mut table = Table::new();
            table.set_header(vec!["Priority", "Count"]);
            for stat in &analytics.priority_stats {
                table.add_row(vec![stat.priority.to_string(), stat.count.to_string()]);
            }
            println!("{table}");
        }

        println!("\n{}", "Last 7 Days".style(heading));
        let mut table = Table::new();
        table.set_header(vec!["Date", "Completed", "Created", "Rate"]);
        for (trend, day) in analytics.daily_trend.iter().zip(&overview.daily_progress) {
            let mut row = Row::new();
            row.add_cell(Cell::new(trend.date.format("%a %Y-%m-%d").to_string()));
            row.add_cell(Cell::new(trend.completed.to_string()));
            row.add_cell(Cell::new(day.total.to_string()));
            row.add_cell(Cell::new(format!("{}%", day.percent)));
            table.add_row(row);
        }
        println!("{table}");
    }

    Ok(())
}

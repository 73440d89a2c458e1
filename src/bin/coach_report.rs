// ABOUTME: Developer CLI that runs the full dashboard computation over a JSON week of logs
// ABOUTME: Useful for eyeballing engine output against fixture data without the app
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

use anyhow::{Context, Result};
use clap::Parser;
use macrocoach::clock::{SystemClock, TimeProvider};
use macrocoach::config::IntelligenceConfig;
use macrocoach::intelligence::{
    analyze_week, calculate_streak, current_prompt, detect_milestones, generate_week_calendar,
    get_quick_log_suggestions, get_recent_foods, select_actions, trend_feedback,
};
use macrocoach::logging::{init_logging, LoggingConfig};
use macrocoach::models::DailyFoodLog;
use std::path::PathBuf;

/// Run the coaching engine over a week of food logs and print the results
#[derive(Parser, Debug)]
#[command(name = "coach-report", version, about)]
struct Args {
    /// Path to a JSON array of DailyFoodLog objects (oldest first)
    #[arg(long)]
    week: PathBuf,

    /// Lifetime meal count, for milestone detection
    #[arg(long, default_value_t = 0)]
    total_meals: u32,

    /// Streak freezes already used this month
    #[arg(long, default_value_t = 0)]
    freezes_used: u32,

    /// Emit the full result set as JSON instead of a text summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&LoggingConfig::default())?;

    let raw = std::fs::read_to_string(&args.week)
        .with_context(|| format!("reading {}", args.week.display()))?;
    let week: Vec<DailyFoodLog> =
        serde_json::from_str(&raw).context("parsing week logs")?;

    let config = IntelligenceConfig::global();
    let clock = SystemClock;
    let today = week.iter().find(|l| l.date == clock.today());

    let calendar = generate_week_calendar(&week, &clock, &config.streak);
    let streak = calculate_streak(&calendar);
    let status =
        macrocoach::intelligence::streak_status(&week, args.freezes_used, &clock, &config.streak);
    let trend = analyze_week(&week, &config.adherence);
    let actions = select_actions(today, streak, &clock, config.actions.api_cap);
    let prompt = current_prompt(today, &clock);
    let milestones = detect_milestones(
        today,
        &week,
        args.total_meals,
        streak,
        &clock,
        &config.adherence,
    );
    let recent = get_recent_foods(&week);
    let quick_log = get_quick_log_suggestions(&week);
    let message = trend_feedback(trend.trend, &mut rand::thread_rng());

    if args.json {
        let report = serde_json::json!({
            "calendar": calendar,
            "streak": streak,
            "streak_status": status,
            "trend": trend,
            "actions": actions,
            "prompt": prompt,
            "milestones": milestones,
            "recent_foods": recent,
            "quick_log_suggestions": quick_log,
            "coach_message": message,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "streak: {streak} day(s), {} freeze(s) available{}",
        status.freezes_available,
        if status.grace_active {
            " (grace window active)"
        } else {
            ""
        }
    );
    println!(
        "week: {} day(s) logged, {:.0}% adherence, trend {:?}",
        trend.days_logged, trend.adherence_rate, trend.trend
    );
    println!("coach says: {}", message.text);
    if let Some(prompt) = prompt {
        println!("prompt: {}", prompt.message);
    }
    for milestone in &milestones {
        println!("milestone: {}", milestone.title);
    }
    println!("actions:");
    for action in &actions {
        println!("  [{:>3}] {}", action.priority, action.title);
    }
    if !recent.is_empty() {
        println!("recent foods:");
        for food in &recent {
            println!("  {} x{}", food.name, food.times_logged);
        }
    }
    if !quick_log.is_empty() {
        println!("quick-log suggestions:");
        for suggestion in &quick_log {
            println!(
                "  {} ({}) x{} ~{:.0} kcal",
                suggestion.name,
                suggestion.meal_type.label(),
                suggestion.times_logged,
                suggestion.avg_calories
            );
        }
    }
    Ok(())
}

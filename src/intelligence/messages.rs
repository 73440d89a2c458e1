// ABOUTME: Coach-style feedback messages selected from per-band phrase pools
// ABOUTME: Randomness is injected so tests can pin the pick with a seeded RNG
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2026 Macrocoach Project

//! # Coach Message Generator
//!
//! Maps adherence bands and week trends to one of several pre-authored
//! message variants. Selection among same-band variants is uniform random -
//! a presentation variance mechanism only; nothing guarantees global message
//! diversity across repeated calls.
//!
//! The random source is a caller-supplied [`rand::Rng`]: production passes
//! `rand::thread_rng()`, tests pass a seeded `rand_chacha::ChaCha8Rng`.

use crate::config::AdherenceConfig;
use crate::intelligence::adherence::{day_adherence, AdherenceBand, WeekTrend};
use crate::models::DailyFoodLog;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Overall register of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageTone {
    /// Things are going well
    Celebratory,
    /// Nudging, still positive
    Encouraging,
    /// Something needs adjusting
    Corrective,
}

/// A one-shot coach-style message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoachMessage {
    /// Message copy
    pub text: String,
    /// Register the UI can style on
    pub tone: MessageTone,
    /// Band that produced the message, when band-driven
    pub band: Option<AdherenceBand>,
}

const ON_TARGET_POOL: [&str; 3] = [
    "Dialed in. Calories and protein right where they should be.",
    "That's what a target day looks like. Nice work.",
    "On the nose today. Repeat tomorrow and the streak takes care of itself.",
];

const SLIGHTLY_OVER_POOL: [&str; 3] = [
    "A touch over today. Nothing a normal tomorrow won't absorb.",
    "Slightly above target - worth a lighter dinner, not a worry.",
    "Over by a little. Zoom out: the week matters more than the day.",
];

const WAY_OVER_POOL: [&str; 2] = [
    "Well past target today. Reset tonight, protein-forward tomorrow.",
    "Big day. One day never ruins a week - get the next meal right.",
];

const SLIGHTLY_UNDER_POOL: [&str; 3] = [
    "A bit under target. Add a snack if you're genuinely hungry.",
    "Slightly under - fine occasionally, just don't make it a habit.",
    "Under target today. Fuel matters as much as restraint.",
];

const WAY_UNDER_POOL: [&str; 2] = [
    "Well under target. Under-eating costs you muscle, not fat.",
    "Too low today. Tomorrow, plan the protein first and build around it.",
];

const TREND_IMPROVING_POOL: [&str; 2] = [
    "Logging picked up through the week. Momentum looks real.",
    "Stronger back half of the week - keep that going.",
];

const TREND_DECLINING_POOL: [&str; 2] = [
    "Logging tailed off this week. One entry today restarts the habit.",
    "The week faded at the end. Tomorrow morning is the easiest restart.",
];

const TREND_STEADY_POOL: [&str; 2] = [
    "Steady week of logging. Consistency is the whole game.",
    "Holding the line week over week. That's how habits stick.",
];

const TREND_NEW_POOL: [&str; 2] = [
    "Welcome! Log your first meal and the picture starts building.",
    "Day one. A single logged meal is all it takes to start.",
];

fn pick<R: Rng>(pool: &[&str], rng: &mut R) -> String {
    pool[rng.gen_range(0..pool.len())].to_owned()
}

const fn band_tone(band: AdherenceBand) -> MessageTone {
    match band {
        AdherenceBand::OnTarget => MessageTone::Celebratory,
        AdherenceBand::SlightlyOver | AdherenceBand::SlightlyUnder => MessageTone::Encouraging,
        AdherenceBand::WayOver | AdherenceBand::WayUnder => MessageTone::Corrective,
    }
}

/// Band-driven feedback for a single day. `None` when the day has no entries
/// or no usable targets - silence beats a misleading message.
#[must_use]
pub fn daily_feedback<R: Rng>(
    log: &DailyFoodLog,
    config: &AdherenceConfig,
    rng: &mut R,
) -> Option<CoachMessage> {
    if !log.has_entries() {
        return None;
    }
    let overall = day_adherence(log).overall?;
    let band = AdherenceBand::classify(overall, config);
    let pool: &[&str] = match band {
        AdherenceBand::OnTarget => &ON_TARGET_POOL,
        AdherenceBand::SlightlyOver => &SLIGHTLY_OVER_POOL,
        AdherenceBand::WayOver => &WAY_OVER_POOL,
        AdherenceBand::SlightlyUnder => &SLIGHTLY_UNDER_POOL,
        AdherenceBand::WayUnder => &WAY_UNDER_POOL,
    };
    Some(CoachMessage {
        text: pick(pool, rng),
        tone: band_tone(band),
        band: Some(band),
    })
}

/// Trend-driven feedback for the week summary card
#[must_use]
pub fn trend_feedback<R: Rng>(trend: WeekTrend, rng: &mut R) -> CoachMessage {
    let (pool, tone): (&[&str], MessageTone) = match trend {
        WeekTrend::Improving => (&TREND_IMPROVING_POOL, MessageTone::Celebratory),
        WeekTrend::Declining => (&TREND_DECLINING_POOL, MessageTone::Corrective),
        WeekTrend::Steady => (&TREND_STEADY_POOL, MessageTone::Encouraging),
        WeekTrend::New => (&TREND_NEW_POOL, MessageTone::Encouraging),
    };
    CoachMessage {
        text: pick(pool, rng),
        tone,
        band: None,
    }
}

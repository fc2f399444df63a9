//! Fixed advice attached to every recommendation.

/// Ways to cut cost without losing much of the race weekend.
pub const SAVE_TIPS: [&str; 2] = [
    "Fly mid-week and arrive Thursday to reduce race-week fare spikes.",
    "Stay 3-7 km from circuit and use train/metro instead of event-zone hotels.",
];

/// Where extra spend buys the most experience.
pub const SPLURGE_TIPS: [&str; 2] = [
    "Spend extra on race-day grandstand quality for the highest experience jump.",
    "Choose one premium F1 add-on: paddock-style tour, simulator, or track walk.",
];

pub(crate) fn owned(tips: &[&str]) -> Vec<String> {
    tips.iter().map(|tip| (*tip).to_owned()).collect()
}

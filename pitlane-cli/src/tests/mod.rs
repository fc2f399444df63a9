//! Shared test harness modules for the Pitlane CLI.

use super::*;

mod helpers;
mod recommend_steps;

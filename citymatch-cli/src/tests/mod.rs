//! Shared test harness modules for the citymatch CLI.

use super::*;

mod helpers;
mod steps;

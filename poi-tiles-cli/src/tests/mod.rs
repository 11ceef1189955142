//! Shared test harness modules for the POI tiles CLI.

use super::*;

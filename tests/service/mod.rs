//! Integration tests for the screen services.
//!
//! Each test drives a service's `FetchOrchestrator` against a mock OneBusAway server and an
//! in-memory region store, covering online refreshes, offline fallbacks, and the cached
//! read models the screens consume.

mod agency;

use obakit::model::fetch::{CycleOutcome, LoadStatus};
use obakit_test_utils::prelude::*;

use crate::util::TestContextExt;

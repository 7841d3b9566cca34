//! Test configuration constants for OneBusAway client setup.
//!
//! These values are placeholders used across all tests; none of them is a real credential.

/// API key sent by test clients. Mock endpoints accept any key.
pub static TEST_API_KEY: &str = "test-api-key";

/// Region identifier used for test persistence services.
pub const TEST_REGION_ID: i64 = 1;

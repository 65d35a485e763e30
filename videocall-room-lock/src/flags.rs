/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

//! Feature flags for the room-lock prompt.
//!
//! Flags are loaded lazily from environment variables on first access.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

/// Environment variable prefix for feature flags
const ENV_PREFIX: &str = "FEATURE_";

/// Override states for testing
const OVERRIDE_NONE: u8 = 0;
const OVERRIDE_TRUE: u8 = 1;
const OVERRIDE_FALSE: u8 = 2;

/// Test override for cancel_aborts_join
static CANCEL_ABORTS_JOIN_OVERRIDE: AtomicU8 = AtomicU8::new(OVERRIDE_NONE);

/// What cancelling the password prompt does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CancelPolicy {
    /// Retry the join without a password. If the room is still locked the
    /// session layer asks again.
    #[default]
    RetryWithoutPassword,
    /// Close the prompt and drop the pending password request.
    Abort,
}

/// Room-lock flags singleton, lazily initialized from environment variables.
#[derive(Debug, Clone)]
pub struct RoomLockFlags {
    /// Env: FEATURE_PASSWORD_CANCEL_ABORTS_JOIN=true
    pub cancel_aborts_join: bool,
}

impl RoomLockFlags {
    fn from_env() -> Self {
        Self {
            cancel_aborts_join: env_flag("PASSWORD_CANCEL_ABORTS_JOIN"),
        }
    }

    /// Get the global flags instance.
    pub fn global() -> &'static Self {
        static FLAGS: OnceLock<RoomLockFlags> = OnceLock::new();
        FLAGS.get_or_init(RoomLockFlags::from_env)
    }

    pub fn cancel_policy(&self) -> CancelPolicy {
        if self.cancel_aborts_join {
            CancelPolicy::Abort
        } else {
            CancelPolicy::RetryWithoutPassword
        }
    }

    /// Cancel policy for new prompts. Respects test overrides if set.
    pub fn current_cancel_policy() -> CancelPolicy {
        match CANCEL_ABORTS_JOIN_OVERRIDE.load(Ordering::SeqCst) {
            OVERRIDE_TRUE => CancelPolicy::Abort,
            OVERRIDE_FALSE => CancelPolicy::RetryWithoutPassword,
            _ => Self::global().cancel_policy(),
        }
    }

    /// Force `cancel_aborts_join` regardless of the environment.
    ///
    /// Only available with the `testing` feature enabled.
    #[cfg(any(test, feature = "testing"))]
    pub fn set_cancel_aborts_join_override(enabled: bool) {
        let value = if enabled {
            OVERRIDE_TRUE
        } else {
            OVERRIDE_FALSE
        };
        CANCEL_ABORTS_JOIN_OVERRIDE.store(value, Ordering::SeqCst);
    }

    /// Go back to the environment value.
    ///
    /// Only available with the `testing` feature enabled.
    #[cfg(any(test, feature = "testing"))]
    pub fn clear_cancel_aborts_join_override() {
        CANCEL_ABORTS_JOIN_OVERRIDE.store(OVERRIDE_NONE, Ordering::SeqCst);
    }
}

/// `FEATURE_<name>` is on when set to `true`, `1` or `yes` (any case).
fn env_flag(name: &str) -> bool {
    std::env::var(format!("{ENV_PREFIX}{name}")).is_ok_and(|value| {
        let value = value.to_ascii_lowercase();
        value == "true" || value == "1" || value == "yes"
    })
}

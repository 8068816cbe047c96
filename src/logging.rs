//! Internal logging helpers for structured composition events.
//!
//! Only composition is ever logged; `evaluate` sits on hot paths and stays silent.

/// Single logging target for the crate.
pub(crate) const LOG_TARGET: &str = "tola_bipred";

macro_rules! bipred_log {
    ($level:expr, $event:expr, $fmt:expr $(, $args:expr)* $(,)?) => {{
        if log::log_enabled!(target: crate::logging::LOG_TARGET, $level) {
            log::log!(
                target: crate::logging::LOG_TARGET,
                $level,
                "event={} {}",
                $event,
                format_args!($fmt $(, $args)*)
            );
        }
    }};
}

pub(crate) use bipred_log;

//! Wires the upgrade policy onto the entry points a host process exposes.
//!
//! The host hands in its entry-point references once, at startup, and gets
//! back enforced equivalents plus a report of what was wrapped. A window
//! scope that turns out to be the same object as the process scope reuses the
//! process wrapper, so the policy never runs twice for one call.

use std::sync::Arc;

use crate::fetch::{EnforcedFetch, Fetch};
use crate::legacy::{EnforcedOpen, OpenRequest};
use crate::policy::UpgradePolicy;

/// Entry-point references a host process exposes.
pub struct ClientScopes {
    /// Process-wide fetch entry point.
    pub process: Arc<dyn Fetch>,
    /// Window/UI-scoped fetch entry point, if the environment has one.
    pub window: Option<Arc<dyn Fetch>>,
    /// Legacy request-object API, if the environment has one.
    pub legacy: Option<Box<dyn OpenRequest + Send>>,
}

/// Which mechanisms `install` wrapped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InstallReport {
    pub process_wrapped: bool,
    pub window_wrapped: bool,
    /// True when the window scope was the same object as the process scope
    /// and shares its wrapper instead of being wrapped again.
    pub window_aliased: bool,
    pub legacy_wrapped: bool,
}

/// Enforced equivalents of the handed-in scopes.
pub struct EnforcedScopes {
    pub process: Arc<EnforcedFetch>,
    pub window: Option<Arc<EnforcedFetch>>,
    pub legacy: Option<EnforcedOpen<Box<dyn OpenRequest + Send>>>,
    pub report: InstallReport,
}

/// Wraps every distinct entry point in `scopes` with `policy`.
///
/// Aliasing between the process and window scopes is detected by pointer
/// identity of the handed references; nothing stronger is assumed.
pub fn install(policy: UpgradePolicy, scopes: ClientScopes) -> EnforcedScopes {
    let mut report = InstallReport {
        process_wrapped: true,
        ..Default::default()
    };

    let process = Arc::new(EnforcedFetch::new(
        Arc::clone(&scopes.process),
        policy.clone(),
    ));

    let window = scopes.window.map(|w| {
        if Arc::ptr_eq(&w, &scopes.process) {
            report.window_aliased = true;
            Arc::clone(&process)
        } else {
            report.window_wrapped = true;
            Arc::new(EnforcedFetch::new(w, policy.clone()))
        }
    });

    let legacy = scopes.legacy.map(|h| {
        report.legacy_wrapped = true;
        EnforcedOpen::new(h, policy)
    });

    tracing::info!(
        "https enforcement installed: process=wrapped window={} legacy={}",
        if report.window_wrapped {
            "wrapped"
        } else if report.window_aliased {
            "aliased"
        } else {
            "absent"
        },
        if report.legacy_wrapped { "wrapped" } else { "absent" },
    );

    EnforcedScopes {
        process,
        window,
        legacy,
        report,
    }
}

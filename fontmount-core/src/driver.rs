//! The per-file registration loop.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::reference::FontReference;
use crate::registry::FontRegistry;

/// What the invocation asks the font manager to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    Add,
    Remove,
}

/// Outcome of one argument after the font manager was consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegistrationResult {
    Registered,
    Unregistered,
    OperationFailed,
}

/// Per-argument report row, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationReport {
    /// The raw argument as given, pair syntax included.
    pub spec: String,
    pub result: RegistrationResult,
    /// Operator-facing reason when `result` is `OperationFailed`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Run `task` over `args` in input order.
///
/// Failures are independent; one bad file never aborts the batch.
/// Exactly one font-table-changed broadcast fires after a non-empty batch;
/// an empty batch touches neither the font manager nor the broadcast.
pub fn process(task: Task, args: &[String], registry: &dyn FontRegistry) -> Vec<RegistrationReport> {
    if args.is_empty() {
        return Vec::new();
    }

    let mut reports = Vec::with_capacity(args.len());
    for arg in args {
        reports.push(process_one(task, arg, registry));
    }

    registry.broadcast_change();
    debug!("font table change broadcast after {} file(s)", args.len());
    reports
}

fn process_one(task: Task, arg: &str, registry: &dyn FontRegistry) -> RegistrationReport {
    if let Err(err) = FontReference::parse(arg).validate() {
        debug!("{arg}: validation failed: {err}");
        return RegistrationReport {
            spec: arg.to_string(),
            result: RegistrationResult::OperationFailed,
            error: Some(err.to_string()),
        };
    }

    let accepted = match task {
        Task::Add => registry.register(arg),
        Task::Remove => registry.unregister(arg),
    };
    debug!(
        "{arg}: font manager {}",
        if accepted { "accepted" } else { "refused" }
    );

    if !accepted {
        let verb = match task {
            Task::Add => "add",
            Task::Remove => "remove",
        };
        return RegistrationReport {
            spec: arg.to_string(),
            result: RegistrationResult::OperationFailed,
            error: Some(format!("font manager refused to {verb} {arg}")),
        };
    }

    RegistrationReport {
        spec: arg.to_string(),
        result: match task {
            Task::Add => RegistrationResult::Registered,
            Task::Remove => RegistrationResult::Unregistered,
        },
        error: None,
    }
}

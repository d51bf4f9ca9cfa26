//! Decides which sub-activities count toward the summary and the score.

use crate::domain::ActivityInstance;

/// Whether the instance will give a score
///
/// A self-declared flag is authoritative. The catalog is only consulted when
/// the content says nothing, since runtime instantiation can hide the
/// concrete library type.
pub fn is_task(instance: &ActivityInstance) -> bool {
    match instance.declared_task {
        Some(declared) => declared,
        None => instance.content_type().in_task_catalog(),
    }
}

/// Whether the instance is shown in the summary and counted in totals
///
/// Read-only types are excluded unless the content declares itself a task.
/// Conditional containers count only when they resolve to a task. Anything
/// else, including unknown types, is eligible.
pub fn is_eligible(instance: &ActivityInstance) -> bool {
    let content = instance.content_type();

    if content.is_read_only() {
        return instance.declared_task == Some(true);
    }

    if content.is_conditional() {
        return is_task(instance);
    }

    true
}

/// At least one instance can contribute a score
pub fn has_eligible_activity(instances: &[ActivityInstance]) -> bool {
    instances.iter().any(is_eligible)
}

//! Input validation for roadmap data.
//!
//! Checks structural integrity of deliveries and milestones at the form /
//! persistence boundary. Detects:
//! - Duplicate IDs (across deliveries, sub-deliveries and milestones)
//! - Intervals whose end precedes their start
//! - Period milestones without an end date, point milestones with one
//! - Sub-deliveries whose `completed` flag disagrees with their status
//! - Links to unknown deliveries, and self-links
//!
//! The engines do not require validated input; they tolerate every one of
//! these conditions. Validation exists so the caller can reject bad input
//! before it is stored.

use std::collections::HashSet;

use crate::models::{Delivery, Milestone};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Id of the offending entity.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two entities share the same ID.
    DuplicateId,
    /// End date before start date.
    InvalidInterval,
    /// `is_period` and `end_date` disagree.
    InconsistentPeriod,
    /// Sub-delivery `completed` flag disagrees with its status.
    InconsistentCompletion,
    /// A linked id matches no delivery.
    UnknownLink,
    /// A delivery links to itself.
    SelfLink,
}

impl ValidationError {
    fn new(
        kind: ValidationErrorKind,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

/// Validates a roadmap.
///
/// Checks:
/// 1. No id is used twice, by any entity kind
/// 2. Every delivery, sub-delivery and period milestone ends on or after its start
/// 3. Period milestones carry `end_date`; point milestones do not
/// 4. Sub-delivery `completed` matches `status == completed`
/// 5. Linked ids name existing deliveries other than the source
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_roadmap(deliveries: &[Delivery], milestones: &[Milestone]) -> ValidationResult {
    let mut errors = Vec::new();

    let mut seen = HashSet::new();
    let mut check_id = |id: &str, what: &str, errors: &mut Vec<ValidationError>| {
        if !seen.insert(id.to_string()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                id,
                format!("Duplicate {what} ID: {id}"),
            ));
        }
    };

    for delivery in deliveries {
        check_id(&delivery.id, "delivery", &mut errors);
        for sub in &delivery.sub_deliveries {
            check_id(&sub.id, "sub-delivery", &mut errors);
        }
    }
    for milestone in milestones {
        check_id(&milestone.id, "milestone", &mut errors);
    }

    for delivery in deliveries {
        if delivery.date_range().is_inverted() {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                &delivery.id,
                format!(
                    "Delivery '{}' ends {} before it starts {}",
                    delivery.id, delivery.end_date, delivery.start_date
                ),
            ));
        }

        for sub in &delivery.sub_deliveries {
            if sub.date_range().is_inverted() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InvalidInterval,
                    &sub.id,
                    format!(
                        "Sub-delivery '{}' ends {} before it starts {}",
                        sub.id, sub.end_date, sub.start_date
                    ),
                ));
            }
            if sub.has_inconsistent_completion() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::InconsistentCompletion,
                    &sub.id,
                    format!(
                        "Sub-delivery '{}' has completed={} but status {:?}",
                        sub.id, sub.completed, sub.status
                    ),
                ));
            }
        }
    }

    for milestone in milestones {
        match (milestone.is_period, milestone.end_date) {
            (true, None) => errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentPeriod,
                &milestone.id,
                format!("Period milestone '{}' has no end date", milestone.id),
            )),
            (false, Some(_)) => errors.push(ValidationError::new(
                ValidationErrorKind::InconsistentPeriod,
                &milestone.id,
                format!("Milestone '{}' has an end date but is not a period", milestone.id),
            )),
            (true, Some(end)) if end < milestone.date => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidInterval,
                &milestone.id,
                format!(
                    "Milestone '{}' ends {} before it starts {}",
                    milestone.id, end, milestone.date
                ),
            )),
            _ => {}
        }
    }

    // Check link references
    let delivery_ids: HashSet<&str> = deliveries.iter().map(|d| d.id.as_str()).collect();
    for delivery in deliveries {
        for link in &delivery.linked_deliveries {
            if link == &delivery.id {
                errors.push(ValidationError::new(
                    ValidationErrorKind::SelfLink,
                    &delivery.id,
                    format!("Delivery '{}' links to itself", delivery.id),
                ));
            } else if !delivery_ids.contains(link.as_str()) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::UnknownLink,
                    &delivery.id,
                    format!(
                        "Delivery '{}' links to unknown delivery '{}'",
                        delivery.id, link
                    ),
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

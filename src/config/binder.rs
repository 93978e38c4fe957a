//! Field-wise validation and binding.
//!
//! # Responsibilities
//! - Type-check each recognized field and bind it into `BalancerConfig`
//! - Leave pre-seeded values untouched for absent fields
//! - Report keys the table does not know about
//!
//! # Design Decisions
//! - Table-driven: one `FieldSpec` row per field, walked uniformly
//! - Consume-and-tally: bound keys go into a seen-set, the remainder is
//!   computed afterwards; the document is never mutated mid-walk
//! - First mismatch aborts the pass
//! - Fractional unsigned values truncate toward zero

use std::collections::BTreeSet;

use serde_json::Value;

use crate::config::document::{RawDocument, ValueKind};
use crate::config::error::{ConfigError, Diagnostic, Found};
use crate::config::schema::BalancerConfig;

/// Where a field lands in the config, and what type it must have.
#[derive(Clone, Copy)]
pub enum Slot {
    String(fn(&mut BalancerConfig) -> &mut String),
    Bool(fn(&mut BalancerConfig) -> &mut bool),
    Unsigned(fn(&mut BalancerConfig) -> &mut u64),
    StringList(fn(&mut BalancerConfig) -> &mut Vec<String>),
}

impl Slot {
    /// Type name used in mismatch errors.
    pub fn expected(&self) -> &'static str {
        match self {
            Slot::String(_) => "string",
            Slot::Bool(_) => "boolean",
            Slot::Unsigned(_) => "unsigned integer",
            Slot::StringList(_) => "sequence of strings",
        }
    }
}

/// One recognized field.
#[derive(Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub slot: Slot,
}

/// Recognized fields, in binding order.
pub static FIELDS: [FieldSpec; 7] = [
    FieldSpec {
        name: "serverURLs",
        slot: Slot::StringList(|c| &mut c.server_urls),
    },
    FieldSpec {
        name: "balancingAlgorithmName",
        slot: Slot::String(|c| &mut c.balancing_algorithm_name),
    },
    FieldSpec {
        name: "serverTimeoutSeconds",
        slot: Slot::Unsigned(|c| &mut c.server_timeout_seconds),
    },
    FieldSpec {
        name: "failedHealthChecksTillTimeout",
        slot: Slot::Unsigned(|c| &mut c.failed_health_checks_till_timeout),
    },
    FieldSpec {
        name: "slowStart",
        slot: Slot::Bool(|c| &mut c.slow_start),
    },
    FieldSpec {
        name: "slowStartSeconds",
        slot: Slot::Unsigned(|c| &mut c.slow_start_seconds),
    },
    FieldSpec {
        name: "stickySession",
        slot: Slot::Bool(|c| &mut c.sticky_session),
    },
];

/// Bind `doc` over `config`.
///
/// On `Err` the config may be partially updated and must be discarded.
pub fn bind_document(
    config: &mut BalancerConfig,
    doc: RawDocument,
) -> Result<Option<Diagnostic>, ConfigError> {
    let mut seen: BTreeSet<&str> = BTreeSet::new();

    for field in &FIELDS {
        let Some(value) = doc.get(field.name) else {
            continue;
        };
        bind_field(config, field, value)?;
        seen.insert(field.name);
    }

    let unknown: BTreeSet<String> = doc
        .keys()
        .filter(|key| !seen.contains(*key))
        .map(str::to_string)
        .collect();

    if unknown.is_empty() {
        Ok(None)
    } else {
        Ok(Some(Diagnostic::UnknownFields(unknown)))
    }
}

fn bind_field(
    config: &mut BalancerConfig,
    field: &FieldSpec,
    value: &Value,
) -> Result<(), ConfigError> {
    let mismatch = |found| ConfigError::TypeMismatch {
        field: field.name,
        expected: field.slot.expected(),
        found,
    };

    match field.slot {
        Slot::String(slot) => {
            let Value::String(s) = value else {
                return Err(mismatch(Found::Kind(ValueKind::of(value))));
            };
            *slot(config) = s.clone();
        }
        Slot::Bool(slot) => {
            let Value::Bool(b) = value else {
                return Err(mismatch(Found::Kind(ValueKind::of(value))));
            };
            *slot(config) = *b;
        }
        Slot::Unsigned(slot) => {
            *slot(config) = coerce_unsigned(value).map_err(mismatch)?;
        }
        Slot::StringList(slot) => {
            let Value::Array(items) = value else {
                return Err(mismatch(Found::Kind(ValueKind::of(value))));
            };
            let mut urls = Vec::with_capacity(items.len());
            for (index, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) if s.is_empty() => {
                        return Err(mismatch(Found::EmptyElement { index }));
                    }
                    Value::String(s) => urls.push(s.clone()),
                    other => {
                        return Err(mismatch(Found::Element {
                            index,
                            kind: ValueKind::of(other),
                        }));
                    }
                }
            }
            *slot(config) = urls;
        }
    }

    Ok(())
}

// 2^64 as f64; anything at or above it does not fit a u64.
const U64_LIMIT: f64 = 18_446_744_073_709_551_616.0;

fn coerce_unsigned(value: &Value) -> Result<u64, Found> {
    let Value::Number(n) = value else {
        return Err(Found::Kind(ValueKind::of(value)));
    };

    if let Some(u) = n.as_u64() {
        return Ok(u);
    }

    match n.as_f64() {
        Some(f) if (0.0..U64_LIMIT).contains(&f) => Ok(f.trunc() as u64),
        Some(f) => Err(Found::OutOfRange(f)),
        None => Err(Found::Kind(ValueKind::Number)),
    }
}

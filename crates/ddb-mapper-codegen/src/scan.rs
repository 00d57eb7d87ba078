//! Declaration scanner
//!
//! Picks the item declarations out of everything a front-end saw, checks
//! their structure and normalizes them into [`ClassDescriptor`]s. Invalid
//! declarations are returned as diagnostics, never as errors.

use crate::declaration::{Annotation, Declaration, DeclarationKind, DeclaredType};
use crate::descriptor::{AttributeDescriptor, ClassDescriptor, KeyRole};
use crate::diagnostics::Diagnostic;
use crate::error::DiscoveryError;

/// Permission to scan once.
///
/// A generation pass owns exactly one token. Scanning consumes it, so a pass
/// can never discover the same declarations twice.
#[derive(Debug)]
pub struct ScanToken {
    _private: (),
}

impl ScanToken {
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

/// Result of scanning a set of declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanOutcome {
    /// One descriptor per valid item declaration, in input order.
    pub descriptors: Vec<ClassDescriptor>,

    /// Item declarations that failed structural validation.
    pub invalid: Vec<Diagnostic>,
}

impl ScanOutcome {
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty() && self.invalid.is_empty()
    }
}

/// Scan `declarations`, consuming the pass's token.
pub fn scan(_token: ScanToken, declarations: &[Declaration]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();

    for declaration in declarations.iter().filter(|d| d.is_item()) {
        tracing::debug!(declaration = %declaration.qualified_name(), "found item declaration");

        match describe(declaration) {
            Ok(descriptor) => {
                tracing::trace!(?descriptor, "descriptor");
                outcome.descriptors.push(descriptor);
            }
            Err(err) => outcome.invalid.push(Diagnostic::new(
                declaration.qualified_name(),
                declaration.location.clone(),
                err,
            )),
        }
    }

    tracing::info!(
        declarations = declarations.len(),
        items = outcome.descriptors.len(),
        invalid = outcome.invalid.len(),
        "scanned declarations"
    );

    outcome
}

/// Validate the structure of one item declaration and describe it.
pub fn describe(declaration: &Declaration) -> Result<ClassDescriptor, DiscoveryError> {
    let name = declaration.name.clone();

    match declaration.kind {
        DeclarationKind::Struct => {}
        DeclarationKind::TupleStruct => {
            return Err(DiscoveryError::UnnamedFields { declaration: name });
        }
        kind => {
            return Err(DiscoveryError::NotConcrete {
                declaration: name,
                kind: kind.to_string(),
            });
        }
    }

    if !declaration.type_params.is_empty() {
        return Err(DiscoveryError::GenericDeclaration {
            declaration: name,
            params: declaration.type_params.clone(),
        });
    }

    let mut attributes = Vec::with_capacity(declaration.properties.len());
    for property in &declaration.properties {
        let ty = match &property.ty {
            DeclaredType::Resolved(ty) => ty.clone(),
            DeclaredType::Unresolved(spelling) => {
                return Err(DiscoveryError::UnresolvedType {
                    declaration: name,
                    attribute: property.name.clone(),
                    ty: spelling.clone(),
                });
            }
        };

        let mut role = KeyRole::None;
        let mut item_name = None;
        for annotation in &property.annotations {
            match annotation {
                Annotation::PartitionKey if role == KeyRole::Sort => {
                    return Err(conflicting_roles(&name, &property.name));
                }
                Annotation::SortKey if role == KeyRole::Partition => {
                    return Err(conflicting_roles(&name, &property.name));
                }
                Annotation::PartitionKey => role = KeyRole::Partition,
                Annotation::SortKey => role = KeyRole::Sort,
                Annotation::Attribute { .. } if item_name.is_some() => {
                    return Err(DiscoveryError::DuplicateAttributeOverride {
                        declaration: name,
                        attribute: property.name.clone(),
                    });
                }
                Annotation::Attribute { name: key } => item_name = Some(key.clone()),
                Annotation::Item => {}
            }
        }

        attributes.push(AttributeDescriptor {
            name: property.name.clone(),
            ty,
            item_name,
            key_role: role,
        });
    }

    let all_settable = declaration.properties.iter().all(|p| p.settable);

    Ok(ClassDescriptor {
        name,
        namespace: declaration.namespace.clone(),
        visibility: declaration.visibility.clone(),
        attributes,
        has_mutable_default: declaration.default_constructible && all_settable,
        fields_visible: all_settable,
        location: declaration.location.clone(),
    })
}

fn conflicting_roles(declaration: &str, attribute: &str) -> DiscoveryError {
    DiscoveryError::ConflictingKeyRoles {
        declaration: declaration.to_string(),
        attribute: attribute.to_string(),
    }
}

#[cfg(test)]
#[path = "scan/scan_tests.rs"]
mod scan_tests;

//! Schema plan builder
//!
//! Turns a [`ClassDescriptor`] into a [`SchemaPlan`]: resolved item keys,
//! key roles and a conversion strategy per attribute. Validation is
//! fail-fast and checks, in order:
//!
//! 1. item keys are unique
//! 2. exactly one partition key
//! 3. at most one sort key
//! 4. every attribute type is convertible, including nested elements
//! 5. key attributes are non-nullable strings, numbers or binaries
//! 6. the requested visibility is no wider than the record's

use crate::config::{CodegenOptions, Visibility};
use crate::declaration::SourceVisibility;
use crate::descriptor::{AttributeDescriptor, ClassDescriptor, KeyRole};
use crate::error::SchemaValidationError;
use crate::naming::to_snake_case;
use crate::scope::{Scope, is_within};
use crate::types::{TypeRef, Types};

/// How a value is stored in an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueShape {
    /// `S`
    Text,
    /// `N`, written with `ToString` and read with `FromStr`
    Number,
    /// `BOOL`
    Bool,
    /// `B`
    Binary,
    /// `L` of the element plan
    List(Box<ValuePlan>),
    /// `M` with text keys and values of the element plan
    Map(Box<ValuePlan>),
}

/// Conversion strategy for a (possibly nested) value.
///
/// `ty` keeps its nullability. `shape` describes the value once present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValuePlan {
    pub ty: TypeRef,
    pub shape: ValueShape,
}

impl ValuePlan {
    /// Classify `ty`, recursing into list and map elements.
    ///
    /// On failure returns the innermost type that has no conversion.
    pub fn classify(ty: &TypeRef) -> Result<ValuePlan, TypeRef> {
        let base = ty.non_null();

        let shape = if Types::is_string(&base) {
            ValueShape::Text
        } else if Types::is_bool(&base) {
            ValueShape::Bool
        } else if Types::is_number(&base) {
            ValueShape::Number
        } else if Types::is_bytes(&base) {
            ValueShape::Binary
        } else if Types::is_list(&base) {
            ValueShape::List(Box::new(Self::classify(&base.generics[0])?))
        } else if Types::is_map(&base) {
            let key = &base.generics[0];
            if !Types::is_string(key) || key.nullable {
                return Err(key.clone());
            }
            ValueShape::Map(Box::new(Self::classify(&base.generics[1])?))
        } else {
            return Err(ty.clone());
        };

        Ok(ValuePlan {
            ty: ty.clone(),
            shape,
        })
    }

    pub fn is_nullable(&self) -> bool {
        self.ty.nullable
    }

    /// Runtime key kind for values usable as a primary key.
    pub fn key_kind(&self) -> Option<&'static str> {
        if self.is_nullable() {
            return None;
        }
        match self.shape {
            ValueShape::Text => Some("S"),
            ValueShape::Number => Some("N"),
            ValueShape::Binary => Some("B"),
            _ => None,
        }
    }
}

/// An attribute with its resolved item key and conversion plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedAttribute {
    pub descriptor: AttributeDescriptor,

    /// Key in the item map.
    pub key: String,

    pub value: ValuePlan,
}

impl PlannedAttribute {
    /// Field name as written in Rust source, raw identifiers included.
    pub fn field(&self) -> &str {
        &self.descriptor.name
    }

    /// Field name usable inside other identifiers.
    pub fn plain_field(&self) -> &str {
        self.descriptor.plain_name()
    }

    pub fn is_nullable(&self) -> bool {
        self.value.is_nullable()
    }
}

/// Everything the emitters need for one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaPlan {
    pub record: TypeRef,
    pub name: String,
    pub visibility: SourceVisibility,
    pub attributes: Vec<PlannedAttribute>,

    /// Index into `attributes`.
    pub partition_key: usize,

    /// Index into `attributes`.
    pub sort_key: Option<usize>,

    /// Module the generated files belong to.
    pub destination: String,

    /// Where the generated items can be named from.
    pub scope: Scope,

    pub has_mutable_default: bool,
    pub fields_visible: bool,
    pub options: CodegenOptions,
}

impl SchemaPlan {
    pub fn partition_attribute(&self) -> &PlannedAttribute {
        &self.attributes[self.partition_key]
    }

    pub fn sort_attribute(&self) -> Option<&PlannedAttribute> {
        self.sort_key.map(|index| &self.attributes[index])
    }

    /// A builder is emitted when forced, or when `Default` plus field
    /// assignment cannot construct the record.
    pub fn needs_builder(&self) -> bool {
        self.options.always_generate_builders() || !self.has_mutable_default
    }

    /// Visibility modifier for generated items spliced next to the record.
    pub fn modifier(&self) -> String {
        self.options.visibility.modifier(&self.visibility)
    }

    /// Check that code in the destination module can name the record and,
    /// when the record is built field by field, its fields.
    pub fn check_destination(&self) -> Result<(), SchemaValidationError> {
        let unreachable = |scope: String| SchemaValidationError::UnreachableDestination {
            declaration: self.name.clone(),
            destination: self.destination.clone(),
            scope,
        };

        if !self.scope.contains(&self.destination) {
            return Err(unreachable(self.scope.to_string()));
        }
        if !self.fields_visible && !is_within(&self.destination, &self.record.namespace) {
            return Err(unreachable(format!("`{}`", self.record.namespace)));
        }
        Ok(())
    }

    pub fn snake_name(&self) -> String {
        to_snake_case(&self.name)
    }

    pub fn converter_name(&self) -> String {
        format!("{}Converter", self.name)
    }

    pub fn schema_name(&self) -> String {
        format!("{}Schema", self.name)
    }

    pub fn builder_name(&self) -> String {
        format!("{}Builder", self.name)
    }

    pub fn table_ext_name(&self) -> String {
        format!("{}TableExt", self.name)
    }
}

/// Build and validate the plan for one descriptor.
pub fn build_plan(
    descriptor: &ClassDescriptor,
    options: &CodegenOptions,
) -> Result<SchemaPlan, SchemaValidationError> {
    let declaration = &descriptor.name;

    check_unique_keys(descriptor)?;

    let partition = with_role(descriptor, KeyRole::Partition);
    let partition_key = match partition.as_slice() {
        [index] => *index,
        [] => {
            return Err(SchemaValidationError::MissingPartitionKey {
                declaration: declaration.clone(),
            });
        }
        many => {
            return Err(SchemaValidationError::MultiplePartitionKeys {
                declaration: declaration.clone(),
                attributes: names(descriptor, many),
            });
        }
    };

    let sort = with_role(descriptor, KeyRole::Sort);
    let sort_key = match sort.as_slice() {
        [] => None,
        [index] => Some(*index),
        many => {
            return Err(SchemaValidationError::MultipleSortKeys {
                declaration: declaration.clone(),
                attributes: names(descriptor, many),
            });
        }
    };

    let mut attributes = Vec::with_capacity(descriptor.attributes.len());
    for attribute in &descriptor.attributes {
        let value = ValuePlan::classify(&attribute.ty).map_err(|offending| {
            SchemaValidationError::UnsupportedType {
                declaration: declaration.clone(),
                attribute: attribute.name.clone(),
                ty: offending.to_string(),
            }
        })?;

        attributes.push(PlannedAttribute {
            descriptor: attribute.clone(),
            key: attribute.item_key().to_string(),
            value,
        });
    }

    for index in std::iter::once(partition_key).chain(sort_key) {
        let attribute = &attributes[index];
        if attribute.value.key_kind().is_none() {
            return Err(SchemaValidationError::InvalidKeyType {
                declaration: declaration.clone(),
                attribute: attribute.descriptor.name.clone(),
                role: attribute.descriptor.key_role.to_string(),
                ty: attribute.value.ty.to_string(),
            });
        }
    }

    let scope = generated_scope(descriptor, options.visibility)?;

    let plan = SchemaPlan {
        record: descriptor.record_type(),
        name: descriptor.name.clone(),
        visibility: descriptor.visibility.clone(),
        attributes,
        partition_key,
        sort_key,
        destination: options.destination_package.resolve(&descriptor.namespace),
        scope,
        has_mutable_default: descriptor.has_mutable_default,
        fields_visible: descriptor.fields_visible,
        options: options.clone(),
    };

    tracing::debug!(
        declaration = %descriptor.qualified_name(),
        attributes = plan.attributes.len(),
        builder = plan.needs_builder(),
        "planned schema"
    );
    tracing::trace!(?plan, "schema plan");

    Ok(plan)
}

/// Scope of the generated items, refusing any wider than the record.
fn generated_scope(
    descriptor: &ClassDescriptor,
    visibility: Visibility,
) -> Result<Scope, SchemaValidationError> {
    let record = Scope::of(&descriptor.visibility, &descriptor.namespace);
    let requested = match visibility {
        Visibility::Implicit => return Ok(record),
        Visibility::Public => Scope::Everywhere,
        Visibility::Internal => Scope::crate_wide(),
    };

    if requested.is_wider_than(&record) {
        let spelled = descriptor.visibility.modifier();
        return Err(SchemaValidationError::VisibilityExceedsRecord {
            declaration: descriptor.name.clone(),
            requested: visibility.to_string(),
            record: match spelled.trim_end() {
                "" => "private".to_string(),
                vis => vis.to_string(),
            },
        });
    }
    Ok(requested)
}

fn check_unique_keys(descriptor: &ClassDescriptor) -> Result<(), SchemaValidationError> {
    for (index, attribute) in descriptor.attributes.iter().enumerate() {
        let key = attribute.item_key();
        let earlier = descriptor.attributes[..index]
            .iter()
            .any(|other| other.item_key() == key);
        if earlier {
            continue;
        }

        let sharing: Vec<String> = descriptor.attributes[index..]
            .iter()
            .filter(|other| other.item_key() == key)
            .map(|other| other.name.clone())
            .collect();
        if sharing.len() > 1 {
            return Err(SchemaValidationError::DuplicateItemKey {
                declaration: descriptor.name.clone(),
                key: key.to_string(),
                attributes: sharing,
            });
        }
    }
    Ok(())
}

fn with_role(descriptor: &ClassDescriptor, role: KeyRole) -> Vec<usize> {
    descriptor
        .attributes
        .iter()
        .enumerate()
        .filter(|(_, attribute)| attribute.key_role == role)
        .map(|(index, _)| index)
        .collect()
}

fn names(descriptor: &ClassDescriptor, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .map(|&index| descriptor.attributes[index].name.clone())
        .collect()
}

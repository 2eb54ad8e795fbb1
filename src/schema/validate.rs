use crate::schema::error::{SchemaError, SchemaResult};
use crate::schema::model::{DatabaseDescriptor, Table, TypeTag};

/// Check every table in file order and stop at the first violation.
pub fn validate(descriptor: &DatabaseDescriptor) -> SchemaResult<()> {
    descriptor.tables.iter().try_for_each(validate_table)
}

/// Check one table:
/// - `identifier`, `name`, `entryTemplate` and `requires` are non-empty
/// - every template value is one of the known type tags
/// - the identifier is declared in the template with type `string`
pub fn validate_table(table: &Table) -> SchemaResult<()> {
    let missing = |property: &'static str| SchemaError::MissingProperty {
        table: display_name(table),
        property,
    };

    if table.identifier.is_empty() {
        return Err(missing("identifier"));
    }
    if table.name.is_empty() {
        return Err(missing("name"));
    }
    if table.entry_template.is_empty() {
        return Err(missing("entryTemplate"));
    }
    if table.requires.is_empty() {
        return Err(missing("requires"));
    }

    for (field, tag) in &table.entry_template {
        if TypeTag::from_value(tag).is_none() {
            return Err(SchemaError::InvalidFieldType {
                table: table.name.clone(),
                field: field.clone(),
                value: tag.to_string(),
            });
        }
    }

    match table
        .entry_template
        .get(&table.identifier)
        .and_then(TypeTag::from_value)
    {
        Some(TypeTag::String) => Ok(()),
        Some(_) => Err(SchemaError::IdentifierNotString {
            table: table.name.clone(),
            identifier: table.identifier.clone(),
        }),
        None => Err(SchemaError::UndeclaredIdentifier {
            table: table.name.clone(),
            identifier: table.identifier.clone(),
        }),
    }
}

fn display_name(table: &Table) -> String {
    if table.name.is_empty() {
        "<unnamed>".to_string()
    } else {
        table.name.clone()
    }
}

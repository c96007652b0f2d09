//! Property business rules.

use std::sync::Arc;

use tracing::debug;

use realty_core::error::AppError;
use realty_core::result::AppResult;
use realty_core::traits::Repository;
use realty_core::validation::SchemaError;
use realty_entity::property::{
    CreateProperty, Property, PropertyFilters, PropertyStatus, UpdateProperty,
};

use crate::crud::CrudService;
use crate::hooks::ServiceHooks;

/// Service for properties.
pub type PropertyService = CrudService<Property, CreateProperty, UpdateProperty, PropertyFilters>;

/// Hooks applied to property operations.
pub fn property_hooks() -> ServiceHooks<Property, CreateProperty, UpdateProperty, PropertyFilters> {
    ServiceHooks::new()
        .with_filters(normalize_filters)
        .with_create_input(prepare_create)
        .with_update_input(check_update)
}

/// Build the property service over `repository`.
pub fn property_service(
    repository: Arc<dyn Repository<Property, CreateProperty, UpdateProperty, PropertyFilters>>,
) -> PropertyService {
    CrudService::with_hooks(repository, property_hooks())
}

/// An inverted price range can match nothing, so it is dropped instead.
fn normalize_filters(mut filters: PropertyFilters) -> PropertyFilters {
    if let (Some(min), Some(max)) = (filters.min_price, filters.max_price) {
        if min > max {
            debug!(min, max, "Ignoring inverted price range");
            filters.min_price = None;
            filters.max_price = None;
        }
    }
    filters
}

fn prepare_create(mut input: CreateProperty) -> AppResult<CreateProperty> {
    input.title = trimmed_title(&input.title)?;
    input.status.get_or_insert(PropertyStatus::Available);
    Ok(input)
}

fn check_update(mut input: UpdateProperty, existing: &Property) -> AppResult<UpdateProperty> {
    if let Some(next) = input.status {
        if !existing.status.can_transition_to(next) {
            return Err(AppError::conflict(format!(
                "Property {} is {} and cannot change to {next}",
                existing.id, existing.status
            )));
        }
    }
    if let Some(title) = input.title.as_deref() {
        input.title = Some(trimmed_title(title)?);
    }
    Ok(input)
}

fn trimmed_title(title: &str) -> AppResult<String> {
    let title = title.trim();
    if title.chars().count() < 3 {
        return Err(SchemaError::new("title", "title must be 3-200 characters").into());
    }
    Ok(title.to_string())
}

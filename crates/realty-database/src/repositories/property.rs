//! Property repository wiring.

use std::sync::Arc;

use realty_core::traits::RecordStore;
use realty_core::types::{FilterField, Predicate};
use realty_entity::property::{CreateProperty, Property, PropertyFilters, UpdateProperty};

use super::crud::{CrudRepository, RepositoryConfig};

/// Repository for properties.
pub type PropertyRepository =
    CrudRepository<Property, CreateProperty, UpdateProperty, PropertyFilters>;

/// Properties are soft-deleted.
pub const PROPERTIES: RepositoryConfig = RepositoryConfig {
    table: "properties",
    soft_delete: true,
};

/// Build the property repository over `store`.
pub fn property_repository(store: Arc<dyn RecordStore>) -> PropertyRepository {
    CrudRepository::new(store, PROPERTIES, property_predicate)
}

/// Translate property filters into a storage predicate.
pub fn property_predicate(filters: &PropertyFilters) -> Predicate {
    let mut predicate = Predicate::All;
    if let Some(city) = non_blank(filters.city.as_deref()) {
        predicate = predicate.and(FilterField::eq("city", city));
    }
    if let Some(kind) = filters.property_type {
        predicate = predicate.and(FilterField::eq("property_type", kind.as_str()));
    }
    if let Some(status) = filters.status {
        predicate = predicate.and(FilterField::eq("status", status.as_str()));
    }
    if let Some(min) = filters.min_price {
        predicate = predicate.and(FilterField::gte("price", min));
    }
    if let Some(max) = filters.max_price {
        predicate = predicate.and(FilterField::lte("price", max));
    }
    if let Some(bedrooms) = filters.min_bedrooms {
        predicate = predicate.and(FilterField::gte("bedrooms", bedrooms));
    }
    if let Some(owner) = filters.owner_id {
        predicate = predicate.and(FilterField::eq("owner_id", owner));
    }
    if let Some(search) = non_blank(filters.search.as_deref()) {
        predicate = predicate.and(FilterField::contains("title", search));
    }
    predicate
}

/// Trimmed value, or `None` when empty.
pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

//! Controller aliases for each resource.

use realty_entity::{
    Client, ClientFilters, CreateClient, CreateDocument, CreateProperty, CreateUser, Document,
    DocumentFilters, Property, PropertyFilters, UpdateClient, UpdateDocument, UpdateProperty,
    UpdateUser, User, UserFilters,
};

use crate::controller::CrudController;

/// `/api/properties`
pub type PropertyController =
    CrudController<Property, CreateProperty, UpdateProperty, PropertyFilters>;

/// `/api/clients`
pub type ClientController = CrudController<Client, CreateClient, UpdateClient, ClientFilters>;

/// `/api/documents`
pub type DocumentController =
    CrudController<Document, CreateDocument, UpdateDocument, DocumentFilters>;

/// `/api/users`
pub type UserController = CrudController<User, CreateUser, UpdateUser, UserFilters>;

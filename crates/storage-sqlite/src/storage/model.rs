use diesel::prelude::*;

/// One storage bucket row: a stable key and its JSON-encoded value.
#[derive(Queryable, Insertable, Debug, Clone)]
#[diesel(table_name = crate::schema::app_storage)]
pub struct StorageEntryDB {
    pub storage_key: String,
    pub storage_value: String,
}

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{IndexOptions, ReturnDocument};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::store::{ContactStore, StoreError};
use crate::contact::{validate, Contact};

/// MongoDB error code for a unique index violation.
const DUPLICATE_KEY_CODE: i32 = 11000;

/// Wire representation of a contact inside the `contacts` collection.
///
/// The `_id` is absent on insert so the server assigns it; everywhere else
/// it is present and rendered to clients as its hex string.
#[derive(Debug, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    name: String,
    number: String,
}

impl ContactDocument {
    fn into_contact(self) -> Contact {
        Contact {
            id: self.id.map(|oid| oid.to_hex()).unwrap_or_default(),
            name: self.name,
            number: self.number,
        }
    }
}

/// Persistent contact store backed by a MongoDB collection.
///
/// Name uniqueness is enforced by a unique index created at connect time.
/// The application still checks validation rules before every write, but the
/// final word on uniqueness belongs to the index: a race between two creates
/// resolves to one success and one `DuplicateName`, never two records.
pub struct MongoStore {
    contacts: Collection<ContactDocument>,
}

impl MongoStore {
    /// Connects to the store and ensures the unique index on `name` exists.
    pub async fn connect(uri: &str, db_name: &str) -> anyhow::Result<Self> {
        let client = Client::with_uri_str(uri).await?;
        let contacts = client
            .database(db_name)
            .collection::<ContactDocument>("contacts");

        let index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();
        contacts.create_index(index).await?;

        Ok(Self { contacts })
    }

    /// Parses a client-supplied id, distinguishing a malformed id from a
    /// well-formed one that simply matches nothing.
    pub(crate) fn parse_id(id: &str) -> Result<ObjectId, StoreError> {
        ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId)
    }

    /// Maps a driver error from a write, surfacing unique index violations
    /// as `DuplicateName`.
    fn map_write_error(err: mongodb::error::Error) -> StoreError {
        if is_duplicate_key(&err) {
            StoreError::DuplicateName
        } else {
            StoreError::Backend(err.into())
        }
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    match err.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(write)) => write.code == DUPLICATE_KEY_CODE,
        // findAndModify reports the violation as a command error instead.
        ErrorKind::Command(command) => command.code == DUPLICATE_KEY_CODE,
        _ => false,
    }
}

#[async_trait]
impl ContactStore for MongoStore {
    async fn list_all(&self) -> Result<Vec<Contact>, StoreError> {
        let cursor = self
            .contacts
            .find(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;
        let documents: Vec<ContactDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;
        Ok(documents
            .into_iter()
            .map(ContactDocument::into_contact)
            .collect())
    }

    async fn find_by_id(&self, id: &str) -> Result<Contact, StoreError> {
        let oid = Self::parse_id(id)?;
        let document = self
            .contacts
            .find_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;
        document
            .map(ContactDocument::into_contact)
            .ok_or(StoreError::NotFound)
    }

    async fn create(&self, name: &str, number: &str) -> Result<Contact, StoreError> {
        validate(name, number)?;

        let document = ContactDocument {
            id: None,
            name: name.to_string(),
            number: number.to_string(),
        };
        let result = self
            .contacts
            .insert_one(document)
            .await
            .map_err(Self::map_write_error)?;

        let oid = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| StoreError::Backend(anyhow::anyhow!("insert returned no ObjectId")))?;
        tracing::debug!("created contact {} ({})", oid.to_hex(), name);
        Ok(Contact {
            id: oid.to_hex(),
            name: name.to_string(),
            number: number.to_string(),
        })
    }

    async fn update_by_id(
        &self,
        id: &str,
        name: &str,
        number: &str,
    ) -> Result<Contact, StoreError> {
        validate(name, number)?;
        let oid = Self::parse_id(id)?;

        let updated = self
            .contacts
            .find_one_and_update(
                doc! { "_id": oid },
                doc! { "$set": { "name": name, "number": number } },
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(Self::map_write_error)?;

        updated
            .map(ContactDocument::into_contact)
            .ok_or(StoreError::NotFound)
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        let oid = Self::parse_id(id)?;
        let result = self
            .contacts
            .delete_one(doc! { "_id": oid })
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;
        if result.deleted_count == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize, StoreError> {
        let count = self
            .contacts
            .count_documents(doc! {})
            .await
            .map_err(|e| StoreError::Backend(e.into()))?;
        Ok(count as usize)
    }
}

//! MongoDB implementation of the document store.

use std::sync::Arc;

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{self, doc, Bson},
    Client, Database,
};
use serde_json::Value;

use crate::server::{
    data::{
        connection::Connector,
        store::{DeleteOutcome, Document, DocumentStore, FieldFilter, UpdateOutcome},
    },
    error::store::{BoxError, StoreError},
};

/// Connects to MongoDB with a connection string and selects one database.
pub struct MongoConnector {
    uri: String,
    db_name: String,
}

impl MongoConnector {
    pub fn new(uri: impl Into<String>, db_name: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            db_name: db_name.into(),
        }
    }
}

#[async_trait]
impl Connector for MongoConnector {
    async fn connect(&self) -> Result<Arc<dyn DocumentStore>, BoxError> {
        let client = Client::with_uri_str(&self.uri).await?;
        let database = client.database(&self.db_name);

        // The driver connects lazily; ping so failures surface here
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::debug!("MongoDB connected!");

        let store: Arc<dyn DocumentStore> = Arc::new(MongoStore { client, database });
        Ok(store)
    }
}

/// Store handle backed by a MongoDB database.
pub struct MongoStore {
    client: Client,
    database: Database,
}

impl MongoStore {
    fn collection(&self, name: &str) -> mongodb::Collection<bson::Document> {
        self.database.collection(name)
    }
}

fn to_bson_document(document: &Document) -> Result<bson::Document, StoreError> {
    Ok(bson::to_document(document)?)
}

fn from_bson_document(document: bson::Document) -> Document {
    document
        .into_iter()
        .map(|(field, value)| (field, to_json(value)))
        .collect()
}

/// Relaxed extended JSON, except that object ids become plain hex strings.
fn to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(id) => Value::String(id.to_hex()),
        Bson::Document(document) => Value::Object(from_bson_document(document)),
        Bson::Array(values) => Value::Array(values.into_iter().map(to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

fn filter_document(filter: &FieldFilter) -> bson::Document {
    let mut document = bson::Document::new();
    document.insert(filter.field, filter.value.as_str());
    document
}

fn update_outcome(
    matched_count: u64,
    modified_count: u64,
    upserted_id: Option<&Bson>,
) -> UpdateOutcome {
    UpdateOutcome {
        matched_count,
        modified_count,
        upserted_count: u64::from(upserted_id.is_some()),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, document: Document) -> Result<(), StoreError> {
        let document = to_bson_document(&document)?;
        self.collection(collection).insert_one(document).await?;

        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let documents: Vec<bson::Document> = self
            .collection(collection)
            .find(doc! {})
            .await?
            .try_collect()
            .await?;

        Ok(documents.into_iter().map(from_bson_document).collect())
    }

    async fn find_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
    ) -> Result<Option<Document>, StoreError> {
        let document = self
            .collection(collection)
            .find_one(filter_document(filter))
            .await?;

        Ok(document.map(from_bson_document))
    }

    async fn update_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
        set: Document,
        upsert: bool,
    ) -> Result<UpdateOutcome, StoreError> {
        let set = to_bson_document(&set)?;
        let result = self
            .collection(collection)
            .update_one(filter_document(filter), doc! { "$set": set })
            .upsert(upsert)
            .await?;

        Ok(update_outcome(
            result.matched_count,
            result.modified_count,
            result.upserted_id.as_ref(),
        ))
    }

    async fn delete_one(
        &self,
        collection: &str,
        filter: &FieldFilter,
    ) -> Result<DeleteOutcome, StoreError> {
        let result = self
            .collection(collection)
            .delete_one(filter_document(filter))
            .await?;

        Ok(DeleteOutcome {
            deleted_count: result.deleted_count,
        })
    }

    async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::debug!("MongoDB connection closed");
    }
}

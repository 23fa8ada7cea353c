//! DynamoDB implementation of the routing repository.

use async_trait::async_trait;
use aws_sdk_dynamodb::error::DisplayErrorContext;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use std::collections::HashMap;

use crate::domain::entities::RoutingEntry;
use crate::domain::repositories::RoutingRepository;
use crate::error::AppError;

/// Default table name.
pub const DEFAULT_TABLE: &str = "DomainToEmailTable";

const HOST_ATTR: &str = "Host";
const RECIPIENT_ATTR: &str = "EmailAddress";
const SENDER_ATTR: &str = "SenderEmailAddress";

/// DynamoDB repository for the routing table.
///
/// Items are keyed by the string attribute `Host` and carry the string
/// attributes `EmailAddress` (recipient) and `SenderEmailAddress` (sender).
pub struct DynamoRoutingRepository {
    client: aws_sdk_dynamodb::Client,
    table: String,
}

impl DynamoRoutingRepository {
    /// Creates a repository over `table` using a shared SDK client.
    pub fn new(client: aws_sdk_dynamodb::Client, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    pub fn table(&self) -> &str {
        &self.table
    }
}

fn storage_error<E: std::error::Error>(e: E) -> AppError {
    AppError::internal(format!("Routing table error: {}", DisplayErrorContext(&e)))
}

fn string_attr(item: &HashMap<String, AttributeValue>, name: &str) -> Result<String, AppError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .cloned()
        .ok_or_else(|| {
            AppError::internal(format!(
                "Routing entry is missing string attribute '{name}'"
            ))
        })
}

fn entry_from_item(item: &HashMap<String, AttributeValue>) -> Result<RoutingEntry, AppError> {
    Ok(RoutingEntry {
        host: string_attr(item, HOST_ATTR)?,
        recipient: string_attr(item, RECIPIENT_ATTR)?,
        sender: string_attr(item, SENDER_ATTR)?,
    })
}

#[async_trait]
impl RoutingRepository for DynamoRoutingRepository {
    async fn find_by_host(&self, host: &str) -> Result<Option<RoutingEntry>, AppError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table)
            .key(HOST_ATTR, AttributeValue::S(host.to_string()))
            .send()
            .await
            .map_err(storage_error)?;

        output.item().map(entry_from_item).transpose()
    }

    async fn put(&self, entry: RoutingEntry) -> Result<(), AppError> {
        self.client
            .put_item()
            .table_name(&self.table)
            .item(HOST_ATTR, AttributeValue::S(entry.host))
            .item(RECIPIENT_ATTR, AttributeValue::S(entry.recipient))
            .item(SENDER_ATTR, AttributeValue::S(entry.sender))
            .send()
            .await
            .map_err(storage_error)?;

        Ok(())
    }

    async fn delete(&self, host: &str) -> Result<bool, AppError> {
        let output = self
            .client
            .delete_item()
            .table_name(&self.table)
            .key(HOST_ATTR, AttributeValue::S(host.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(storage_error)?;

        Ok(output.attributes().is_some_and(|attrs| !attrs.is_empty()))
    }

    async fn list(&self) -> Result<Vec<RoutingEntry>, AppError> {
        let items = self
            .client
            .scan()
            .table_name(&self.table)
            .into_paginator()
            .items()
            .send()
            .collect::<Result<Vec<_>, _>>()
            .await
            .map_err(storage_error)?;

        let mut entries = items
            .iter()
            .map(entry_from_item)
            .collect::<Result<Vec<_>, _>>()?;
        entries.sort_by(|a, b| a.host.cmp(&b.host));

        Ok(entries)
    }
}

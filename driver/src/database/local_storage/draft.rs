use serde::{Deserialize, Serialize};
use tracing::warn;

use kernel::interface::query::DraftQuery;
use kernel::interface::update::DraftModifier;
use kernel::prelude::entity::{DestructDraft, Draft};
use kernel::KernelError;

use crate::database::local_storage::{LocalStorageTransaction, FORM_CANCELLED_KEY, FORM_DATA_KEY};
use crate::error::{ConvertError, DriverError};

const CANCELLED: &str = "true";

pub struct LocalDraftRepository;

#[async_trait::async_trait]
impl DraftQuery for LocalDraftRepository {
    type Transaction = LocalStorageTransaction;

    async fn find(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<Option<Draft>, KernelError> {
        let Some(raw) = con.get_item(FORM_DATA_KEY).await else {
            return Ok(None);
        };
        match serde_json::from_str::<DraftRow>(&raw) {
            Ok(row) => Ok(Some(Draft::from(row))),
            Err(error) => {
                warn!("Discarding unreadable `{FORM_DATA_KEY}`: {error}");
                con.remove_item(FORM_DATA_KEY).await?;
                Ok(None)
            }
        }
    }

    async fn is_cancelled(
        &self,
        con: &mut LocalStorageTransaction,
    ) -> error_stack::Result<bool, KernelError> {
        Ok(con.get_item(FORM_CANCELLED_KEY).await.as_deref() == Some(CANCELLED))
    }
}

#[async_trait::async_trait]
impl DraftModifier for LocalDraftRepository {
    type Transaction = LocalStorageTransaction;

    async fn save(
        &self,
        con: &mut LocalStorageTransaction,
        draft: &Draft,
    ) -> error_stack::Result<(), KernelError> {
        let raw = serde_json::to_string(&DraftRow::from(draft.clone()))
            .map_err(DriverError::from)
            .convert_error()?;
        con.set_item(FORM_DATA_KEY, raw).await
    }

    async fn delete(&self, con: &mut LocalStorageTransaction) -> error_stack::Result<(), KernelError> {
        con.remove_item(FORM_DATA_KEY).await
    }

    async fn set_cancelled(
        &self,
        con: &mut LocalStorageTransaction,
        cancelled: bool,
    ) -> error_stack::Result<(), KernelError> {
        if cancelled {
            con.set_item(FORM_CANCELLED_KEY, CANCELLED.to_string()).await
        } else {
            con.remove_item(FORM_CANCELLED_KEY).await
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DraftRow {
    name: String,
    phone: String,
    email: String,
    license: String,
    start_date: String,
    days: String,
}

impl From<DraftRow> for Draft {
    fn from(value: DraftRow) -> Self {
        Draft::new(
            value.name,
            value.phone,
            value.email,
            value.license,
            value.start_date,
            value.days,
        )
    }
}

impl From<Draft> for DraftRow {
    fn from(value: Draft) -> Self {
        let DestructDraft {
            name,
            phone,
            email,
            license,
            start_date,
            days,
        } = value.into_destruct();
        Self {
            name,
            phone,
            email,
            license,
            start_date,
            days,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::DraftQuery;
    use kernel::interface::update::DraftModifier;
    use kernel::prelude::entity::Draft;
    use kernel::KernelError;

    use crate::database::local_storage::FORM_DATA_KEY;
    use crate::database::{LocalDraftRepository, LocalStorage};

    #[tokio::test]
    async fn draft_uses_form_keys() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        let draft = Draft::new("Jane Doe", "5551234567", "", "", "2026-03-12", "3");
        LocalDraftRepository.save(&mut con, &draft).await?;

        let raw = con.get_item(FORM_DATA_KEY).await.unwrap_or_default();
        assert!(raw.contains("\"startDate\":\"2026-03-12\""));
        assert_eq!(LocalDraftRepository.find(&mut con).await?, Some(draft));
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_draft_is_discarded() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        con.set_item(FORM_DATA_KEY, "{\"name\":".to_string()).await?;

        assert_eq!(LocalDraftRepository.find(&mut con).await?, None);
        assert_eq!(con.get_item(FORM_DATA_KEY).await, None);
        Ok(())
    }

    #[tokio::test]
    async fn cancellation_flag_round_trip() -> error_stack::Result<(), KernelError> {
        let storage = LocalStorage::in_memory();
        let mut con = storage.transact().await?;
        assert!(!LocalDraftRepository.is_cancelled(&mut con).await?);
        LocalDraftRepository.set_cancelled(&mut con, true).await?;
        assert!(LocalDraftRepository.is_cancelled(&mut con).await?);
        LocalDraftRepository.set_cancelled(&mut con, false).await?;
        assert!(!LocalDraftRepository.is_cancelled(&mut con).await?);
        Ok(())
    }
}

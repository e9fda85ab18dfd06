use tracing::{debug, info};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::query::{DependOnDraftQuery, DraftQuery};
use kernel::interface::update::{
    DependOnDraftModifier, DependOnSelectionModifier, DraftModifier, SelectionModifier,
};
use kernel::prelude::entity::Draft;
use kernel::KernelError;

use crate::transfer::ReservationFormDto;

#[async_trait::async_trait]
pub trait DraftService:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection
    + DependOnDraftQuery
    + DependOnDraftModifier
    + DependOnSelectionModifier
{
    /// Returns whether the draft was written. Nothing is written while a
    /// cancellation is pending or when every field is empty.
    async fn save_draft(&self, dto: ReservationFormDto) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        if self.draft_query().is_cancelled(&mut connection).await? {
            debug!("Reservation was cancelled, draft not saved");
            return Ok(false);
        }
        let draft = Draft::from(dto);
        if draft.is_blank() {
            return Ok(false);
        }
        self.draft_modifier().save(&mut connection, &draft).await?;
        connection.commit().await?;
        Ok(true)
    }

    async fn load_draft(&self) -> error_stack::Result<Option<ReservationFormDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let draft = self.draft_query().find(&mut connection).await?;
        connection.commit().await?;
        Ok(draft.map(ReservationFormDto::from))
    }

    #[tracing::instrument(skip_all)]
    async fn cancel_reservation(&self) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.draft_modifier()
            .set_cancelled(&mut connection, true)
            .await?;
        self.draft_modifier().delete(&mut connection).await?;
        self.selection_modifier().clear(&mut connection).await?;
        connection.commit().await?;
        info!("Reservation cancelled");
        Ok(())
    }

    /// Read-then-clear of the cancellation flag. A pending cancellation also
    /// wipes whatever draft is left over.
    async fn take_cancellation(&self) -> error_stack::Result<bool, KernelError> {
        let mut connection = self.database_connection().transact().await?;
        let cancelled = self.draft_query().is_cancelled(&mut connection).await?;
        if cancelled {
            self.draft_modifier()
                .set_cancelled(&mut connection, false)
                .await?;
            self.draft_modifier().delete(&mut connection).await?;
            debug!("Cancellation flag consumed, form reset");
        }
        connection.commit().await?;
        Ok(cancelled)
    }

    async fn discard_draft(&self) -> error_stack::Result<(), KernelError> {
        let mut connection = self.database_connection().transact().await?;
        self.draft_modifier().delete(&mut connection).await?;
        connection.commit().await
    }

    async fn stored_draft(
        &self,
        con: &mut <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    ) -> error_stack::Result<Draft, KernelError> {
        Ok(self.draft_query().find(con).await?.unwrap_or_default())
    }
}

impl<T> DraftService for T where
    T: DependOnDatabaseConnection
        + DependOnDraftQuery
        + DependOnDraftModifier
        + DependOnSelectionModifier
{
}

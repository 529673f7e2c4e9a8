use error_stack::Report;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::extract::{BookExtractor, DependOnBookExtractor, FileKind};
use kernel::interface::query::{BookQuery, DependOnBookQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::KernelError;

use crate::transfer::{DeleteBookDto, DeleteSummaryDto, ImportBookDto, ImportSummaryDto};

#[async_trait::async_trait]
pub trait ImportBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookExtractor
{
    /// Parses the payload and persists every extracted record in one
    /// transaction. Either the whole batch commits or nothing does.
    async fn import_books(
        &self,
        dto: ImportBookDto,
    ) -> error_stack::Result<ImportSummaryDto, KernelError> {
        if dto.payload.is_empty() {
            return Err(Report::new(KernelError::EmptyFile));
        }

        let books = match dto.kind {
            FileKind::Excel => self.excel_extractor().extract_books(&dto.payload)?,
            FileKind::Json => self.json_extractor().extract_books(&dto.payload)?,
        };
        let inserted = books.len();

        let mut connection = self.database_connection().transact().await?;
        self.book_modifier()
            .create_all(&mut connection, &books)
            .await?;
        connection.commit().await?;

        tracing::info!(kind = %dto.kind, inserted, "imported books");

        Ok(ImportSummaryDto {
            kind: dto.kind,
            inserted,
        })
    }
}

impl<Connection: Transaction + Send, T> ImportBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookExtractor
{
}

#[async_trait::async_trait]
pub trait DeleteBookService<Connection: Transaction + Send>:
    'static
    + Sync
    + Send
    + DependOnDatabaseConnection<Connection>
    + DependOnBookQuery<Connection>
    + DependOnBookModifier<Connection>
    + DependOnBookExtractor
{
    /// Reduces the payload to candidate titles and removes every persisted
    /// row whose title matches one of them. Matching is exact.
    async fn delete_books(
        &self,
        dto: DeleteBookDto,
    ) -> error_stack::Result<DeleteSummaryDto, KernelError> {
        if dto.payload.is_empty() {
            return Err(Report::new(KernelError::EmptyFile));
        }

        let titles = match dto.kind {
            FileKind::Excel => self.excel_extractor().extract_titles(&dto.payload)?,
            FileKind::Json => self.json_extractor().extract_titles(&dto.payload)?,
        };

        let mut connection = self.database_connection().transact().await?;
        let ids = self
            .book_query()
            .find_ids_by_titles(&mut connection, &titles)
            .await?;
        if ids.is_empty() {
            connection.roll_back().await?;
            return Err(Report::new(KernelError::NoMatch));
        }

        self.book_modifier()
            .delete_all(&mut connection, &ids)
            .await?;
        connection.commit().await?;

        let deleted = ids.len();
        tracing::info!(kind = %dto.kind, deleted, "deleted books");

        Ok(DeleteSummaryDto { deleted })
    }
}

impl<Connection: Transaction + Send, T> DeleteBookService<Connection> for T where
    T: DependOnDatabaseConnection<Connection>
        + DependOnBookQuery<Connection>
        + DependOnBookModifier<Connection>
        + DependOnBookExtractor
{
}

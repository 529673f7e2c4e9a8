use crate::database::Transaction;
use crate::entity::{Book, BookId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookModifier<Connection: Transaction>: Sync + Send + 'static {
    /// Inserts every record as part of the surrounding transaction. No
    /// deduplication; duplicate titles become duplicate rows.
    async fn create_all(
        &self,
        con: &mut Connection,
        books: &[Book],
    ) -> error_stack::Result<(), KernelError>;

    async fn delete_all(
        &self,
        con: &mut Connection,
        ids: &[BookId],
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnBookModifier<Connection: Transaction>: Sync + Send + 'static {
    type BookModifier: BookModifier<Connection>;
    fn book_modifier(&self) -> &Self::BookModifier;
}

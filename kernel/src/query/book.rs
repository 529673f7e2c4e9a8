use crate::database::Transaction;
use crate::entity::{BookId, BookTitle};
use crate::KernelError;

#[async_trait::async_trait]
pub trait BookQuery<Connection: Transaction>: Sync + Send + 'static {
    /// Ids of every persisted book whose title is a member of `titles`.
    /// Equality is exact. An empty candidate set matches nothing.
    async fn find_ids_by_titles(
        &self,
        con: &mut Connection,
        titles: &[BookTitle],
    ) -> error_stack::Result<Vec<BookId>, KernelError>;
}

pub trait DependOnBookQuery<Connection: Transaction>: Sync + Send + 'static {
    type BookQuery: BookQuery<Connection>;
    fn book_query(&self) -> &Self::BookQuery;
}

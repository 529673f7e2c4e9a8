use sqlx::PgConnection;

use kernel::interface::query::BookQuery;
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId, BookTitle};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::{ConvertError, DriverError};

pub struct PostgresBookRepository;

#[async_trait::async_trait]
impl BookQuery<PostgresTransaction> for PostgresBookRepository {
    async fn find_ids_by_titles(
        &self,
        con: &mut PostgresTransaction,
        titles: &[BookTitle],
    ) -> error_stack::Result<Vec<BookId>, KernelError> {
        PgBookInternal::find_ids_by_titles(con.connection(), titles)
            .await
            .convert_error()
    }
}

#[async_trait::async_trait]
impl BookModifier<PostgresTransaction> for PostgresBookRepository {
    async fn create_all(
        &self,
        con: &mut PostgresTransaction,
        books: &[Book],
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::create_all(con.connection(), books)
            .await
            .convert_error()
    }

    async fn delete_all(
        &self,
        con: &mut PostgresTransaction,
        ids: &[BookId],
    ) -> error_stack::Result<(), KernelError> {
        PgBookInternal::delete_all(con.connection(), ids)
            .await
            .convert_error()
    }
}

#[derive(sqlx::FromRow)]
struct BookIdRow {
    id: i64,
}

pub(in crate::database) struct PgBookInternal;

impl PgBookInternal {
    async fn find_ids_by_titles(
        con: &mut PgConnection,
        titles: &[BookTitle],
    ) -> Result<Vec<BookId>, DriverError> {
        let titles = titles
            .iter()
            .map(|title| title.as_ref().to_string())
            .collect::<Vec<_>>();
        let rows = sqlx::query_as::<_, BookIdRow>(
            // language=postgresql
            r#"
            SELECT id
            FROM books
            WHERE title = ANY($1)
            "#,
        )
        .bind(&titles)
        .fetch_all(con)
        .await?;
        Ok(rows.into_iter().map(|row| BookId::new(row.id)).collect())
    }

    async fn create_all(con: &mut PgConnection, books: &[Book]) -> Result<(), DriverError> {
        for book in books {
            // language=postgresql
            sqlx::query(
                r#"
                INSERT INTO books (title, author, year)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(book.title().as_ref())
            .bind(book.author().as_ref())
            .bind(book.year().as_ref())
            .execute(&mut *con)
            .await?;
        }
        Ok(())
    }

    async fn delete_all(con: &mut PgConnection, ids: &[BookId]) -> Result<(), DriverError> {
        let ids = ids.iter().map(|id| i64::from(*id)).collect::<Vec<_>>();
        // language=postgresql
        sqlx::query(
            r#"
            DELETE FROM books
            WHERE id = ANY($1)
            "#,
        )
        .bind(&ids)
        .execute(con)
        .await?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use kernel::interface::database::{DatabaseConnection, Transaction};
    use kernel::interface::query::BookQuery;
    use kernel::interface::update::BookModifier;
    use kernel::prelude::entity::{Book, BookAuthor, BookTitle, BookYear};
    use kernel::KernelError;

    use crate::database::postgres::book::PostgresBookRepository;
    use crate::database::postgres::PostgresDatabase;

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn test() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        let mut con = db.transact().await?;
        let marker = rand::random::<u64>().to_string();

        let matching = BookTitle::new(format!("dune-{marker}"));
        let other = BookTitle::new(format!("foundation-{marker}"));
        let books = vec![
            Book::new(
                matching.clone(),
                BookAuthor::new("Herbert"),
                BookYear::new(1965),
            ),
            Book::new(matching.clone(), BookAuthor::new(""), BookYear::default()),
            Book::new(other.clone(), BookAuthor::new("Asimov"), BookYear::new(1951)),
        ];
        PostgresBookRepository.create_all(&mut con, &books).await?;

        let candidates = vec![matching.clone()];
        let found = PostgresBookRepository
            .find_ids_by_titles(&mut con, &candidates)
            .await?;
        assert_eq!(found.len(), 2);

        PostgresBookRepository.delete_all(&mut con, &found).await?;

        let found = PostgresBookRepository
            .find_ids_by_titles(&mut con, &candidates)
            .await?;
        assert!(found.is_empty());

        let untouched = PostgresBookRepository
            .find_ids_by_titles(&mut con, &[other])
            .await?;
        assert_eq!(untouched.len(), 1);

        con.roll_back().await?;
        Ok(())
    }
}

use std::ops::Deref;
use std::sync::Arc;

use driver::database::{PostgresBookRepository, PostgresDatabase, PostgresTransaction};
use driver::extract::{ExcelBookExtractor, JsonBookExtractor};
use kernel::interface::database::DependOnDatabaseConnection;
use kernel::interface::extract::DependOnBookExtractor;
use kernel::interface::query::DependOnBookQuery;
use kernel::interface::update::DependOnBookModifier;
use kernel::KernelError;

#[derive(Clone)]
pub struct AppModule(Arc<Handler>);

impl AppModule {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        Ok(Self(Arc::new(Handler::init().await?)))
    }
}

impl Deref for AppModule {
    type Target = Handler;
    fn deref(&self) -> &Self::Target {
        Deref::deref(&self.0)
    }
}

pub struct Handler {
    pgpool: PostgresDatabase,
    repository: PostgresBookRepository,
    excel: ExcelBookExtractor,
    json: JsonBookExtractor,
}

impl Handler {
    pub async fn init() -> error_stack::Result<Self, KernelError> {
        let pgpool = PostgresDatabase::new().await?;

        Ok(Self {
            pgpool,
            repository: PostgresBookRepository,
            excel: ExcelBookExtractor,
            json: JsonBookExtractor,
        })
    }
}

impl DependOnDatabaseConnection<PostgresTransaction> for AppModule {
    type DatabaseConnection = PostgresDatabase;
    fn database_connection(&self) -> &PostgresDatabase {
        &self.0.pgpool
    }
}

impl DependOnBookQuery<PostgresTransaction> for AppModule {
    type BookQuery = PostgresBookRepository;
    fn book_query(&self) -> &PostgresBookRepository {
        &self.0.repository
    }
}

impl DependOnBookModifier<PostgresTransaction> for AppModule {
    type BookModifier = PostgresBookRepository;
    fn book_modifier(&self) -> &PostgresBookRepository {
        &self.0.repository
    }
}

impl DependOnBookExtractor for AppModule {
    type ExcelExtractor = ExcelBookExtractor;
    type JsonExtractor = JsonBookExtractor;

    fn excel_extractor(&self) -> &ExcelBookExtractor {
        &self.0.excel
    }

    fn json_extractor(&self) -> &JsonBookExtractor {
        &self.0.json
    }
}

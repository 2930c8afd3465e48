use casting_core::AppError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Storage failures surface to clients as unprocessable requests.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        AppError::unprocessable(err)
    }
}

use thiserror::Error;

use dr_core::CoreError;
use dr_graph::GraphError;
use dr_store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("invalid configuration: {0}")]
    Config(#[from] CoreError),

    #[error("data store error: {0}")]
    Store(#[from] StoreError),

    #[error("routing error: {0}")]
    Graph(#[from] GraphError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

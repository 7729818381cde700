use std::sync::Arc;

use student_records::model::{InMemoryModelStore, ModelStore};
use student_records::service::{self, StudentService};

/// Bind to port 0 and return the base URL of the student routes.
pub async fn start_server<S: ModelStore + 'static>(store: S) -> String {
    let app = service::router(Arc::new(StudentService::new(store)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A server over a fresh in-memory store.
pub async fn start_memory_server() -> String {
    start_server(InMemoryModelStore::new()).await
}

use std::any::Any;
use std::sync::Arc;

use diesel::SqliteConnection;
use tokio::sync::{mpsc, oneshot};

use financas_core::errors::Result;

use super::DbPool;
use crate::errors::StorageError;

// Jobs are type-erased so one channel can carry every return type; `exec`
// downcasts on the way out.
type Job = Box<dyn FnOnce(&mut SqliteConnection) -> Result<Box<dyn Any + Send>> + Send>;
type Reply = oneshot::Sender<Result<Box<dyn Any + Send>>>;

/// Handle for sending write jobs to the single-writer actor.
///
/// SQLite admits one writer at a time, so every mutating statement goes
/// through this handle: jobs run serially on a dedicated connection, each
/// inside its own immediate transaction. Reads keep using the pool directly.
#[derive(Clone)]
pub struct WriteHandle {
    tx: mpsc::Sender<(Job, Reply)>,
}

// Wraps job errors so core errors cross the transaction boundary untouched
// while rollback/commit failures still satisfy `From<diesel::result::Error>`.
enum TxError {
    Core(financas_core::Error),
    Db(diesel::result::Error),
}

impl From<diesel::result::Error> for TxError {
    fn from(err: diesel::result::Error) -> Self {
        TxError::Db(err)
    }
}

impl WriteHandle {
    /// Executes a database job on the writer actor's dedicated connection.
    pub async fn exec<F, T>(&self, job: F) -> Result<T>
    where
        F: FnOnce(&mut SqliteConnection) -> Result<T> + Send + 'static,
        T: Any + Send + 'static,
    {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.tx
            .send((
                Box::new(move |conn| job(conn).map(|value| Box::new(value) as Box<dyn Any + Send>)),
                reply_tx,
            ))
            .await
            .expect("writer actor stopped while a handle was still alive");

        reply_rx
            .await
            .expect("writer actor dropped the reply sender without answering")
            .map(|boxed| {
                *boxed
                    .downcast::<T>()
                    .unwrap_or_else(|_| panic!("writer actor returned an unexpected type"))
            })
    }
}

/// Spawns the writer actor on the current Tokio runtime.
///
/// The actor checks one connection out of `pool` for its whole lifetime and
/// processes jobs serially until every `WriteHandle` clone is dropped.
pub fn spawn_writer(pool: Arc<DbPool>) -> WriteHandle {
    let (tx, mut rx) = mpsc::channel::<(Job, Reply)>(1024);

    tokio::spawn(async move {
        let mut conn = pool
            .get()
            .expect("no connection available for the writer actor");

        while let Some((job, reply_tx)) = rx.recv().await {
            let result = conn
                .immediate_transaction::<_, TxError, _>(|c| job(c).map_err(TxError::Core))
                .map_err(|err| match err {
                    TxError::Core(core_err) => core_err,
                    TxError::Db(db_err) => StorageError::from(db_err).into(),
                });

            // The receiver may have been dropped (caller cancelled); that is
            // not the actor's problem.
            let _ = reply_tx.send(result);
        }
    });

    WriteHandle { tx }
}

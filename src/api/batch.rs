use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;

use crate::api::DailyClient;
use crate::error::Result;
use crate::models::Room;

impl DailyClient {
    /// Delete all `rooms` concurrently.
    ///
    /// At most `delete_concurrency` deletes run at once. The first failure
    /// aborts every delete still pending and is returned as-is; deletes
    /// already sent may still complete server-side. No ordering between
    /// rooms is guaranteed.
    pub async fn delete_rooms(&self, rooms: &[Room]) -> Result<()> {
        self.delete_rooms_by_name(rooms.iter().map(|room| room.name.clone()))
            .await
    }

    pub async fn delete_rooms_by_name<I>(&self, names: I) -> Result<()>
    where
        I: IntoIterator<Item = String>,
    {
        let permits = Arc::new(Semaphore::new(self.options.delete_concurrency.max(1)));
        let mut tasks = JoinSet::new();

        for name in names {
            let client = self.clone();
            let permits = Arc::clone(&permits);
            tasks.spawn(async move {
                // The semaphore is never closed, so this always holds a permit.
                let _permit = permits.acquire_owned().await.ok();
                client.delete_room(&name).await
            });
        }

        let total = tasks.len();
        while let Some(joined) = tasks.join_next().await {
            let failure = match joined {
                Ok(Ok(())) => continue,
                Ok(Err(err)) => err,
                Err(err) => err.into(),
            };

            tasks.abort_all();
            tracing::warn!(error = %failure, total, "Batch room delete aborted");
            return Err(failure);
        }

        tracing::info!(count = total, "Rooms deleted");
        Ok(())
    }
}

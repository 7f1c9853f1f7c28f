use futures::stream::{self, StreamExt};
use skycov_core::SkycovError;

/// Run a collection of tasks with at most `limit` in flight and apply an
/// optional request-level deadline.
///
/// Outputs are returned in the order the tasks were supplied. On timeout the
/// inner helper returns `SkycovError::RequestTimeout("request")`, which call
/// sites can remap to a more specific capability label as needed. A `limit`
/// of zero is treated as one.
pub async fn join_with_deadline<I, F, T>(
    tasks: I,
    limit: usize,
    deadline: Option<std::time::Duration>,
) -> Result<Vec<T>, SkycovError>
where
    I: IntoIterator<Item = F>,
    F: core::future::Future<Output = T>,
{
    let joined = stream::iter(tasks).buffered(limit.max(1)).collect::<Vec<T>>();
    crate::core::with_request_deadline(deadline, joined).await
}

use crate::query::QueryKey;
use tmdb::MovieSearchResponse;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug)]
pub(super) enum Action {
    Fetch(QueryKey),
    FetchCompleted {
        key: QueryKey,
        result: tmdb::Result<MovieSearchResponse>,
    },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

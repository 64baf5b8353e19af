//! Reactive view-model behind every list screen: fetch-on-mount, a
//! confirm-then-delete flow, and removal of deleted rows without a refetch.

use leptos::*;
use serde::de::DeserializeOwned;

use crate::api::{ApiError, Identified, ResourceClient};

pub struct ListViewModel<T: 'static> {
    pub items: Signal<Vec<T>>,
    pub loading: Signal<bool>,
    pub fetch_error: Signal<Option<ApiError>>,
    pub delete_error: RwSignal<Option<ApiError>>,
    /// The row awaiting confirmation, if a delete dialog is open.
    pub pending_delete: RwSignal<Option<T>>,
    delete_action: Action<i64, Result<i64, ApiError>>,
}

impl<T: 'static> Clone for ListViewModel<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for ListViewModel<T> {}

impl<T: Identified + Clone> ListViewModel<T> {
    pub fn request_delete(&self, item: T) {
        self.delete_error.set(None);
        self.pending_delete.set(Some(item));
    }

    pub fn cancel_delete(&self) {
        self.pending_delete.set(None);
    }

    pub fn confirm_delete(&self) {
        if let Some(item) = self.pending_delete.get_untracked() {
            self.delete_action.dispatch(item.id());
        }
    }

    pub fn delete_pending(&self) -> ReadSignal<bool> {
        self.delete_action.pending()
    }
}

pub fn use_list_view_model<T>(client: ResourceClient<T>) -> ListViewModel<T>
where
    T: Identified + Clone + DeserializeOwned + 'static,
{
    let fetch_client = client.clone();
    let rows = create_local_resource(
        || (),
        move |_| {
            let client = fetch_client.clone();
            async move { client.list().await }
        },
    );

    // Ids removed in this session; deleting filters instead of refetching.
    let removed = create_rw_signal(Vec::<i64>::new());

    let items = Signal::derive(move || {
        let removed_ids = removed.get();
        rows.get()
            .and_then(Result::ok)
            .unwrap_or_default()
            .into_iter()
            .filter(|item| !removed_ids.contains(&item.id()))
            .collect::<Vec<_>>()
    });
    let loading = Signal::derive(move || rows.get().is_none());
    let fetch_error = Signal::derive(move || rows.get().and_then(Result::err));

    let pending_delete = create_rw_signal(None::<T>);
    let delete_error = create_rw_signal(None::<ApiError>);
    let delete_client = client;
    let delete_action = create_action(move |id: &i64| {
        let id = *id;
        let client = delete_client.clone();
        async move { client.delete(id).await.map(|_| id) }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(id) => {
                    removed.update(|ids| ids.push(id));
                    pending_delete.set(None);
                    delete_error.set(None);
                }
                Err(err) => {
                    log::warn!("delete failed: {err}");
                    pending_delete.set(None);
                    delete_error.set(Some(err));
                }
            }
        }
    });

    ListViewModel {
        items,
        loading,
        fetch_error,
        delete_error,
        pending_delete,
        delete_action,
    }
}

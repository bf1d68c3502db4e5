//! Listing screen state: live list, search text and color chip.

use crate::model::color::NoteColor;
use crate::model::filter::NoteFilter;
use crate::model::note::{Note, NoteId};
use crate::repo::feed::NoteSnapshot;
use crate::repo::note_repo::NoteRepository;
use crate::state::observable::Observable;
use crate::state::{dispatch_write, PendingWrite};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct HomeState {
    repository: NoteRepository,
    runtime: Handle,
    notes: Observable<NoteSnapshot>,
    query: Observable<String>,
    color_filter: Observable<Option<NoteColor>>,
    subscription: JoinHandle<()>,
}

impl HomeState {
    pub fn new(repository: NoteRepository, runtime: Handle) -> Self {
        let notes = Observable::new(repository.snapshot());
        let target = notes.clone();
        let mut feed = repository.get_notes();
        let subscription = runtime.spawn(async move {
            while let Some(snapshot) = feed.next().await {
                target.set(snapshot);
            }
        });

        Self {
            repository,
            runtime,
            notes,
            query: Observable::new(String::new()),
            color_filter: Observable::new(None),
            subscription,
        }
    }

    /// Full list, newest first.
    pub fn notes(&self) -> &Observable<NoteSnapshot> {
        &self.notes
    }

    pub fn query(&self) -> &Observable<String> {
        &self.query
    }

    pub fn color_filter(&self) -> &Observable<Option<NoteColor>> {
        &self.color_filter
    }

    pub fn set_query(&self, text: impl Into<String>) {
        self.query.set(text.into());
    }

    /// Selects `color`, or clears the filter when `color` is already selected.
    pub fn toggle_color_filter(&self, color: NoteColor) {
        self.color_filter
            .update(|current| if *current == Some(color) { None } else { Some(color) });
    }

    pub fn clear_color_filter(&self) {
        self.color_filter.set(None);
    }

    /// Notes passing the current search text and color chip.
    pub fn visible_notes(&self) -> Vec<Note> {
        let filter = NoteFilter::new(&self.query.get(), self.color_filter.get());
        filter.apply(&self.notes.get())
    }

    /// Deletes in the background; the list refreshes through the live feed.
    pub fn delete_note_by_id(&self, id: NoteId) -> PendingWrite<bool> {
        let repository = self.repository.clone();
        dispatch_write(&self.runtime, "home_delete", async move {
            repository.delete_note_by_id(id).await
        })
    }
}

impl Drop for HomeState {
    fn drop(&mut self) {
        self.subscription.abort();
    }
}

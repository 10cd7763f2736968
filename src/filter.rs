use crate::full_photo::FullPhoto;

/// The view-owned filter parameters. `selected_user_id == 0` means "all
/// uploaders"; an empty `selected_album_ids` means "all albums".
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub selected_user_id: u64,
    pub query: String,
    pub selected_album_ids: Vec<u64>,
}

impl FilterState {
    pub fn select_user(&mut self, user_id: u64) {
        self.selected_user_id = user_id;
    }

    /// Removes the album id if it is already selected, appends it otherwise.
    /// Selection order is preserved for the ids that remain.
    pub fn toggle_album(&mut self, album_id: u64) {
        if self.selected_album_ids.contains(&album_id) {
            self.selected_album_ids.retain(|id| *id != album_id);
        } else {
            self.selected_album_ids.push(album_id);
        }
    }

    pub fn clear_albums(&mut self) {
        self.selected_album_ids.clear();
    }

    /// Stores the raw input text verbatim, no trimming.
    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    pub fn reset(&mut self) {
        *self = FilterState::default();
    }

    /// The ordered subsequence of photos passing every active filter. The
    /// three predicates are independent, so their order does not matter.
    pub fn visible_photos(&self, full_photos: &[FullPhoto]) -> Vec<FullPhoto> {
        let query = self.query.to_lowercase();

        full_photos
            .iter()
            .filter(|photo| {
                self.selected_user_id == 0
                    || photo.user.as_ref().map(|user| user.id) == Some(self.selected_user_id)
            })
            .filter(|photo| query.is_empty() || photo.title.to_lowercase().contains(&query))
            .filter(|photo| {
                // An unresolved album counts as album id 0, which is never
                // selectable, so those photos drop out whenever the album
                // filter is active.
                self.selected_album_ids.is_empty()
                    || self
                        .selected_album_ids
                        .contains(&photo.album.as_ref().map(|album| album.id).unwrap_or(0))
            })
            .cloned()
            .collect()
    }
}

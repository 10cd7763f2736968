use crate::fixtures::{Album, Photo, User};

/// A photo enriched with its resolved album and uploader. Resolution is
/// best-effort: a dangling album or user id leaves the field `None`.
#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct FullPhoto {
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
    pub album: Option<Album>,
    pub user: Option<User>,
}

/// One `FullPhoto` per photo, in photo order. The fixtures never change,
/// so this runs once at startup.
pub fn join_photos(photos: &[Photo], albums: &[Album], users: &[User]) -> Vec<FullPhoto> {
    photos
        .iter()
        .map(|photo| {
            let album = albums
                .iter()
                .find(|album| album.id == photo.album_id)
                .cloned();

            let user = album
                .as_ref()
                .and_then(|album| users.iter().find(|user| user.id == album.user_id))
                .cloned();

            FullPhoto {
                album_id: photo.album_id,
                id: photo.id,
                title: photo.title.clone(),
                url: photo.url.clone(),
                album,
                user,
            }
        })
        .collect()
}

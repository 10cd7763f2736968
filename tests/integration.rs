extern crate photo_albums_frontend;

use photo_albums_frontend::filter::FilterState;
use photo_albums_frontend::fixtures::{self, Album, Photo, Sex, User};
use photo_albums_frontend::full_photo::{join_photos, FullPhoto};

fn user(id: u64, name: &str, sex: Sex) -> User {
    User {
        id,
        name: name.to_owned(),
        sex,
    }
}

fn album(id: u64, title: &str, user_id: u64) -> Album {
    Album {
        id,
        title: title.to_owned(),
        user_id,
    }
}

fn photo(id: u64, album_id: u64, title: &str) -> Photo {
    Photo {
        album_id,
        id,
        title: title.to_owned(),
        url: "https://via.placeholder.com/600/92c952".to_owned(),
    }
}

fn small_fixtures() -> (Vec<User>, Vec<Album>, Vec<Photo>) {
    let users = vec![user(1, "Alice", Sex::F), user(2, "Bob", Sex::M)];
    let albums = vec![album(10, "Trip to the coast", 1), album(11, "City walks", 2)];
    let photos = vec![
        photo(100, 10, "Sunset View"),
        photo(101, 10, "Bus stop in the rain"),
        photo(102, 11, "Harbor bus terminal"),
        photo(103, 11, "Morning fog"),
    ];

    (users, albums, photos)
}

fn small_joined() -> Vec<FullPhoto> {
    let (users, albums, photos) = small_fixtures();
    join_photos(&photos, &albums, &users)
}

fn ids(photos: &[FullPhoto]) -> Vec<u64> {
    photos.iter().map(|photo| photo.id).collect()
}

#[test]
fn join_resolves_matching_album_and_user() {
    let joined = small_joined();

    for full in &joined {
        let album = full.album.as_ref().unwrap();
        assert_eq!(album.id, full.album_id);

        let user = full.user.as_ref().unwrap();
        assert_eq!(user.id, album.user_id);
    }
}

#[test]
fn join_leaves_unmatched_references_unset() {
    let (users, mut albums, mut photos) = small_fixtures();
    // album 12 points at a user that does not exist, photo 104 at an
    // album that does not exist
    albums.push(album(12, "Orphaned", 99));
    photos.push(photo(104, 12, "No uploader"));
    photos.push(photo(105, 77, "No album"));

    let joined = join_photos(&photos, &albums, &users);

    let no_uploader = joined.iter().find(|full| full.id == 104).unwrap();
    assert_eq!(no_uploader.album.as_ref().unwrap().id, 12);
    assert_eq!(no_uploader.user, None);

    let no_album = joined.iter().find(|full| full.id == 105).unwrap();
    assert_eq!(no_album.album, None);
    assert_eq!(no_album.user, None);
}

#[test]
fn join_preserves_photo_order() {
    let joined = small_joined();
    assert_eq!(ids(&joined), vec![100, 101, 102, 103]);
}

#[test]
fn bundled_fixtures_are_referentially_complete() {
    let joined = join_photos(&fixtures::photos(), &fixtures::albums(), &fixtures::users());

    assert!(!joined.is_empty());
    for full in &joined {
        assert!(full.album.is_some());
        assert!(full.user.is_some());
    }
}

#[test]
fn no_active_filters_keeps_everything_in_order() {
    let joined = small_joined();
    let state = FilterState::default();

    assert_eq!(state.visible_photos(&joined), joined);
}

#[test]
fn uploader_filter_is_idempotent() {
    let joined = small_joined();
    let mut state = FilterState::default();
    state.select_user(1);

    let once = state.visible_photos(&joined);
    let twice = state.visible_photos(&once);

    assert_eq!(ids(&once), vec![100, 101]);
    assert_eq!(once, twice);
}

#[test]
fn uploader_filter_excludes_unresolved_users() {
    let (users, albums, mut photos) = small_fixtures();
    photos.push(photo(104, 77, "Dangling"));
    let joined = join_photos(&photos, &albums, &users);

    let mut state = FilterState::default();
    state.select_user(1);

    assert!(!ids(&state.visible_photos(&joined)).contains(&104));
}

#[test]
fn text_filter_is_case_insensitive() {
    let joined = small_joined();

    let mut upper = FilterState::default();
    upper.set_query("BUS".to_owned());
    let mut lower = FilterState::default();
    lower.set_query("bus".to_owned());

    let upper_result = upper.visible_photos(&joined);
    assert_eq!(ids(&upper_result), vec![101, 102]);
    assert_eq!(upper_result, lower.visible_photos(&joined));
}

#[test]
fn query_is_stored_verbatim() {
    let mut state = FilterState::default();
    state.set_query("  Bus ".to_owned());
    assert_eq!(state.query, "  Bus ");

    state.clear_query();
    assert_eq!(state.query, "");
}

#[test]
fn toggle_album_twice_restores_selection() {
    let mut state = FilterState::default();
    state.toggle_album(3);
    state.toggle_album(1);
    assert_eq!(state.selected_album_ids, vec![3, 1]);

    state.toggle_album(2);
    assert_eq!(state.selected_album_ids, vec![3, 1, 2]);

    state.toggle_album(2);
    assert_eq!(state.selected_album_ids, vec![3, 1]);
}

#[test]
fn album_filter_excludes_photos_without_an_album() {
    let (users, albums, mut photos) = small_fixtures();
    photos.push(photo(104, 77, "Dangling"));
    let joined = join_photos(&photos, &albums, &users);

    let mut state = FilterState::default();
    state.toggle_album(10);
    assert_eq!(ids(&state.visible_photos(&joined)), vec![100, 101]);

    state.toggle_album(11);
    assert_eq!(ids(&state.visible_photos(&joined)), vec![100, 101, 102, 103]);
}

#[test]
fn filters_combine_as_logical_and() {
    let joined = small_joined();
    let mut state = FilterState::default();
    state.select_user(2);
    state.set_query("bus".to_owned());
    state.toggle_album(11);

    assert_eq!(ids(&state.visible_photos(&joined)), vec![102]);
}

#[test]
fn reset_restores_defaults() {
    let mut state = FilterState::default();
    state.select_user(2);
    state.set_query("fog".to_owned());
    state.toggle_album(11);
    state.toggle_album(10);

    state.reset();
    assert_eq!(state, FilterState::default());
    assert_eq!(state.selected_user_id, 0);
    assert_eq!(state.query, "");
    assert!(state.selected_album_ids.is_empty());
}

#[test]
fn scenario_single_photo_walkthrough() {
    let users = vec![user(1, "Alice", Sex::F)];
    let albums = vec![album(10, "Trip", 1)];
    let photos = vec![photo(100, 10, "Sunset View")];
    let joined = join_photos(&photos, &albums, &users);

    let mut state = FilterState::default();
    state.select_user(1);
    assert_eq!(ids(&state.visible_photos(&joined)), vec![100]);

    state.set_query("zzz".to_owned());
    assert!(state.visible_photos(&joined).is_empty());

    let mut state = FilterState::default();
    state.toggle_album(10);
    assert_eq!(ids(&state.visible_photos(&joined)), vec![100]);

    state.toggle_album(10);
    assert_eq!(state.visible_photos(&joined), joined);
}

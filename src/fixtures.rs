//! Static fixture collections bundled with the page. The JSON keeps the
//! original camelCase key names, hence the serde renames.

pub const USERS_JSON: &'static str = include_str!("../fixtures/users.json");
pub const ALBUMS_JSON: &'static str = include_str!("../fixtures/albums.json");
pub const PHOTOS_JSON: &'static str = include_str!("../fixtures/photos.json");

#[derive(Hash, Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Sex {
    #[serde(rename = "m")]
    M,
    #[serde(rename = "f")]
    F,
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub sex: Sex,
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Album {
    pub id: u64,
    pub title: String,
    #[serde(rename = "userId")]
    pub user_id: u64,
}

#[derive(Hash, Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct Photo {
    #[serde(rename = "albumId")]
    pub album_id: u64,
    pub id: u64,
    pub title: String,
    pub url: String,
}

pub fn users() -> Vec<User> {
    serde_json::from_str(USERS_JSON).expect("could not parse users fixture")
}

pub fn albums() -> Vec<Album> {
    serde_json::from_str(ALBUMS_JSON).expect("could not parse albums fixture")
}

pub fn photos() -> Vec<Photo> {
    serde_json::from_str(PHOTOS_JSON).expect("could not parse photos fixture")
}

//! Artist types

use serde::{Deserialize, Serialize};

use super::Image;

/// A full artist object from `GET me/top/artists`, genre tags included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
    pub popularity: Option<u32>,
}

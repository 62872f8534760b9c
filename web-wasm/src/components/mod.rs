pub mod album_group;
pub mod item_count;
pub mod search_box;

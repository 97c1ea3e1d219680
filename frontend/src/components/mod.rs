pub mod blurhash_image;
pub mod card;
pub mod list;

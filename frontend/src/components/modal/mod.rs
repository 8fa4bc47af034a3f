pub mod add_image;
pub mod view_image;

pub mod image_record;
pub mod notification;
pub mod pending_upload;

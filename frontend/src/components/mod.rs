pub mod card;
pub mod card_list;
pub mod form;
pub mod modal;

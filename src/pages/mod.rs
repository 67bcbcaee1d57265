pub mod announcement_feed;
pub mod announcement_form;

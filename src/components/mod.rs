pub mod review_form;
pub mod review_widget;
pub mod reviews_list;

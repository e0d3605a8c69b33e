//! UI Components
//!
//! Leptos components of the report form.

mod general_info;
mod condition_list;
mod correction_list;
mod image_preview;
mod remove_row_button;
mod submit_button;

pub use general_info::GeneralInfoSection;
pub use condition_list::ConditionList;
pub use correction_list::CorrectionList;
pub use image_preview::ImagePreview;
pub use remove_row_button::RemoveRowButton;
pub use submit_button::SubmitButton;

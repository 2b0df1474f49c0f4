mod booking;
mod field;

pub use booking::{BookingDraft, BookingForm, FieldError, FieldId, FormAction, FormRegions};
pub use field::{FieldPicker, FormField, SuggestField, TextField};

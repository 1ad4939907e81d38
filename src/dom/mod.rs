pub mod canvas;
pub mod document;
pub mod form;
pub mod html;
pub mod table;

pub use canvas::ChartSurface;
pub use document::{Document, Element, SharedDocument};
pub use form::{InputField, MappingForm, SubmitEvent};
pub use table::{TableBody, TableCell, TableRow};

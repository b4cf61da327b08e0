//! UI Components for the bouquet builder.

mod bouquet_canvas;
mod finish_button;
mod flower_picker;
mod modal;
mod reveal_card;

pub use bouquet_canvas::BouquetCanvas;
pub use finish_button::FinishButton;
pub use flower_picker::FlowerPicker;
pub use reveal_card::RevealCard;

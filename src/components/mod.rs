//! UI Components

mod detail_sheet;
mod digimon_card;
mod search_bar;
mod stat_button;

pub use detail_sheet::DetailSheet;
pub use digimon_card::DigimonCard;
pub use search_bar::SearchBar;
pub use stat_button::StatButton;

pub mod model;
pub mod view;

pub use model::ClockState;
pub use view::draw;

pub const NUMERAL_FONT: &str = "Sans";

pub mod deep_dive;
pub mod gems;
pub mod matrix;
pub mod overview;
pub mod panels;
pub mod widgets;

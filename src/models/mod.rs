pub mod chart;
pub mod response;
pub mod shapes;
pub mod views;

// Plotly figure model, shared styling and the dashboard's chart panels.

pub mod figure;
pub mod panels;
pub mod theme;

pub use figure::Figure;

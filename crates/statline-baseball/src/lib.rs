// Baseball season statistics: table loading, filtering, aggregates and the
// dashboard's chart figures.

pub mod charts;
pub mod dashboard;
pub mod filter;
pub mod sample;
pub mod stat;
pub mod stats;
pub mod table;

pub mod chart;
pub mod raw_table;
pub mod wave;

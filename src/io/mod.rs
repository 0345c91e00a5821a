pub mod fasta;
pub mod reader;
pub mod report;
pub mod tabular;

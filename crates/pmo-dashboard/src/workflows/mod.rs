pub mod prioritization;

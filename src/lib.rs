//! Descriptive analytics over the Netflix titles catalogue.
//!
//! [`data::NetflixData`] loads the dataset once; each `qN` module holds one
//! read-only query over it.

pub mod classify;
pub mod data;
pub mod error;
pub mod rank;
pub mod report;
pub mod settings;

pub mod q1;
pub mod q2;
pub mod q3;
pub mod q4;
pub mod q5;
pub mod q6;
pub mod q7;
pub mod q8;
pub mod q9;
pub mod q10;
pub mod q11;
pub mod q12;
pub mod q13;
pub mod q14;
pub mod q15;
pub mod q16;
pub mod q17;
pub mod q18;
pub mod q19;
pub mod q20;

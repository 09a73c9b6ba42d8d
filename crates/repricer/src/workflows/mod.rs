pub mod repricing;

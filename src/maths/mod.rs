pub mod versed;

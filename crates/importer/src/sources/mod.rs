pub mod usms;

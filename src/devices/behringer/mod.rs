pub mod jt4000;

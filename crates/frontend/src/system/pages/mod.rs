pub mod signed_out;

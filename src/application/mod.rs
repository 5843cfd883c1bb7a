pub mod integrity_check;

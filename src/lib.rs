pub use stl_mitl_core as core;

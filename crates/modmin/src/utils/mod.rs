pub mod chunk_modules_token;
pub mod is_script_file;
pub mod locate_hole;
pub mod stabilize_identifier;

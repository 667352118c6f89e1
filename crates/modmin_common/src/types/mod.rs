pub mod chunk_info;
pub mod comment;
pub mod fingerprint;
pub mod module_id;
pub mod module_stats;
pub mod output_asset;
pub mod rendered_module;

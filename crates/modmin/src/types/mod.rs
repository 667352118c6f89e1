pub mod asset_record;
pub mod asset_template;
pub mod dehydrated_assets;
pub mod dispatch;
pub mod minify_output;
pub mod module_record;
